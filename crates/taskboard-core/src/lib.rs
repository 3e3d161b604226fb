//! # taskboard-core
//!
//! Domain model and presentation logic for the task board front end.
//!
//! ## Update cycle
//!
//! ```text
//! ┌──────────┐  BoardEvent  ┌────────────┐  view(today)  ┌───────────┐
//! │controller│─────────────▶│ BoardState │──────────────▶│ BoardView │──▶ page
//! └──────────┘              └────────────┘               └───────────┘
//! ```
//!
//! Nothing in this crate performs I/O; the REST client and the controllers
//! live in `taskboard-client`.

pub mod board;
pub mod error;
pub mod filter;
pub mod model;
pub mod view;

pub use board::{BoardEvent, BoardState, Notice};
pub use error::ModelError;
pub use filter::Filter;
pub use model::{
    ApiErrorBody, DueDate, LoginRequest, Priority, RegisterRequest, Task, TaskDraft, TaskId,
    TaskUpdate, User,
};
pub use view::{BoardView, EMPTY_MESSAGE, TaskAction, TaskCard};
