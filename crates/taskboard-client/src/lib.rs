//! # taskboard-client
//!
//! REST client and page controllers for the task board.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐    ┌─────────────┐    ┌──────────────────────┐
//! │  AuthController  │───▶│             │    │ HttpTaskApi (reqwest)│
//! └──────────────────┘    │   TaskApi   │───▶│ MemoryTaskApi        │
//! ┌──────────────────┐    │  (Strategy) │    └──────────────────────┘
//! │TaskBoardController│──▶│             │
//! └──────────────────┘    └─────────────┘
//!          │ BoardEvent
//!          ▼
//!     BoardState (taskboard-core)
//! ```
//!
//! Navigation and confirmation go through the [`Navigator`] and [`Confirm`]
//! traits so the controllers run unchanged in the browser and in tests.

pub mod api;
pub mod auth;
pub mod board;
pub mod config;
pub mod error;
pub mod platform;

pub use api::{HttpTaskApi, MemoryTaskApi, TaskApi};
pub use auth::AuthController;
pub use board::{BoardCommand, TaskBoardController};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use platform::{Confirm, Navigator};
