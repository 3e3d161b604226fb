//! Task Backend API
//!
//! The REST surface the controllers talk to, behind a trait so the pages can
//! run against the real backend or an in-memory one.

mod http;
mod memory;

pub use http::HttpTaskApi;
pub use memory::{ApiCall, Endpoint, MemoryTaskApi};

use async_trait::async_trait;
use taskboard_core::{LoginRequest, RegisterRequest, Task, TaskDraft, TaskId, TaskUpdate, User};

use crate::error::Result;

/// Task backend client (Strategy pattern)
///
/// Futures are not `Send`: in the browser every request runs on the page's
/// single event loop.
#[async_trait(?Send)]
pub trait TaskApi {
    /// `POST /api/login`
    async fn login(&self, request: &LoginRequest) -> Result<()>;

    /// `POST /api/register`
    async fn register(&self, request: &RegisterRequest) -> Result<()>;

    /// `GET /api/user`
    async fn current_user(&self) -> Result<User>;

    /// `GET /api/tasks`
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// `POST /api/tasks`
    async fn create_task(&self, draft: &TaskDraft) -> Result<()>;

    /// `PUT /api/tasks/{id}`
    async fn update_task(&self, id: TaskId, update: &TaskUpdate) -> Result<()>;

    /// `DELETE /api/tasks/{id}`
    async fn delete_task(&self, id: TaskId) -> Result<()>;

    /// `POST /api/logout`
    async fn logout(&self) -> Result<()>;
}
