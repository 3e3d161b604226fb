//! In-Memory Task API
//!
//! Backend stand-in for tests and offline demos. Behaves like the real
//! server for the happy paths, records every call, and can be told to
//! reject specific endpoints.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use taskboard_core::{LoginRequest, RegisterRequest, Task, TaskDraft, TaskId, TaskUpdate, User};

use super::TaskApi;
use crate::error::{ClientError, Result};

/// REST endpoints, one per `TaskApi` method
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    Register,
    User,
    ListTasks,
    CreateTask,
    UpdateTask,
    DeleteTask,
    Logout,
}

impl Endpoint {
    pub const fn method(self) -> &'static str {
        match self {
            Self::User | Self::ListTasks => "GET",
            Self::Login | Self::Register | Self::CreateTask | Self::Logout => "POST",
            Self::UpdateTask => "PUT",
            Self::DeleteTask => "DELETE",
        }
    }
}

/// A recorded request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiCall {
    pub endpoint: Endpoint,
    pub task_id: Option<TaskId>,
}

impl std::fmt::Display for ApiCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let path = match self.endpoint {
            Endpoint::Login => "/api/login".to_string(),
            Endpoint::Register => "/api/register".to_string(),
            Endpoint::User => "/api/user".to_string(),
            Endpoint::Logout => "/api/logout".to_string(),
            Endpoint::ListTasks | Endpoint::CreateTask => "/api/tasks".to_string(),
            Endpoint::UpdateTask | Endpoint::DeleteTask => match self.task_id {
                Some(id) => format!("/api/tasks/{id}"),
                None => "/api/tasks/?".to_string(),
            },
        };
        write!(f, "{} {}", self.endpoint.method(), path)
    }
}

#[derive(Default)]
struct Backend {
    accounts: Vec<RegisterRequest>,
    session: Option<String>,
    tasks: Vec<Task>,
    next_id: i64,
    calls: Vec<ApiCall>,
    rejections: HashMap<Endpoint, (u16, Option<String>)>,
}

impl Backend {
    fn signed_in_user(&self) -> Option<User> {
        let username = self.session.as_deref()?;
        self.accounts
            .iter()
            .find(|a| a.username == username)
            .map(|a| User {
                first_name: a.first_name.clone(),
                last_name: Some(a.last_name.clone()),
                email: Some(a.email.clone()),
                username: Some(a.username.clone()),
            })
    }

    fn require_session(&self) -> Result<()> {
        if self.session.is_some() {
            Ok(())
        } else {
            Err(ClientError::Unauthenticated)
        }
    }

    fn task_mut(&mut self, id: TaskId) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| rejected(404, "Task not found"))
    }
}

fn rejected(status: u16, message: &str) -> ClientError {
    ClientError::Rejected {
        status,
        message: Some(message.to_string()),
    }
}

/// In-memory backend
#[derive(Default)]
pub struct MemoryTaskApi {
    backend: Mutex<Backend>,
}

impl MemoryTaskApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account that can log in
    pub fn with_account(self, account: RegisterRequest) -> Self {
        self.lock().accounts.push(account);
        self
    }

    /// Start with `username` already logged in
    pub fn with_session(self, username: impl Into<String>) -> Self {
        self.lock().session = Some(username.into());
        self
    }

    /// Seed the task list
    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        {
            let mut backend = self.lock();
            backend.next_id = tasks.iter().map(|t| t.id.0).max().unwrap_or(0);
            backend.tasks = tasks;
        }
        self
    }

    /// Answer every later call to `endpoint` with `status`
    pub fn reject(&self, endpoint: Endpoint, status: u16, message: Option<&str>) {
        self.lock()
            .rejections
            .insert(endpoint, (status, message.map(str::to_string)));
    }

    /// Stop rejecting `endpoint`
    pub fn accept(&self, endpoint: Endpoint) {
        self.lock().rejections.remove(&endpoint);
    }

    /// Every request received so far, in order
    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self, endpoint: Endpoint) -> usize {
        self.lock().calls.iter().filter(|c| c.endpoint == endpoint).count()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.lock().tasks.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.lock().session.is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Backend> {
        self.backend.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record the call and apply any configured rejection
    fn begin(&self, endpoint: Endpoint, task_id: Option<TaskId>) -> Result<MutexGuard<'_, Backend>> {
        let mut backend = self.lock();
        backend.calls.push(ApiCall { endpoint, task_id });
        if let Some((status, message)) = backend.rejections.get(&endpoint) {
            return Err(ClientError::Rejected {
                status: *status,
                message: message.clone(),
            });
        }
        Ok(backend)
    }
}

#[async_trait(?Send)]
impl TaskApi for MemoryTaskApi {
    async fn login(&self, request: &LoginRequest) -> Result<()> {
        let mut backend = self.begin(Endpoint::Login, None)?;
        let known = backend
            .accounts
            .iter()
            .any(|a| a.username == request.username && a.password == request.password);
        if !known {
            return Err(rejected(401, "Invalid credentials"));
        }
        backend.session = Some(request.username.clone());
        Ok(())
    }

    async fn register(&self, request: &RegisterRequest) -> Result<()> {
        let mut backend = self.begin(Endpoint::Register, None)?;
        if request.password != request.confirm_password {
            return Err(rejected(400, "Passwords do not match"));
        }
        if backend.accounts.iter().any(|a| a.username == request.username) {
            return Err(rejected(400, "Username already exists"));
        }
        backend.accounts.push(request.clone());
        backend.session = Some(request.username.clone());
        Ok(())
    }

    async fn current_user(&self) -> Result<User> {
        let backend = self.begin(Endpoint::User, None)?;
        backend.signed_in_user().ok_or(ClientError::Unauthenticated)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let backend = self.begin(Endpoint::ListTasks, None)?;
        backend.require_session()?;
        Ok(backend.tasks.clone())
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<()> {
        let mut backend = self.begin(Endpoint::CreateTask, None)?;
        backend.require_session()?;
        backend.next_id += 1;
        let id = TaskId(backend.next_id);
        backend.tasks.push(Task {
            id,
            title: draft.title.clone(),
            description: Some(draft.description.clone()),
            subject: Some(draft.subject.clone()),
            priority: draft.priority,
            due_date: draft.due_date.clone(),
            completed: false,
        });
        Ok(())
    }

    async fn update_task(&self, id: TaskId, update: &TaskUpdate) -> Result<()> {
        let mut backend = self.begin(Endpoint::UpdateTask, Some(id))?;
        backend.require_session()?;
        let task = backend.task_mut(id)?;
        task.title.clone_from(&update.title);
        task.description = Some(update.description.clone());
        task.subject = Some(update.subject.clone());
        task.priority = update.priority;
        task.due_date = update.due_date.clone();
        task.completed = update.completed;
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> Result<()> {
        let mut backend = self.begin(Endpoint::DeleteTask, Some(id))?;
        backend.require_session()?;
        let before = backend.tasks.len();
        backend.tasks.retain(|t| t.id != id);
        if backend.tasks.len() == before {
            return Err(rejected(404, "Task not found"));
        }
        Ok(())
    }

    async fn logout(&self) -> Result<()> {
        let mut backend = self.begin(Endpoint::Logout, None)?;
        backend.session = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_core::Priority;

    fn account() -> RegisterRequest {
        RegisterRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            username: "ada".into(),
            password: "engine".into(),
            confirm_password: "engine".into(),
        }
    }

    #[tokio::test]
    async fn test_login_and_user() {
        let api = MemoryTaskApi::new().with_account(account());

        let bad = LoginRequest {
            username: "ada".into(),
            password: "wrong".into(),
        };
        assert!(api.login(&bad).await.is_err());
        assert!(matches!(api.current_user().await, Err(ClientError::Unauthenticated)));

        let good = LoginRequest {
            username: "ada".into(),
            password: "engine".into(),
        };
        api.login(&good).await.unwrap();
        assert_eq!(api.current_user().await.unwrap().first_name, "Ada");
    }

    #[tokio::test]
    async fn test_task_crud() {
        let api = MemoryTaskApi::new().with_account(account()).with_session("ada");

        let draft = TaskDraft {
            title: "Essay".into(),
            priority: Priority::High,
            due_date: "2024-01-01".into(),
            ..Default::default()
        };
        api.create_task(&draft).await.unwrap();
        let tasks = api.list_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);

        let id = tasks[0].id;
        api.update_task(id, &tasks[0].toggled()).await.unwrap();
        assert!(api.tasks()[0].completed);

        api.delete_task(id).await.unwrap();
        assert!(api.tasks().is_empty());
        assert!(api.delete_task(id).await.is_err());
    }

    #[tokio::test]
    async fn test_rejection_and_call_log() {
        let api = MemoryTaskApi::new().with_session("ada");
        api.reject(Endpoint::ListTasks, 500, None);

        assert!(matches!(
            api.list_tasks().await,
            Err(ClientError::Rejected { status: 500, message: None })
        ));
        api.accept(Endpoint::ListTasks);
        assert!(api.list_tasks().await.is_ok());

        api.delete_task(TaskId(3)).await.unwrap_err();
        let calls: Vec<String> = api.calls().iter().map(ToString::to_string).collect();
        assert_eq!(
            calls,
            vec!["GET /api/tasks", "GET /api/tasks", "DELETE /api/tasks/3"]
        );
    }
}
