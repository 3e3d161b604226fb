//! HTTP Task API
//!
//! `TaskApi` over reqwest. In the browser reqwest goes through `fetch`, which
//! carries the session cookie for same-origin requests; natively the client
//! keeps its own cookie store.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use taskboard_core::{
    ApiErrorBody, LoginRequest, RegisterRequest, Task, TaskDraft, TaskId, TaskUpdate, User,
};

use super::TaskApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// REST client for the task backend
#[derive(Clone, Debug)]
pub struct HttpTaskApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpTaskApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: build_client(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.config.endpoint(path)?;
        tracing::debug!("{method} {url}");
        Ok(self.client.request(method, url))
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        check_status(response).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn build_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Pass 2xx responses through; turn anything else into `Rejected` with the
/// body's `error` text when there is one.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body: ApiErrorBody = response.json().await.unwrap_or_default();
    tracing::warn!(status = status.as_u16(), error = ?body.error, "request rejected");
    Err(ClientError::Rejected {
        status: status.as_u16(),
        message: body.error,
    })
}

fn task_path(id: TaskId) -> String {
    format!("/api/tasks/{id}")
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn login(&self, request: &LoginRequest) -> Result<()> {
        self.send(self.request(Method::POST, "/api/login")?.json(request))
            .await
            .map(drop)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<()> {
        self.send(self.request(Method::POST, "/api/register")?.json(request))
            .await
            .map(drop)
    }

    async fn current_user(&self) -> Result<User> {
        let response = match self.send(self.request(Method::GET, "/api/user")?).await {
            Err(ClientError::Rejected { status: 401, .. }) => {
                return Err(ClientError::Unauthenticated);
            }
            other => other?,
        };
        Ok(response.json().await?)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let response = self.send(self.request(Method::GET, "/api/tasks")?).await?;
        Ok(response.json().await?)
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<()> {
        self.send(self.request(Method::POST, "/api/tasks")?.json(draft))
            .await
            .map(drop)
    }

    async fn update_task(&self, id: TaskId, update: &TaskUpdate) -> Result<()> {
        self.send(self.request(Method::PUT, &task_path(id))?.json(update))
            .await
            .map(drop)
    }

    async fn delete_task(&self, id: TaskId) -> Result<()> {
        self.send(self.request(Method::DELETE, &task_path(id))?)
            .await
            .map(drop)
    }

    async fn logout(&self) -> Result<()> {
        self.send(self.request(Method::POST, "/api/logout")?)
            .await
            .map(drop)
    }
}
