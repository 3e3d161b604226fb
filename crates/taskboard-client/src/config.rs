//! Client Configuration

use reqwest::Url;

use crate::error::{ClientError, Result};

/// Where the backend lives and which routes the controllers navigate to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the REST API, e.g. `http://localhost:3000`
    pub base_url: String,

    /// Route shown to signed-out users
    pub login_route: String,

    /// Route shown after a successful login or registration
    pub dashboard_route: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".into(),
            login_route: "/login".into(),
            dashboard_route: "/dashboard".into(),
        }
    }
}

impl ClientConfig {
    /// Same-origin configuration, as used inside the browser
    pub fn for_origin(origin: impl Into<String>) -> Self {
        Self {
            base_url: origin.into(),
            ..Default::default()
        }
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("TASKBOARD_API_URL").unwrap_or(defaults.base_url),
            login_route: std::env::var("TASKBOARD_LOGIN_ROUTE").unwrap_or(defaults.login_route),
            dashboard_route: std::env::var("TASKBOARD_DASHBOARD_ROUTE")
                .unwrap_or(defaults.dashboard_route),
        }
    }

    /// Absolute URL of an API path such as `/api/tasks`
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL {}: {e}", self.base_url)))?;
        base.join(path)
            .map_err(|e| ClientError::Config(format!("invalid endpoint {path}: {e}")))
    }
}
