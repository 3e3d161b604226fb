//! Auth Controller
//!
//! Login and registration form submission. Each submission is one request;
//! success navigates to the dashboard, failure yields the text to show
//! under the form.

use taskboard_core::{LoginRequest, RegisterRequest};

use crate::api::TaskApi;
use crate::config::ClientConfig;
use crate::platform::Navigator;

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";

pub struct AuthController<A, N> {
    api: A,
    navigator: N,
    config: ClientConfig,
}

impl<A: TaskApi, N: Navigator> AuthController<A, N> {
    pub const fn new(api: A, navigator: N, config: ClientConfig) -> Self {
        Self {
            api,
            navigator,
            config,
        }
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Submit the login form. `Err` carries the message to display.
    pub async fn submit_login(&self, request: &LoginRequest) -> Result<(), String> {
        tracing::info!(username = %request.username, "login submitted");
        match self.api.login(request).await {
            Ok(()) => {
                self.navigator.navigate(&self.config.dashboard_route);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                Err(e.form_message(LOGIN_FAILED))
            }
        }
    }

    /// Submit the registration form. Password confirmation is left to the
    /// backend.
    pub async fn submit_register(&self, request: &RegisterRequest) -> Result<(), String> {
        tracing::info!(username = %request.username, "registration submitted");
        match self.api.register(request).await {
            Ok(()) => {
                self.navigator.navigate(&self.config.dashboard_route);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "registration failed");
                Err(e.form_message(REGISTRATION_FAILED))
            }
        }
    }
}
