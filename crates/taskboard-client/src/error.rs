//! Error Types

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Shown on the auth forms when the request never got a usable answer
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// Backend answered with a non-2xx status
    #[error("Request rejected ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// No valid session
    #[error("Not authenticated")]
    Unauthenticated,

    /// Transport failure or undecodable response
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    pub const fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Self::Unauthenticated | Self::Rejected { status: 401 | 403, .. }
        )
    }

    /// Text for an auth form: the server's message for rejections, `fallback`
    /// when it sent none, and a generic retry hint for everything else.
    pub fn form_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(msg), .. } => msg.clone(),
            Self::Rejected { message: None, .. } | Self::Unauthenticated => fallback.to_string(),
            Self::Network(_) | Self::Config(_) => GENERIC_FAILURE.to_string(),
        }
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message: Some(msg), .. } => msg.clone(),
            Self::Rejected { status, message: None } => format!("The server rejected the request ({status})."),
            Self::Unauthenticated => "Your session has expired. Please log in again.".into(),
            Self::Network(_) => "Could not reach the server. Please try again.".into(),
            Self::Config(_) => "The client is misconfigured.".into(),
        }
    }
}
