//! API Errors

use thiserror::Error;

/// Failure of a request to the bookmark server
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// fetch() itself failed (offline, DNS, CORS...)
    #[error("{0}")]
    Network(String),
    /// Session expired; the user has already been sent to the login page
    #[error("Login status has changed. Please Re-login!")]
    Unauthorized,
    /// Any other non-2xx response, with its body text
    #[error("{}", http_message(.status, .body))]
    Http { status: u16, body: String },
    /// The response body was not what we expected
    #[error("Unexpected response: {0}")]
    Decode(String),
}

fn http_message(status: &u16, body: &str) -> String {
    if body.is_empty() {
        format!("Request failed with status {status}.")
    } else {
        body.to_string()
    }
}

impl ApiError {
    /// Whether the request wrapper already showed a dialog for this error
    pub fn is_surfaced(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Unauthorized)
    }

    /// Whether the browser is already on its way to the login page
    pub fn ends_session(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
