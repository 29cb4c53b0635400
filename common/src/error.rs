//! Error types shared by the service client and the page.

use thiserror::Error;

/// Failure of a call to the brand backend.
///
/// None of these are fatal: the caller keeps its previous state and the user
/// may retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// 5xx, or any other status the backend should not answer with.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// 4xx other than 404, typically a missing or malformed field.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The addressed brand does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The response body did not have the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Classifies a non-success HTTP status. `body` is the response text, kept
    /// as the message.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let message = body.into();
        match status {
            404 => ServiceError::NotFound(message),
            400..=499 => ServiceError::Validation(message),
            _ => ServiceError::Server { status, message },
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
