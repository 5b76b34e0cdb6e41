//! Error taxonomy for the service boundary.

use thiserror::Error;

/// Generic user-facing failure text, used when the backend gave nothing
/// more specific.
pub const GENERIC_ERROR_MESSAGE: &str = "Ocurrió un error inesperado. Intenta nuevamente.";

/// Dedicated text for timed-out calls; must stay distinct from the generic
/// network message.
pub const TIMEOUT_ERROR_MESSAGE: &str = "La operación tardó demasiado. Intenta nuevamente.";

#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("timeout")]
    Timeout,
    #[error("network error: {0}")]
    Transport(String),
    #[error("http {status}: {body}")]
    Http { status: u16, body: String },
    #[error("json error: {0}")]
    Serde(String),
}

impl ServiceError {
    /// Message shown to the user when no backend-provided message exists.
    pub fn user_message(&self) -> &'static str {
        match self {
            ServiceError::Timeout => TIMEOUT_ERROR_MESSAGE,
            _ => GENERIC_ERROR_MESSAGE,
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ServiceError::Timeout
        } else {
            ServiceError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_is_distinct() {
        assert_ne!(
            ServiceError::Timeout.user_message(),
            ServiceError::Transport("x".into()).user_message()
        );
    }
}
