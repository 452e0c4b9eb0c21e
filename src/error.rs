// ============================================================================
// APP ERROR - Error taxonomy shared by services and viewmodels
// ============================================================================

use thiserror::Error;

/// Everything that can go wrong between a screen and the backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response; `message` is the server's `message` field when present
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("No active session")]
    SessionMissing,

    #[error("Session expired")]
    SessionExpired,

    #[error("{0}")]
    Validation(String),
}

impl AppError {
    /// Text shown in the toast for this error
    pub fn user_message(&self) -> String {
        match self {
            AppError::Http { message, .. } => message.clone(),
            AppError::Network(_) => "Unable to reach the server".to_string(),
            AppError::Parse(_) => "Unexpected response from the server".to_string(),
            AppError::UnknownRole(_) => "Unknown role".to_string(),
            AppError::SessionMissing | AppError::SessionExpired | AppError::InvalidToken(_) => {
                "Please log in again".to_string()
            }
            AppError::Storage(msg) | AppError::Validation(msg) => msg.clone(),
        }
    }

    /// Errors that mean the stored session can no longer be used
    pub fn is_session_error(&self) -> bool {
        matches!(
            self,
            AppError::SessionMissing
                | AppError::SessionExpired
                | AppError::InvalidToken(_)
                | AppError::Http { status: 401, .. }
        )
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AppError::Parse(e.to_string()),
            other => AppError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<gloo_storage::errors::StorageError> for AppError {
    fn from(err: gloo_storage::errors::StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_shows_server_message() {
        let err = AppError::Http { status: 400, message: "Shipment already assigned".to_string() };
        assert_eq!(err.user_message(), "Shipment already assigned");
        assert_eq!(err.to_string(), "HTTP 400: Shipment already assigned");
    }

    #[test]
    fn unauthorized_counts_as_session_error() {
        assert!(AppError::Http { status: 401, message: "jwt expired".into() }.is_session_error());
        assert!(AppError::SessionExpired.is_session_error());
        assert!(!AppError::Network("offline".into()).is_session_error());
    }
}
