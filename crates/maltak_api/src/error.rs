//! Error types for the API.

use maltak_core::CoreError;
use thiserror::Error;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while handling a request.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be decoded.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The request was decoded but its input was rejected.
    #[error("{0}")]
    Validation(String),

    /// The requested record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The store failed while serving the request.
    ///
    /// `message` is what the caller sees; `source` stays in the logs.
    #[error("{message}: {source}")]
    Internal {
        /// Generic message for the route.
        message: String,
        /// Underlying store error.
        #[source]
        source: CoreError,
    },

    /// A response could not be encoded.
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Wraps a store error under the route's generic `message`.
    ///
    /// Rejected calculator input is the caller's fault and becomes a
    /// validation error; anything else is internal.
    pub fn from_core(source: CoreError, message: impl Into<String>) -> Self {
        match source {
            CoreError::InvalidInput { message } => Self::Validation(message),
            source => Self::Internal {
                message: message.into(),
                source,
            },
        }
    }

    /// Returns the HTTP-style status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidRequest(_) | ApiError::Validation(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Internal { .. } | ApiError::Encode(_) => 500,
        }
    }

    /// Returns the message shown to the caller.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Internal { message, .. } => message.clone(),
            ApiError::Encode(_) => "Failed to encode response".to_string(),
            other => other.to_string(),
        }
    }

    /// Returns true if this is a client error (4xx).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidRequest(_) | ApiError::Validation(_) | ApiError::NotFound(_)
        )
    }

    /// Returns true if this is a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        matches!(self, ApiError::Internal { .. } | ApiError::Encode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maltak_core::EntityId;

    #[test]
    fn error_classification() {
        assert!(ApiError::validation("bad").is_client_error());
        assert!(ApiError::not_found("Tool not found").is_client_error());
        assert!(!ApiError::validation("bad").is_server_error());

        let internal = ApiError::from_core(
            CoreError::missing_author(EntityId::new(1), EntityId::new(9)),
            "Failed to fetch article",
        );
        assert!(internal.is_server_error());
        assert_eq!(internal.status_code(), 500);
    }

    #[test]
    fn internal_hides_details() {
        let err = ApiError::from_core(
            CoreError::missing_category(EntityId::new(3), EntityId::new(4)),
            "Failed to fetch articles",
        );
        assert_eq!(err.public_message(), "Failed to fetch articles");
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn invalid_input_is_validation() {
        let err = ApiError::from_core(CoreError::invalid_input("years must be at least 1"), "x");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.public_message(), "years must be at least 1");
    }
}
