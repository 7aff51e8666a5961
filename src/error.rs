//! Unified error types.

use crate::domain::order::ValidationError;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum OrderEntryError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl HttpError {
    /// Map a non-success status code and its body to an error.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => HttpError::Unauthorized,
            404 => HttpError::NotFound(body),
            429 => HttpError::RateLimited {
                retry_after_ms: None,
            },
            400..=499 => HttpError::BadRequest(body),
            500.. => HttpError::ServerError { status, body },
            _ => HttpError::UnexpectedStatus { status, body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_client_errors() {
        assert!(matches!(
            HttpError::from_status(401, String::new()),
            HttpError::Unauthorized
        ));
        assert!(matches!(
            HttpError::from_status(404, "gone".into()),
            HttpError::NotFound(body) if body == "gone"
        ));
        assert!(matches!(
            HttpError::from_status(429, String::new()),
            HttpError::RateLimited { retry_after_ms: None }
        ));
        assert!(matches!(
            HttpError::from_status(400, "{\"quantity\":[\"bad\"]}".into()),
            HttpError::BadRequest(_)
        ));
    }

    #[test]
    fn test_from_status_maps_server_errors() {
        match HttpError::from_status(503, "down".into()) {
            HttpError::ServerError { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_status_unfollowed_redirect_is_not_server_error() {
        assert!(matches!(
            HttpError::from_status(304, String::new()),
            HttpError::UnexpectedStatus { status: 304, .. }
        ));
        assert!(matches!(
            HttpError::from_status(302, "moved".into()),
            HttpError::UnexpectedStatus { status: 302, body } if body == "moved"
        ));
    }
}
