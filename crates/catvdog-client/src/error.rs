//! Client error types.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Message shown when the upload never got a response.
pub const MSG_SEND_FAILED: &str = "failed to send image";
/// Message shown for an unsuccessful status or an empty body.
pub const MSG_GET_FAILED: &str = "failed to get prediction";
/// Message shown when the body is not the expected JSON.
pub const MSG_PARSE_FAILED: &str = "failed to parse prediction";
/// Message shown when the image is over the configured upload limit.
pub const MSG_TOO_LARGE: &str = "image exceeds upload limit";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to read image {path}: {source}")]
    Acquisition {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image is empty: {0}")]
    EmptyImage(PathBuf),

    #[error("Image of {size} bytes exceeds upload limit of {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::RequestFailed(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// No response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Timeout(_) | ClientError::Network(_))
    }

    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Acquisition { .. } | ClientError::EmptyImage(_) => "acquisition",
            ClientError::PayloadTooLarge { .. } => "payload_too_large",
            ClientError::Timeout(_) => "timeout",
            ClientError::Network(_) => "transport",
            ClientError::RequestFailed(_) => "server",
            ClientError::InvalidResponse(_) => "parse",
            ClientError::Config(_) => "config",
        }
    }

    /// Message suitable for showing in place of a label.
    pub fn user_message(&self) -> &'static str {
        match self {
            ClientError::Timeout(_) | ClientError::Network(_) => MSG_SEND_FAILED,
            ClientError::RequestFailed(_) => MSG_GET_FAILED,
            ClientError::InvalidResponse(_) => MSG_PARSE_FAILED,
            ClientError::PayloadTooLarge { .. } => MSG_TOO_LARGE,
            ClientError::Acquisition { .. } | ClientError::EmptyImage(_) => {
                "failed to read image"
            }
            ClientError::Config(_) => "client is misconfigured",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ClientError::request_failed("500").user_message(),
            "failed to get prediction"
        );
        assert_eq!(
            ClientError::invalid_response("eof").user_message(),
            "failed to parse prediction"
        );
        assert_eq!(
            ClientError::Timeout(Duration::from_secs(1)).user_message(),
            "failed to send image"
        );
    }

    #[test]
    fn test_classification() {
        let err = ClientError::EmptyImage(PathBuf::from("a.jpg"));
        assert!(!err.is_transport());
        assert_eq!(err.kind(), "acquisition");

        let err = ClientError::Timeout(Duration::from_millis(10));
        assert!(err.is_transport());
        assert_eq!(err.kind(), "timeout");
    }
}
