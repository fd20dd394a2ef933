//! Prediction client configuration.

use std::time::Duration;

use url::Url;

use crate::error::{ClientError, ClientResult};

pub const DEFAULT_BASE_URL: &str = "https://shamik007-cvd.hf.space";
pub const DEFAULT_PREDICT_PATH: &str = "/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the prediction client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the classification service
    pub base_url: String,
    /// Path the image is posted to
    pub predict_path: String,
    /// TCP/TLS connect timeout
    pub connect_timeout: Duration,
    /// Time allowed for writing the upload
    pub write_timeout: Duration,
    /// Time allowed between reads of the response
    pub read_timeout: Duration,
    /// Largest image accepted for upload; unlimited when unset
    pub max_upload_bytes: Option<usize>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            predict_path: DEFAULT_PREDICT_PATH.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            write_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_upload_bytes: None,
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("CATVDOG_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            predict_path: std::env::var("CATVDOG_PREDICT_PATH")
                .unwrap_or_else(|_| DEFAULT_PREDICT_PATH.to_string()),
            connect_timeout: Duration::from_secs(
                std::env::var("CATVDOG_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            write_timeout: Duration::from_secs(
                std::env::var("CATVDOG_WRITE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            read_timeout: Duration::from_secs(
                std::env::var("CATVDOG_READ_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            max_upload_bytes: std::env::var("CATVDOG_MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|s| s.parse().ok()),
        }
    }

    /// Point the client at another service, keeping everything else.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use the same value for all three timeouts.
    pub fn with_timeouts(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self.write_timeout = timeout;
        self.read_timeout = timeout;
        self
    }

    pub fn with_max_upload_bytes(mut self, limit: usize) -> Self {
        self.max_upload_bytes = Some(limit);
        self
    }

    /// Upper bound on the duration of a whole exchange.
    pub fn request_deadline(&self) -> Duration {
        self.connect_timeout + self.write_timeout + self.read_timeout
    }

    /// Full URL the image is posted to.
    pub fn endpoint(&self) -> ClientResult<Url> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| ClientError::config(format!("invalid base url {}: {}", self.base_url, e)))?;
        base.join(&self.predict_path).map_err(|e| {
            ClientError::config(format!("invalid predict path {}: {}", self.predict_path, e))
        })
    }
}
