//! Classification service HTTP client.

use std::time::Instant;

use catvdog_models::{ImageBlob, PredictionResponse, PredictionResult};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::metrics;

/// Multipart field the image is sent under.
pub const UPLOAD_FIELD_NAME: &str = "file";
/// File name reported for every upload.
pub const UPLOAD_FILE_NAME: &str = "image.jpg";

/// Client for the classification service.
///
/// Read-only after construction; share it behind an `Arc` and reuse it for
/// sequential requests.
#[derive(Debug)]
pub struct PredictionClient {
    http: Client,
    config: ClientConfig,
    endpoint: Url,
}

impl PredictionClient {
    /// Create a new prediction client.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let endpoint = config.endpoint()?;

        // reqwest has no write timeout; the overall deadline bounds the upload.
        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .timeout(config.request_deadline())
            .build()
            .map_err(|e| ClientError::config(format!("failed to build http client: {}", e)))?;

        Ok(Self {
            http,
            config,
            endpoint,
        })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Classify an image. Always resolves to exactly one label or error.
    pub async fn predict(&self, image: ImageBlob) -> PredictionResult {
        let started = Instant::now();
        let outcome = self.try_predict(image).await;
        let elapsed = started.elapsed().as_secs_f64();

        match outcome {
            Ok(label) => {
                info!("Prediction: {}", label);
                metrics::record_prediction("label", elapsed);
                PredictionResult::Label(label)
            }
            Err(e) => {
                if e.is_transport() {
                    error!("Failed to send image: {}", e);
                } else {
                    warn!("Prediction failed ({}): {}", e.kind(), e);
                }
                metrics::record_prediction(e.kind(), elapsed);
                PredictionResult::error(e.user_message())
            }
        }
    }

    /// Classify an image, keeping the typed error.
    pub async fn try_predict(&self, image: ImageBlob) -> ClientResult<String> {
        if let Some(limit) = self.config.max_upload_bytes {
            if image.len() > limit {
                return Err(ClientError::PayloadTooLarge {
                    size: image.len(),
                    limit,
                });
            }
        }

        let size = image.len();
        let form = Form::new().part(UPLOAD_FIELD_NAME, file_part(image)?);

        debug!("Uploading {} bytes to {}", size, self.endpoint);
        metrics::record_upload_size(size);

        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        debug!("Response code: {}", status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Response body: {}", body);
            return Err(ClientError::request_failed(format!(
                "service returned {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;
        if body.is_empty() {
            return Err(ClientError::request_failed(format!(
                "service returned {} with an empty body",
                status
            )));
        }
        debug!("Response body: {}", body);

        let response = PredictionResponse::from_body(&body)
            .map_err(|e| ClientError::invalid_response(e.to_string()))?;
        Ok(response.prediction)
    }

    fn transport_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::Timeout(self.config.request_deadline())
        } else {
            ClientError::Network(e)
        }
    }
}

/// Build the single `file` part.
fn file_part(image: ImageBlob) -> ClientResult<Part> {
    let (bytes, content_type) = image.into_parts();
    Part::bytes(bytes)
        .file_name(UPLOAD_FILE_NAME)
        .mime_str(&content_type)
        .map_err(|e| ClientError::config(format!("invalid content type {:?}: {}", content_type, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_resolves_endpoint() {
        let client =
            PredictionClient::new(ClientConfig::default().with_base_url("http://localhost:8001"))
                .unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:8001/");
    }

    #[test]
    fn test_new_rejects_bad_url() {
        let err = PredictionClient::new(ClientConfig::default().with_base_url("::")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_file_part_accepts_generic_and_invalid_types() {
        assert!(file_part(ImageBlob::new(vec![1, 2, 3])).is_ok());
        // The blob already replaced the bad type with the generic one.
        assert!(file_part(ImageBlob::with_content_type(vec![1], "not a mime")).is_ok());
    }

    #[test]
    fn test_bad_mime_parameters_are_a_config_error() {
        let blob = ImageBlob::with_content_type(vec![1], "image/jpeg; ===");
        let err = file_part(blob).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
        assert_eq!(err.kind(), "config");
        assert!(!err.is_transport());
    }

    #[tokio::test]
    async fn test_oversized_image_never_hits_network() {
        // Nothing listens on this address; the limit must short-circuit first.
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:9")
            .with_max_upload_bytes(4);
        let client = PredictionClient::new(config).unwrap();

        let err = client
            .try_predict(ImageBlob::new(vec![0u8; 5]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::PayloadTooLarge { size: 5, limit: 4 }
        ));

        let result = client.predict(ImageBlob::new(vec![0u8; 5])).await;
        assert_eq!(result, PredictionResult::error("image exceeds upload limit"));
    }
}
