//! Image acquisition.

use std::path::Path;

use catvdog_models::ImageBlob;
use tracing::{debug, error};

use crate::error::{ClientError, ClientResult};

/// Read the bytes of a user-chosen image.
///
/// The file handle is scoped to this call and released on every path.
pub async fn acquire_image(path: impl AsRef<Path>) -> ClientResult<ImageBlob> {
    let path = path.as_ref();

    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(source) => {
            error!("Failed to read image bytes from {}: {}", path.display(), source);
            return Err(ClientError::Acquisition {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if bytes.is_empty() {
        error!("Image {} is empty", path.display());
        return Err(ClientError::EmptyImage(path.to_path_buf()));
    }

    let blob = ImageBlob::new(bytes);
    debug!(
        "Read {} bytes ({}) from {}",
        blob.len(),
        blob.content_type(),
        path.display()
    );
    Ok(blob)
}
