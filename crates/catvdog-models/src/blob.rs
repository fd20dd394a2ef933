//! Image payloads picked by the user.

use std::fmt;

use image::ImageFormat;

/// Content type used when the image format cannot be recognised.
pub const GENERIC_IMAGE_MIME: &str = "image/*";

/// In-memory bytes of a user-selected picture plus its content type.
///
/// A blob is moved into the request that uploads it and is never shared,
/// so picking a new image can't touch the bytes of an upload in flight.
pub struct ImageBlob {
    bytes: Vec<u8>,
    content_type: String,
}

impl ImageBlob {
    /// Create a blob, inferring the content type from the leading bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        let content_type = sniff_content_type(&bytes).to_string();
        Self {
            bytes,
            content_type,
        }
    }

    /// Create a blob with an explicit content type. A malformed type is
    /// replaced by [`GENERIC_IMAGE_MIME`].
    pub fn with_content_type(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        let content_type = content_type.into();
        let content_type = if is_valid_mime(&content_type) {
            content_type
        } else {
            GENERIC_IMAGE_MIME.to_string()
        };
        Self {
            bytes,
            content_type,
        }
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Split into raw bytes and content type.
    pub fn into_parts(self) -> (Vec<u8>, String) {
        (self.bytes, self.content_type)
    }
}

impl fmt::Debug for ImageBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageBlob")
            .field("len", &self.bytes.len())
            .field("content_type", &self.content_type)
            .finish()
    }
}

/// Best-effort MIME type from magic bytes.
pub fn sniff_content_type(bytes: &[u8]) -> &'static str {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Jpeg) => "image/jpeg",
        Ok(ImageFormat::Png) => "image/png",
        Ok(ImageFormat::Gif) => "image/gif",
        Ok(ImageFormat::WebP) => "image/webp",
        Ok(ImageFormat::Bmp) => "image/bmp",
        Ok(ImageFormat::Tiff) => "image/tiff",
        Ok(ImageFormat::Ico) => "image/x-icon",
        _ => GENERIC_IMAGE_MIME,
    }
}

/// `type/subtype` made of RFC 7230 token characters; parameters after `;`
/// are not checked.
fn is_valid_mime(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    let is_token = |s: &str| {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c))
    };
    match essence.split_once('/') {
        Some((kind, subtype)) => is_token(kind) && is_token(subtype),
        None => false,
    }
}
