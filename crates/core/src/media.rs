//! Image payloads exchanged with clients and the generation capability.
//!
//! Bytes travel as standard base64, either bare (inline parts sent to the
//! model) or wrapped in a `data:` URI (responses rendered by the browser).

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::CoreError;

/// MIME type assumed when the upload declares none and sniffing fails.
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// An image held in memory together with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl InlineImage {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Build an image from an upload whose MIME type may be missing.
    ///
    /// A declared type wins; otherwise the header bytes are sniffed, and
    /// [`DEFAULT_MIME_TYPE`] is used when the format is unrecognised.
    pub fn from_upload(declared_mime: Option<&str>, data: Vec<u8>) -> Self {
        let mime_type = declared_mime
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .or_else(|| sniff_mime_type(&data).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());
        Self { mime_type, data }
    }

    /// Decode a base64 payload (as returned by the generation capability).
    pub fn from_base64(mime_type: impl Into<String>, encoded: &str) -> Result<Self, CoreError> {
        let data = STANDARD
            .decode(encoded.trim())
            .map_err(|e| CoreError::Validation(format!("Invalid base64 image data: {e}")))?;
        Ok(Self::new(mime_type, data))
    }

    /// Parse a `data:<mime>;base64,<payload>` URI.
    pub fn from_data_uri(uri: &str) -> Result<Self, CoreError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| CoreError::Validation("Data URI must start with 'data:'".into()))?;
        let (mime_type, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| CoreError::Validation("Data URI must be base64-encoded".into()))?;
        Self::from_base64(mime_type, payload)
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }

    /// Encode as a `data:` URI directly usable as an `<img src>`.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

/// Whether a MIME type names an image (`image/*`).
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type
        .trim()
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

/// Detect the MIME type from the leading bytes of an image.
pub fn sniff_mime_type(data: &[u8]) -> Option<&'static str> {
    image::guess_format(data)
        .ok()
        .map(|format| format.to_mime_type())
}
