//! `data:` URIs carrying base64 image bytes inside JSON bodies.

use base64::{Engine as _, engine::general_purpose};

/// Media type used when the browser reports none for a file.
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

#[derive(Debug, thiserror::Error)]
pub enum DataUriError {
    #[error("not a data URI")]
    MissingScheme,
    #[error("data URI has no payload separator")]
    MissingComma,
    #[error("data URI is not base64 encoded")]
    NotBase64,
    #[error("invalid base64 payload")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// A decoded data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub media_type: String,
    pub data: Vec<u8>,
}

/// Encode bytes as `data:<media_type>;base64,<payload>`, the same shape a
/// browser `FileReader::readAsDataURL` produces.
pub fn encode(media_type: &str, data: &[u8]) -> String {
    let media_type = if media_type.trim().is_empty() {
        FALLBACK_MEDIA_TYPE
    } else {
        media_type.trim()
    };
    format!(
        "data:{media_type};base64,{}",
        general_purpose::STANDARD.encode(data)
    )
}

pub fn decode(uri: &str) -> Result<DataUri, DataUriError> {
    let rest = uri.strip_prefix("data:").ok_or(DataUriError::MissingScheme)?;
    let (header, payload) =
        rest.split_once(',').ok_or(DataUriError::MissingComma)?;
    let media_type = header
        .strip_suffix(";base64")
        .ok_or(DataUriError::NotBase64)?;
    let media_type = if media_type.is_empty() {
        FALLBACK_MEDIA_TYPE.to_string()
    } else {
        media_type.to_string()
    };
    let data = general_purpose::STANDARD.decode(payload.trim())?;
    Ok(DataUri { media_type, data })
}
