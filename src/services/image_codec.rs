// src/services/image_codec.rs
use crate::errors::SnapError;
use crate::models::InlineImage;
use base64::{Engine as _, engine::general_purpose};
use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_MEDIA_TYPE: &str = "image/jpeg";
const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

static DATA_URI_MEDIA_TYPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:([a-zA-Z0-9]+/[a-zA-Z0-9.+-]+)[^,]*,").expect("valid media type regex")
});

pub struct ImageCodec;

impl ImageCodec {
    /// Everything after the first comma, or the whole input when nothing follows one.
    pub fn payload(data_uri: &str) -> &str {
        match data_uri.split_once(',') {
            Some((_, rest)) if !rest.is_empty() => rest,
            _ => data_uri,
        }
    }

    /// Declared media type, `image/jpeg` when the prefix is missing or malformed.
    pub fn media_type(data_uri: &str) -> &str {
        DATA_URI_MEDIA_TYPE
            .captures(data_uri)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or(DEFAULT_MEDIA_TYPE)
    }

    pub fn split_data_uri(data_uri: &str) -> InlineImage {
        InlineImage {
            data: Self::payload(data_uri).to_string(),
            mime_type: Self::media_type(data_uri).to_string(),
        }
    }

    pub fn encode_data_uri(media_type: &str, data: &[u8]) -> String {
        format!(
            "data:{};base64,{}",
            media_type,
            general_purpose::STANDARD.encode(data)
        )
    }

    pub fn decode_payload(data_uri: &str) -> Result<Vec<u8>, SnapError> {
        general_purpose::STANDARD
            .decode(Self::payload(data_uri))
            .map_err(|e| SnapError::ImageProcessing(format!("Failed to decode image: {}", e)))
    }

    /// Media type for an upload: declared type first, then magic bytes.
    pub fn detect_media_type(declared: Option<&str>, data: &[u8]) -> String {
        if let Some(declared) = declared.map(str::trim).filter(|d| !d.is_empty()) {
            return declared.to_string();
        }

        image::guess_format(data)
            .map(|format| format.to_mime_type().to_string())
            .unwrap_or_else(|_| UNKNOWN_MEDIA_TYPE.to_string())
    }
}
