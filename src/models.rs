// src/models.rs
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Character {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingStyle {
    #[default]
    Modern,
    Ancient,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Preset,
    Freeform,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// A file picked by the user, before size validation.
#[derive(Debug, Clone)]
pub struct PhotoFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// The accepted upload, held as a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub filename: String,
    pub size: usize,
    pub data_uri: String,
    /// Token at upload time; changes whenever the photo does.
    pub revision: u64,
}

/// Base64 payload and media type as sent to the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub data: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedResult {
    pub image_url: String,
    pub prompt_used: String,
    pub created_at: DateTime<Utc>,
    pub revision: u64,
}

/// Work emitted by a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationJob {
    pub token: u64,
    pub photo_uri: String,
    pub prompt: String,
}
