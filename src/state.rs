// src/state.rs
//
// The form is one immutable record. Every user action or generation
// completion is an `Event`; `FormState::apply` consumes the current record
// and returns the next one, plus a `GenerationJob` when a submit is accepted.
use crate::errors::{SnapError, ValidationError};
use crate::models::*;
use crate::prompt;
use crate::services::ImageCodec;
use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;

pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub mode: SelectionMode,
    pub character: Option<Character>,
    pub custom_name: String,
    pub clothing: ClothingStyle,
    pub freeform_text: String,
}

impl Selection {
    pub fn select_character(&mut self, character: Character) {
        self.character = Some(character);
        self.custom_name.clear();
    }

    pub fn set_custom_name(&mut self, name: &str) {
        self.custom_name = name.to_string();
        if !name.is_empty() {
            self.character = None;
        }
    }

    /// Preset name, else the typed name; `None` when neither is usable.
    pub fn resolved_name(&self) -> Option<&str> {
        match &self.character {
            Some(character) => Some(character.name),
            None => Some(self.custom_name.trim()).filter(|name| !name.is_empty()),
        }
    }
}

#[derive(Debug)]
pub enum Event {
    PhotoChosen(PhotoFile),
    CharacterSelected(Character),
    CustomNameChanged(String),
    ClothingChanged(ClothingStyle),
    ModeChanged(SelectionMode),
    FreeformChanged(String),
    Submit,
    GenerationFinished {
        token: u64,
        outcome: Result<String, SnapError>,
    },
    ResetSettings,
    ResetAll,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub photo: Option<Photo>,
    pub selection: Selection,
    pub status: GenerationStatus,
    pub result: Option<GeneratedResult>,
    pub error: Option<String>,
    pub token: u64,
    pending_prompt: Option<String>,
}

impl FormState {
    pub fn apply(mut self, event: Event) -> (FormState, Option<GenerationJob>) {
        match event {
            Event::PhotoChosen(file) => {
                if file.data.len() > MAX_UPLOAD_BYTES {
                    self.error = Some(ValidationError::FileTooLarge.to_string());
                    return (self, None);
                }
                let media_type =
                    ImageCodec::detect_media_type(file.content_type.as_deref(), &file.data);
                self.invalidate_pending();
                self.photo = Some(Photo {
                    filename: file.filename,
                    size: file.data.len(),
                    data_uri: ImageCodec::encode_data_uri(&media_type, &file.data),
                    revision: self.token,
                });
                self.result = None;
                self.error = None;
                self.status = GenerationStatus::Idle;
            }
            Event::CharacterSelected(character) => self.selection.select_character(character),
            Event::CustomNameChanged(name) => self.selection.set_custom_name(&name),
            Event::ClothingChanged(clothing) => self.selection.clothing = clothing,
            Event::ModeChanged(mode) => self.selection.mode = mode,
            Event::FreeformChanged(text) => self.selection.freeform_text = text,
            Event::Submit => return self.submit(),
            Event::GenerationFinished { token, outcome } => self.finish(token, outcome),
            Event::ResetSettings => {
                self.result = None;
                self.error = None;
                self.status = GenerationStatus::Idle;
                self.invalidate_pending();
            }
            Event::ResetAll => {
                self.photo = None;
                self.selection.character = None;
                self.selection.custom_name.clear();
                self.selection.freeform_text.clear();
                self.result = None;
                self.error = None;
                self.status = GenerationStatus::Idle;
                self.invalidate_pending();
            }
        }
        (self, None)
    }

    /// Whether the form offers the generate action.
    pub fn can_submit(&self) -> bool {
        self.photo.is_some()
            && self.result.is_none()
            && self.status != GenerationStatus::Loading
            && (self.selection.mode == SelectionMode::Freeform
                || self.selection.character.is_some()
                || !self.selection.custom_name.is_empty())
    }

    fn submit(mut self) -> (FormState, Option<GenerationJob>) {
        if matches!(
            self.status,
            GenerationStatus::Loading | GenerationStatus::Success
        ) {
            debug!("Ignoring submit while {:?}", self.status);
            return (self, None);
        }

        let Some(photo_uri) = self.photo.as_ref().map(|p| p.data_uri.clone()) else {
            self.error = Some(ValidationError::MissingPhoto.to_string());
            return (self, None);
        };

        let prompt = match prompt::build_prompt(&self.selection) {
            Ok(prompt) => prompt,
            Err(e) => {
                self.error = Some(e.to_string());
                return (self, None);
            }
        };

        self.error = None;
        self.status = GenerationStatus::Loading;
        self.token += 1;
        self.pending_prompt = Some(prompt.clone());

        let job = GenerationJob {
            token: self.token,
            photo_uri,
            prompt,
        };
        (self, Some(job))
    }

    fn finish(&mut self, token: u64, outcome: Result<String, SnapError>) {
        if token != self.token || self.status != GenerationStatus::Loading {
            debug!(
                "Discarding stale generation result (token {}, current {})",
                token, self.token
            );
            return;
        }

        let prompt_used = self.pending_prompt.take().unwrap_or_default();
        match outcome {
            Ok(image_url) => {
                self.result = Some(GeneratedResult {
                    image_url,
                    prompt_used,
                    created_at: Utc::now(),
                    revision: token,
                });
                self.error = None;
                self.status = GenerationStatus::Success;
            }
            Err(e) => {
                self.error = Some(e.user_message());
                self.status = GenerationStatus::Error;
            }
        }
    }

    fn invalidate_pending(&mut self) {
        self.token += 1;
        self.pending_prompt = None;
    }

    pub fn view(&self) -> StateView {
        StateView {
            status: self.status,
            photo: self.photo.as_ref().map(|photo| PhotoView {
                filename: photo.filename.clone(),
                size: photo.size,
                media_type: ImageCodec::media_type(&photo.data_uri).to_string(),
                url: format!("{}?v={}", PHOTO_URL, photo.revision),
            }),
            mode: self.selection.mode,
            selected_character: self.selection.character.map(|c| c.id),
            custom_name: self.selection.custom_name.clone(),
            clothing: self.selection.clothing,
            freeform_text: self.selection.freeform_text.clone(),
            result: self.result.as_ref().map(|result| ResultView {
                prompt_used: result.prompt_used.clone(),
                created_at: result.created_at,
                url: format!("{}?v={}", RESULT_URL, result.revision),
                download_url: DOWNLOAD_URL.to_string(),
            }),
            error: self.error.clone(),
            can_submit: self.can_submit(),
        }
    }
}

pub const PHOTO_URL: &str = "/api/v1/photo";
pub const RESULT_URL: &str = "/api/v1/result";
pub const DOWNLOAD_URL: &str = "/api/v1/result/download";

/// What the form page renders. Images are referenced by URL, never inlined.
#[derive(Debug, Clone, Serialize)]
pub struct StateView {
    pub status: GenerationStatus,
    pub photo: Option<PhotoView>,
    pub mode: SelectionMode,
    pub selected_character: Option<&'static str>,
    pub custom_name: String,
    pub clothing: ClothingStyle,
    pub freeform_text: String,
    pub result: Option<ResultView>,
    pub error: Option<String>,
    pub can_submit: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhotoView {
    pub filename: String,
    pub size: usize,
    pub media_type: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultView {
    pub prompt_used: String,
    pub created_at: DateTime<Utc>,
    pub url: String,
    pub download_url: String,
}
