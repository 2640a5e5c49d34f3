// src/errors.rs
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong. Please try again. / 出错了，请重试。";

/// Input problems caught before any network call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("File size too large. Please upload an image under 5MB. / 文件过大，请上传小于 5MB 的图片。")]
    FileTooLarge,

    #[error("Please upload a photo first. / 请先上传照片。")]
    MissingPhoto,

    #[error("Please enter a description for your custom edit. / 请输入自定义编辑的描述。")]
    EmptyPrompt,

    #[error("Please select a character or enter a name. / 请选择一个人物或输入名字。")]
    NoCharacter,
}

#[derive(Error, Debug)]
pub enum SnapError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Generation(String),

    #[error("No image generated in response")]
    NoImageGenerated,

    #[error("Image processing error: {0}")]
    ImageProcessing(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Unknown character: {0}")]
    UnknownCharacter(String),

    #[error("No photo uploaded")]
    NoPhoto,

    #[error("No generated image available")]
    NoResult,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SnapError {
    /// Message shown in the form banner; blank failures fall back to the generic text.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl ResponseError for SnapError {
    fn error_response(&self) -> HttpResponse {
        match self {
            SnapError::Validation(_) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Validation error",
                "message": self.to_string()
            })),
            SnapError::Generation(_) | SnapError::NoImageGenerated => {
                HttpResponse::ServiceUnavailable().json(serde_json::json!({
                    "error": "AI service error",
                    "message": self.user_message()
                }))
            }
            SnapError::ImageProcessing(_) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "Image processing error",
                    "message": self.to_string()
                }))
            }
            SnapError::Upload(_) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Upload error",
                "message": self.to_string()
            })),
            SnapError::UnknownCharacter(_) | SnapError::NoPhoto | SnapError::NoResult => {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": "Not found",
                    "message": self.to_string()
                }))
            }
            SnapError::Config(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Configuration error",
                "message": self.to_string()
            })),
        }
    }
}
