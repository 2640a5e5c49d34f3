// src/services/gemini_service.rs
use crate::config::Config;
use crate::errors::SnapError;
use crate::models::InlineImage;
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Instant;

/// The external image generation capability.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Returns the generated image as a `data:image/png;base64,...` URI.
    async fn generate(&self, image: &InlineImage, prompt: &str) -> Result<String, SnapError>;
}

#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    parts: Option<Vec<GeminiPart>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPart {
    inline_data: Option<GeminiInlineData>,
}

#[derive(Debug, Deserialize)]
struct GeminiInlineData {
    data: Option<String>,
}

impl GeminiResponse {
    /// Base64 data of the first part carrying inline image bytes.
    pub fn first_image_data(&self) -> Option<&str> {
        self.candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .iter()
            .filter_map(|part| part.inline_data.as_ref()?.data.as_deref())
            .find(|data| !data.is_empty())
    }

    pub fn into_png_data_uri(self) -> Result<String, SnapError> {
        self.first_image_data()
            .map(|data| format!("data:image/png;base64,{}", data))
            .ok_or(SnapError::NoImageGenerated)
    }
}

pub struct GeminiService {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiService {
    pub fn new(config: &Config) -> Result<Self, SnapError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.generation_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SnapError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn redact(&self, text: &str) -> String {
        if self.api_key.is_empty() {
            return text.to_string();
        }
        text.replace(&self.api_key, "[redacted]")
    }
}

pub fn build_request_body(image: &InlineImage, prompt: &str) -> Value {
    json!({
        "contents": [
            {
                "parts": [
                    {
                        "inlineData": {
                            "data": image.data,
                            "mimeType": image.mime_type
                        }
                    },
                    {
                        "text": prompt
                    }
                ]
            }
        ]
    })
}

/// Pulls `error.message` out of a Gemini error body, falling back to the raw text.
pub fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl ImageGenerator for GeminiService {
    async fn generate(&self, image: &InlineImage, prompt: &str) -> Result<String, SnapError> {
        let start = Instant::now();
        debug!(
            "Gemini request: model={}, mime_type={}, image_len={}, prompt_len={}",
            self.model,
            image.mime_type,
            image.data.len(),
            prompt.chars().count()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&build_request_body(image, prompt))
            .send()
            .await
            .map_err(|e| SnapError::Generation(self.redact(&e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = api_error_message(&error_text);
            warn!("Gemini returned {}: {}", status, self.redact(&message));
            return Err(SnapError::Generation(self.redact(&message)));
        }

        let result: GeminiResponse = response.json().await.map_err(|e| {
            SnapError::Generation(format!("Failed to parse generation response: {}", e))
        })?;

        let uri = result.into_png_data_uri();
        match &uri {
            Ok(uri) => info!(
                "Gemini generated image ({} chars) in {} ms",
                uri.len(),
                start.elapsed().as_millis()
            ),
            Err(_) => warn!(
                "Gemini response had no image part after {} ms",
                start.elapsed().as_millis()
            ),
        }
        uri
    }
}
