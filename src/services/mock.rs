// src/services/mock.rs
use crate::errors::SnapError;
use crate::models::InlineImage;
use crate::services::ImageGenerator;
use async_trait::async_trait;
use parking_lot::Mutex;

enum Outcome {
    Image(String),
    Failure(fn() -> SnapError),
}

/// Records every call and answers with a canned outcome.
pub struct MockGenerator {
    outcome: Outcome,
    calls: Mutex<Vec<(InlineImage, String)>>,
}

impl MockGenerator {
    pub fn returning(data_uri: &str) -> Self {
        Self {
            outcome: Outcome::Image(data_uri.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: fn() -> SnapError) -> Self {
        Self {
            outcome: Outcome::Failure(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn last_call(&self) -> Option<(InlineImage, String)> {
        self.calls.lock().last().cloned()
    }
}

#[async_trait]
impl ImageGenerator for MockGenerator {
    async fn generate(&self, image: &InlineImage, prompt: &str) -> Result<String, SnapError> {
        self.calls.lock().push((image.clone(), prompt.to_string()));
        match &self.outcome {
            Outcome::Image(uri) => Ok(uri.clone()),
            Outcome::Failure(error) => Err(error()),
        }
    }
}
