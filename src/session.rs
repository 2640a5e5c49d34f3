// src/session.rs
use crate::models::GenerationJob;
use crate::services::{ImageCodec, ImageGenerator};
use crate::state::{Event, FormState, StateView};
use log::{info, warn};
use parking_lot::Mutex;
use std::sync::Arc;

/// Owns the single form state container and runs generation jobs.
pub struct StudioSession {
    state: Mutex<FormState>,
    generator: Arc<dyn ImageGenerator>,
}

impl StudioSession {
    pub fn new(generator: Arc<dyn ImageGenerator>) -> Self {
        Self {
            state: Mutex::new(FormState::default()),
            generator,
        }
    }

    /// Applies one event atomically and returns any job it produced.
    pub fn dispatch(&self, event: Event) -> Option<GenerationJob> {
        let mut guard = self.state.lock();
        let current = std::mem::take(&mut *guard);
        let (next, job) = current.apply(event);
        *guard = next;
        job
    }

    pub fn view(&self) -> StateView {
        self.state.lock().view()
    }

    pub fn snapshot(&self) -> FormState {
        self.state.lock().clone()
    }

    /// Submits the form and waits for the generation to settle.
    pub async fn submit(&self) -> StateView {
        if let Some(job) = self.dispatch(Event::Submit) {
            self.run_job(job).await;
        }
        self.view()
    }

    async fn run_job(&self, job: GenerationJob) {
        let image = ImageCodec::split_data_uri(&job.photo_uri);
        info!(
            "Starting generation {} ({}, prompt {} chars)",
            job.token,
            image.mime_type,
            job.prompt.chars().count()
        );

        let outcome = self.generator.generate(&image, &job.prompt).await;
        if let Err(e) = &outcome {
            warn!("Generation {} failed: {}", job.token, e);
        }

        self.dispatch(Event::GenerationFinished {
            token: job.token,
            outcome,
        });
    }
}
