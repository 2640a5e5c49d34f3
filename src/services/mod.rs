// src/services/mod.rs
pub mod gemini_service;
pub mod image_codec;
#[cfg(test)]
pub mod mock;

pub use gemini_service::{GeminiService, ImageGenerator};
pub use image_codec::ImageCodec;
