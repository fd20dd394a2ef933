//! Shared data models for the cat-vs-dog classifier app.
//!
//! This crate provides:
//! - Image payloads picked by the user
//! - Prediction results and the service's wire format
//! - The screen state machine driven by the front end

pub mod blob;
pub mod prediction;
pub mod screen;

// Re-export common types
pub use blob::{ImageBlob, GENERIC_IMAGE_MIME};
pub use prediction::{PredictionResponse, PredictionResult};
pub use screen::{Screen, ScreenState, Ticket, TransitionError};
