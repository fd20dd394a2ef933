//! Client for the remote cat-vs-dog classification service.
//!
//! This crate provides:
//! - Image acquisition from a user-chosen file
//! - The multipart upload/prediction exchange
//! - Client configuration and error types

pub mod acquire;
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;

pub use acquire::acquire_image;
pub use client::{PredictionClient, UPLOAD_FIELD_NAME, UPLOAD_FILE_NAME};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
