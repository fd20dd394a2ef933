//! Terminal front end for the cat-vs-dog classifier.
//!
//! This crate provides:
//! - The session controller that owns the screen state
//! - Command parsing for the interactive prompt
//! - Rendering of the screen as text

pub mod command;
pub mod error;
pub mod render;
pub mod session;

pub use command::Command;
pub use error::{AppError, AppResult};
pub use render::render;
pub use session::{Delivery, Session};
