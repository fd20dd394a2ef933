//! Prediction results and the classification service's wire format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body returned by the classification service on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Predicted label, e.g. "cat" or "dog"
    pub prediction: String,
}

impl PredictionResponse {
    /// Parse a response body.
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Outcome of one prediction request, ready to be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PredictionResult {
    /// Label returned by the service
    Label(String),
    /// User-displayable failure message
    Error(String),
}

impl PredictionResult {
    pub fn label(label: impl Into<String>) -> Self {
        Self::Label(label.into())
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    pub fn is_label(&self) -> bool {
        matches!(self, PredictionResult::Label(_))
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            PredictionResult::Label(label) => Some(label),
            PredictionResult::Error(_) => None,
        }
    }
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictionResult::Label(label) => write!(f, "It's a {}", label),
            PredictionResult::Error(msg) => f.write_str(msg),
        }
    }
}
