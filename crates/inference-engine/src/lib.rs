//! Income Model Inference
//!
//! Loads the pre-trained binary income classifier from its artifact and
//! exposes the decision function used by the prediction pipeline.

mod model;

pub use model::{Bracket, IncomeModel, Prediction};

use std::path::PathBuf;
use thiserror::Error;

/// Errors during model loading and inference
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("model artifact is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid model artifact: {0}")]
    InvalidArtifact(String),
    #[error("input vector has {actual} entries, model expects {expected}")]
    ShapeMismatch { expected: usize, actual: usize },
}
