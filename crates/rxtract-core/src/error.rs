//! Error types for the rxtract-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the rxtract library.
///
/// Pattern-matching misses are never errors: OCR noise is the expected
/// steady state, so an entry that yields no medicine name is simply dropped.
/// The variants here cover operator-level failures only.
#[derive(Error, Debug)]
pub enum RxtractError {
    /// Entity-recognition model error.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to the optional entity-recognition model.
///
/// All of these are startup-time fatal for a caller that requested the
/// model-backed strategy, distinct from zero-entity extraction during normal
/// operation (which is a valid result, not an error).
#[derive(Error, Debug)]
pub enum ModelError {
    /// The model directory does not exist.
    #[error("model not found at {}", .0.display())]
    NotFound(PathBuf),

    /// Failed to load or parse a model file.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// I/O error when reading model files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the rxtract library.
pub type Result<T> = std::result::Result<T, RxtractError>;
