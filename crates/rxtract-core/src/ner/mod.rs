//! Optional entity-recognition strategy.
//!
//! A trained entity recognizer can stand in for the regex field extractors,
//! behind the same [`FieldSource`](crate::prescription::FieldSource)
//! contract. The recognizer itself is an external capability; this module
//! defines the seam ([`EntityRecognizer`]), a file-backed recognizer loaded
//! from an exported model directory ([`LexiconRecognizer`]), and the adapter
//! with its fallback rules ([`NerFieldExtractor`]).
//!
//! Model loading failures are startup-time fatal for callers that requested
//! this strategy; an extraction that finds no entities is a normal result.

mod extractor;
mod lexicon;

pub use extractor::NerFieldExtractor;
pub use lexicon::{LexiconRecognizer, ModelManifest};

pub use crate::error::ModelError;

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Entity labels the prescription pipeline consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    /// A medicine name.
    Medicine,
    /// A dosage schedule.
    Dosage,
    /// A treatment duration.
    Duration,
}

/// One labeled span reported by a recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Entity label.
    pub label: EntityLabel,
    /// The matched text, as it appeared in the entry.
    pub text: String,
}

impl Entity {
    pub fn new(label: EntityLabel, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

/// The opaque learned-model seam.
///
/// Implementations receive one entry's text and report labeled spans in
/// left-to-right order. How the spans are produced (statistical model,
/// lexicon lookup, remote service) is outside the pipeline's concern.
pub trait EntityRecognizer {
    /// Recognize entities in one entry's text.
    fn recognize(&self, text: &str) -> Vec<Entity>;
}
