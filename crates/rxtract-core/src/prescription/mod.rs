//! Prescription extraction pipeline.
//!
//! Data flows strictly forward through four stages:
//! normalizer -> segmenter -> field extraction (per entry) -> assembler.

mod normalizer;
mod parser;
mod segmenter;

pub mod rules;

pub use normalizer::{Normalizer, RewriteRule};
pub use parser::{PrescriptionParser, RuleBasedParser};
pub use rules::{FieldExtractor, FieldMatch, FieldSet, FieldSource, RuleFields};
pub use segmenter::segment;
