//! Core library for prescription OCR text extraction.
//!
//! This crate provides:
//! - OCR-artifact normalization (known misread rewrites)
//! - Entry segmentation at numbered-list boundaries
//! - Rule-based medicine field extraction (name, dosage, duration)
//! - An optional entity-recognition strategy behind the same contract
//!
//! The pipeline never fails on malformed prescription text; OCR noise is the
//! expected steady state. Entries without a recognizable medicine name are
//! dropped, and missing dosage/duration fields come back as empty strings.

pub mod error;
pub mod models;
pub mod ner;
pub mod prescription;

pub use error::{ModelError, Result, RxtractError};
pub use models::config::RxtractConfig;
pub use models::record::{ExtractionResult, MedicineRecord};
pub use ner::{EntityRecognizer, LexiconRecognizer, NerFieldExtractor};
pub use prescription::{
    segment, FieldSource, Normalizer, PrescriptionParser, RewriteRule, RuleBasedParser,
    RuleFields,
};
