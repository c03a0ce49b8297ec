//! Data models for extraction output and configuration.

pub mod config;
pub mod record;

pub use config::RxtractConfig;
pub use record::{ExtractionResult, MedicineRecord};
