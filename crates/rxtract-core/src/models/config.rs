//! Configuration structures for the extraction pipeline.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RxtractError};

/// Main configuration for the rxtract pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RxtractConfig {
    /// OCR-artifact normalization configuration.
    pub normalizer: NormalizerConfig,

    /// Entity-recognition model configuration (model-backed strategy only).
    pub model: ModelConfig,
}

/// Normalization configuration.
///
/// The built-in OCR-artifact rules always run first, in their fixed order.
/// `extra_rules` are literal substitutions appended after them, so deployments
/// can correct scanner-specific artifacts without touching extraction logic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Additional literal rewrites, applied after the built-in rules.
    pub extra_rules: Vec<LiteralRule>,
}

/// A literal find/replace rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralRule {
    /// Exact substring to find (case-sensitive).
    pub find: String,
    /// Replacement text.
    pub replace: String,
}

/// Model file locations for the optional entity-recognition strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Directory containing the exported model files.
    pub model_dir: PathBuf,

    /// Model manifest file name.
    pub manifest: String,

    /// Entity lexicon file name.
    pub lexicon: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("medicine_ner_model"),
            manifest: "meta.json".to_string(),
            lexicon: "lexicon.json".to_string(),
        }
    }
}

impl RxtractConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| RxtractError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| RxtractError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
