//! File-backed entity recognizer.
//!
//! Loads an exported model directory: a `meta.json` manifest plus a
//! `lexicon.json` mapping surface terms to entity labels. This is the
//! simplest recognizer that satisfies the [`EntityRecognizer`] seam; a
//! statistical model exported by a training run plugs in the same way.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ModelError;

use super::{Entity, EntityLabel, EntityRecognizer, Result};

/// Manifest describing an exported model directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelManifest {
    /// Model name.
    pub name: String,
    /// Model version string.
    pub version: String,
    /// Entity labels the model was trained with.
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Lexicon-backed recognizer loaded from a model directory.
#[derive(Debug)]
pub struct LexiconRecognizer {
    manifest: ModelManifest,
    /// Lowercased term -> label. Longest terms are tried first.
    terms: Vec<(String, EntityLabel)>,
}

impl LexiconRecognizer {
    /// Load a recognizer from an exported model directory.
    ///
    /// Fails when the directory is missing or either file is absent or
    /// malformed. Callers should treat any error as fatal at startup.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        Self::from_files(dir, "meta.json", "lexicon.json")
    }

    /// Load with explicit file names (config override).
    pub fn from_files(dir: &Path, manifest_name: &str, lexicon_name: &str) -> Result<Self> {
        if !dir.is_dir() {
            return Err(ModelError::NotFound(dir.to_path_buf()));
        }

        let manifest_path = dir.join(manifest_name);
        let manifest_raw = std::fs::read_to_string(&manifest_path)?;
        let manifest: ModelManifest = serde_json::from_str(&manifest_raw)
            .map_err(|e| ModelError::ModelLoad(format!("{}: {}", manifest_path.display(), e)))?;

        let lexicon_path = dir.join(lexicon_name);
        let lexicon_raw = std::fs::read_to_string(&lexicon_path)?;
        let lexicon: HashMap<String, EntityLabel> = serde_json::from_str(&lexicon_raw)
            .map_err(|e| ModelError::ModelLoad(format!("{}: {}", lexicon_path.display(), e)))?;

        if lexicon.is_empty() {
            return Err(ModelError::ModelLoad(format!(
                "{}: empty lexicon",
                lexicon_path.display()
            )));
        }

        let mut terms: Vec<(String, EntityLabel)> = lexicon
            .into_iter()
            .map(|(term, label)| (term.to_lowercase(), label))
            .collect();
        // Longest term wins when one is a prefix of another.
        terms.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(&b.0)));

        info!(
            "loaded model '{}' v{} ({} lexicon terms)",
            manifest.name,
            manifest.version,
            terms.len()
        );

        Ok(Self { manifest, terms })
    }

    /// The loaded manifest.
    pub fn manifest(&self) -> &ModelManifest {
        &self.manifest
    }
}

impl EntityRecognizer for LexiconRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        let lower = text.to_lowercase();
        let mut hits: Vec<(usize, Entity)> = Vec::new();
        // Byte offsets already claimed by a longer term.
        let mut claimed: Vec<(usize, usize)> = Vec::new();

        for (term, label) in &self.terms {
            let mut from = 0;
            while let Some(rel) = lower[from..].find(term.as_str()) {
                let start = from + rel;
                let end = start + term.len();
                from = end;

                if claimed.iter().any(|&(s, e)| start < e && end > s) {
                    continue;
                }
                claimed.push((start, end));
                // Offsets are relative to the lowercased text; fall back to
                // it if lowercasing changed byte lengths.
                let span = text.get(start..end).unwrap_or(&lower[start..end]);
                hits.push((start, Entity::new(*label, span)));
            }
        }

        hits.sort_by_key(|(start, _)| *start);
        debug!("recognized {} entities", hits.len());
        hits.into_iter().map(|(_, entity)| entity).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn recognizer(lexicon: &str) -> LexiconRecognizer {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("meta.json"),
            r#"{"name": "medicine_ner", "version": "0.1.0", "labels": ["MEDICINE", "DOSAGE", "DURATION"]}"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("lexicon.json"), lexicon).unwrap();
        LexiconRecognizer::from_dir(dir.path()).unwrap()
    }

    #[test]
    fn test_missing_dir_is_not_found() {
        let err = LexiconRecognizer::from_dir(Path::new("/no/such/model")).unwrap_err();
        assert!(matches!(err, ModelError::NotFound(_)));
    }

    #[test]
    fn test_malformed_manifest_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("meta.json"), "not json").unwrap();
        std::fs::write(dir.path().join("lexicon.json"), "{}").unwrap();

        let err = LexiconRecognizer::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ModelError::ModelLoad(_)));
    }

    #[test]
    fn test_empty_lexicon_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("meta.json"),
            r#"{"name": "m", "version": "0"}"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("lexicon.json"), "{}").unwrap();

        let err = LexiconRecognizer::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ModelError::ModelLoad(_)));
    }

    #[test]
    fn test_recognizes_in_text_order() {
        let rec = recognizer(
            r#"{"tab.para500": "MEDICINE", "1 morning": "DOSAGE", "5 days": "DURATION"}"#,
        );
        let entities = rec.recognize("1) TAB.PARA500 1 Morning 5 Days");

        let labels: Vec<EntityLabel> = entities.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec![EntityLabel::Medicine, EntityLabel::Dosage, EntityLabel::Duration]
        );
        // Original casing is preserved in the reported span.
        assert_eq!(entities[0].text, "TAB.PARA500");
    }

    #[test]
    fn test_longest_term_wins_overlap() {
        let rec = recognizer(r#"{"para": "MEDICINE", "tab.para500": "MEDICINE"}"#);
        let entities = rec.recognize("TAB.PARA500");

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "TAB.PARA500");
    }
}
