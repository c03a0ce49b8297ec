//! Adapter from an entity recognizer to the pipeline's field contract.

use tracing::debug;

use crate::prescription::rules::patterns::{NAME_NOISE, UNIT_DOSAGE};
use crate::prescription::rules::{FieldSet, FieldSource};

use super::{EntityLabel, EntityRecognizer};

/// Model-backed field source.
///
/// Runs the recognizer over one entry and keeps the first entity per label.
/// Two post-passes the rule-based source does not have:
/// - if the model reports no dosage, a numeric-unit pattern (`500 mg`,
///   `10ml`) is tried over the raw entry text as a fallback;
/// - dosage-unit and bare-digit substrings are stripped out of the reported
///   medicine name.
pub struct NerFieldExtractor<R: EntityRecognizer> {
    recognizer: R,
}

impl<R: EntityRecognizer> NerFieldExtractor<R> {
    /// Wrap a recognizer.
    pub fn new(recognizer: R) -> Self {
        Self { recognizer }
    }

    /// Strip dosage units and bare digits from a model-reported name and
    /// collapse the leftover whitespace.
    fn clean_name(raw: &str) -> String {
        let stripped = NAME_NOISE.replace_all(raw, "");
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl<R: EntityRecognizer> FieldSource for NerFieldExtractor<R> {
    fn fields(&self, entry: &str) -> FieldSet {
        let mut set = FieldSet::default();

        for entity in self.recognizer.recognize(entry) {
            match entity.label {
                EntityLabel::Medicine if set.name.is_none() => {
                    let cleaned = Self::clean_name(&entity.text);
                    if !cleaned.is_empty() {
                        set.name = Some(cleaned);
                    }
                }
                EntityLabel::Dosage if set.dosage.is_none() => {
                    set.dosage = Some(entity.text);
                }
                EntityLabel::Duration if set.duration.is_none() => {
                    set.duration = Some(entity.text);
                }
                _ => {}
            }
        }

        // Fallback: the model missed the dosage, try the numeric-unit form.
        if set.dosage.is_none() {
            if let Some(m) = UNIT_DOSAGE.find(entry) {
                debug!("dosage fallback matched {:?}", m.as_str());
                set.dosage = Some(m.as_str().to_string());
            }
        }

        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ner::Entity;
    use pretty_assertions::assert_eq;

    /// Canned recognizer returning fixed entities regardless of input.
    struct StubRecognizer(Vec<Entity>);

    impl EntityRecognizer for StubRecognizer {
        fn recognize(&self, _text: &str) -> Vec<Entity> {
            self.0.clone()
        }
    }

    #[test]
    fn test_first_entity_per_label_wins() {
        let extractor = NerFieldExtractor::new(StubRecognizer(vec![
            Entity::new(EntityLabel::Medicine, "TAB.DOLO"),
            Entity::new(EntityLabel::Medicine, "CAP.AMOX"),
            Entity::new(EntityLabel::Dosage, "1 Night"),
            Entity::new(EntityLabel::Duration, "3 Days"),
        ]));

        let fields = extractor.fields("1) TAB.DOLO 1 Night 3 Days");
        assert_eq!(fields.name.as_deref(), Some("TAB.DOLO"));
        assert_eq!(fields.dosage.as_deref(), Some("1 Night"));
        assert_eq!(fields.duration.as_deref(), Some("3 Days"));
    }

    #[test]
    fn test_name_cleanup_strips_units_and_digits() {
        let extractor = NerFieldExtractor::new(StubRecognizer(vec![Entity::new(
            EntityLabel::Medicine,
            "PARACETAMOL 500 mg 2",
        )]));

        let fields = extractor.fields("PARACETAMOL 500 mg 2");
        assert_eq!(fields.name.as_deref(), Some("PARACETAMOL"));
    }

    #[test]
    fn test_name_reduced_to_nothing_is_dropped() {
        let extractor = NerFieldExtractor::new(StubRecognizer(vec![Entity::new(
            EntityLabel::Medicine,
            "500 mg",
        )]));

        let fields = extractor.fields("500 mg");
        assert_eq!(fields.name, None);
    }

    #[test]
    fn test_dosage_fallback_fires_only_without_model_dosage() {
        let extractor = NerFieldExtractor::new(StubRecognizer(vec![Entity::new(
            EntityLabel::Medicine,
            "AMOXICILLIN",
        )]));

        // No model dosage: numeric-unit fallback over the entry text.
        let fields = extractor.fields("AMOXICILLIN 250 mg twice daily");
        assert_eq!(fields.dosage.as_deref(), Some("250 mg"));

        // Model dosage present: fallback must not overwrite it.
        let extractor = NerFieldExtractor::new(StubRecognizer(vec![
            Entity::new(EntityLabel::Medicine, "AMOXICILLIN"),
            Entity::new(EntityLabel::Dosage, "1 Morning"),
        ]));
        let fields = extractor.fields("AMOXICILLIN 250 mg 1 Morning");
        assert_eq!(fields.dosage.as_deref(), Some("1 Morning"));
    }

    #[test]
    fn test_no_entities_no_fields() {
        let extractor = NerFieldExtractor::new(StubRecognizer(Vec::new()));
        let fields = extractor.fields("illegible scrawl");
        assert_eq!(fields, FieldSet::default());
    }
}
