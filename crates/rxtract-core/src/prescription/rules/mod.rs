//! Rule-based field extractors for prescription entries.

pub mod dosage;
pub mod duration;
pub mod name;
pub mod patterns;

pub use dosage::{extract_dosage, DosageExtractor};
pub use duration::{extract_duration, DurationExtractor};
pub use name::{extract_name, NameExtractor};
pub use patterns::*;

/// Trait for single-field extractors.
///
/// Each extractor is a pure function over the entry text: it searches only
/// the text it is given and reports the first (leftmost) match, if any.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}

/// A matched field value with its span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    /// Extracted (and, for names, cleaned) value.
    pub value: String,
    /// Byte span of the match in the source text.
    pub span: (usize, usize),
}

impl FieldMatch {
    pub fn new(value: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            value: value.into(),
            span: (start, end),
        }
    }
}

/// The three optional fields of one entry.
///
/// Field searches are independent: an entry can have a name with no dosage,
/// or a dosage with no duration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    /// Medicine name, `.` characters stripped from the match.
    pub name: Option<String>,
    /// Dosage schedule, as matched.
    pub dosage: Option<String>,
    /// Duration, as matched.
    pub duration: Option<String>,
}

/// A strategy producing the three fields of one entry.
///
/// Implemented by the rule-based extractors and by the model-backed
/// recognizer adapter; the assembler is generic over this seam.
pub trait FieldSource {
    /// Extract all three fields from one entry's text.
    fn fields(&self, entry: &str) -> FieldSet;
}

/// The default rule-based field source: three independent regex searches.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleFields;

impl FieldSource for RuleFields {
    fn fields(&self, entry: &str) -> FieldSet {
        FieldSet {
            name: extract_name(entry),
            dosage: extract_dosage(entry),
            duration: extract_duration(entry),
        }
    }
}
