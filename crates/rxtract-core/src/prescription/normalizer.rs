//! OCR-artifact normalization.
//!
//! Prescription scans come back with a handful of recurring misreads. The
//! normalizer rewrites those into canonical substrings before segmentation,
//! applying an ordered list of rules supplied at construction time.
//!
//! The compound rules (`1NigBtDays`, `2NigBtDays`) run before the bare
//! `NigBtDays` rule, so an already-expanded numbered match is never rewritten
//! a second time. The whole pass is idempotent: normalizing normalized text
//! is a no-op.

use regex::Regex;

use crate::models::config::LiteralRule;

/// One normalization rewrite.
#[derive(Debug, Clone)]
pub enum RewriteRule {
    /// Exact substring replacement, case-sensitive, applied globally.
    Literal { find: String, replace: String },
    /// Regex replacement, applied globally.
    Pattern { pattern: Regex, replace: String },
}

impl RewriteRule {
    /// Literal rule from owned strings.
    pub fn literal(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self::Literal {
            find: find.into(),
            replace: replace.into(),
        }
    }

    /// Case-insensitive regex rule. The pattern set is fixed at construction,
    /// so a malformed pattern is a programming error.
    fn pattern(pattern: &str, replace: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: Regex::new(pattern).unwrap(),
            replace: replace.into(),
        }
    }

    fn apply(&self, text: &str) -> String {
        match self {
            Self::Literal { find, replace } => text.replace(find.as_str(), replace),
            Self::Pattern { pattern, replace } => {
                pattern.replace_all(text, replace.as_str()).into_owned()
            }
        }
    }
}

/// OCR-artifact normalizer: an ordered rewrite-rule list.
#[derive(Debug, Clone)]
pub struct Normalizer {
    rules: Vec<RewriteRule>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Create a normalizer with the built-in OCR-artifact rules.
    pub fn new() -> Self {
        Self {
            rules: Self::default_rules(),
        }
    }

    /// Create a normalizer with a caller-supplied rule list, replacing the
    /// built-in rules entirely. Rules run in the given order.
    pub fn with_rules(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// Append literal rules after the current ones (config extension point).
    pub fn with_extra_literals(mut self, extra: &[LiteralRule]) -> Self {
        self.rules.extend(
            extra
                .iter()
                .map(|r| RewriteRule::literal(r.find.clone(), r.replace.clone())),
        );
        self
    }

    /// The known OCR misreads, in application order. The numbered compound
    /// artifacts must come before the bare one: once `1NigBtDays` has become
    /// `1 Night 7 Days` there is no `NigBtDays` left for the generic rule
    /// to fire on.
    fn default_rules() -> Vec<RewriteRule> {
        vec![
            RewriteRule::pattern(r"(?i)\b1NigBtDays\b", "1 Night 7 Days"),
            RewriteRule::pattern(r"(?i)\b2NigBtDays\b", "2 Night 7 Days"),
            RewriteRule::literal("NigBtDays", "Night 7 Days"),
            RewriteRule::pattern(r"(?i)\bIN\)", "INJ"),
        ]
    }

    /// Apply every rule in order and return the rewritten text.
    pub fn normalize(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc))
    }
}
