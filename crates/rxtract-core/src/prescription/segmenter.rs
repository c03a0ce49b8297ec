//! Entry segmentation.
//!
//! Prescription text lists medicines as numbered items: `1) ... 2) ...`.
//! The segmenter splits the text immediately before each `digits + )` token,
//! so the delimiter itself starts the new segment. Text with no such token
//! is one segment. Segments are trimmed and empty ones dropped.

use super::rules::patterns::ENTRY_DELIMITER;

/// Split normalized text into trimmed, non-empty entries, left to right.
pub fn segment(text: &str) -> Vec<String> {
    let starts: Vec<usize> = ENTRY_DELIMITER.find_iter(text).map(|m| m.start()).collect();

    if starts.is_empty() {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        return vec![trimmed.to_string()];
    }

    // Slice at delimiter starts; the text before the first delimiter is its
    // own (usually empty) segment.
    let mut segments = Vec::with_capacity(starts.len() + 1);
    let mut pieces = Vec::with_capacity(starts.len() + 1);
    pieces.push(&text[..starts[0]]);
    for window in starts.windows(2) {
        pieces.push(&text[window[0]..window[1]]);
    }
    pieces.push(&text[starts[starts.len() - 1]..]);

    for piece in pieces {
        let trimmed = piece.trim();
        if !trimmed.is_empty() {
            segments.push(trimmed.to_string());
        }
    }

    segments
}
