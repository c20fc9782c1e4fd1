//! Canonical text form used for all keyword matching.
//!
//! Every lookup in this crate happens on normalized text: lowercased and
//! stripped of diacritics, so "Acción" and "accion" compare equal.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase the input, decompose Unicode combining sequences (NFD) and drop
/// the combining marks. All other characters and whitespace pass through.
///
/// The function is idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
