//! Presentation-facing ordering of match results.
//!
//! Sorting is a display concern, but the collation rule is part of the
//! observable contract: locale-aware case-insensitive comparison first,
//! and when two words compare equal case-insensitively (e.g. "Attic" vs.
//! "attic"), lowercase sorts before uppercase.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::locale::{lowercase, Locale};

/// Compare two words for display order under `locale`.
///
/// Primary key: the locale-lowercased forms (case-insensitive, diacritics
/// kept). Tie-break: descending raw codepoint order — lowercase letters
/// have higher codepoints than their uppercase forms, so this puts "attic"
/// before "Attic".
#[must_use]
pub fn display_cmp(a: &str, b: &str, locale: &Locale) -> Ordering {
    match lowercase(a, locale).cmp(&lowercase(b, locale)) {
        Ordering::Equal => b.cmp(a),
        other => other,
    }
}

/// Sort a match set into its display order.
#[must_use]
pub fn display_sort(matches: HashSet<String>, locale: &Locale) -> Vec<String> {
    let mut words: Vec<String> = matches.into_iter().collect();
    words.sort_by(|a, b| display_cmp(a, b, locale));
    words
}
