//! `word_list` — loading and preprocessing of dictionary word lists.
//!
//! A word list is a plain text resource with one word per line. Parsing:
//! - Lines are trimmed; blank lines are discarded.
//! - Words keep their original case and accents — folding is the matcher's
//!   job, at match time, so the corpus can be displayed as written.
//! - The final list is deduplicated and sorted.
//!
//! The public API mirrors the two ways a corpus arrives: already in memory
//! (`parse_from_str`) or on disk (`load_from_path`). Loading happens once,
//! at startup; the resulting list is immutable for the process lifetime.

/// A processed, ready-to-use word list.
///
/// The `words` vector contains all valid words (trimmed, deduplicated),
/// already sorted. This is the corpus handed to [`crate::solver::Solver`].
#[derive(Debug, Clone, Default)]
pub struct WordList {
    /// Deduplicated, sorted words, case preserved.
    /// Example: `["Attic", "attic", "café"]`
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string, one word per line.
    ///
    /// # Behavior
    /// 1. Splits the input into lines and trims each.
    /// 2. Discards blank lines.
    /// 3. Deduplicates (exact duplicates only — `"Attic"` and `"attic"`
    ///    are distinct corpus words).
    /// 4. Sorts the result.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut words: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() {
                    None
                } else {
                    Some(line.to_string())
                }
            })
            .collect();

        // sort + dedup rather than a HashSet: we want a sorted Vec anyway,
        // and dedup only removes adjacent duplicates
        words.sort();
        words.dedup();

        WordList { words }
    }

    /// Read a word list from a file path and parse it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file at `path` cannot be read.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }
}
