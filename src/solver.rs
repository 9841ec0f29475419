//! The solver: scans an immutable word corpus for pattern matches.
//!
//! A [`Solver`] owns the corpus for one language, loaded once at startup
//! and shared read-only across callers for the lifetime of the process.
//! [`Solver::solve`] is a pure function of (pattern, corpus): no side
//! effects, no interior state, safe to call concurrently from any number
//! of request handlers without coordination.
//!
//! The scan is deliberately a linear pass — O(corpus size × pattern
//! length) — with no early termination and no precomputed index. At
//! dictionary-list scale (tens of thousands of words) this is fast enough
//! per request; it is a known scalability ceiling, not an oversight, and
//! anything larger would call for length-bucketed or n-gram indexing.

use std::collections::HashSet;
use std::time::Duration;

use instant::Instant;

use crate::pattern::CompiledPattern;

/// An immutable word corpus plus the scan over it.
#[derive(Debug, Clone)]
pub struct Solver {
    words: Vec<String>,
}

/// The outcome of one timed solve, for display: the duplicate-free match
/// set, the corpus size, and the elapsed compute time. Not persisted.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// All corpus words matching the pattern.
    pub matches: HashSet<String>,
    /// Total number of words scanned.
    pub corpus_size: usize,
    /// Time spent scanning.
    pub elapsed: Duration,
}

impl Solver {
    /// Build a solver over `words`. The corpus is taken as-is; loading,
    /// deduplication, and ordering are the word-list layer's concern.
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Solver { words }
    }

    /// Number of words in the corpus.
    #[must_use]
    pub fn corpus_size(&self) -> usize {
        self.words.len()
    }

    /// The corpus itself, read-only.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Scan the whole corpus and collect every word the pattern matches.
    ///
    /// An empty result set is success, not failure; no error can originate
    /// here.
    #[must_use]
    pub fn solve(&self, pattern: &CompiledPattern) -> HashSet<String> {
        self.words
            .iter()
            .filter(|word| pattern.matches(word))
            .cloned()
            .collect()
    }

    /// [`Self::solve`] plus the timing and corpus-size metadata the
    /// presentation layer displays.
    #[must_use]
    pub fn solve_report(&self, pattern: &CompiledPattern) -> SolveReport {
        let start = Instant::now();
        let matches = self.solve(pattern);
        SolveReport {
            matches,
            corpus_size: self.corpus_size(),
            elapsed: start.elapsed(),
        }
    }
}
