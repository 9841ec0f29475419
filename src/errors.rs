//! Error types for pattern compilation and language setup, with error codes
//! and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - P001: `InvalidCharacters` (Pattern contains characters other than letters and '?')
//! - P002: `CompilationFailed` (Validated pattern could not be compiled into a matcher)
//! - L001: `UnknownLocale` (Locale identifier could not be parsed)
//! - L002: `MissingWordList` (No word files found for the requested locale)
//! - L003: `WordListIo` (Word file could not be read)
//!
//! # Examples
//!
//! ```
//! use wordseek::errors::PatternError;
//!
//! fn check(input: &str) -> Result<(), Box<PatternError>> {
//!     if input.contains('3') {
//!         return Err(Box::new(PatternError::InvalidCharacters {
//!             input: input.to_string(),
//!         }));
//!     }
//!     Ok(())
//! }
//!
//! match check("a3c") {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use std::io;

/// Errors produced while validating or compiling a wildcard pattern.
///
/// `InvalidCharacters` is the expected, user-recoverable case: the boundary
/// that receives it should echo the raw input back to the user (escaped, if
/// rendering HTML). `CompilationFailed` should be rare after character-class
/// validation, but it is surfaced rather than asserted away.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid pattern \"{input}\": only letters and '?' are allowed, and the pattern must not be empty")]
    InvalidCharacters { input: String },

    #[error("failed to compile pattern \"{pattern}\": {source}")]
    CompilationFailed {
        pattern: String,
        #[source]
        source: fancy_regex::Error,
    },
}

impl PatternError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PatternError::InvalidCharacters { .. } => "P001",
            PatternError::CompilationFailed { .. } => "P002",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PatternError::InvalidCharacters { .. } => {
                Some("Use letters for known positions and '?' for unknown ones (e.g., 'f??d' or 'caf?')")
            }
            PatternError::CompilationFailed { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

impl From<PatternError> for io::Error {
    fn from(pe: PatternError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

/// Errors produced while resolving a locale to a word corpus.
#[derive(Debug, thiserror::Error)]
pub enum LanguageError {
    #[error("unknown locale \"{identifier}\": expected a language code with optional region (e.g., \"en\" or \"en-NZ\")")]
    UnknownLocale { identifier: String },

    #[error("no word list found for locale \"{identifier}\" in {words_dir}")]
    MissingWordList { identifier: String, words_dir: String },

    #[error("failed to read word list: {0}")]
    WordListIo(#[from] io::Error),
}

impl LanguageError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            LanguageError::UnknownLocale { .. } => "L001",
            LanguageError::MissingWordList { .. } => "L002",
            LanguageError::WordListIo(_) => "L003",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LanguageError::UnknownLocale { .. } => {
                Some("Locale identifiers look like 'en', 'en-NZ', or 'tr_TR'")
            }
            LanguageError::MissingWordList { .. } => {
                Some("Word files are discovered by name: '{language}_{REGION}.txt' (e.g., 'en_NZ.txt')")
            }
            LanguageError::WordListIo(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
