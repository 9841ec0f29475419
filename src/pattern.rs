//! Wildcard pattern validation and compilation.
//!
//! A pattern is a partially-known word: letters at known positions and `?`
//! at unknown ones. [`Pattern::parse`] validates the raw input and
//! [`Pattern::compile`] turns it into a [`CompiledPattern`] — an anchored
//! regex over folded text that matches case- and diacritic-insensitively
//! under a given locale.
//!
//! Design choices (applied consistently throughout):
//! - **Character policy:** any Unicode letter is accepted, not just ASCII.
//!   Accented literals such as 'é' are folded before compilation, so they
//!   match the same words their unaccented forms do.
//! - **Anchoring:** the rendered regex is wrapped in explicit `^...$`
//!   anchors; a pattern must consume the entire candidate, never a
//!   substring.
//! - **Wildcard semantics:** `?` matches exactly one character of the
//!   folded candidate.

use fancy_regex::Regex;

use crate::errors::PatternError;
use crate::locale::{fold, Locale};

/// One validated unit of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `?` — matches any single character.
    Wildcard,
    /// A letter, matched case- and diacritic-insensitively.
    Letter(char),
}

/// A validated (but not yet locale-bound) wildcard pattern.
///
/// Constructed once per submitted input via the fallible [`Pattern::parse`];
/// immutable afterwards. Holds the raw input for display alongside the
/// validated token sequence.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    tokens: Vec<Token>,
}

impl Pattern {
    /// Validate raw user input into a `Pattern`.
    ///
    /// All whitespace is stripped first. After stripping, the input must be
    /// non-empty and every character must be either `?` or a letter
    /// (`char::is_alphabetic`); anything else invalidates the whole pattern.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidCharacters`] echoing the raw input.
    pub fn parse(raw: &str) -> Result<Self, Box<PatternError>> {
        let invalid = || {
            Box::new(PatternError::InvalidCharacters {
                input: raw.to_string(),
            })
        };

        let tokens = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '?' => Ok(Token::Wildcard),
                c if c.is_alphabetic() => Ok(Token::Letter(c)),
                _ => Err(invalid()),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if tokens.is_empty() {
            return Err(invalid());
        }

        Ok(Pattern {
            raw: raw.to_string(),
            tokens,
        })
    }

    /// Validate and compile in one step: `compile(raw, locale)` is the
    /// boundary operation called once per submitted form value.
    ///
    /// # Errors
    ///
    /// [`PatternError::InvalidCharacters`] if validation fails, or
    /// [`PatternError::CompilationFailed`] if the folded pattern cannot be
    /// built into a regex (rare after character-class validation, but
    /// handled rather than asserted away).
    pub fn compile(raw: &str, locale: &Locale) -> Result<CompiledPattern, Box<PatternError>> {
        Self::parse(raw)?.compile_with(locale)
    }

    /// Compile this validated pattern under `locale`.
    ///
    /// Each literal is folded with the same transform later applied to
    /// candidates, then regex-escaped; each wildcard becomes `.`. The whole
    /// expression is anchored with `^...$`.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::CompilationFailed`] if the regex engine
    /// rejects the rendered expression.
    pub fn compile_with(&self, locale: &Locale) -> Result<CompiledPattern, Box<PatternError>> {
        let mut regex_str = String::with_capacity(self.tokens.len() + 2);
        regex_str.push('^');
        for token in &self.tokens {
            match token {
                Token::Wildcard => regex_str.push('.'),
                Token::Letter(c) => {
                    let folded = fold(&c.to_string(), locale);
                    regex_str.push_str(&fancy_regex::escape(&folded));
                }
            }
        }
        regex_str.push('$');

        let regex = Regex::new(&regex_str).map_err(|e| {
            Box::new(PatternError::CompilationFailed {
                pattern: self.raw.clone(),
                source: e,
            })
        })?;

        Ok(CompiledPattern {
            raw: self.raw.clone(),
            tokens: self.tokens.clone(),
            regex,
            locale: locale.clone(),
        })
    }

    /// The raw input string, as typed (pre-stripping).
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The validated token sequence.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

/// A pattern compiled against a specific locale's folding rules.
///
/// Matching is case-insensitive and diacritic-insensitive: the candidate is
/// folded with the same transform used on the pattern literals, then tested
/// against the anchored regex.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    raw: String,
    tokens: Vec<Token>,
    regex: Regex,
    locale: Locale,
}

impl CompiledPattern {
    /// True iff the pattern matches the entire candidate word.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        // The regex is anchored, so is_match is a whole-string test here.
        self.regex
            .is_match(&fold(candidate, &self.locale))
            .unwrap_or(false)
    }

    /// The raw input this pattern was compiled from.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The validated token sequence this pattern was compiled from.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The locale whose folding rules this pattern was compiled under.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> Locale {
        "en-NZ".parse().unwrap()
    }

    fn compile(raw: &str) -> CompiledPattern {
        Pattern::compile(raw, &en()).unwrap()
    }

    #[test]
    fn test_empty_pattern_rejected() {
        assert!(Pattern::parse("").is_err());
        assert!(Pattern::parse("   ").is_err());
    }

    #[test]
    fn test_invalid_characters_rejected() {
        for bad in ["grand-mother", "123", "a_b", "cat!", "f.d"] {
            let err = Pattern::parse(bad).unwrap_err();
            assert_eq!(err.code(), "P001", "{bad} should be rejected");
        }
    }

    #[test]
    fn test_letters_and_wildcards_accepted() {
        for good in ["cat", "f??d", "?????", "café", "AZaz?", "ÜBER"] {
            assert!(Pattern::parse(good).is_ok(), "{good} should parse");
        }
    }

    #[test]
    fn test_whitespace_stripped_before_validation() {
        let compiled = compile(" a ? b ? ");
        assert!(compiled.matches("axby"));
        assert!(!compiled.matches("axb"));
    }

    #[test]
    fn test_wildcard_matches_any_single_character() {
        let compiled = compile("AZaz?");
        assert!(compiled.matches("AZazb"));
        assert!(compiled.matches("AZazé"));
        assert!(!compiled.matches("xAZazbx"));
    }

    #[test]
    fn test_whole_word_anchoring() {
        let compiled = compile("cat");
        assert!(compiled.matches("cat"));
        assert!(compiled.matches("CAT"));
        assert!(!compiled.matches("cats"));
        assert!(!compiled.matches("scat"));
        assert!(!compiled.matches("ca"));
    }

    #[test]
    fn test_case_insensitive_matching() {
        let compiled = compile("f??d");
        assert!(compiled.matches("FEED"));
        assert!(compiled.matches("Ford"));
        assert!(!compiled.matches("fade"));
        assert!(!compiled.matches("reed"));
    }

    #[test]
    fn test_diacritic_insensitive_both_directions() {
        for raw in ["cafe", "café", "CAFÉ"] {
            let compiled = compile(raw);
            for candidate in ["CAFE", "CAFÉ", "cafe", "café"] {
                assert!(compiled.matches(candidate), "{raw} should match {candidate}");
            }
        }
    }

    #[test]
    fn test_wildcard_counts_folded_characters() {
        // "café" folds to four characters, so a four-token pattern fits
        let compiled = compile("caf?");
        assert!(compiled.matches("café"));
        assert!(compiled.matches("cafe\u{0301}"));
    }

    #[test]
    fn test_turkish_locale_folding_in_pattern() {
        let tr: Locale = "tr-TR".parse().unwrap();
        let compiled = Pattern::compile("kapı", &tr).unwrap();
        assert!(compiled.matches("KAPI"));
        assert!(compiled.matches("kapı"));
    }

    #[test]
    fn test_tokens_preserved() {
        let pattern = Pattern::parse("a?b").unwrap();
        assert_eq!(
            pattern.tokens(),
            [Token::Letter('a'), Token::Wildcard, Token::Letter('b')]
        );
        assert_eq!(pattern.raw(), "a?b");
    }
}
