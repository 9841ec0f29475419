//! Locale identification and text folding.
//!
//! A [`Locale`] names the language (and optionally the region) whose rules
//! govern folding and display collation. The folding transform — [`fold`] —
//! strips case and diacritic distinctions so that a pattern typed without
//! accents matches accented corpus words and vice versa. It is applied
//! symmetrically: to pattern literals at compile time and to corpus
//! candidates at match time, never special-cased per word.

use std::fmt;
use std::str::FromStr;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::errors::LanguageError;

/// Languages whose case rules distinguish dotted and dotless 'i'.
/// In these, 'I' lowercases to 'ı' and 'İ' lowercases to 'i'.
const DOTLESS_I_LANGUAGES: [&str; 2] = ["tr", "az"];

/// A parsed locale identifier: a lowercase ISO language code plus an
/// optional uppercase region code.
///
/// Accepts both BCP 47 style (`en-NZ`) and POSIX style (`en_NZ`) separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// The language code, e.g. `"en"`.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The region code (if present), e.g. `"NZ"`.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The full identifier, e.g. `"en-NZ"` or just `"en"`.
    #[must_use]
    pub fn identifier(&self) -> String {
        match &self.region {
            Some(region) => format!("{}-{}", self.language, region),
            None => self.language.clone(),
        }
    }

    /// Whether this locale follows the dotted/dotless-i case rules.
    fn uses_dotless_i(&self) -> bool {
        DOTLESS_I_LANGUAGES.contains(&self.language.as_str())
    }
}

impl FromStr for Locale {
    type Err = Box<LanguageError>;

    /// Parse an identifier like `en`, `en-NZ`, or `tr_TR`.
    ///
    /// The language part must be non-empty ASCII letters; a region part, if
    /// present, likewise. Anything else is an `UnknownLocale` error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || {
            Box::new(LanguageError::UnknownLocale {
                identifier: s.to_string(),
            })
        };

        let mut parts = s.split(['-', '_']);
        // split always yields at least one element
        let language = parts.next().unwrap_or_default();
        let region = parts.next();
        if parts.next().is_some() {
            return Err(unknown());
        }

        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(unknown());
        }
        if let Some(r) = region {
            if r.is_empty() || !r.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(unknown());
            }
        }

        Ok(Locale {
            language: language.to_ascii_lowercase(),
            region: region.map(str::to_ascii_uppercase),
        })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// Fold `text` for comparison under `locale`: locale-aware lowercasing,
/// then canonical decomposition (NFD) with combining marks stripped.
///
/// Examples: `"CAFÉ"` → `"cafe"`; under a Turkish locale, `"DİŞLİ"` →
/// `"disli"` while `"KAPI"` → `"kapı"`.
#[must_use]
pub fn fold(text: &str, locale: &Locale) -> String {
    lowercase(text, locale)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Locale-aware lowercasing: standard Unicode lowercasing, with the
/// dotted/dotless-i tailoring applied first where the locale calls for it.
///
/// This is also the primary key for display collation, which ignores case
/// but keeps diacritics.
#[must_use]
pub(crate) fn lowercase(text: &str, locale: &Locale) -> String {
    if !locale.uses_dotless_i() {
        return text.to_lowercase();
    }

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> Locale {
        "en-NZ".parse().unwrap()
    }

    fn tr() -> Locale {
        "tr".parse().unwrap()
    }

    #[test]
    fn test_parse_language_only() {
        let locale: Locale = "en".parse().unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.region(), None);
        assert_eq!(locale.identifier(), "en");
    }

    #[test]
    fn test_parse_with_region() {
        let locale: Locale = "en-NZ".parse().unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.region(), Some("NZ"));
        assert_eq!(locale.identifier(), "en-NZ");
    }

    #[test]
    fn test_parse_posix_separator_and_case() {
        let locale: Locale = "TR_tr".parse().unwrap();
        assert_eq!(locale.language(), "tr");
        assert_eq!(locale.region(), Some("TR"));
        assert_eq!(locale.identifier(), "tr-TR");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Locale>().is_err());
        assert!("-NZ".parse::<Locale>().is_err());
        assert!("en-".parse::<Locale>().is_err());
        assert!("e1".parse::<Locale>().is_err());
        assert!("en-NZ-extra".parse::<Locale>().is_err());
    }

    #[test]
    fn test_fold_strips_case() {
        assert_eq!(fold("FEED", &en()), "feed");
        assert_eq!(fold("Ford", &en()), "ford");
    }

    #[test]
    fn test_fold_strips_diacritics() {
        assert_eq!(fold("café", &en()), "cafe");
        assert_eq!(fold("CAFÉ", &en()), "cafe");
        assert_eq!(fold("ÀÉÎÕÜ", &en()), "aeiou");
    }

    #[test]
    fn test_fold_handles_decomposed_input() {
        // 'é' as 'e' + combining acute accent
        assert_eq!(fold("cafe\u{0301}", &en()), "cafe");
    }

    #[test]
    fn test_fold_turkish_dotless_i() {
        assert_eq!(fold("KAPI", &tr()), "kapı");
        assert_eq!(fold("DİŞLİ", &tr()), "disli");
        // Non-Turkish locales use standard lowercasing
        assert_eq!(fold("KAPI", &en()), "kapi");
    }

    #[test]
    fn test_fold_is_idempotent() {
        for word in ["café", "FEED", "naïve", "İstanbul"] {
            let once = fold(word, &en());
            assert_eq!(fold(&once, &en()), once);
        }
    }
}
