//! `language` — binds a locale to its word corpus.
//!
//! Word files live in a words directory and are discovered by name:
//! `{language}_{REGION}.txt`, e.g. `en_NZ.txt` or `de_CH.txt`. A locale
//! with a region selects exactly its own file; a locale without one merges
//! every file for that language (so plain `en` searches the union of
//! `en_NZ.txt`, `en_US.txt`, ...). The merged corpus is deduplicated and
//! sorted once, at startup.

use std::path::Path;

use log::info;

use crate::errors::LanguageError;
use crate::locale::Locale;
use crate::solver::Solver;
use crate::word_list::WordList;

/// A supported language: a locale plus the solver over its corpus.
///
/// Built once at startup and shared read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct Language {
    pub locale: Locale,
    pub solver: Solver,
}

impl Language {
    /// Discover and load the word files for `locale` under `words_dir`.
    ///
    /// # Errors
    ///
    /// - [`LanguageError::MissingWordList`] if no file matches the locale.
    /// - [`LanguageError::WordListIo`] if the directory or a matching file
    ///   cannot be read.
    pub fn from_words_dir<P: AsRef<Path>>(
        words_dir: P,
        locale: Locale,
    ) -> Result<Language, Box<LanguageError>> {
        let dir = words_dir.as_ref();

        let mut contents = String::new();
        let mut files_found = 0usize;
        for entry in std::fs::read_dir(dir).map_err(LanguageError::WordListIo)? {
            let entry = entry.map_err(LanguageError::WordListIo)?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if !file_matches_locale(name, &locale) {
                continue;
            }

            let data =
                std::fs::read_to_string(entry.path()).map_err(LanguageError::WordListIo)?;
            contents.push_str(&data);
            contents.push('\n');
            files_found += 1;
        }

        if files_found == 0 {
            return Err(Box::new(LanguageError::MissingWordList {
                identifier: locale.identifier(),
                words_dir: dir.display().to_string(),
            }));
        }

        // One parse pass over the concatenated files gives us the
        // deduplicated, sorted union
        let word_list = WordList::parse_from_str(&contents);
        info!(
            "Loaded {} words for {} from {} file(s)",
            word_list.words.len(),
            locale.identifier(),
            files_found
        );

        Ok(Language {
            locale,
            solver: Solver::new(word_list.words),
        })
    }
}

/// True iff `file_name` is the word file (or one of the word files) for
/// `locale`: `{lang}_{REGION}.txt`, region-exact when the locale has a
/// region, any region otherwise.
fn file_matches_locale(file_name: &str, locale: &Locale) -> bool {
    match locale.region() {
        Some(region) => file_name == format!("{}_{}.txt", locale.language(), region),
        None => {
            file_name.ends_with(".txt")
                && file_name.starts_with(&format!("{}_", locale.language()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn en_nz() -> Locale {
        "en-NZ".parse().unwrap()
    }

    #[test]
    fn test_file_matching_with_region() {
        let locale = en_nz();
        assert!(file_matches_locale("en_NZ.txt", &locale));
        assert!(!file_matches_locale("en_US.txt", &locale));
        assert!(!file_matches_locale("de_NZ.txt", &locale));
        assert!(!file_matches_locale("en_NZ.dat", &locale));
    }

    #[test]
    fn test_file_matching_without_region() {
        let locale: Locale = "en".parse().unwrap();
        assert!(file_matches_locale("en_NZ.txt", &locale));
        assert!(file_matches_locale("en_US.txt", &locale));
        assert!(!file_matches_locale("de_CH.txt", &locale));
        assert!(!file_matches_locale("en_NZ.dict", &locale));
    }

    #[test]
    fn test_from_words_dir_merges_regions() {
        let dir = std::env::temp_dir().join("wordseek_lang_merge_test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("en_NZ.txt"), "kiwi\nshared\n").unwrap();
        fs::write(dir.join("en_US.txt"), "fall\nshared\n").unwrap();
        fs::write(dir.join("de_CH.txt"), "zmorge\n").unwrap();

        let language = Language::from_words_dir(&dir, "en".parse().unwrap()).unwrap();
        assert_eq!(language.solver.words(), ["fall", "kiwi", "shared"]);

        let regional = Language::from_words_dir(&dir, en_nz()).unwrap();
        assert_eq!(regional.solver.words(), ["kiwi", "shared"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_from_words_dir_missing_locale() {
        let dir = std::env::temp_dir().join("wordseek_lang_missing_test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("en_NZ.txt"), "kiwi\n").unwrap();

        let err = Language::from_words_dir(&dir, "fr".parse().unwrap()).unwrap_err();
        assert_eq!(err.code(), "L002");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_from_words_dir_unreadable_dir() {
        let err =
            Language::from_words_dir("definitely/not/a/dir", en_nz()).unwrap_err();
        assert_eq!(err.code(), "L003");
    }
}
