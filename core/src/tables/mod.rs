//! Static per-language data: grapheme rules, final-syllable endings,
//! syllable patterns and cross-language suffix correspondences.
//!
//! Everything here is immutable and shared read-only. Rule order inside the
//! slices is not significant for matching (the transliterator and extractor
//! sort longest-first); it only decides which entry wins when a pattern is
//! listed twice.

use crate::language::Language;
use serde::Serialize;

macro_rules! pat {
    ($phonetic:expr, [$($ex:expr),* $(,)?]) => {
        SyllablePattern { phonetic: $phonetic, examples: &[$($ex),*] }
    };
}

pub mod english;
pub mod french;
pub mod spanish;

/// A known word-final pattern with its phonetic value and example words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyllablePattern {
    pub phonetic: &'static str,
    pub examples: &'static [&'static str],
}

/// Grapheme → phonetic rules for `lang`.
pub fn phonetic_rules(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::English => english::IPA,
        Language::Spanish => spanish::IPA,
        Language::French => french::IPA,
    }
}

/// Word-final rewrite rules applied before tokenization. Only English has any.
pub fn word_final_rules(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::English => english::WORD_FINAL,
        Language::Spanish | Language::French => &[],
    }
}

/// Final-syllable endings used by the extractor.
pub fn endings(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::English => english::ENDINGS,
        Language::Spanish => spanish::ENDINGS,
        Language::French => french::ENDINGS,
    }
}

/// Syllable pattern table for `lang`.
pub fn syllable_patterns(lang: Language) -> &'static phf::Map<&'static str, SyllablePattern> {
    match lang {
        Language::English => &english::SYLLABLES,
        Language::Spanish => &spanish::SYLLABLES,
        Language::French => &french::SYLLABLES,
    }
}

/// Suffix correspondences from `from` to `to`. Empty when both are equal.
pub fn bridge_table(
    from: Language,
    to: Language,
) -> &'static [(&'static str, &'static [&'static str])] {
    match (from, to) {
        (Language::English, Language::Spanish) => english::TO_SPANISH,
        (Language::English, Language::French) => english::TO_FRENCH,
        (Language::Spanish, Language::English) => spanish::TO_ENGLISH,
        (Language::Spanish, Language::French) => spanish::TO_FRENCH,
        (Language::French, Language::English) => french::TO_ENGLISH,
        (Language::French, Language::Spanish) => french::TO_SPANISH,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_rules_endings_and_patterns() {
        for lang in Language::ALL {
            assert!(!phonetic_rules(lang).is_empty(), "{lang}");
            assert!(!endings(lang).is_empty(), "{lang}");
            assert!(!syllable_patterns(lang).is_empty(), "{lang}");
        }
    }

    #[test]
    fn patterns_are_lowercase() {
        for lang in Language::ALL {
            for (grapheme, _) in phonetic_rules(lang) {
                assert_eq!(*grapheme, grapheme.to_lowercase());
            }
            for ending in endings(lang) {
                assert_eq!(*ending, ending.to_lowercase());
            }
        }
    }

    #[test]
    fn bridge_exists_for_every_distinct_pair() {
        for from in Language::ALL {
            for to in Language::ALL {
                assert_eq!(bridge_table(from, to).is_empty(), from == to);
            }
        }
    }

    #[test]
    fn merged_duplicate_patterns_keep_all_examples() {
        let er = spanish::SYLLABLES.get("er").unwrap();
        assert!(er.examples.contains(&"comer"));
        assert!(er.examples.contains(&"mujer"));
        let eux = french::SYLLABLES.get("eux").unwrap();
        assert_eq!(eux.phonetic, "ø");
        assert!(eux.examples.contains(&"yeux"));
    }
}
