//! Word lists and translations bundled into the binary.
//!
//! Used when no data directory is given, and by tests.

use rhyme_core::{Language, Lexicon, TranslationTable};

const ENGLISH_WORDS: &str = include_str!("../data/english.txt");
const SPANISH_WORDS: &str = include_str!("../data/spanish.txt");
const FRENCH_WORDS: &str = include_str!("../data/french.txt");
const TRANSLATIONS: &str = include_str!("../data/translations.json");

/// Raw bundled word list for `lang`.
pub fn word_list(lang: Language) -> &'static str {
    match lang {
        Language::English => ENGLISH_WORDS,
        Language::Spanish => SPANISH_WORDS,
        Language::French => FRENCH_WORDS,
    }
}

pub fn lexicon() -> Lexicon {
    let mut lexicon = Lexicon::new();
    for lang in Language::ALL {
        lexicon.extend_from_text(lang, word_list(lang));
    }
    lexicon
}

/// Bundled translations. A malformed table yields an empty one.
pub fn translations() -> TranslationTable {
    TranslationTable::from_json_str(TRANSLATIONS).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "bundled translations unreadable");
        TranslationTable::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rhyme_core::Translator;

    #[test]
    fn every_language_has_words() {
        let lexicon = lexicon();
        for lang in Language::ALL {
            assert!(lexicon.len(lang) > 50, "{lang}");
        }
    }

    #[test]
    fn bundled_translations_parse() {
        let table = translations();
        assert_eq!(
            table.translate("day", Language::English, Language::Spanish),
            Some("día".to_string())
        );
    }
}
