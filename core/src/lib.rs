//! rhyme-core
//!
//! Phonetic rhyme engine shared by the `librhyme` facade and tools.
//!
//! Words in English, Spanish or French are approximated as phonetic strings
//! with table-driven grapheme rules, reduced to their final syllable and
//! compared by suffix overlap. Cross-language matches go through a small set
//! of hand-authored suffix correspondences instead of phonetics.
//!
//! Public API:
//! - `Language` - the closed set of supported languages
//! - `transliterate` - grapheme to phonetic approximation
//! - `last_syllable` / `syllable_count` / `syllable_phonetic` - syllable helpers
//! - `similarity` - suffix-anchored score in `[0, 1]`
//! - `find_rhymes` / `find_cross_language_rhymes` - rhyme search
//! - `Engine` - suggestion pipeline over a `Lexicon` and a `Translator`
//! - `Config` - thresholds and limits
use serde::{Deserialize, Serialize};

pub mod language;
pub use language::{Language, LanguageError};

pub mod trie;
pub use trie::TrieNode;

pub mod tables;
pub use tables::SyllablePattern;

pub mod transliterate;
pub use transliterate::{rule_set, transliterate, PhoneticRule, RuleSet};

pub mod syllable;
pub use syllable::{
    examples_for_syllable, last_syllable, lookup_pattern, syllable_count, syllable_phonetic,
};

pub mod meter;
pub use meter::stress_pattern;

pub mod similarity;
pub use similarity::similarity;

pub mod candidate;
pub use candidate::{Quality, RhymeCandidate, RhymeType};

pub mod rhyme;
pub use rhyme::find_rhymes;

pub mod bridge;
pub use bridge::{bridge_patterns, find_cross_language_rhymes, CROSS_LANGUAGE_CONFIDENCE};

pub mod lexicon;
pub use lexicon::Lexicon;

pub mod translation;
pub use translation::{TranslationTable, Translator};

pub mod engine;
pub use engine::{analyze, export_json, Engine, Suggestion, WordAnalysis};

/// Engine thresholds and limits.
///
/// Missing TOML keys take their defaults, so a config file only needs the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Minimum similarity for same-language rhymes.
    pub min_similarity: f64,
    /// Maximum number of suggestions returned per query.
    pub max_results: usize,

    // Cross-language fill
    /// Same-language result count below which bridged matches are appended.
    pub cross_language_fill_threshold: usize,
    pub max_cross_language_results: usize,
    /// Score given to bridged matches.
    pub cross_language_confidence: f64,

    /// Language assumed when none is given.
    pub default_language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_similarity: 0.6,
            max_results: 30,
            cross_language_fill_threshold: 10,
            max_cross_language_results: 10,
            cross_language_confidence: CROSS_LANGUAGE_CONFIDENCE,
            default_language: Language::English,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Set the same-language threshold, clamped to `[0, 1]`.
    pub fn set_min_similarity(&mut self, value: f64) {
        self.min_similarity = value.clamp(0.0, 1.0);
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC), trim whitespace and lowercase.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_lowercase()
    }
}
