//! The closed set of supported languages.
//!
//! Every table in `tables` is keyed by this enum, so adding a language is a
//! compile error everywhere a table is missing. String tags only appear at the
//! edges (CLI, config files, JSON from collaborators): `FromStr` is strict and
//! `Language::from_tag_or_default` applies the English fallback.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A language the rhyme engine has tables for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Spanish,
    French,
}

/// Error for language tags outside the supported set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    #[error("unsupported language: {0}")]
    Unsupported(String),
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Language; 3] = [Language::English, Language::Spanish, Language::French];

    /// Lowercase name used in config files and JSON payloads.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::French => "french",
        }
    }

    /// Capitalized name, as shown to people (and to the AI generator prompt).
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
        }
    }

    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
        }
    }

    /// Parse a tag leniently, falling back to English for anything unknown.
    ///
    /// This is the single fallback policy for the whole engine: callers at
    /// the string boundary go through here, and the engine itself only ever
    /// sees a valid `Language`.
    pub fn from_tag_or_default(tag: &str) -> Language {
        match tag.parse() {
            Ok(lang) => lang,
            Err(err) => {
                tracing::warn!(%err, "falling back to english");
                Language::English
            }
        }
    }

    /// Vowel letters used by the syllable extractor (onset walk-back).
    ///
    /// Spanish and French include their accented vowels.
    pub fn is_vowel(self, ch: char) -> bool {
        match self {
            Language::English => matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u'),
            Language::Spanish => matches!(
                ch,
                'a' | 'e' | 'i' | 'o' | 'u' | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ü'
            ),
            Language::French => matches!(
                ch,
                'a' | 'e'
                    | 'i'
                    | 'o'
                    | 'u'
                    | 'y'
                    | 'à'
                    | 'â'
                    | 'é'
                    | 'è'
                    | 'ê'
                    | 'ë'
                    | 'ï'
                    | 'î'
                    | 'ô'
                    | 'ö'
                    | 'ù'
                    | 'û'
                    | 'ü'
            ),
        }
    }

    /// Vowel letters counted by the syllable estimator.
    ///
    /// English treats `y` as a vowel here (but not in the extractor).
    pub fn is_nucleus(self, ch: char) -> bool {
        match self {
            Language::English => matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'),
            Language::Spanish | Language::French => self.is_vowel(ch),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    /// Accepts the lowercase name, the display name or the ISO code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "spanish" | "es" | "español" | "espanol" => Ok(Language::Spanish),
            "french" | "fr" | "français" | "francais" => Ok(Language::French),
            other => Err(LanguageError::Unsupported(other.to_string())),
        }
    }
}
