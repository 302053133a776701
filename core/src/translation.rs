//! Translation collaborator.
//!
//! The engine only asks "what is `word` (in `from`) in `to`?". Tables are
//! keyed by lowercased source word. When a word has no direct entry it is
//! reduced to a crude base form (`singing` → `sing`, `cantando` → `cantar`)
//! and looked up once more.

use crate::language::Language;
use crate::utils::normalize;
use ahash::AHashMap;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Anything that can translate a single word between two languages.
pub trait Translator {
    fn translate(&self, word: &str, from: Language, to: Language) -> Option<String>;
}

/// In-memory translation table.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    pairs: AHashMap<(Language, Language), AHashMap<String, String>>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one translation. The source word is stored lowercased.
    pub fn insert(&mut self, from: Language, to: Language, word: &str, translation: &str) {
        let key = normalize(word);
        if key.is_empty() {
            return;
        }
        self.pairs
            .entry((from, to))
            .or_default()
            .insert(key, translation.trim().to_string());
    }

    /// Number of entries stored for the `from → to` direction.
    pub fn len(&self, from: Language, to: Language) -> usize {
        self.pairs.get(&(from, to)).map_or(0, |m| m.len())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.values().all(|m| m.is_empty())
    }

    /// Parse `{ "english": { "spanish": { "day": "día" } } }`.
    ///
    /// Language keys go through the strict parser; unknown ones are skipped
    /// with a warning.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, HashMap<String, HashMap<String, String>>> =
            serde_json::from_str(json).context("parse translation table")?;

        let mut table = Self::new();
        for (from_tag, targets) in raw {
            let Ok(from) = from_tag.parse::<Language>() else {
                tracing::warn!(tag = %from_tag, "skipping translations for unsupported language");
                continue;
            };
            for (to_tag, entries) in targets {
                let Ok(to) = to_tag.parse::<Language>() else {
                    tracing::warn!(tag = %to_tag, "skipping translations into unsupported language");
                    continue;
                };
                for (word, translation) in entries {
                    table.insert(from, to, &word, &translation);
                }
            }
        }
        Ok(table)
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read translations {}", path.display()))?;
        let table =
            Self::from_json_str(&json).with_context(|| format!("load {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded translation table");
        Ok(table)
    }

    fn lookup(&self, key: &str, from: Language, to: Language) -> Option<&String> {
        self.pairs.get(&(from, to))?.get(key)
    }
}

impl Translator for TranslationTable {
    fn translate(&self, word: &str, from: Language, to: Language) -> Option<String> {
        let key = normalize(word);
        if key.is_empty() {
            return None;
        }
        if let Some(hit) = self.lookup(&key, from, to) {
            return Some(hit.clone());
        }
        let base = base_word(&key, from);
        if base != key {
            return self.lookup(&base, from, to).cloned();
        }
        None
    }
}

/// Crude morphological base form. The first matching rule wins.
pub fn base_word(word: &str, lang: Language) -> String {
    let word = normalize(word);
    let rules: &[(&str, &str)] = match lang {
        Language::English => &[
            ("ing", ""),
            ("ed", ""),
            ("s", ""),
            ("ly", ""),
            ("er", ""),
            ("est", ""),
        ],
        Language::Spanish => &[
            ("ando", "ar"),
            ("iendo", "er"),
            ("ado", "ar"),
            ("ido", "er"),
            ("mente", ""),
        ],
        Language::French => &[("ant", "er"), ("é", "er"), ("ment", ""), ("tion", "")],
    };
    for (suffix, replacement) in rules {
        if let Some(stem) = word.strip_suffix(suffix) {
            return format!("{stem}{replacement}");
        }
    }
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "english": { "spanish": { "sing": "cantar", "Day": "día" } },
        "spanish": { "english": { "cantar": "to sing" } },
        "klingon": { "english": { "qapla": "success" } }
    }"#;

    #[test]
    fn direct_lookup_ignores_case() {
        let table = TranslationTable::from_json_str(SAMPLE).unwrap();
        assert_eq!(
            table.translate("DAY", Language::English, Language::Spanish),
            Some("día".to_string())
        );
        assert_eq!(table.len(Language::English, Language::Spanish), 2);
    }

    #[test]
    fn falls_back_to_base_word() {
        let table = TranslationTable::from_json_str(SAMPLE).unwrap();
        assert_eq!(
            table.translate("singing", Language::English, Language::Spanish),
            Some("cantar".to_string())
        );
        assert_eq!(
            table.translate("cantando", Language::Spanish, Language::English),
            Some("to sing".to_string())
        );
        assert_eq!(table.translate("night", Language::English, Language::Spanish), None);
    }

    #[test]
    fn unknown_languages_are_skipped() {
        let table = TranslationTable::from_json_str(SAMPLE).unwrap();
        assert!(!table.is_empty());
        assert_eq!(table.len(Language::English, Language::French), 0);
    }

    #[test]
    fn counts_per_direction() {
        let mut table = TranslationTable::new();
        assert!(table.is_empty());
        table.insert(Language::French, Language::English, "nuit", "night");
        table.insert(Language::French, Language::English, "  ", "ignored");
        assert!(!table.is_empty());
        assert_eq!(table.len(Language::French, Language::English), 1);
        assert_eq!(table.len(Language::English, Language::French), 0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(TranslationTable::from_json_str("[1, 2").is_err());
    }

    #[test]
    fn base_forms() {
        assert_eq!(base_word("walked", Language::English), "walk");
        // "s" is checked before "ly"
        assert_eq!(base_word("days", Language::English), "day");
        assert_eq!(base_word("comiendo", Language::Spanish), "comer");
        assert_eq!(base_word("rápidamente", Language::Spanish), "rápida");
        assert_eq!(base_word("chantant", Language::French), "chanter");
        assert_eq!(base_word("aimé", Language::French), "aimer");
        assert_eq!(base_word("sol", Language::Spanish), "sol");
    }
}
