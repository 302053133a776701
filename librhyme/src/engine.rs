//! Rhyme engine facade
//!
//! Wraps `rhyme_core::Engine` with loading logic for word lists and
//! translations. All rhyme logic (syllables, scoring, bridging) is in core.

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Result};
use rhyme_core::{Config, Language, Lexicon, Suggestion, TranslationTable, WordAnalysis};

use crate::demo;

/// Public engine for librhyme.
///
/// The inner engine is wrapped in Arc to allow cheap cloning across threads.
#[derive(Clone)]
pub struct Engine {
    inner: Arc<rhyme_core::Engine>,
}

impl Engine {
    /// Construct an Engine from a word list and optional translations.
    pub fn new(config: Config, lexicon: Lexicon, translations: Option<TranslationTable>) -> Self {
        let mut inner = rhyme_core::Engine::new(config, lexicon);
        if let Some(table) = translations {
            inner = inner.with_translator(table);
        }
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Engine over the bundled demo word lists and translations.
    pub fn demo(config: Config) -> Self {
        Self::new(config, demo::lexicon(), Some(demo::translations()))
    }

    /// Load an engine from a data directory.
    ///
    /// Expected layout (data-dir), per language:
    ///  - `<language>.fst`  (word set built by `rhyme_tools build-fst`), or
    ///  - `<language>.txt`  (one word per line)
    ///
    /// plus an optional `translations.json`. A language with neither file
    /// gets an empty word list; a directory with no word lists at all is an
    /// error.
    pub fn from_data_dir<P: AsRef<Path>>(data_dir: P, config: Config) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        let mut lexicon = Lexicon::new();

        for lang in Language::ALL {
            let fst_path = data_dir.join(format!("{}.fst", lang.name()));
            let txt_path = data_dir.join(format!("{}.txt", lang.name()));
            if fst_path.exists() {
                lexicon.load_fst(lang, &fst_path)?;
            } else if txt_path.exists() {
                lexicon.load_text(lang, &txt_path)?;
            } else {
                tracing::warn!(language = %lang, dir = %data_dir.display(), "no word list found");
            }
        }
        if lexicon.is_empty() {
            bail!("no word lists found in {}", data_dir.display());
        }

        let translations_path = data_dir.join("translations.json");
        let translations = if translations_path.exists() {
            match TranslationTable::load_json(&translations_path) {
                Ok(table) => Some(table),
                Err(e) => {
                    tracing::warn!(error = %format!("{e:#}"), "ignoring translations");
                    None
                }
            }
        } else {
            None
        };

        Ok(Self::new(config, lexicon, translations))
    }

    /// Get a cloned Arc to the inner core engine.
    pub fn inner_arc(&self) -> Arc<rhyme_core::Engine> {
        Arc::clone(&self.inner)
    }

    pub fn config(&self) -> &Config {
        self.inner.config()
    }

    pub fn suggest(&self, word: &str, target: Language, native: Language) -> Vec<Suggestion> {
        self.inner.suggest(word, target, native)
    }

    pub fn analyze(&self, word: &str, lang: Language) -> WordAnalysis {
        self.inner.analyze(word, lang)
    }

    /// Rhymes for `word` in a caller-supplied word list instead of the
    /// loaded lexicon, annotated like `suggest`.
    pub fn suggest_in<I, S>(
        &self,
        word: &str,
        words: I,
        target: Language,
        native: Language,
    ) -> Vec<Suggestion>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Lexicon::new();
        lexicon.extend(target, words);
        let engine = rhyme_core::Engine::new(self.config().clone(), lexicon);
        let mut out = engine.suggest(word, target, native);
        for s in out.iter_mut() {
            s.translation = self.inner.translate(&s.candidate.word, target, native);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_engine_finds_rhymes() {
        let engine = Engine::demo(Config::default());
        let out = engine.suggest("day", Language::English, Language::English);
        assert!(out.iter().any(|s| s.candidate.word == "way"));
        assert!(out.iter().all(|s| s.candidate.word != "day"));
    }

    #[test]
    fn missing_data_dir_is_an_error() {
        let dir = std::env::temp_dir().join(format!("librhyme_empty_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        assert!(Engine::from_data_dir(&dir, Config::default()).is_err());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn custom_word_lists_keep_translations() {
        let engine = Engine::demo(Config::default());
        let out = engine.suggest_in("night", ["light", "noche"], Language::English, Language::Spanish);
        let light = out.iter().find(|s| s.candidate.word == "light").unwrap();
        assert_eq!(light.translation.as_deref(), Some("luz"));
    }
}
