// core/src/engine.rs
//
// Suggestion pipeline shared by every front end: same-language search,
// cross-language fill, translation and quality labelling.

use crate::bridge::find_cross_language_rhymes;
use crate::candidate::{Quality, RhymeCandidate};
use crate::language::Language;
use crate::lexicon::Lexicon;
use crate::meter::stress_pattern;
use crate::rhyme::find_rhymes;
use crate::syllable::{last_syllable, syllable_count, syllable_phonetic};
use crate::translation::Translator;
use crate::transliterate::transliterate;
use crate::utils::normalize;
use crate::Config;
use ahash::AHashSet;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A rhyme candidate enriched for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(flatten)]
    pub candidate: RhymeCandidate,
    /// Translation into the user's native language, when known.
    pub translation: Option<String>,
    pub quality: Quality,
}

/// Phonetic breakdown of a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAnalysis {
    pub word: String,
    pub language: Language,
    pub phonetic: String,
    pub last_syllable: String,
    pub syllable_phonetic: String,
    pub syllable_count: usize,
    pub stress: String,
}

/// Rhyme engine over a word list and an optional translator.
///
/// Every call recomputes from scratch; nothing is cached between queries.
pub struct Engine {
    config: Config,
    lexicon: Lexicon,
    translator: Option<Box<dyn Translator + Send + Sync>>,
}

impl Engine {
    pub fn new(config: Config, lexicon: Lexicon) -> Self {
        Self {
            config,
            lexicon,
            translator: None,
        }
    }

    /// Attach a translation collaborator.
    pub fn with_translator<T>(mut self, translator: T) -> Self
    where
        T: Translator + Send + Sync + 'static,
    {
        self.translator = Some(Box::new(translator));
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Rhymes for `word` in `target`, annotated for a speaker of `native`.
    ///
    /// Pipeline:
    /// 1. same-language search at `config.min_similarity`
    /// 2. if it found fewer than `cross_language_fill_threshold` words and the
    ///    languages differ, append bridged matches from `native` (at most
    ///    `max_cross_language_results`)
    /// 3. drop repeated words (first occurrence wins)
    /// 4. truncate to `max_results`
    pub fn suggest(&self, word: &str, target: Language, native: Language) -> Vec<Suggestion> {
        let cfg = &self.config;
        let words = self.lexicon.words(target);

        let mut candidates = find_rhymes(word, words, target, cfg.min_similarity);
        let same_language = candidates.len();

        if same_language < cfg.cross_language_fill_threshold && target != native {
            let mut bridged = find_cross_language_rhymes(word, native, words, target);
            bridged.truncate(cfg.max_cross_language_results);
            for candidate in bridged.iter_mut() {
                candidate.similarity = cfg.cross_language_confidence;
            }
            candidates.extend(bridged);
        }

        let mut seen = AHashSet::new();
        let mut out: Vec<Suggestion> = candidates
            .into_iter()
            .filter(|c| seen.insert(c.word.clone()))
            .map(|candidate| self.decorate(candidate, target, native))
            .collect();
        out.truncate(cfg.max_results);

        tracing::debug!(
            word = %word,
            target = %target,
            native = %native,
            same_language,
            returned = out.len(),
            "suggest"
        );
        out
    }

    /// `suggest` against every supported language.
    pub fn suggest_all_languages(
        &self,
        word: &str,
        native: Language,
    ) -> BTreeMap<Language, Vec<Suggestion>> {
        Language::ALL
            .iter()
            .map(|&target| (target, self.suggest(word, target, native)))
            .collect()
    }

    /// `suggest` for several words; keys are the words as given.
    pub fn batch<I, S>(
        &self,
        words: I,
        target: Language,
        native: Language,
    ) -> BTreeMap<String, Vec<Suggestion>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|w| {
                let w = w.as_ref();
                (w.to_string(), self.suggest(w, target, native))
            })
            .collect()
    }

    pub fn analyze(&self, word: &str, lang: Language) -> WordAnalysis {
        analyze(word, lang)
    }

    /// Translation of `word` from `from` to `to`, if a translator knows it.
    pub fn translate(&self, word: &str, from: Language, to: Language) -> Option<String> {
        if from == to {
            return None;
        }
        self.translator.as_ref()?.translate(word, from, to)
    }

    fn decorate(&self, candidate: RhymeCandidate, target: Language, native: Language) -> Suggestion {
        let translation = self.translate(&candidate.word, target, native);
        let quality = Quality::for_candidate(&candidate);
        Suggestion {
            candidate,
            translation,
            quality,
        }
    }
}

/// Phonetic breakdown of `word` without needing an engine.
pub fn analyze(word: &str, lang: Language) -> WordAnalysis {
    let normalized = normalize(word);
    let syllable = last_syllable(&normalized, lang);
    WordAnalysis {
        phonetic: transliterate(&normalized, lang),
        syllable_phonetic: syllable_phonetic(&syllable, lang),
        last_syllable: syllable,
        syllable_count: syllable_count(&normalized, lang),
        stress: stress_pattern(&normalized, lang),
        language: lang,
        word: normalized,
    }
}

/// Write any serializable result set as pretty JSON.
pub fn export_json<T, P>(results: &T, path: P) -> Result<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(results).context("serialize results")?;
    std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "exported results");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::TranslationTable;

    fn engine() -> Engine {
        let mut lexicon = Lexicon::new();
        lexicon.extend(Language::English, ["day", "way", "play", "say", "cat"]);
        lexicon.extend(
            Language::Spanish,
            ["canción", "nación", "pasión", "perro", "corazón"],
        );
        let translations = TranslationTable::from_json_str(
            r#"{ "spanish": { "english": { "canción": "song", "perro": "dog" } } }"#,
        )
        .unwrap();
        Engine::new(Config::default(), lexicon).with_translator(translations)
    }

    #[test]
    fn same_language_suggestions_have_quality() {
        let out = engine().suggest("day", Language::English, Language::English);
        let words: Vec<&str> = out.iter().map(|s| s.candidate.word.as_str()).collect();
        assert_eq!(words, vec!["way", "play", "say"]);
        assert!(out.iter().all(|s| s.quality == Quality::Excellent));
        assert!(out.iter().all(|s| s.translation.is_none()));
    }

    #[test]
    fn cross_language_fill_is_deduplicated() {
        let out = engine().suggest("nation", Language::Spanish, Language::English);
        let words: Vec<&str> = out.iter().map(|s| s.candidate.word.as_str()).collect();
        let unique: AHashSet<&str> = words.iter().copied().collect();
        assert_eq!(unique.len(), words.len());
        assert!(words.contains(&"canción"));

        let song = out.iter().find(|s| s.candidate.word == "canción").unwrap();
        assert_eq!(song.translation.as_deref(), Some("song"));
    }

    #[test]
    fn no_cross_language_fill_for_the_same_language() {
        let mut cfg = Config::default();
        cfg.min_similarity = 0.99;
        let mut lexicon = Lexicon::new();
        lexicon.extend(Language::English, ["station"]);
        let engine = Engine::new(cfg, lexicon);
        let out = engine.suggest("lately", Language::English, Language::English);
        assert!(out.is_empty());
    }

    #[test]
    fn cross_language_fill_never_returns_the_input() {
        let mut lexicon = Lexicon::new();
        lexicon.extend(Language::English, ["nation", "station"]);
        let engine = Engine::new(Config::default(), lexicon);
        for word in ["nation", "Nation"] {
            let out = engine.suggest(word, Language::English, Language::French);
            let words: Vec<&str> = out.iter().map(|s| s.candidate.word.as_str()).collect();
            assert!(!words.contains(&"nation"), "{word}: {words:?}");
            assert!(words.contains(&"station"));
        }
    }

    #[test]
    fn results_are_capped() {
        let mut cfg = Config::default();
        cfg.max_results = 2;
        let mut lexicon = Lexicon::new();
        lexicon.extend(Language::English, ["way", "say", "play", "stay"]);
        let out = Engine::new(cfg, lexicon).suggest("day", Language::English, Language::Spanish);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn analysis_of_an_english_word() {
        let a = analyze("Nation", Language::English);
        assert_eq!(a.word, "nation");
        assert_eq!(a.last_syllable, "tion");
        assert_eq!(a.syllable_count, 2);
        assert_eq!(a.stress.chars().count(), a.syllable_count);
    }

    #[test]
    fn export_writes_json() {
        let out = engine().suggest_all_languages("day", Language::English);
        let path = std::env::temp_dir().join(format!("rhyme_export_{}.json", std::process::id()));
        export_json(&out, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"english\""));
        assert!(text.contains("\"rhyme_type\""));
        let _ = std::fs::remove_file(path);
    }
}
