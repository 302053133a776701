//! librhyme crate root
//!
//! This crate provides the multilingual rhyme finder built on `rhyme-core`:
//! layered configuration, a data-directory loader, bundled demo word lists
//! and the AI rhyme generator adapter.
//!
//! Public API exported here:
//! - `Engine` from `engine`
//! - `RhymeConfig` and `GeneratorConfig` from `config`
//! - `RhymeGenerator` and `GeneratorError` from `generator`

pub mod config;
pub mod demo;
pub mod engine;
pub mod generator;

// Re-export the core types callers need alongside the engine.
pub use rhyme_core::{
    analyze, export_json, Config, Language, Lexicon, Quality, RhymeCandidate, RhymeType,
    Suggestion, TranslationTable, Translator, WordAnalysis,
};

// Convenience re-exports for common types used by callers.
pub use config::{GeneratorConfig, RhymeConfig};
pub use engine::Engine;
pub use generator::{GeneratedRhyme, GeneratorError, LanguageRhymes, RhymeGenerator};

/// Parse a comma-separated language list (`en,es,fr`), falling back to
/// English for unknown tags and dropping repeats.
pub fn parse_language_list(list: &str) -> Vec<Language> {
    let mut out = Vec::new();
    for tag in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let lang = Language::from_tag_or_default(tag);
        if !out.contains(&lang) {
            out.push(lang);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_lists() {
        assert_eq!(
            parse_language_list("en, es,fr"),
            vec![Language::English, Language::Spanish, Language::French]
        );
        assert_eq!(parse_language_list("es,,spanish"), vec![Language::Spanish]);
        assert_eq!(parse_language_list("xx"), vec![Language::English]);
        assert!(parse_language_list("").is_empty());
    }
}
