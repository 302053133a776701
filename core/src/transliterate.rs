//! Grapheme-to-phoneme transliteration.
//!
//! Each language's rule table is compiled once into a [`RuleSet`]: the rules
//! sorted by grapheme length (longest first) plus a prefix trie over them.
//! Transliteration is a single left-to-right scan that takes the longest
//! matching grapheme at every position, so emitted phonetic tokens are never
//! re-read by shorter rules.

use crate::language::Language;
use crate::tables;
use crate::trie::TrieNode;
use crate::utils::normalize;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::cmp::Reverse;

/// One grapheme → phonetic token rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneticRule {
    pub grapheme: &'static str,
    pub phoneme: &'static str,
}

/// Compiled rules for one language.
#[derive(Debug)]
pub struct RuleSet {
    language: Language,
    rules: Vec<PhoneticRule>,
    word_final: Vec<PhoneticRule>,
    trie: TrieNode,
}

impl RuleSet {
    fn build(language: Language) -> Self {
        let rules = sorted_rules(tables::phonetic_rules(language));
        let word_final = sorted_rules(tables::word_final_rules(language));

        let mut trie = TrieNode::new();
        for rule in &rules {
            trie.insert(rule.grapheme, rule.phoneme);
        }

        tracing::debug!(
            language = %language,
            rules = rules.len(),
            word_final = word_final.len(),
            "compiled phonetic rules"
        );

        Self {
            language,
            rules,
            word_final,
            trie,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Rules in application priority (strictly non-increasing grapheme length).
    pub fn rules(&self) -> &[PhoneticRule] {
        &self.rules
    }

    /// Word-final rewrite rules, longest first.
    pub fn word_final(&self) -> &[PhoneticRule] {
        &self.word_final
    }

    /// Transliterate an already-normalized lowercase word.
    pub fn apply(&self, word: &str) -> String {
        let (head, tail) = match self
            .word_final
            .iter()
            .find(|rule| word.ends_with(rule.grapheme))
        {
            Some(rule) => (&word[..word.len() - rule.grapheme.len()], rule.phoneme),
            None => (word, ""),
        };

        let chars: Vec<char> = head.chars().collect();
        let mut out = String::with_capacity(word.len() * 2);
        let mut pos = 0;
        while pos < chars.len() {
            match self.trie.longest_match(&chars, pos) {
                Some((end, token)) => {
                    out.push_str(token);
                    pos = end;
                }
                None => {
                    out.push(chars[pos]);
                    pos += 1;
                }
            }
        }
        out.push_str(tail);
        out
    }
}

/// Stable sort by grapheme length, longest first. Duplicate graphemes keep
/// their first occurrence.
fn sorted_rules(table: &'static [(&'static str, &'static str)]) -> Vec<PhoneticRule> {
    let mut seen = ahash::AHashSet::new();
    let mut rules: Vec<PhoneticRule> = table
        .iter()
        .filter(|(grapheme, _)| seen.insert(*grapheme))
        .map(|&(grapheme, phoneme)| PhoneticRule { grapheme, phoneme })
        .collect();
    rules.sort_by_key(|rule| Reverse(rule.grapheme.chars().count()));
    rules
}

static ENGLISH: Lazy<RuleSet> = Lazy::new(|| RuleSet::build(Language::English));
static SPANISH: Lazy<RuleSet> = Lazy::new(|| RuleSet::build(Language::Spanish));
static FRENCH: Lazy<RuleSet> = Lazy::new(|| RuleSet::build(Language::French));

/// The shared compiled rule set for `lang`.
pub fn rule_set(lang: Language) -> &'static RuleSet {
    match lang {
        Language::English => &ENGLISH,
        Language::Spanish => &SPANISH,
        Language::French => &FRENCH,
    }
}

/// Approximate the pronunciation of `word` as an IPA-like token string.
///
/// The word is NFC-normalized, trimmed and lowercased first. Characters no
/// rule covers are copied through unchanged.
pub fn transliterate(word: &str, lang: Language) -> String {
    let word = normalize(word);
    rule_set(lang).apply(&word)
}
