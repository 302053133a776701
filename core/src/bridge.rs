//! Cross-language suffix bridging.
//!
//! Direct phonetic comparison across languages is not meaningful with these
//! tables, so bridged matches use hand-authored morphological correspondences
//! (English `-tion` ↔ Spanish `-ción`, English `-ly` ↔ French `-ment`, ...).

use crate::candidate::{RhymeCandidate, RhymeType};
use crate::language::Language;
use crate::syllable::{last_syllable, syllable_count, syllable_phonetic};
use crate::tables;
use crate::utils::normalize;
use std::collections::BTreeSet;

/// Fixed score given to every bridged match.
pub const CROSS_LANGUAGE_CONFIDENCE: f64 = 0.8;

/// Target-language suffixes corresponding to `suffix`.
///
/// Returns the union over every source ending that `suffix` ends with, not
/// just the first one. Empty when `from == to`.
pub fn bridge_patterns(suffix: &str, from: Language, to: Language) -> BTreeSet<&'static str> {
    let suffix = normalize(suffix);
    if suffix.is_empty() {
        return BTreeSet::new();
    }
    tables::bridge_table(from, to)
        .iter()
        .filter(|(source, _)| suffix.ends_with(source))
        .flat_map(|(_, targets)| targets.iter().copied())
        .collect()
}

/// Bridge the last syllable of `input` (in `from`) to `to`, and admit every
/// target candidate whose last syllable contains a bridged suffix or whose
/// word ends with one.
///
/// Each candidate entry is admitted at most once, in list order, scored
/// [`CROSS_LANGUAGE_CONFIDENCE`] and typed [`RhymeType::CrossLanguage`].
/// The input word itself is never admitted.
pub fn find_cross_language_rhymes<I, S>(
    input: &str,
    from: Language,
    candidates: I,
    to: Language,
) -> Vec<RhymeCandidate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let input_word = normalize(input);
    let syllable = last_syllable(&input_word, from);
    let patterns = bridge_patterns(&syllable, from, to);
    if patterns.is_empty() {
        return Vec::new();
    }

    let results: Vec<RhymeCandidate> = candidates
        .into_iter()
        .filter_map(|word| {
            let word = word.as_ref().trim();
            let lowered = normalize(word);
            if lowered.is_empty() || lowered == input_word {
                return None;
            }
            let target_syllable = last_syllable(&lowered, to);
            let hit = patterns
                .iter()
                .any(|p| target_syllable.contains(p) || lowered.ends_with(p));
            hit.then(|| RhymeCandidate {
                word: word.to_string(),
                phonetic_suffix: syllable_phonetic(&target_syllable, to),
                last_syllable: target_syllable,
                syllable_count: syllable_count(word, to),
                similarity: CROSS_LANGUAGE_CONFIDENCE,
                rhyme_type: RhymeType::CrossLanguage,
            })
        })
        .collect();

    tracing::debug!(
        input = %input,
        from = %from,
        to = %to,
        patterns = patterns.len(),
        admitted = results.len(),
        "cross-language rhyme search"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tion_bridges_to_cion() {
        let patterns = bridge_patterns("tion", Language::English, Language::Spanish);
        assert!(patterns.contains("ción"));
        assert!(patterns.contains("sión"));
        // "on" also matches, and the union keeps it
        assert!(patterns.contains("ón"));
    }

    #[test]
    fn union_over_all_matching_sources() {
        let patterns = bridge_patterns("mente", Language::Spanish, Language::English);
        // "mente" and "e" both match
        assert!(patterns.contains("ly"));
        assert!(patterns.contains("ee"));
    }

    #[test]
    fn same_language_and_empty_input_bridge_to_nothing() {
        assert!(bridge_patterns("tion", Language::French, Language::French).is_empty());
        assert!(bridge_patterns("", Language::English, Language::French).is_empty());
        assert!(bridge_patterns("xyz", Language::English, Language::Spanish).is_empty());
    }

    #[test]
    fn cross_language_candidates_use_fixed_confidence() {
        let spanish = ["canción", "nación", "perro", "canción"];
        let results =
            find_cross_language_rhymes("nation", Language::English, spanish, Language::Spanish);
        let words: Vec<&str> = results.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["canción", "nación", "canción"]);
        for r in &results {
            assert_eq!(r.similarity, CROSS_LANGUAGE_CONFIDENCE);
            assert_eq!(r.rhyme_type, RhymeType::CrossLanguage);
        }
    }

    #[test]
    fn input_word_is_not_its_own_bridged_rhyme() {
        let english = ["Nation", "station"];
        let results =
            find_cross_language_rhymes(" nation ", Language::French, english, Language::English);
        let words: Vec<&str> = results.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["station"]);
    }

    #[test]
    fn french_adverbs_bridge_to_english_ly() {
        let english = ["quickly", "slowly", "table"];
        let results =
            find_cross_language_rhymes("lentement", Language::French, english, Language::English);
        let words: Vec<&str> = results.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["quickly", "slowly"]);
    }
}
