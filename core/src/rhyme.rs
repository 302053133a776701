//! Same-language rhyme search.

use crate::candidate::{RhymeCandidate, RhymeType};
use crate::language::Language;
use crate::similarity::similarity;
use crate::syllable::{last_syllable, syllable_count, syllable_phonetic};
use crate::utils::normalize;

/// Score every candidate word against `input` and return those at or above
/// `min_similarity`, best first.
///
/// Candidates equal to the input (ignoring case) are skipped. The sort is
/// stable, so equally scored candidates keep their word-list order. Nothing is
/// cached between calls.
pub fn find_rhymes<I, S>(
    input: &str,
    candidates: I,
    lang: Language,
    min_similarity: f64,
) -> Vec<RhymeCandidate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let input = normalize(input);
    if input.is_empty() {
        return Vec::new();
    }

    let input_phonetic = syllable_phonetic(&last_syllable(&input, lang), lang);

    let mut results: Vec<RhymeCandidate> = candidates
        .into_iter()
        .filter_map(|word| {
            let word = word.as_ref().trim();
            if word.is_empty() || normalize(word) == input {
                return None;
            }
            let syllable = last_syllable(word, lang);
            let phonetic = syllable_phonetic(&syllable, lang);
            let score = similarity(&input_phonetic, &phonetic);
            if score < min_similarity {
                return None;
            }
            Some(RhymeCandidate {
                word: word.to_string(),
                last_syllable: syllable,
                phonetic_suffix: phonetic,
                syllable_count: syllable_count(word, lang),
                similarity: score,
                rhyme_type: RhymeType::from_similarity(score),
            })
        })
        .collect();

    results.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    tracing::debug!(
        input = %input,
        language = %lang,
        admitted = results.len(),
        "same-language rhyme search"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_rhymes_with_way_and_play() {
        let results = find_rhymes("day", ["way", "play", "cat"], Language::English, 0.5);
        let words: Vec<&str> = results.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["way", "play"]);
        assert_eq!(results[0].rhyme_type, RhymeType::Perfect);
        assert_eq!(results[0].phonetic_suffix, "eɪ");
    }

    #[test]
    fn input_word_is_never_its_own_rhyme() {
        let results = find_rhymes("Day", ["day", "DAY", "say"], Language::English, 0.0);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].word, "say");
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(find_rhymes("", ["way"], Language::English, 0.0).is_empty());
        assert!(find_rhymes("   ", ["way"], Language::Spanish, 0.0).is_empty());
    }

    #[test]
    fn threshold_filters_and_low_floor_admits_assonant() {
        let words = ["nation", "station", "ocean"];
        let strict = find_rhymes("creation", words, Language::English, 0.95);
        assert_eq!(strict.len(), 2);

        let loose = find_rhymes("cantar", ["amar", "mar", "comer"], Language::Spanish, 0.0);
        assert_eq!(loose[0].rhyme_type, RhymeType::Perfect);
        assert!(loose.iter().any(|r| r.word == "comer" && r.similarity < 0.75));
    }

    #[test]
    fn ties_keep_list_order() {
        let results = find_rhymes("day", ["way", "say", "play"], Language::English, 0.9);
        let words: Vec<&str> = results.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["way", "say", "play"]);
    }
}
