//! Coarse stress heuristics.
//!
//! Produces one mark per estimated syllable: `S` for the stressed syllable and
//! `w` for unstressed ones. These are rules of thumb, not dictionary stress.

use crate::language::Language;
use crate::syllable::syllable_count;
use crate::utils::normalize;

/// Stress marks for `word`, one per estimated syllable.
pub fn stress_pattern(word: &str, lang: Language) -> String {
    let word = normalize(word);
    let count = syllable_count(&word, lang);
    let stressed = match lang {
        Language::English => english_stress(&word, count),
        Language::Spanish => spanish_stress(&word, count),
        Language::French => count - 1,
    };
    (0..count)
        .map(|i| if i == stressed { 'S' } else { 'w' })
        .collect()
}

/// Index of the stressed syllable.
fn english_stress(word: &str, count: usize) -> usize {
    match count {
        2 if ["ing", "ed", "er", "ly"].iter().any(|s| word.ends_with(s)) => 1,
        3 if word.ends_with("tion") || word.ends_with("sion") => 1,
        _ => 0,
    }
}

/// Llana by default, aguda for words ending in a consonant other than n or s.
fn spanish_stress(word: &str, count: usize) -> usize {
    if count == 1 {
        return 0;
    }
    match word.chars().last() {
        Some(c) if Language::Spanish.is_vowel(c) || c == 'n' || c == 's' => count - 2,
        _ => count - 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_heuristics() {
        assert_eq!(stress_pattern("day", Language::English), "S");
        assert_eq!(stress_pattern("water", Language::English), "wS");
        assert_eq!(stress_pattern("hello", Language::English), "Sw");
        assert_eq!(stress_pattern("vacation", Language::English), "wSw");
        assert_eq!(stress_pattern("wonderful", Language::English), "Sww");
    }

    #[test]
    fn spanish_penultimate_or_final() {
        assert_eq!(stress_pattern("casa", Language::Spanish), "Sw");
        assert_eq!(stress_pattern("verdad", Language::Spanish), "wS");
        assert_eq!(stress_pattern("sol", Language::Spanish), "S");
    }

    #[test]
    fn french_stresses_last_syllable() {
        assert_eq!(stress_pattern("chanson", Language::French), "wS");
    }

    #[test]
    fn one_mark_per_syllable() {
        for lang in Language::ALL {
            for word in ["", "a", "beautiful", "canción", "merveilleux"] {
                assert_eq!(
                    stress_pattern(word, lang).chars().count(),
                    syllable_count(word, lang)
                );
            }
        }
    }
}
