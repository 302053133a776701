//! Final-syllable extraction, syllable phonetics and syllable counting.

use crate::language::Language;
use crate::tables::{self, SyllablePattern};
use crate::transliterate::transliterate;
use crate::utils::normalize;
use once_cell::sync::Lazy;
use std::cmp::Reverse;

/// Sorts a pattern list longest first, keeping table order among equals.
fn longest_first(mut items: Vec<&'static str>) -> Vec<&'static str> {
    items.sort_by_key(|s| Reverse(s.chars().count()));
    items
}

static ENDINGS: Lazy<[Vec<&'static str>; 3]> = Lazy::new(|| {
    Language::ALL.map(|lang| longest_first(tables::endings(lang).to_vec()))
});

static PATTERN_KEYS: Lazy<[Vec<&'static str>; 3]> = Lazy::new(|| {
    Language::ALL.map(|lang| {
        let mut keys: Vec<&'static str> = tables::syllable_patterns(lang).keys().copied().collect();
        // phf iteration order is arbitrary; sort for deterministic ties
        keys.sort_unstable();
        longest_first(keys)
    })
});

fn slot(lang: Language) -> usize {
    match lang {
        Language::English => 0,
        Language::Spanish => 1,
        Language::French => 2,
    }
}

/// The final orthographic syllable of `word`.
///
/// Words of three characters or fewer are returned whole. Otherwise the
/// longest known ending the word ends with is extended backwards over its
/// onset consonants; with no known ending, the last three characters are
/// returned.
pub fn last_syllable(word: &str, lang: Language) -> String {
    let word = normalize(word);
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 3 {
        return word;
    }

    for ending in &ENDINGS[slot(lang)] {
        if word.ends_with(ending) {
            let mut start = chars.len() - ending.chars().count();
            while start > 0 && !lang.is_vowel(chars[start - 1]) {
                start -= 1;
            }
            return chars[start..].iter().collect();
        }
    }

    chars[chars.len() - 3..].iter().collect()
}

/// Find the syllable pattern for `syllable`: an exact entry first, then the
/// longest pattern the syllable ends with.
pub fn lookup_pattern(syllable: &str, lang: Language) -> Option<(&'static str, &'static SyllablePattern)> {
    let syllable = normalize(syllable);
    let patterns = tables::syllable_patterns(lang);
    if let Some((key, pattern)) = patterns.get_entry(syllable.as_str()) {
        return Some((*key, pattern));
    }
    PATTERN_KEYS[slot(lang)]
        .iter()
        .find(|key| syllable.ends_with(*key))
        .and_then(|key| patterns.get_entry(*key))
        .map(|(key, pattern)| (*key, pattern))
}

/// Phonetic value of a syllable, falling back to transliteration when no
/// pattern covers it.
pub fn syllable_phonetic(syllable: &str, lang: Language) -> String {
    match lookup_pattern(syllable, lang) {
        Some((_, pattern)) => pattern.phonetic.to_string(),
        None => transliterate(syllable, lang),
    }
}

/// Example words for the pattern covering `syllable`; empty when none does.
pub fn examples_for_syllable(syllable: &str, lang: Language) -> &'static [&'static str] {
    lookup_pattern(syllable, lang)
        .map(|(_, pattern)| pattern.examples)
        .unwrap_or(&[])
}

/// Lengths of maximal runs of characters satisfying `pred`.
fn runs(chars: &[char], pred: impl Fn(char) -> bool) -> Vec<usize> {
    let mut out = Vec::new();
    let mut current = 0;
    for &ch in chars {
        if pred(ch) {
            current += 1;
        } else if current > 0 {
            out.push(current);
            current = 0;
        }
    }
    if current > 0 {
        out.push(current);
    }
    out
}

fn is_plain_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Non-overlapping adjacent pairs of unaccented vowels, scanned left to right.
fn adjacent_pairs(chars: &[char]) -> usize {
    let mut pairs = 0;
    let mut i = 0;
    while i + 1 < chars.len() {
        if is_plain_vowel(chars[i]) && is_plain_vowel(chars[i + 1]) {
            pairs += 1;
            i += 2;
        } else {
            i += 1;
        }
    }
    pairs
}

/// Estimated number of syllables in `word`. Always at least 1.
pub fn syllable_count(word: &str, lang: Language) -> usize {
    let word = normalize(word);
    let chars: Vec<char> = word.chars().collect();
    let ends_in_e = word.ends_with('e');

    let count: isize = match lang {
        Language::English => {
            let groups = runs(&chars, |c| lang.is_nucleus(c));
            let mut count = groups.len() as isize;
            if ends_in_e && count > 1 {
                count -= 1;
            }
            let clusters = groups.iter().filter(|&&len| len >= 2).count() as isize;
            if clusters > 0 {
                count -= clusters - 1;
            }
            count
        }
        Language::Spanish => {
            let vowels = chars.iter().filter(|&&c| lang.is_vowel(c)).count() as isize;
            vowels - adjacent_pairs(&chars) as isize
        }
        Language::French => {
            let mut count = chars.iter().filter(|&&c| lang.is_vowel(c)).count() as isize;
            if ends_in_e && count > 1 {
                count -= 1;
            }
            let clusters = runs(&chars, |c| is_plain_vowel(c) || c == 'y')
                .into_iter()
                .filter(|&len| len >= 2)
                .count() as isize;
            count - clusters
        }
    };

    count.max(1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_are_returned_whole() {
        assert_eq!(last_syllable("day", Language::English), "day");
        assert_eq!(last_syllable("sí", Language::Spanish), "sí");
        assert_eq!(last_syllable("", Language::French), "");
    }

    #[test]
    fn endings_absorb_onset_consonants() {
        assert_eq!(last_syllable("play", Language::English), "play");
        assert_eq!(last_syllable("nation", Language::English), "tion");
        assert_eq!(last_syllable("singing", Language::English), "nging");
        assert_eq!(last_syllable("corazón", Language::Spanish), "zón");
        assert_eq!(last_syllable("chanson", Language::French), "nson");
    }

    #[test]
    fn longest_ending_beats_shorter_one() {
        // "ous" is listed before "ious" but the longer ending must win
        assert_eq!(last_syllable("curious", Language::English), "rious");
    }

    #[test]
    fn no_ending_falls_back_to_last_three_chars() {
        assert_eq!(last_syllable("rhythm", Language::English), "thm");
    }

    #[test]
    fn syllable_phonetic_uses_patterns_then_transliteration() {
        assert_eq!(syllable_phonetic("day", Language::English), "eɪ");
        assert_eq!(syllable_phonetic("tion", Language::English), "ʃən");
        assert_eq!(syllable_phonetic("nation", Language::English), "ʃən");
        assert_eq!(syllable_phonetic("cat", Language::English), "kæt");
        assert_eq!(syllable_phonetic("ción", Language::Spanish), "sjon");
        assert_eq!(syllable_phonetic("beau", Language::French), "o");
    }

    #[test]
    fn examples_follow_the_same_lookup() {
        assert!(examples_for_syllable("way", Language::English).contains(&"play"));
        assert!(examples_for_syllable("zón", Language::Spanish).contains(&"corazón"));
        assert!(examples_for_syllable("xyz", Language::English).is_empty());
    }

    #[test]
    fn english_counts() {
        assert_eq!(syllable_count("day", Language::English), 1);
        assert_eq!(syllable_count("table", Language::English), 1);
        assert_eq!(syllable_count("beautiful", Language::English), 3);
        assert_eq!(syllable_count("happiness", Language::English), 3);
    }

    #[test]
    fn spanish_counts() {
        assert_eq!(syllable_count("casa", Language::Spanish), 2);
        assert_eq!(syllable_count("cielo", Language::Spanish), 2);
        assert_eq!(syllable_count("cantando", Language::Spanish), 3);
    }

    #[test]
    fn french_counts() {
        assert_eq!(syllable_count("chanson", Language::French), 2);
        assert_eq!(syllable_count("belle", Language::French), 1);
        assert_eq!(syllable_count("beau", Language::French), 2);
    }

    #[test]
    fn count_is_never_zero() {
        for lang in Language::ALL {
            assert_eq!(syllable_count("", lang), 1);
            assert_eq!(syllable_count("   ", lang), 1);
            assert_eq!(syllable_count("brr", lang), 1);
        }
    }
}
