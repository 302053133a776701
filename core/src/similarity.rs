/// Suffix-anchored similarity between two phonetic strings, in `[0, 1]`.
///
/// The score is the length of the longest common suffix divided by the length
/// of the longer string (in characters). Equal strings score 1.0, including
/// two empty strings; strings whose last characters differ score 0.
///
/// ```
/// use rhyme_core::similarity;
///
/// assert_eq!(similarity("deɪ", "deɪ"), 1.0);
/// assert_eq!(similarity("æt", "kæt"), 2.0 / 3.0);
/// assert_eq!(similarity("eɪ", "kæt"), 0.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let longer = a.len().max(b.len());
    if longer == 0 {
        return 1.0;
    }
    let matches = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    matches as f64 / longer as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_are_maximal() {
        assert_eq!(similarity("ʃən", "ʃən"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn empty_against_non_empty_is_zero() {
        assert_eq!(similarity("", "eɪ"), 0.0);
        assert_eq!(similarity("eɪ", ""), 0.0);
    }

    #[test]
    fn differing_final_character_is_zero() {
        assert_eq!(similarity("kæt", "kæp"), 0.0);
    }

    #[test]
    fn partial_suffix_is_scaled_by_longer_length() {
        assert_eq!(similarity("tʃər", "ər"), 0.5);
        assert_eq!(similarity("ər", "tʃər"), 0.5);
        assert_eq!(similarity("lɪŋ", "nɪŋ"), 2.0 / 3.0);
    }

    #[test]
    fn order_does_not_matter() {
        let pairs = [("mənt", "ənt"), ("sjon", "on"), ("ɑ̃", "ɔ̃"), ("iəs", "əs")];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }
}
