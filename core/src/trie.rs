//! Prefix trie over grapheme patterns, used for longest-match tokenization.
use ahash::AHashMap;

/// A prefix tree mapping grapheme patterns to their phonetic token.
///
/// The transliterator walks it from every position of a word and keeps the
/// longest pattern that ends on a terminal node.
///
/// # Example
/// ```
/// use rhyme_core::trie::TrieNode;
///
/// let mut trie = TrieNode::new();
/// trie.insert("t", "t");
/// trie.insert("tion", "ʃən");
///
/// assert!(trie.contains_pattern("tion"));
/// assert!(!trie.contains_pattern("ti"));
///
/// let input: Vec<char> = "nation".chars().collect();
/// assert_eq!(trie.longest_match(&input, 2), Some((6, "ʃən")));
/// ```
#[derive(Debug, Default)]
pub struct TrieNode {
    children: AHashMap<char, Box<TrieNode>>,
    /// Phonetic token when a pattern ends here. May be empty (silent letter).
    token: Option<String>,
}

impl TrieNode {
    /// Create a new empty trie root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a grapheme pattern with its phonetic token.
    ///
    /// Inserting the same pattern twice keeps the first token.
    pub fn insert(&mut self, pattern: &str, token: &str) {
        let mut node = self;
        for ch in pattern.chars() {
            node = node
                .children
                .entry(ch)
                .or_insert_with(|| Box::new(TrieNode::new()));
        }
        if node.token.is_none() {
            node.token = Some(token.to_string());
        }
    }

    /// Check whether exactly `pattern` was inserted (not just a prefix of one).
    pub fn contains_pattern(&self, pattern: &str) -> bool {
        let mut node = self;
        for ch in pattern.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.token.is_some()
    }

    /// Walk the trie from `start` and return all matched patterns as
    /// `(end_index, token)` pairs, in order of increasing length.
    pub fn walk_prefixes<'a>(&'a self, input: &[char], start: usize) -> Vec<(usize, &'a str)> {
        let mut res = Vec::new();
        let mut node = self;
        let mut idx = start;
        while idx < input.len() {
            match node.children.get(&input[idx]) {
                Some(child) => {
                    node = child;
                    idx += 1;
                    if let Some(token) = &node.token {
                        res.push((idx, token.as_str()));
                    }
                }
                None => break,
            }
        }
        res
    }

    /// The longest pattern starting at `start`, as `(end_index, token)`.
    pub fn longest_match<'a>(&'a self, input: &[char], start: usize) -> Option<(usize, &'a str)> {
        self.walk_prefixes(input, start).pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut trie = TrieNode::new();
        trie.insert("ch", "tʃ");
        trie.insert("tch", "tʃ");

        assert!(trie.contains_pattern("ch"));
        assert!(trie.contains_pattern("tch"));
        assert!(!trie.contains_pattern("c"));
        assert!(!trie.contains_pattern("tc"));
    }

    #[test]
    fn test_walk_prefixes_multiple_matches() {
        let mut trie = TrieNode::new();
        trie.insert("o", "ɒ");
        trie.insert("ou", "aʊ");
        trie.insert("ough", "ʌf");

        let input: Vec<char> = "tough".chars().collect();
        let prefixes = trie.walk_prefixes(&input, 1);
        assert_eq!(prefixes, vec![(2, "ɒ"), (3, "aʊ"), (5, "ʌf")]);
        assert_eq!(trie.longest_match(&input, 1), Some((5, "ʌf")));
    }

    #[test]
    fn test_no_match() {
        let mut trie = TrieNode::new();
        trie.insert("ph", "f");

        let input: Vec<char> = "zap".chars().collect();
        assert!(trie.walk_prefixes(&input, 0).is_empty());
        // "p" alone is only a prefix of "ph"
        assert_eq!(trie.longest_match(&input, 2), None);
    }

    #[test]
    fn test_first_insert_wins_and_silent_tokens() {
        let mut trie = TrieNode::new();
        trie.insert("ough", "ʌf");
        trie.insert("ough", "oʊ");
        trie.insert("h", "");

        let input: Vec<char> = "ough".chars().collect();
        assert_eq!(trie.longest_match(&input, 0), Some((4, "ʌf")));

        let input: Vec<char> = "h".chars().collect();
        assert_eq!(trie.longest_match(&input, 0), Some((1, "")));
    }

    #[test]
    fn test_accented_patterns() {
        let mut trie = TrieNode::new();
        trie.insert("ción", "sjon");
        trie.insert("œu", "ø");

        let input: Vec<char> = "canción".chars().collect();
        assert_eq!(trie.longest_match(&input, 3), Some((7, "sjon")));
        let input: Vec<char> = "cœur".chars().collect();
        assert_eq!(trie.longest_match(&input, 1), Some((3, "ø")));
    }
}
