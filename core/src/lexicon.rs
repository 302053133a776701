//! Word lists per language (the dictionary collaborator).
//!
//! The engine only needs "all known words of language L"; order is irrelevant
//! to scoring but preserved so equally scored rhymes come out in list order.
//!
//! Sources:
//! - plain text, one word per line (`#` comments and blank lines skipped)
//! - `fst::Set` artifacts produced by `rhyme_tools build-fst` (sorted, unique)

use crate::language::Language;
use crate::utils::normalize;
use ahash::AHashMap;
use anyhow::{Context, Result};
use fst::{Set, SetBuilder, Streamer};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Per-language word lists.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: AHashMap<Language, Vec<String>>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one word. It is normalized (NFC, trimmed, lowercased); empty
    /// strings are ignored.
    pub fn insert(&mut self, lang: Language, word: &str) {
        let word = normalize(word);
        if !word.is_empty() {
            self.words.entry(lang).or_default().push(word);
        }
    }

    pub fn extend<I, S>(&mut self, lang: Language, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(lang, word.as_ref());
        }
    }

    /// Known words of `lang`, in insertion order.
    pub fn words(&self, lang: Language) -> &[String] {
        self.words.get(&lang).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of words stored for `lang`.
    pub fn len(&self, lang: Language) -> usize {
        self.words(lang).len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.values().all(Vec::is_empty)
    }

    /// Add words from text, one per line. Returns how many were added.
    pub fn extend_from_text(&mut self, lang: Language, text: &str) -> usize {
        let before = self.len(lang);
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.insert(lang, line);
        }
        self.len(lang) - before
    }

    /// Load a text word list for `lang`. Returns how many words were added.
    pub fn load_text<P: AsRef<Path>>(&mut self, lang: Language, path: P) -> Result<usize> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read word list {}", path.display()))?;
        let added = self.extend_from_text(lang, &text);
        tracing::debug!(language = %lang, path = %path.display(), added, "loaded text word list");
        Ok(added)
    }

    /// Load an `fst::Set` word list for `lang`. Returns how many words were added.
    pub fn load_fst<P: AsRef<Path>>(&mut self, lang: Language, path: P) -> Result<usize> {
        let path = path.as_ref();
        let mut buf = Vec::new();
        File::open(path)
            .with_context(|| format!("open fst {}", path.display()))?
            .read_to_end(&mut buf)
            .with_context(|| format!("read fst {}", path.display()))?;
        let set = Set::new(buf).with_context(|| format!("parse fst {}", path.display()))?;

        let before = self.len(lang);
        let mut stream = set.stream();
        while let Some(key) = stream.next() {
            let word = std::str::from_utf8(key)
                .with_context(|| format!("non-utf8 key in {}", path.display()))?;
            self.insert(lang, word);
        }
        let added = self.len(lang) - before;
        tracing::debug!(language = %lang, path = %path.display(), added, "loaded fst word list");
        Ok(added)
    }

    /// Write the words of `lang` as an `fst::Set`. Returns the number of
    /// distinct words written.
    pub fn write_fst<P: AsRef<Path>>(&self, lang: Language, path: P) -> Result<usize> {
        write_word_set(self.words(lang), path)
    }
}

/// Build `fst::Set` bytes from words (normalized, sorted, deduplicated).
pub fn build_word_set<I, S>(words: I) -> Result<(Vec<u8>, usize)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sorted: Vec<String> = words
        .into_iter()
        .map(|w| normalize(w.as_ref()))
        .filter(|w| !w.is_empty())
        .collect();
    sorted.sort();
    sorted.dedup();

    let mut builder = SetBuilder::memory();
    for word in &sorted {
        builder.insert(word).context("insert into fst set")?;
    }
    let bytes = builder.into_inner().context("finish fst set")?;
    Ok((bytes, sorted.len()))
}

/// Write words to `path` as an `fst::Set`. Returns the number of distinct words.
pub fn write_word_set<I, S, P>(words: I, path: P) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let (bytes, count) = build_word_set(words)?;
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    out.write_all(&bytes)
        .with_context(|| format!("write {}", path.display()))?;
    out.flush()?;
    Ok(count)
}
