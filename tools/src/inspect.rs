use anyhow::{Context, Result};
use fst::{Set, Streamer};
use rhyme_core::{last_syllable, transliterate, Language};
use std::fs::File;
use std::io::Read;
use std::path::Path;

fn load_set(path: &Path) -> Result<Set<Vec<u8>>> {
    let mut buf = Vec::new();
    File::open(path)
        .with_context(|| format!("open {}", path.display()))?
        .read_to_end(&mut buf)?;
    Set::new(buf).with_context(|| format!("parse fst {}", path.display()))
}

/// All words of an fst set, in key order.
pub fn read_words(path: &Path) -> Result<Vec<String>> {
    let set = load_set(path)?;
    let mut out = Vec::with_capacity(set.len());
    let mut stream = set.stream();
    while let Some(key) = stream.next() {
        out.push(String::from_utf8_lossy(key).into_owned());
    }
    Ok(out)
}

/// Print the word count and the first `limit` words, with their phonetic
/// form and last syllable when a language is given.
pub fn run(path: &Path, limit: usize, lang: Option<Language>) -> Result<()> {
    let words = read_words(path)?;
    println!("{}: {} words", path.display(), words.len());

    for word in words.iter().take(limit) {
        match lang {
            Some(lang) => println!(
                "  {:<20} /{}/  last={}",
                word,
                transliterate(word, lang),
                last_syllable(word, lang)
            ),
            None => println!("  {word}"),
        }
    }
    Ok(())
}
