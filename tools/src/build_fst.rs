use anyhow::{Context, Result};
use rhyme_core::lexicon::write_word_set;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Merge plain-text word lists into one `fst::Set`. Returns the number of
/// distinct words written.
pub fn run(inputs: &[PathBuf], out_fst: &PathBuf) -> Result<usize> {
    let mut words = Vec::new();
    for input in inputs {
        let file = File::open(input).with_context(|| format!("open {}", input.display()))?;
        let before = words.len();
        for line in BufReader::new(file).lines() {
            let line = line.with_context(|| format!("read {}", input.display()))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            words.push(line.to_string());
        }
        tracing::debug!(input = %input.display(), words = words.len() - before, "read word list");
    }
    write_word_set(&words, out_fst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_and_dedupes() {
        let dir = std::env::temp_dir();
        let a = dir.join(format!("rhyme_tools_a_{}.txt", std::process::id()));
        let b = dir.join(format!("rhyme_tools_b_{}.txt", std::process::id()));
        let out = dir.join(format!("rhyme_tools_{}.fst", std::process::id()));
        std::fs::write(&a, "day\nway\n# comment\n").unwrap();
        std::fs::write(&b, "Way\n\nplay\n").unwrap();

        let count = run(&[a.clone(), b.clone()], &out).unwrap();
        assert_eq!(count, 3);
        let words = crate::inspect::read_words(&out).unwrap();
        assert_eq!(words, vec!["day", "play", "way"]);

        for p in [a, b, out] {
            let _ = std::fs::remove_file(p);
        }
    }
}
