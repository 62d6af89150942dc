//! Word lists for seeding the index.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::Context;
use regex::Regex;
use tracing::debug;

/// Seeded into the index at startup, unless disabled with `--no-defaults`.
pub const DEFAULT_WORDS: [&str; 49] = [
    "apple", "app", "apply", "apricot", "apartment", "appetite",
    "banana", "bat", "ball", "battle", "badge", "balance",
    "cat", "caterpillar", "cattle", "camera", "castle", "canvas",
    "dog", "dove", "doll", "dragon", "dance", "danger",
    "elephant", "egg", "eagle", "earth", "energy",
    "fish", "frog", "falcon", "forest", "fortune",
    "goat", "grape", "giraffe", "galaxy", "garden",
    "hat", "home", "horse", "harbor", "harmony",
    "ice", "igloo", "island", "iron", "imagine",
];

/// Reads all words from `input`, where words are separated by line breaks or `delimiter`.
/// Empty pieces are skipped. No normalization happens here, that is up to the index.
pub fn load_words(input: impl BufRead, delimiter: &Regex) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in input.lines() {
        let line = line?;
        words.extend(
            delimiter
                .split(&line)
                .filter(|word| !word.is_empty())
                .map(str::to_owned),
        );
    }
    Ok(words)
}

pub fn load_file(path: &Path, delimiter: &Regex) -> anyhow::Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("cannot open word list '{}'", path.display()))?;
    let words = load_words(BufReader::new(file), delimiter)
        .with_context(|| format!("cannot read word list '{}'", path.display()))?;
    debug!(path = %path.display(), count = words.len(), "read word list");
    Ok(words)
}

#[cfg(test)]
mod test {
    use super::*;

    fn whitespace() -> Regex {
        Regex::new(r"\s+").unwrap()
    }

    #[test]
    fn default_words_are_distinct() {
        let mut words = DEFAULT_WORDS.to_vec();
        words.sort_unstable();
        words.dedup();
        assert_eq!(words.len(), DEFAULT_WORDS.len());
    }

    #[test]
    fn load_words_splits_lines_and_delimiters() {
        let input = "apple banana\n  cherry\n\n\tdate  \n";
        let words = load_words(input.as_bytes(), &whitespace()).unwrap();
        assert_eq!(words, ["apple", "banana", "cherry", "date"]);
    }

    #[test]
    fn load_words_custom_delimiter() {
        let input = "red,green;blue\nyellow";
        let words = load_words(input.as_bytes(), &Regex::new("[,;]").unwrap()).unwrap();
        assert_eq!(words, ["red", "green", "blue", "yellow"]);
    }

    #[test]
    fn load_file_missing() {
        let error = load_file(Path::new("does/not/exist.txt"), &whitespace()).unwrap_err();
        assert!(error.to_string().contains("does/not/exist.txt"), "{error:#}");
    }

    #[test]
    fn load_file_fixture() {
        let words = load_file(Path::new("tests/inputs/extra-words.txt"), &whitespace()).unwrap();
        assert_eq!(words, ["zebra", "zephyr", "Zero", "zigzag", "zinc"]);
    }
}
