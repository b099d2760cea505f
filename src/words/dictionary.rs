//! In-memory word list supplying decoys
//!
//! Loaded once from a newline-delimited source and immutable afterwards. Besides
//! uniform sampling it produces "close matches": single-letter deletions of a word
//! and insertions of the dictionary's own one-letter entries. Insertions draw only
//! from those entries, never from the full alphabet, so a dictionary without
//! one-letter words yields deletions only.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use rand::Rng;

use crate::io::error::{PuzzleError, Result};
use crate::words::normalize::normalize_word;

/// Immutable list of normalized dictionary words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Load a dictionary from a newline-delimited file
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the path is empty, the file cannot be
    /// read, or it contains no words
    pub fn load(path: &Path) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(PuzzleError::InvalidDictionary {
                path: path.to_path_buf(),
                reason: "dictionary path not provided".to_string(),
            });
        }

        let file = File::open(path).map_err(|source| PuzzleError::DictionaryLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::from_reader(BufReader::new(file), path)?;
        if dictionary.is_empty() {
            return Err(PuzzleError::InvalidDictionary {
                path: path.to_path_buf(),
                reason: "no words found".to_string(),
            });
        }

        debug!(
            "Loaded {} dictionary words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Read words from any buffered source, one per line
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns a load error naming `origin` if reading fails
    pub fn from_reader<R: BufRead>(reader: R, origin: &Path) -> Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|source| PuzzleError::DictionaryLoad {
                path: origin.to_path_buf(),
                source,
            })?;
            let word = normalize_word(line.trim());
            if !word.is_empty() {
                words.push(word);
            }
        }
        Ok(Self { words })
    }

    /// Build a dictionary from in-memory words, normalizing each
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| normalize_word(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All entries in load order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// One entry chosen uniformly at random, `None` if the dictionary is empty
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.words.len());
        self.words.get(index).map(String::as_str)
    }

    /// `count` independent draws, repeats allowed
    pub fn random_words<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<String> {
        (0..count)
            .filter_map(|_| self.random_word(rng).map(str::to_string))
            .collect()
    }

    /// Single-edit variants of `word` used as near-miss decoys
    ///
    /// Deletions of each letter come first, then insertions of every one-letter
    /// entry at every position. Duplicates and `word` itself are removed; the
    /// first occurrence keeps its place.
    pub fn close_matches(&self, word: &str) -> Vec<String> {
        let letters: Vec<char> = word.chars().collect();
        let inserts: Vec<char> = self
            .words
            .iter()
            .filter_map(|entry| single_letter(entry))
            .collect();

        let mut candidates = Vec::with_capacity(letters.len() * (1 + inserts.len()) + inserts.len());

        for skip in 0..letters.len() {
            candidates.push(
                letters
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, &c)| c)
                    .collect::<String>(),
            );
        }

        for at in 0..=letters.len() {
            let (head, tail) = letters.split_at(at);
            for &insert in &inserts {
                let mut variant = String::with_capacity(word.len() + insert.len_utf8());
                variant.extend(head);
                variant.push(insert);
                variant.extend(tail);
                candidates.push(variant);
            }
        }

        let mut seen = HashSet::with_capacity(candidates.len());
        candidates
            .into_iter()
            .filter(|candidate| candidate != word && seen.insert(candidate.clone()))
            .collect()
    }
}

fn single_letter(entry: &str) -> Option<char> {
    let mut chars = entry.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Some(letter),
        _ => None,
    }
}
