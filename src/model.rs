//! Word frequency table built once from a corpus.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use crate::error::{CorrectorError, Result};

lazy_static! {
    static ref WORD: Regex = Regex::new("[a-z]+").unwrap();
}

/// Split `text` into lowercase alphabetic runs.
///
/// The whole text is lowercased first, so `"The END"` yields `the`, `end`.
/// Digits, punctuation and non-Latin letters separate tokens.
pub fn tokens(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
}

/// Which entries of an explicit word list make it into the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictFilter {
    pub min_freq: usize,
    pub min_len: usize,
    pub max_len: usize,
}

impl DictFilter {
    /// Keep everything.
    pub const NONE: DictFilter = DictFilter {
        min_freq: 0,
        min_len: 0,
        max_len: usize::MAX,
    };

    pub fn keep(&self, word: &str, freq: usize) -> bool {
        if freq < self.min_freq {
            return false;
        }

        let len = word.chars().count();
        !(word.is_empty() || len < self.min_len || len > self.max_len || word.starts_with('.'))
    }
}

impl Default for DictFilter {
    fn default() -> Self {
        DictFilter::NONE
    }
}

/// Immutable mapping from known word to occurrence count.
#[derive(Debug, Clone, Default)]
pub struct FrequencyModel {
    word_freqs: HashMap<String, usize>,
    total_words: usize,
}

impl FrequencyModel {
    /// Count the tokens of an in-memory corpus.
    pub fn from_text(text: &str) -> Self {
        let mut word_freqs = HashMap::new();
        for word in tokens(text) {
            *word_freqs.entry(word).or_insert(0) += 1;
        }

        Self::build(word_freqs)
    }

    /// Read and count a corpus file. The text is dropped once counted.
    pub fn from_corpus(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CorrectorError::io(path, e))?;
        let model = Self::from_text(&text);

        log::debug!(
            "loaded corpus {}: {} distinct words, {} tokens",
            path.display(),
            model.len(),
            model.total()
        );
        Ok(model)
    }

    pub fn from_counts(counts: HashMap<String, usize>, filter: &DictFilter) -> Self {
        let word_freqs = counts
            .into_iter()
            .filter(|(word, freq)| filter.keep(word, *freq))
            .collect();

        Self::build(word_freqs)
    }

    /// Load a `word<TAB>count` list. `#` starts a comment; unparsable lines are skipped.
    pub fn from_frequency_list(path: impl AsRef<Path>, filter: &DictFilter) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| CorrectorError::io(path, e))?;
        let reader = io::BufReader::new(file);

        let mut counts = HashMap::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| CorrectorError::io(path, e))?;
            let line = match line.find('#') {
                Some(pos) => &line[..pos],
                None => line.as_str(),
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split('\t');
            match (fields.next(), fields.next().map(|f| f.trim().parse::<usize>())) {
                (Some(word), Some(Ok(freq))) if !word.is_empty() => {
                    *counts.entry(word.to_string()).or_insert(0) += freq;
                }
                _ => log::warn!("{}:{}: skipping malformed entry {:?}", path.display(), i + 1, line),
            }
        }

        let model = Self::from_counts(counts, filter);
        log::debug!("loaded frequency list {}: {} words", path.display(), model.len());
        Ok(model)
    }

    fn build(word_freqs: HashMap<String, usize>) -> Self {
        let total_words = word_freqs.values().sum();
        FrequencyModel {
            word_freqs,
            total_words,
        }
    }

    pub fn count(&self, word: &str) -> usize {
        *self.word_freqs.get(word).unwrap_or(&0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.word_freqs.contains_key(word)
    }

    /// The subset of `words` that are keys of the table.
    pub fn known<I, S>(&self, words: I) -> HashSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter(|word| self.contains(word.as_ref()))
            .map(|word| word.as_ref().to_string())
            .collect()
    }

    pub fn total(&self) -> usize {
        self.total_words
    }

    pub fn probability(&self, word: &str) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.count(word) as f64 / self.total_words as f64
    }

    /// The `n` most frequent words, count descending then word ascending.
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut entries: Vec<(&String, &usize)> = self.word_freqs.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        entries
            .into_iter()
            .take(n)
            .map(|(word, &freq)| (word.clone(), freq))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.word_freqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_freqs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.word_freqs.iter().map(|(word, &freq)| (word.as_str(), freq))
    }
}
