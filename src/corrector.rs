//! Candidate search and ranking.

use rayon::prelude::*;
use std::collections::{BTreeSet, HashSet};
use std::time::Instant;

use crate::alphabet::Alphabet;
use crate::case::CasePattern;
use crate::config::{AlphabetSource, Config, CorpusFormat};
use crate::edits;
use crate::error::Result;
use crate::model::FrequencyModel;

/// Number of edit applications searched by default.
pub const DEFAULT_MAX_TIER: usize = 2;

/// Outcome of a tiered candidate search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Search {
    /// Known words from the first tier that produced any.
    Found {
        tier: usize,
        candidates: BTreeSet<String>,
    },
    NotFound,
}

impl Search {
    pub fn tier(&self) -> Option<usize> {
        match self {
            Search::Found { tier, .. } => Some(*tier),
            Search::NotFound => None,
        }
    }
}

/// Corrects single words against a frequency model.
///
/// The model and alphabet are owned and never mutated, so one corrector can
/// be shared between threads.
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    model: FrequencyModel,
    alphabet: Alphabet,
    max_tier: usize,
}

impl SpellingCorrector {
    pub fn new(model: FrequencyModel, alphabet: Alphabet) -> Self {
        SpellingCorrector {
            model,
            alphabet,
            max_tier: DEFAULT_MAX_TIER,
        }
    }

    pub fn with_max_tier(mut self, max_tier: usize) -> Self {
        self.max_tier = max_tier;
        self
    }

    /// Build a corrector from a corpus file over the given alphabet.
    pub fn from_corpus(path: impl AsRef<std::path::Path>, alphabet: Alphabet) -> Result<Self> {
        Ok(Self::new(FrequencyModel::from_corpus(path)?, alphabet))
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let alphabet = match &config.alphabet {
            AlphabetSource::Latin => Alphabet::latin(),
            AlphabetSource::Devanagari => Alphabet::devanagari(),
            AlphabetSource::File(path) => Alphabet::from_file(path)?,
        };

        let model = match config.corpus_format {
            CorpusFormat::Text => FrequencyModel::from_corpus(&config.corpus)?,
            CorpusFormat::FrequencyList => {
                FrequencyModel::from_frequency_list(&config.corpus, &config.filter)?
            }
        };

        Ok(Self::new(model, alphabet).with_max_tier(config.max_tier))
    }

    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn max_tier(&self) -> usize {
        self.max_tier
    }

    /// Search tier by tier for known words reachable from `word`.
    ///
    /// Tier 0 is the word itself. Each later tier applies one more edit to
    /// every string of the previous one. The first tier with a known word wins.
    pub fn search(&self, word: &str) -> Search {
        if self.model.contains(word) {
            return Search::Found {
                tier: 0,
                candidates: BTreeSet::from([word.to_string()]),
            };
        }

        let mut frontier = HashSet::from([word.to_string()]);
        for tier in 1..=self.max_tier {
            let start = Instant::now();
            frontier = edits::expand(&frontier, &self.alphabet);
            let candidates: BTreeSet<String> = frontier
                .par_iter()
                .filter(|w| self.model.contains(w))
                .cloned()
                .collect();

            log::trace!(
                "{:?} tier {}: {} edits, {} known, {:?}",
                word,
                tier,
                frontier.len(),
                candidates.len(),
                start.elapsed()
            );

            if !candidates.is_empty() {
                return Search::Found { tier, candidates };
            }
        }

        Search::NotFound
    }

    /// The most frequent candidate of `candidates`, lexicographically
    /// smallest among equal counts.
    fn best<'a>(&self, candidates: &'a BTreeSet<String>) -> Option<&'a String> {
        candidates.iter().max_by(|a, b| {
            self.model
                .count(a)
                .cmp(&self.model.count(b))
                .then_with(|| b.cmp(a))
        })
    }

    /// The most probable correction of a lowercase alphabetic `word`, or
    /// `word` itself when nothing known is within reach.
    pub fn correct(&self, word: &str) -> String {
        match self.search(word) {
            Search::Found { candidates, .. } => self
                .best(&candidates)
                .cloned()
                .unwrap_or_else(|| word.to_string()),
            Search::NotFound => word.to_string(),
        }
    }

    /// Every candidate of the winning tier, most probable first.
    pub fn suggestions(&self, word: &str) -> Vec<String> {
        match self.search(word) {
            Search::Found { candidates, .. } => {
                let mut candidates: Vec<String> = candidates.into_iter().collect();
                // BTreeSet order is lexicographic and the sort is stable
                candidates.sort_by_key(|w| std::cmp::Reverse(self.model.count(w)));
                candidates
            }
            Search::NotFound => vec![word.to_string()],
        }
    }

    /// Correct a token of any case, restoring its upper/lower/title case.
    pub fn correct_token(&self, token: &str) -> String {
        let case = CasePattern::of(token);
        case.apply(&self.correct(&token.to_lowercase()))
    }
}
