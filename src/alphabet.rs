//! Symbol tables used for substitutions and insertions.

use const_format::formatcp;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{CorrectorError, Result};

const LATIN_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz"; // 26 chars

const DEVANAGARI_VOWELS: &str = "अआइईउऊऋएऐओऔ"; // 11 chars
const DEVANAGARI_CONSONANTS: &str = "कखगघङचछजझञटठडढणतथदधनपफबभमयरलवशषसह"; // 33 chars
const DEVANAGARI_VOWEL_SIGNS: &str = "\u{093e}\u{093f}\u{0940}\u{0941}\u{0942}\u{0943}\u{0947}\u{0948}\u{094b}\u{094c}";
const DEVANAGARI_SIGNS: &str = "\u{0901}\u{0902}\u{0903}\u{094d}";
const DEVANAGARI_DIGITS: &str = "०१२३४५६७८९";
const DEVANAGARI_LETTERS: &str = formatcp!(
    "{}{}{}{}{}",
    DEVANAGARI_VOWELS,
    DEVANAGARI_CONSONANTS,
    DEVANAGARI_VOWEL_SIGNS,
    DEVANAGARI_SIGNS,
    DEVANAGARI_DIGITS
); // 68 chars

/// An ordered, non-empty set of symbols.
///
/// Order is the order in which substitutions and insertions are generated;
/// repeated symbols keep their first position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self> {
        let mut seen = HashSet::new();
        let symbols: Vec<char> = symbols.into_iter().filter(|c| seen.insert(*c)).collect();

        if symbols.is_empty() {
            return Err(CorrectorError::EmptyAlphabet);
        }

        log::debug!("alphabet has {} symbols", symbols.len());
        Ok(Alphabet { symbols })
    }

    /// Lowercase Latin `a`..=`z`.
    pub fn latin() -> Self {
        Alphabet {
            symbols: LATIN_LOWERCASE.chars().collect(),
        }
    }

    /// Nepali Devanagari: independent vowels, consonants, vowel signs,
    /// candrabindu/anusvara/visarga/virama and digits.
    pub fn devanagari() -> Self {
        Alphabet {
            symbols: DEVANAGARI_LETTERS.chars().collect(),
        }
    }

    /// Load an alphabet with one symbol per line. Blank lines are ignored.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| CorrectorError::io(path, e))?;

        let mut symbols = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let entry = line.trim();
            if entry.is_empty() {
                continue;
            }

            let mut chars = entry.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => symbols.push(c),
                _ => {
                    return Err(CorrectorError::InvalidSymbol {
                        line: i + 1,
                        entry: entry.to_string(),
                    })
                }
            }
        }

        Alphabet::new(symbols)
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Never true for a constructed alphabet.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::latin()
    }
}
