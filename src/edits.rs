//! Brute-force generation of edit variants.
//!
//! Nothing here knows about word frequencies: these functions enumerate every
//! string reachable by a number of edit applications, and the caller filters
//! the result against the model.

use rayon::prelude::*;
use std::collections::HashSet;

use crate::alphabet::Alphabet;

/// Every `(left, right)` split of `word` on a character boundary, including
/// `("", word)` and `(word, "")`.
fn splits(word: &str) -> Vec<(&str, &str)> {
    let mut splits: Vec<(&str, &str)> = word.char_indices().map(|(i, _)| word.split_at(i)).collect();
    splits.push((word, ""));
    splits
}

/// Strip the first character of `s`.
fn tail(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.as_str()
}

/// All strings one deletion, adjacent transposition, substitution or
/// insertion away from `word`.
///
/// For a word of `L` characters over an alphabet of `A` symbols this
/// generates `L + (L - 1) + L·A + (L + 1)·A` strings before deduplication.
pub fn edits1(word: &str, alphabet: &Alphabet) -> HashSet<String> {
    let splits = splits(word);
    let mut edits = HashSet::with_capacity(splits.len() * (2 * alphabet.len() + 2));

    // Deletes
    for (l, r) in &splits {
        if !r.is_empty() {
            edits.insert(format!("{}{}", l, tail(r)));
        }
    }

    // Transposes
    for (l, r) in &splits {
        let mut chars = r.chars();
        if let (Some(a), Some(b)) = (chars.next(), chars.next()) {
            edits.insert(format!("{}{}{}{}", l, b, a, chars.as_str()));
        }
    }

    // Replaces
    for (l, r) in &splits {
        if !r.is_empty() {
            let rest = tail(r);
            for &c in alphabet.symbols() {
                edits.insert(format!("{}{}{}", l, c, rest));
            }
        }
    }

    // Inserts
    for (l, r) in &splits {
        for &c in alphabet.symbols() {
            edits.insert(format!("{}{}{}", l, c, r));
        }
    }

    edits
}

/// One more edit application over every string in `words`.
pub fn expand(words: &HashSet<String>, alphabet: &Alphabet) -> HashSet<String> {
    words
        .par_iter()
        .flat_map_iter(|word| edits1(word, alphabet))
        .collect()
}

/// All strings reachable from `word` by exactly `n` edit applications,
/// computed by composing [`edits1`] `n` times. `n == 0` yields `{word}`.
///
/// The result grows as `(L·A)^n`; anything beyond `n == 2` is rarely practical.
pub fn edits_n(word: &str, n: usize, alphabet: &Alphabet) -> HashSet<String> {
    let mut edits = HashSet::from([word.to_string()]);
    for _ in 0..n {
        edits = expand(&edits, alphabet);
    }
    edits
}
