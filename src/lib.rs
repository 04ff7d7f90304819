//! Corpus-driven spelling correction.
//!
//! A [`FrequencyModel`] counts the words of a reference corpus. A
//! [`SpellingCorrector`] enumerates every string within one, then two, edits
//! of a misspelled word, keeps the ones the model knows, and picks the most
//! frequent.
//!
//! ```no_run
//! use spelling_corrector::{Alphabet, SpellingCorrector};
//!
//! let corrector = SpellingCorrector::from_corpus("data/corpus.txt", Alphabet::latin())?;
//! assert_eq!(corrector.correct_text("Speling is hrad."), "Spelling is hard.");
//! # Ok::<(), spelling_corrector::CorrectorError>(())
//! ```

pub mod alphabet;
pub mod case;
pub mod config;
pub mod corrector;
pub mod edits;
pub mod error;
pub mod model;
mod text;

pub use alphabet::Alphabet;
pub use case::CasePattern;
pub use config::{AlphabetSource, Config, CorpusFormat};
pub use corrector::{Search, SpellingCorrector, DEFAULT_MAX_TIER};
pub use error::{CorrectorError, Result};
pub use model::{tokens, DictFilter, FrequencyModel};

use std::path::PathBuf;

macro_rules! insert_prefix_str {
    ($filename:expr) => {
        if cfg!(feature = "onedir") {
            concat!("./", $filename)
        } else {
            concat!(env!("CARGO_MANIFEST_DIR"), "/data/", $filename)
        }
    };
}

/// Path of the bundled sample corpus.
pub fn corpus_path() -> PathBuf {
    PathBuf::from(insert_prefix_str!("corpus.txt"))
}
