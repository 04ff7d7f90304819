//! Error types for corrector construction.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while building a [`SpellingCorrector`](crate::SpellingCorrector).
///
/// Correction itself never fails: an unrecoverable word is passed through.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CorrectorError {
    /// A corpus, frequency list or alphabet file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The alphabet contained no symbols
    #[error("alphabet is empty")]
    EmptyAlphabet,

    /// An alphabet file line held something other than a single character
    #[error("invalid alphabet entry {entry:?} on line {line}: expected a single character")]
    InvalidSymbol { line: usize, entry: String },

    /// A named alphabet that has no built-in table
    #[error("unknown alphabet {0:?}")]
    UnknownAlphabet(String),
}

impl CorrectorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CorrectorError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CorrectorError>;
