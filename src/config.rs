//! Construction-time settings.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::corrector::DEFAULT_MAX_TIER;
use crate::error::CorrectorError;
use crate::model::DictFilter;

/// Where substitution and insertion symbols come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AlphabetSource {
    #[default]
    Latin,
    Devanagari,
    /// A file with one symbol per line.
    File(PathBuf),
}

impl FromStr for AlphabetSource {
    type Err = CorrectorError;

    /// `latin`, `devanagari`, or a path. Anything containing a path
    /// separator or a `.` is taken as a path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "latin" | "en" => Ok(AlphabetSource::Latin),
            "devanagari" | "ne" => Ok(AlphabetSource::Devanagari),
            _ if s.contains(['/', '\\', '.']) => Ok(AlphabetSource::File(PathBuf::from(s))),
            _ => Err(CorrectorError::UnknownAlphabet(s.to_string())),
        }
    }
}

impl fmt::Display for AlphabetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetSource::Latin => f.write_str("latin"),
            AlphabetSource::Devanagari => f.write_str("devanagari"),
            AlphabetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// How the corpus file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorpusFormat {
    /// Running text, tokenized and counted.
    #[default]
    Text,
    /// Precomputed `word<TAB>count` lines.
    FrequencyList,
}

impl FromStr for CorpusFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(CorpusFormat::Text),
            "freq" | "frequency-list" => Ok(CorpusFormat::FrequencyList),
            other => Err(format!("unknown corpus format {other:?}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub corpus: PathBuf,
    pub corpus_format: CorpusFormat,
    /// Only applied to frequency lists.
    pub filter: DictFilter,
    pub alphabet: AlphabetSource,
    pub max_tier: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            corpus: crate::corpus_path(),
            corpus_format: CorpusFormat::Text,
            filter: DictFilter::NONE,
            alphabet: AlphabetSource::Latin,
            max_tier: DEFAULT_MAX_TIER,
        }
    }
}
