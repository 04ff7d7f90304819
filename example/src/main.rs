use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use spelling_corrector::{corpus_path, AlphabetSource, Config, CorpusFormat, SpellingCorrector};

/// Correct misspelled words using word frequencies learned from a corpus.
///
/// With WORDS, prints one correction per line. Without, reads text from
/// stdin and prints it corrected.
#[derive(Parser, Debug)]
#[command(name = "spell-correct", version)]
struct Args {
    /// Corpus file (defaults to the bundled sample)
    #[arg(short, long)]
    corpus: Option<PathBuf>,

    /// `text` for running prose, `freq` for `word<TAB>count` lines
    #[arg(short = 'f', long, default_value = "text")]
    format: CorpusFormat,

    /// `latin`, `devanagari`, or a file with one symbol per line
    #[arg(short, long, default_value = "latin")]
    alphabet: AlphabetSource,

    /// Maximum number of edits to search
    #[arg(short = 't', long, default_value_t = spelling_corrector::DEFAULT_MAX_TIER)]
    max_tier: usize,

    /// Print every ranked candidate instead of the best one
    #[arg(short, long)]
    suggest: bool,

    words: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = Config {
        corpus: args.corpus.unwrap_or_else(corpus_path),
        corpus_format: args.format,
        alphabet: args.alphabet,
        max_tier: args.max_tier,
        ..Config::default()
    };

    let corrector = SpellingCorrector::from_config(&config)
        .with_context(|| format!("loading corpus {}", config.corpus.display()))?;
    log::info!(
        "{} known words, alphabet {} ({} symbols)",
        corrector.model().len(),
        config.alphabet,
        corrector.alphabet().len()
    );

    if args.words.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        print!("{}", corrector.correct_text(&text));
        return Ok(());
    }

    for word in &args.words {
        if args.suggest {
            let candidates = corrector.suggestions(&word.to_lowercase());
            println!("{}\t{}", word, candidates.join(" "));
        } else {
            println!("{}\t{}", word, corrector.correct_token(word));
        }
    }

    Ok(())
}
