use std::io::Write;

use spelling_corrector::{
    corpus_path, Alphabet, AlphabetSource, Config, CorpusFormat, CorrectorError, DictFilter,
    Search, SpellingCorrector,
};
use tempfile::NamedTempFile;

fn corpus_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn fianlly_becomes_finally() {
    let corpus = corpus_file(&format!("{}{}", "finally ".repeat(50), "finely ".repeat(2)));
    let sc = SpellingCorrector::from_corpus(corpus.path(), Alphabet::latin()).unwrap();

    assert_eq!(sc.correct("fianlly"), "finally");
    assert_eq!(sc.correct_text("fianlly, it works!"), "finally, it works!");
}

#[test]
fn known_words_are_left_alone() {
    let corpus = corpus_file("the quick brown fox jumps over the lazy dog");
    let sc = SpellingCorrector::from_corpus(corpus.path(), Alphabet::latin()).unwrap();

    for (word, _) in sc.model().iter() {
        assert_eq!(sc.correct(word), word);
    }
}

#[test]
fn single_tier_one_match_wins() {
    // "lazy" is the only known word one edit from "lazt"; "lane" is two away
    // and far more frequent
    let corpus = corpus_file(&format!("lazy {}", "lane ".repeat(500)));
    let sc = SpellingCorrector::from_corpus(corpus.path(), Alphabet::latin()).unwrap();

    assert_eq!(sc.search("lazt").tier(), Some(1));
    assert_eq!(sc.correct("lazt"), "lazy");
}

#[test]
fn unreachable_words_pass_through() {
    let corpus = corpus_file("apple banana cherry");
    let sc = SpellingCorrector::from_corpus(corpus.path(), Alphabet::latin()).unwrap();

    assert_eq!(sc.search("zzzzqqq"), Search::NotFound);
    assert_eq!(sc.correct("zzzzqqq"), "zzzzqqq");
    assert_eq!(sc.correct_text("Zzzzqqq!"), "Zzzzqqq!");
}

#[test]
fn empty_corpus_is_valid() {
    let corpus = corpus_file("");
    let sc = SpellingCorrector::from_corpus(corpus.path(), Alphabet::latin()).unwrap();

    assert!(sc.model().is_empty());
    assert_eq!(sc.correct_text("Helo wrld."), "Helo wrld.");
}

#[test]
fn missing_corpus_fails_with_path() {
    let err = SpellingCorrector::from_corpus("/nonexistent/corpus.txt", Alphabet::latin())
        .unwrap_err();
    assert!(matches!(err, CorrectorError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/corpus.txt"));
}

#[test]
fn case_is_restored_across_a_document() {
    let corpus = corpus_file("hello world");
    let sc = SpellingCorrector::from_corpus(corpus.path(), Alphabet::latin()).unwrap();

    assert_eq!(
        sc.correct_text("HELO Wrold, hELLo wrld."),
        "HELLO World, hello world."
    );
}

#[test]
fn config_with_frequency_list() {
    let list = corpus_file("# word\tcount\nreceive\t40\nrecipe\t3\nrare\t1\n");
    let config = Config {
        corpus: list.path().to_path_buf(),
        corpus_format: CorpusFormat::FrequencyList,
        filter: DictFilter {
            min_freq: 2,
            ..DictFilter::NONE
        },
        ..Config::default()
    };
    let sc = SpellingCorrector::from_config(&config).unwrap();

    assert_eq!(sc.model().len(), 2);
    assert_eq!(sc.correct("recieve"), "receive");
    assert!(!sc.model().contains("rare"));
    assert_eq!(sc.correct("rare"), "rare");
}

#[test]
fn config_with_alphabet_file() {
    let corpus = corpus_file("cab");
    let alphabet = corpus_file("a\nb\nc\n");
    let config = Config {
        corpus: corpus.path().to_path_buf(),
        alphabet: AlphabetSource::File(alphabet.path().to_path_buf()),
        max_tier: 1,
        ..Config::default()
    };
    let sc = SpellingCorrector::from_config(&config).unwrap();

    assert_eq!(sc.alphabet().len(), 3);
    assert_eq!(sc.max_tier(), 1);
    assert_eq!(sc.correct("cb"), "cab");
}

#[test]
fn config_rejects_bad_alphabet_file() {
    let corpus = corpus_file("cab");
    let alphabet = corpus_file("ab\n");
    let config = Config {
        corpus: corpus.path().to_path_buf(),
        alphabet: AlphabetSource::File(alphabet.path().to_path_buf()),
        ..Config::default()
    };

    assert!(matches!(
        SpellingCorrector::from_config(&config),
        Err(CorrectorError::InvalidSymbol { line: 1, .. })
    ));
}

#[test]
fn bundled_corpus() {
    let sc = SpellingCorrector::from_corpus(corpus_path(), Alphabet::latin()).unwrap();

    assert_eq!(sc.correct("speling"), "spelling");
    assert_eq!(sc.correct("finaly"), "finally");
    assert_eq!(
        sc.correct_text("Speling is hrad, but evrey word counts."),
        "Spelling is hard, but every word counts."
    );
}
