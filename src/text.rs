//! Whole-document correction.

use lazy_static::lazy_static;
use rayon::prelude::*;
use regex::Regex;

use crate::corrector::SpellingCorrector;

lazy_static! {
    static ref TOKEN: Regex = Regex::new("[a-zA-Z]+").unwrap();
}

impl SpellingCorrector {
    /// Correct every run of ASCII letters in `text`, keeping its case.
    ///
    /// Everything between runs is copied through untouched. Runs are
    /// corrected in parallel and stitched back in their original order.
    pub fn correct_text(&self, text: &str) -> String {
        let matches: Vec<regex::Match> = TOKEN.find_iter(text).collect();
        let corrections: Vec<String> = matches
            .par_iter()
            .map(|m| self.correct_token(m.as_str()))
            .collect();

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for (m, corrected) in matches.iter().zip(&corrections) {
            out.push_str(&text[last..m.start()]);
            out.push_str(corrected);
            last = m.end();
        }
        out.push_str(&text[last..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::{Alphabet, FrequencyModel, SpellingCorrector};

    fn corrector(corpus: &str) -> SpellingCorrector {
        SpellingCorrector::new(FrequencyModel::from_text(corpus), Alphabet::latin())
    }

    #[test]
    fn preserves_non_word_characters() {
        let sc = corrector("finally it works");
        assert_eq!(sc.correct_text("fianlly, it works!"), "finally, it works!");
        assert_eq!(sc.correct_text("  fianlly\t--it\nworks?? "), "  finally\t--it\nworks?? ");
    }

    #[test]
    fn preserves_case_per_token() {
        let sc = corrector("hello");
        assert_eq!(sc.correct_text("HELLO"), "HELLO");
        assert_eq!(sc.correct_text("Helo"), "Hello");
        assert_eq!(sc.correct_text("hELLo"), "hello");
        assert_eq!(sc.correct_text("Helo HELO helo"), "Hello HELLO hello");
    }

    #[test]
    fn digits_and_other_scripts_split_runs() {
        let sc = corrector("abc");
        assert_eq!(sc.correct_text("abd2abd नमस्ते"), "abc2abc नमस्ते");
    }

    #[test]
    fn empty_and_wordless_text() {
        let sc = corrector("abc");
        assert_eq!(sc.correct_text(""), "");
        assert_eq!(sc.correct_text("123, 456!"), "123, 456!");
    }

    #[test]
    fn unknown_words_pass_through() {
        let sc = corrector("");
        assert_eq!(sc.correct_text("Qwzx vbnm."), "Qwzx vbnm.");
    }
}
