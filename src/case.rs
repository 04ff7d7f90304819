//! Case patterns of surface tokens.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePattern {
    /// `HELLO`
    Upper,
    /// `hello`
    Lower,
    /// `Hello`
    Title,
    /// Anything else, e.g. `hELLo`. Restoring it is a no-op.
    Other,
}

impl CasePattern {
    /// Classify `word`, checking upper, then lower, then title case.
    ///
    /// Upper and lower require at least one cased letter, so a token like
    /// `"123"` is `Other`. A single capital letter is `Upper`.
    pub fn of(word: &str) -> CasePattern {
        let has_cased = word.chars().any(|c| c.is_uppercase() || c.is_lowercase());
        if !has_cased {
            return CasePattern::Other;
        }

        if !word.chars().any(char::is_lowercase) {
            return CasePattern::Upper;
        }
        if !word.chars().any(char::is_uppercase) {
            return CasePattern::Lower;
        }

        let mut chars = word.chars();
        match chars.next() {
            Some(first) if first.is_uppercase() && !chars.any(char::is_uppercase) => {
                CasePattern::Title
            }
            _ => CasePattern::Other,
        }
    }

    /// Re-apply this pattern to `word`.
    pub fn apply(self, word: &str) -> String {
        match self {
            CasePattern::Upper => word.to_uppercase(),
            CasePattern::Lower => word.to_lowercase(),
            CasePattern::Title => upper_first(&word.to_lowercase()),
            CasePattern::Other => word.to_string(),
        }
    }
}

pub fn upper_first(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
    }
}
