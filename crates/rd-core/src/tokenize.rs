//! Keyword tokenizer for review text
//!
//! Extracts maximal runs of Hangul syllables of length >= 2 and drops a
//! fixed stopword set. Tokens are compared by exact string equality only:
//! no stemming, no dedup of morphological variants.

use std::collections::HashSet;

/// Minimum token length in characters
pub const MIN_TOKEN_CHARS: usize = 2;

/// Default stopword set: generic intensifiers/conjunctions plus the
/// product-category nouns that would otherwise dominate every bucket.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "정말",
    "너무",
    "그리고",
    "하지만",
    "그래서",
    "그냥",
    "이번",
    "제품",
    "자전거",
];

/// Hangul syllable block (U+AC00..=U+D7A3)
fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// Tokenizer with a fixed stopword set
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: HashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a tokenizer with the default stopword set
    pub fn new() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add extra stopwords on top of the default set
    pub fn with_extra_stopwords<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(extra.into_iter().map(Into::into));
        self
    }

    /// Check whether a token is a stopword
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Extract keyword candidate tokens from review text
    ///
    /// Non-Hangul characters act as delimiters; runs shorter than
    /// [`MIN_TOKEN_CHARS`] and stopwords are dropped. Missing text
    /// yields an empty sequence.
    pub fn tokenize(&self, text: Option<&str>) -> Vec<String> {
        let Some(text) = text else {
            return Vec::new();
        };

        let mut tokens = Vec::new();
        let mut run = String::new();
        let mut run_chars = 0usize;

        for c in text.chars() {
            if is_hangul_syllable(c) {
                run.push(c);
                run_chars += 1;
            } else {
                self.flush_run(&mut run, &mut run_chars, &mut tokens);
            }
        }
        self.flush_run(&mut run, &mut run_chars, &mut tokens);

        tokens
    }

    fn flush_run(&self, run: &mut String, run_chars: &mut usize, tokens: &mut Vec<String>) {
        if *run_chars >= MIN_TOKEN_CHARS && !self.is_stopword(run) {
            tokens.push(std::mem::take(run));
        } else {
            run.clear();
        }
        *run_chars = 0;
    }
}
