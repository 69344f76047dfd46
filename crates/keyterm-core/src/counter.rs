//! Term counting with stopword and length filtering

use ahash::AHashMap;
use tracing::trace;

use crate::error::{KeywordError, Result};
use crate::stopwords::StopwordSet;

/// Term -> number of occurrences in the document
pub type TermCounts = AHashMap<String, u32>;

/// Default minimum term length: terms must be longer than two characters
pub const DEFAULT_MIN_TERM_LEN: usize = 3;

/// Decides which raw tokens are eligible to become keywords
#[derive(Debug, Clone, Copy)]
pub struct TermFilter {
    /// Minimum number of characters a term must have
    pub min_len: usize,
}

impl Default for TermFilter {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_TERM_LEN,
        }
    }
}

impl TermFilter {
    pub fn new(min_len: usize) -> Self {
        Self { min_len }
    }

    /// A token qualifies when it is non-empty, does not start with a digit,
    /// is long enough and is not a stopword.
    pub fn accepts(&self, token: &str, stopwords: &StopwordSet) -> bool {
        match token.chars().next() {
            None => false,
            Some(first) if first.is_ascii_digit() => false,
            Some(_) => token.chars().count() >= self.min_len && !stopwords.contains(token),
        }
    }

    /// Count qualifying tokens.
    ///
    /// Fails with [`KeywordError::NoKeywordSignal`] when nothing qualifies.
    pub fn count<S: AsRef<str>>(
        &self,
        tokens: &[S],
        stopwords: &StopwordSet,
    ) -> Result<TermCounts> {
        let mut counts = TermCounts::new();
        for token in tokens {
            let token = token.as_ref();
            if self.accepts(token, stopwords) {
                *counts.entry(token.to_owned()).or_insert(0) += 1;
            }
        }

        if counts.is_empty() {
            return Err(KeywordError::NoKeywordSignal);
        }

        trace!(tokens = tokens.len(), terms = counts.len(), "counted terms");
        Ok(counts)
    }
}

/// Count terms with the default filter
pub fn count_terms<S: AsRef<str>>(tokens: &[S], stopwords: &StopwordSet) -> Result<TermCounts> {
    TermFilter::default().count(tokens, stopwords)
}
