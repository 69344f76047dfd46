//! Stopword sets
//!
//! A [`StopwordSet`] is built by the caller and handed to the extractor. It can
//! come from a word-per-line file, from the built-in English list, or from any
//! iterator of words.

use std::fs;
use std::path::Path;

use ahash::AHashSet;
use stop_words::{get, LANGUAGE};
use tracing::debug;

use crate::error::SourceError;

/// Immutable set of lowercase words excluded from keyword counting
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: AHashSet<String>,
}

impl StopwordSet {
    /// A set that filters nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// English stopwords from the `stop-words` crate
    pub fn english() -> Self {
        get(LANGUAGE::English).iter().map(|w| w.to_string()).collect()
    }

    /// Load stopwords from a file with one word per line.
    ///
    /// Lines are trimmed and lowercased, blank lines are skipped. A file that
    /// yields no words is an error rather than an empty set.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let set: Self = text.lines().collect();
        if set.is_empty() {
            return Err(SourceError::EmptyStopwords {
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path.display(), words = set.len(), "loaded stopwords");
        Ok(set)
    }

    /// Check if a lowercase token is a stopword
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}
