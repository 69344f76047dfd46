//! Error types for keyword extraction

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain stopwords or document content from a source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no stopwords found in {}", path.display())]
    EmptyStopwords { path: PathBuf },
}

/// Errors reported by the extraction pipeline
#[derive(Debug, Error)]
pub enum KeywordError {
    /// The delimiter pattern does not compile
    #[error("invalid delimiter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// No token survived filtering, so there is nothing to rank
    #[error("no valid words found in content")]
    NoKeywordSignal,

    #[error(transparent)]
    Source(#[from] SourceError),
}

pub type Result<T> = std::result::Result<T, KeywordError>;
