//! Keyterm Core - term-frequency keyword extraction
//!
//! Splits a document into lowercase tokens, drops stopwords, short words and
//! digit-leading tokens, normalizes counts by the raw token total and returns
//! the most frequent terms.

pub mod counter;
pub mod error;
pub mod extractor;
pub mod frequency;
pub mod ranker;
pub mod source;
pub mod stopwords;
pub mod tokenizer;

pub use counter::{count_terms, TermCounts, TermFilter, DEFAULT_MIN_TERM_LEN};
pub use error::{KeywordError, Result, SourceError};
pub use extractor::{extract_keywords, ExtractorParams, Keyword, KeywordExtractor};
pub use frequency::{term_frequencies, TermFrequencies};
pub use ranker::{clamp_top_n, rank_scored, top_keywords};
pub use source::load_content;
pub use stopwords::StopwordSet;
pub use tokenizer::{Tokenizer, DEFAULT_DELIMITER};
