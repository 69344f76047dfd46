//! Keyword extraction pipeline
//!
//! tokenize -> count (stopword and length filter) -> normalize -> rank

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::counter::{TermFilter, DEFAULT_MIN_TERM_LEN};
use crate::error::Result;
use crate::frequency::{term_frequencies, TermFrequencies};
use crate::ranker::rank_scored;
use crate::source::load_content;
use crate::stopwords::StopwordSet;
use crate::tokenizer::{Tokenizer, DEFAULT_DELIMITER};

/// Extraction parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorParams {
    /// Regex that separates tokens
    pub delimiter: String,
    /// Minimum term length in characters
    pub min_term_len: usize,
}

impl Default for ExtractorParams {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            min_term_len: DEFAULT_MIN_TERM_LEN,
        }
    }
}

/// An extracted keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub term: String,
    pub count: u32,
    pub frequency: f64,
    pub rank: usize,
}

/// Reusable keyword extractor
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    tokenizer: Tokenizer,
    filter: TermFilter,
    stopwords: StopwordSet,
}

impl KeywordExtractor {
    /// Extractor with default parameters and no stopwords
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::default(),
            filter: TermFilter::default(),
            stopwords: StopwordSet::empty(),
        }
    }

    /// Build an extractor, compiling the delimiter pattern
    pub fn with_params(params: &ExtractorParams, stopwords: StopwordSet) -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new(&params.delimiter)?,
            filter: TermFilter::new(params.min_term_len),
            stopwords,
        })
    }

    /// Replace the stopword set
    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// The `top_n` keywords of `content`, most frequent first.
    ///
    /// Asking for zero keywords always succeeds with an empty list. Otherwise
    /// content with no qualifying term fails with `NoKeywordSignal`.
    pub fn extract(&self, content: &str, top_n: usize) -> Result<Vec<String>> {
        Ok(self
            .extract_scored(content, top_n)?
            .into_iter()
            .map(|kw| kw.term)
            .collect())
    }

    /// Like [`extract`](Self::extract), with counts and frequencies attached
    pub fn extract_scored(&self, content: &str, top_n: usize) -> Result<Vec<Keyword>> {
        rank_content(&self.tokenizer, self.filter, &self.stopwords, content, top_n)
    }

    /// Extract keywords from a file
    pub fn extract_from_file(&self, path: impl AsRef<Path>, top_n: usize) -> Result<Vec<String>> {
        let content = load_content(path)?;
        self.extract(&content, top_n)
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn rank_content(
    tokenizer: &Tokenizer,
    filter: TermFilter,
    stopwords: &StopwordSet,
    content: &str,
    top_n: usize,
) -> Result<Vec<Keyword>> {
    if top_n == 0 {
        return Ok(Vec::new());
    }

    let tokens = tokenizer.tokenize(content);
    let counts = filter.count(&tokens, stopwords)?;
    let freqs = term_frequencies(&tokens, &counts);

    // Only terms that passed the filter compete for a rank.
    let candidates: TermFrequencies = freqs
        .into_iter()
        .filter(|(term, _)| counts.contains_key(term))
        .collect();

    let keywords: Vec<Keyword> = rank_scored(&candidates, top_n)
        .into_iter()
        .enumerate()
        .map(|(rank, (term, frequency))| Keyword {
            count: counts[&term],
            term,
            frequency,
            rank,
        })
        .collect();

    debug!(
        tokens = tokens.len(),
        terms = counts.len(),
        returned = keywords.len(),
        "extracted keywords"
    );
    Ok(keywords)
}

/// One-shot extraction with an explicit stopword set and delimiter pattern
pub fn extract_keywords(
    content: &str,
    top_n: usize,
    stopwords: &StopwordSet,
    delimiter: &str,
) -> Result<Vec<String>> {
    let tokenizer = Tokenizer::new(delimiter)?;
    let keywords = rank_content(&tokenizer, TermFilter::default(), stopwords, content, top_n)?;
    Ok(keywords.into_iter().map(|kw| kw.term).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeywordError;

    #[test]
    fn test_extract_top_two() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor
            .extract("apple banana apple cherry banana apple", 2)
            .unwrap();
        assert_eq!(keywords, vec!["apple", "banana"]);
    }

    #[test]
    fn test_extract_scored() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor
            .extract_scored("apple banana apple cherry banana apple", 3)
            .unwrap();
        assert_eq!(keywords.len(), 3);
        assert_eq!(keywords[0].term, "apple");
        assert_eq!(keywords[0].count, 3);
        assert!((keywords[0].frequency - 0.5).abs() < 1e-9);
        assert_eq!(keywords[2].term, "cherry");
        assert_eq!(keywords[2].rank, 2);
    }

    #[test]
    fn test_stopwords_never_ranked() {
        let extractor = KeywordExtractor::new().with_stopwords(["the"].into_iter().collect());
        let keywords = extractor.extract("the fox the dog the end", 10).unwrap();
        assert_eq!(keywords, vec!["dog", "end", "fox"]);
    }

    #[test]
    fn test_zero_top_n_on_empty_content() {
        let extractor = KeywordExtractor::new();
        assert!(extractor.extract("", 0).unwrap().is_empty());
    }

    #[test]
    fn test_no_signal() {
        let extractor = KeywordExtractor::new();
        assert!(matches!(
            extractor.extract("a an to 42", 3),
            Err(KeywordError::NoKeywordSignal)
        ));
    }

    #[test]
    fn test_with_params() {
        let params = ExtractorParams {
            delimiter: r"[\s\-_]+".to_string(),
            min_term_len: 5,
        };
        let extractor = KeywordExtractor::with_params(&params, StopwordSet::empty()).unwrap();
        let keywords = extractor.extract("word1-word2_word2 word", 5).unwrap();
        assert_eq!(keywords, vec!["word2", "word1"]);
    }

    #[test]
    fn test_invalid_params() {
        let params = ExtractorParams {
            delimiter: "(".to_string(),
            ..Default::default()
        };
        let result = KeywordExtractor::with_params(&params, StopwordSet::empty());
        assert!(matches!(result, Err(KeywordError::InvalidPattern(_))));
    }

    #[test]
    fn test_params_from_json() {
        let params: ExtractorParams = serde_json::from_str(r#"{"min_term_len": 4}"#).unwrap();
        assert_eq!(params.delimiter, DEFAULT_DELIMITER);
        assert_eq!(params.min_term_len, 4);
    }

    #[test]
    fn test_extract_keywords_fn() {
        let stopwords: StopwordSet = ["language"].into_iter().collect();
        let keywords = extract_keywords(
            "Haskell is a purely functional programming language. \
             Haskell features lazy evaluation.",
            2,
            &stopwords,
            DEFAULT_DELIMITER,
        )
        .unwrap();
        assert_eq!(keywords, vec!["haskell", "evaluation"]);
    }

    #[test]
    fn test_extract_keywords_borrows_stopwords() {
        let stopwords = StopwordSet::english();
        let text = "The compiler and the runtime share the compiler cache";
        for _ in 0..3 {
            let keywords = extract_keywords(text, 2, &stopwords, DEFAULT_DELIMITER).unwrap();
            assert_eq!(keywords, vec!["compiler", "cache"]);
        }
        assert!(stopwords.contains("the"));
    }

    #[test]
    fn test_non_ascii_numeric_leading_terms_rank() {
        let keywords = extract_keywords(
            "½cup ½cup ²nd ⅷabc word",
            10,
            &StopwordSet::empty(),
            r"\s+",
        )
        .unwrap();
        assert_eq!(keywords, vec!["½cup", "word", "²nd", "ⅷabc"]);
    }
}
