//! Delimiter-based tokenizer
//!
//! Lowercases the input and splits it on a regex delimiter. Empty pieces
//! produced by leading, trailing or adjacent delimiters are kept: they never
//! become terms, but they are part of the token total used for frequencies.

use regex::Regex;

use crate::error::Result;

/// Default delimiter: any run of characters that are not ASCII letters or digits
pub const DEFAULT_DELIMITER: &str = "[^a-zA-Z0-9]+";

/// Splits text into lowercase tokens on a delimiter pattern
#[derive(Debug, Clone)]
pub struct Tokenizer {
    delimiter: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            delimiter: Regex::new(DEFAULT_DELIMITER).expect("default delimiter is a valid regex"),
        }
    }
}

impl Tokenizer {
    /// Create a tokenizer with a custom delimiter pattern
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            delimiter: Regex::new(pattern)?,
        })
    }

    /// The delimiter pattern this tokenizer splits on
    pub fn pattern(&self) -> &str {
        self.delimiter.as_str()
    }

    /// Tokenize text into the raw token sequence, empty pieces included
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let lowered = text.to_lowercase();
        self.delimiter.split(&lowered).map(str::to_owned).collect()
    }
}
