//! Relative term frequencies
//!
//! The denominator is the length of the raw token sequence, including empty
//! pieces and tokens the counter rejected, while the numerator only counts
//! qualifying terms. Frequencies of counted terms therefore do not sum to 1.
//! Switching the denominator to the filtered count would change every value.

use ahash::{AHashMap, AHashSet};
use tracing::trace;

use crate::counter::TermCounts;

/// Term -> count / total raw tokens
pub type TermFrequencies = AHashMap<String, f64>;

/// Compute term frequencies from the raw tokens and their counts.
///
/// Every distinct non-empty token gets an entry, filtered ones at 0.0.
/// Count entries whose term never occurs in `tokens` are reported at 0.0.
/// Empty input yields an empty map.
pub fn term_frequencies<S: AsRef<str>>(tokens: &[S], counts: &TermCounts) -> TermFrequencies {
    let total = tokens.len();
    if total == 0 {
        return TermFrequencies::new();
    }

    let mut seen = AHashSet::new();
    let mut freqs = TermFrequencies::with_capacity(counts.len());
    for token in tokens {
        let token = token.as_ref();
        if token.is_empty() || !seen.insert(token) {
            continue;
        }
        let count = counts.get(token).copied().unwrap_or(0);
        freqs.insert(token.to_owned(), count as f64 / total as f64);
    }

    for term in counts.keys() {
        if !seen.contains(term.as_str()) {
            freqs.insert(term.clone(), 0.0);
        }
    }

    trace!(total, terms = freqs.len(), "normalized frequencies");
    freqs
}
