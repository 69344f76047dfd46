//! Top-N keyword selection

use std::cmp::Ordering;

use crate::frequency::TermFrequencies;

/// Order by descending frequency, then ascending term
fn by_rank(a: &(&str, f64), b: &(&str, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Convert a signed keyword count, treating zero and negatives as "none"
pub fn clamp_top_n(top_n: i64) -> usize {
    usize::try_from(top_n).unwrap_or(0)
}

/// Rank terms by frequency and keep the best `top_n`, paired with their frequency.
pub fn rank_scored(freqs: &TermFrequencies, top_n: usize) -> Vec<(String, f64)> {
    if top_n == 0 || freqs.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<(&str, f64)> = freqs.iter().map(|(t, &f)| (t.as_str(), f)).collect();
    ranked.sort_unstable_by(by_rank);

    ranked
        .into_iter()
        .take(top_n)
        .map(|(term, freq)| (term.to_owned(), freq))
        .collect()
}

/// The `top_n` most frequent terms, highest first. Ties are broken alphabetically.
pub fn top_keywords(freqs: &TermFrequencies, top_n: usize) -> Vec<String> {
    rank_scored(freqs, top_n)
        .into_iter()
        .map(|(term, _)| term)
        .collect()
}
