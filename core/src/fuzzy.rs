use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::tokenizer::tokenize;
use crate::Posting;

/// Per-field weights for approximate scoring. Title dominates, summary is
/// next, company and location carry a small equal share.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub title: f64,
    pub summary: f64,
    pub company: f64,
    pub location: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: 1.0,
            summary: 0.6,
            company: 0.25,
            location: 0.25,
        }
    }
}

/// Similarity of the query tokens against one field: each query token takes
/// its best Jaro-Winkler match among the field's tokens, averaged over the
/// query. Tolerant of word order and minor misspellings.
fn field_similarity(field: &str, query_tokens: &[String]) -> f64 {
    let field_tokens = tokenize(field);
    if field_tokens.is_empty() || query_tokens.is_empty() {
        return 0.0;
    }
    let sum: f64 = query_tokens
        .iter()
        .map(|qt| {
            field_tokens
                .iter()
                .map(|ft| jaro_winkler(qt, ft))
                .fold(0.0, f64::max)
        })
        .sum();
    sum / query_tokens.len() as f64
}

/// Weighted-average match score in [0, 1]. Pure function of its inputs so
/// repeated ranking of the same (query, collection) pair is identical.
pub fn score_posting(posting: &Posting, query_tokens: &[String], weights: &FieldWeights) -> f64 {
    let total = weights.title + weights.summary + weights.company + weights.location;
    if total <= 0.0 {
        return 0.0;
    }
    let weighted = weights.title * field_similarity(&posting.title, query_tokens)
        + weights.summary * field_similarity(&posting.summary, query_tokens)
        + weights.company * field_similarity(&posting.company, query_tokens)
        + weights.location * field_similarity(&posting.location, query_tokens);
    weighted / total
}

/// Rank the collection for a non-empty query: postings scoring below
/// `threshold` are excluded, the rest are ordered best match first. Ties
/// keep input order so the result is deterministic.
pub fn rank<'a>(
    postings: &'a [Posting],
    query: &str,
    weights: &FieldWeights,
    threshold: f64,
) -> Vec<&'a Posting> {
    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        return postings.iter().collect();
    }
    let mut scored: Vec<(usize, f64)> = postings
        .iter()
        .enumerate()
        .map(|(i, p)| (i, score_posting(p, &query_tokens, weights)))
        .filter(|(_, s)| *s >= threshold)
        .collect();
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    scored.into_iter().map(|(i, _)| &postings[i]).collect()
}
