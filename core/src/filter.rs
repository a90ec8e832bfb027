use crate::Posting;

/// Keep only postings whose combined searchable text contains every query
/// token as a substring (AND across tokens, each matched anywhere). An empty
/// token list filters nothing. Output preserves input order; ranking is a
/// separate step.
pub fn exact_filter<'a>(postings: &'a [Posting], tokens: &[String]) -> Vec<&'a Posting> {
    if tokens.is_empty() {
        return postings.iter().collect();
    }
    postings
        .iter()
        .filter(|p| {
            let blob = p.searchable_text();
            tokens.iter().all(|t| blob.contains(t.as_str()))
        })
        .collect()
}
