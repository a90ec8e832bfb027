use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::Posting;

/// One "user opened posting X at time T" event. Duplicates per posting are
/// allowed at write time; the view collapses them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub posting_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub clicked_at: OffsetDateTime,
}

/// Append-only click log. Records are never deleted; expiry happens lazily
/// when a view is read.
#[derive(Debug, Default)]
pub struct InteractionLog {
    records: Vec<InteractionRecord>,
}

impl InteractionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends unconditionally. Never rejects, never deduplicates.
    pub fn record(&mut self, posting_id: impl Into<String>, clicked_at: OffsetDateTime) {
        self.records.push(InteractionRecord {
            posting_id: posting_id.into(),
            clicked_at,
        });
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The "recently opened" view: records older than `retention` are
    /// dropped, the rest collapse to one entry per posting id (latest click
    /// wins) ordered by click time descending, and the result is joined
    /// against the live collection so ids removed upstream never surface.
    pub fn recent_view<'a>(
        &self,
        now: OffsetDateTime,
        retention: Duration,
        postings: &'a [Posting],
    ) -> Vec<&'a Posting> {
        let cutoff = now - retention;
        let mut latest: HashMap<&str, OffsetDateTime> = HashMap::new();
        for r in &self.records {
            if r.clicked_at < cutoff {
                continue;
            }
            let entry = latest.entry(r.posting_id.as_str()).or_insert(r.clicked_at);
            if r.clicked_at > *entry {
                *entry = r.clicked_at;
            }
        }
        let mut entries: Vec<(&str, OffsetDateTime)> = latest.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

        let by_id: HashMap<&str, &Posting> =
            postings.iter().map(|p| (p.id.as_str(), p)).collect();
        entries
            .into_iter()
            .filter_map(|(id, _)| by_id.get(id).copied())
            .collect()
    }
}
