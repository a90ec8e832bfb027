use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;

/// One job listing as delivered by the backend. `id` is stable across
/// fetches and never mutated here; fields the engine does not understand
/// ride along in `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Posting {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub posted_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub inserted_at: Option<OffsetDateTime>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Posting {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            company: String::new(),
            location: String::new(),
            summary: String::new(),
            posted_at: None,
            inserted_at: None,
            extra: Map::new(),
        }
    }

    /// Lowercase concatenation of the fields exact matching runs over.
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title, self.company, self.location, self.summary
        )
        .to_lowercase()
    }
}
