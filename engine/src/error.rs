use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Collaborator-boundary failures. None of these corrupt the in-memory
/// result set or interaction log; callers may surface them as a
/// non-blocking notice.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Best-effort persistence of a click failed. The in-memory log already
    /// holds the record.
    #[error("interaction sink rejected click on posting {posting_id}")]
    Sink {
        posting_id: String,
        #[source]
        source: BoxError,
    },
    /// A fetch response arrived for a superseded request ticket and was
    /// discarded; the prior collection stays in place.
    #[error("stale fetch response (ticket {got}, newest issued {newest})")]
    StaleFetch { got: u64, newest: u64 },
}
