//! Stateful search facade for a job-listing UI: owns the collection
//! snapshot, the raw/debounced query pair, the current page and the
//! interaction log, and derives everything else (result order, page window,
//! highlighted items) as pure functions of that state on every read.

use std::time::{Duration as StdDuration, Instant};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use joblens_core::fuzzy::{self, FieldWeights};
use joblens_core::highlight::highlight_posting;
use joblens_core::interactions::InteractionLog;
use joblens_core::page::{self, PageWindow};
use joblens_core::tokenizer::tokenize;
use joblens_core::{filter, Posting};

pub mod debounce;
pub mod error;

pub use debounce::Debouncer;
pub use error::{BoxError, EngineError};

/// Which evaluation path governs membership and order for a non-empty
/// query. One explicit selection, decided up front: `Fuzzy` (the default)
/// ranks by approximate similarity and ignores the exact filter's order;
/// `Exact` applies the conjunctive substring filter and keeps collection
/// order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    Exact,
    #[default]
    Fuzzy,
}

/// Tunables the host application supplies; none are hard-coded in the
/// pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub page_size: usize,
    /// Maximum number of page-number buttons shown at once.
    pub page_window: usize,
    /// Quiet period before a raw query settles, in milliseconds.
    pub quiet_period_ms: u64,
    /// Postings scoring below this are excluded in fuzzy mode.
    pub fuzzy_threshold: f64,
    /// Default retention for the recently-opened view, in days.
    pub retention_days: i64,
    pub strategy: MatchStrategy,
    pub weights: FieldWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: 30,
            page_window: 10,
            quiet_period_ms: 300,
            fuzzy_threshold: 0.55,
            retention_days: 10,
            strategy: MatchStrategy::default(),
            weights: FieldWeights::default(),
        }
    }
}

/// External persistence collaborator for click events. Best effort: an
/// error never rolls back the in-memory interaction log, and a host with an
/// async backend may satisfy this by handing the click to its own task.
pub trait InteractionSink {
    fn record_click(
        &self,
        posting_id: &str,
        user_id: &str,
        clicked_at: OffsetDateTime,
    ) -> Result<(), BoxError>;
}

/// Sink for hosts without click persistence.
#[derive(Debug, Default)]
pub struct NoopSink;

impl InteractionSink for NoopSink {
    fn record_click(&self, _: &str, _: &str, _: OffsetDateTime) -> Result<(), BoxError> {
        Ok(())
    }
}

/// Monotonic token identifying one fetch round-trip. A response installed
/// with a superseded ticket is discarded, so a slow response can never
/// clobber a newer collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

pub struct SearchEngine<S: InteractionSink> {
    config: EngineConfig,
    user_id: String,
    sink: S,
    postings: Vec<Posting>,
    debouncer: Debouncer,
    page: usize,
    log: Mutex<InteractionLog>,
    newest_ticket: u64,
}

impl<S: InteractionSink> SearchEngine<S> {
    /// A valid user identity is required up front; gating the anonymous
    /// state is the host's job, not this engine's.
    pub fn new(config: EngineConfig, user_id: impl Into<String>, sink: S) -> Self {
        let quiet = StdDuration::from_millis(config.quiet_period_ms);
        Self {
            config,
            user_id: user_id.into(),
            sink,
            postings: Vec::new(),
            debouncer: Debouncer::new(quiet),
            page: 0,
            log: Mutex::new(InteractionLog::new()),
            newest_ticket: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Issue a ticket before starting a fetch; pass it back to
    /// `install_postings` with the response.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.newest_ticket += 1;
        FetchTicket(self.newest_ticket)
    }

    /// Replace the collection snapshot. Rejects responses whose ticket has
    /// been superseded, leaving the prior collection in place. A successful
    /// install resets the page: the result-set identity changed.
    pub fn install_postings(
        &mut self,
        ticket: FetchTicket,
        postings: Vec<Posting>,
    ) -> Result<usize, EngineError> {
        if ticket.0 < self.newest_ticket {
            tracing::debug!(
                got = ticket.0,
                newest = self.newest_ticket,
                "discarding stale fetch response"
            );
            return Err(EngineError::StaleFetch {
                got: ticket.0,
                newest: self.newest_ticket,
            });
        }
        self.postings = postings;
        self.page = 0;
        tracing::debug!(count = self.postings.len(), "installed posting snapshot");
        Ok(self.postings.len())
    }

    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    /// Synchronous raw-query update, one call per keystroke. Re-arms the
    /// debounce deadline.
    pub fn set_raw_query(&mut self, text: impl Into<String>, now: Instant) {
        self.debouncer.submit(text, now);
    }

    pub fn raw_query(&self) -> &str {
        self.debouncer.raw()
    }

    pub fn debounced_query(&self) -> &str {
        self.debouncer.settled()
    }

    /// Drives the cooperative timer. Returns true when the query settled
    /// this call; the page resets to 0 because the result-set identity
    /// changed. Downstream views recompute from the settled value, exactly
    /// once per settle.
    pub fn poll(&mut self, now: Instant) -> bool {
        let settled = self.debouncer.poll(now).map(str::to_string);
        match settled {
            Some(query) => {
                self.page = 0;
                tracing::debug!(query = %query, "query settled");
                true
            }
            None => false,
        }
    }

    /// The ordered result set for the current (collection, settled query)
    /// pair. Empty query: recency order. Non-empty query: the configured
    /// match strategy alone decides membership and order.
    fn result_set(&self) -> Vec<&Posting> {
        let query = self.debouncer.settled();
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return page::sort_by_recency(&self.postings);
        }
        match self.config.strategy {
            MatchStrategy::Exact => filter::exact_filter(&self.postings, &tokens),
            MatchStrategy::Fuzzy => fuzzy::rank(
                &self.postings,
                query,
                &self.config.weights,
                self.config.fuzzy_threshold,
            ),
        }
    }

    fn clamped_page(&self, total: usize) -> usize {
        self.page.min(total.saturating_sub(1))
    }

    /// A stale page index is reachable through ordinary UI races, so it is
    /// clamped on the next read rather than rejected.
    pub fn set_page(&mut self, index: usize) {
        self.page = index;
        tracing::debug!(page = index, "page requested");
    }

    pub fn page_window(&self) -> PageWindow {
        let total = page::total_pages(self.result_set().len(), self.config.page_size);
        let current = self.clamped_page(total);
        PageWindow {
            current_page: current,
            total_pages: total,
            visible: page::page_window(current, total, self.config.page_window),
        }
    }

    /// Highlighted derived copies of the active page. Source postings are
    /// never mutated; an empty result set is a valid "no results" state.
    pub fn current_page_items(&self) -> Vec<Posting> {
        let results = self.result_set();
        let total = page::total_pages(results.len(), self.config.page_size);
        let current = self.clamped_page(total);
        let tokens = tokenize(self.debouncer.settled());
        page::page_slice(&results, current, self.config.page_size)
            .iter()
            .map(|p| highlight_posting(p, &tokens))
            .collect()
    }

    /// Append the click to the log, then report it to the persistence
    /// collaborator. A sink failure is returned as a non-fatal signal; the
    /// in-memory record stands either way.
    pub fn note_posting_opened(
        &self,
        posting: &Posting,
        now: OffsetDateTime,
    ) -> Result<(), EngineError> {
        self.log.lock().record(posting.id.clone(), now);
        if let Err(source) = self.sink.record_click(&posting.id, &self.user_id, now) {
            tracing::warn!(
                posting_id = %posting.id,
                error = %source,
                "interaction sink failed; keeping in-memory record"
            );
            return Err(EngineError::Sink {
                posting_id: posting.id.clone(),
                source,
            });
        }
        Ok(())
    }

    /// Deduplicated, windowed, reverse-chronological view of recently
    /// opened postings, joined against the live collection. `within_days`
    /// falls back to the configured retention.
    pub fn recently_opened_view(
        &self,
        within_days: Option<i64>,
        now: OffsetDateTime,
    ) -> Vec<Posting> {
        let days = within_days.unwrap_or(self.config.retention_days);
        self.log
            .lock()
            .recent_view(now, Duration::days(days), &self.postings)
            .into_iter()
            .cloned()
            .collect()
    }
}
