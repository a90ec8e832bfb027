use std::time::{Duration, Instant};

/// Raw/settled query pair driven by a cooperative timer. Every submit
/// re-arms the deadline, so only the last pending value settles (last write
/// wins). The clock is injected through `submit`/`poll`, which keeps the
/// state machine deterministic under test. There is nothing here that can
/// fail; a pending value can only be superseded.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    raw: String,
    settled: String,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            raw: String::new(),
            settled: String::new(),
            deadline: None,
        }
    }

    /// Synchronous, unconditional raw update. Cancels any pending deadline.
    pub fn submit(&mut self, text: impl Into<String>, now: Instant) {
        self.raw = text.into();
        self.deadline = Some(now + self.quiet);
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn settled(&self) -> &str {
        &self.settled
    }

    /// Returns the newly settled value once per settle, even when it equals
    /// the previous settled value; downstream recomputation is idempotent so
    /// re-running it for an unchanged value is safe.
    pub fn poll(&mut self, now: Instant) -> Option<&str> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.settled = self.raw.clone();
                Some(&self.settled)
            }
            _ => None,
        }
    }
}
