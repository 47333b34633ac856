use std::time::{Duration, Instant};

/// A parse waiting for the author to stop typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingParse {
    pub deadline: Instant,
    /// Buffer version the parse was armed for
    pub version: u64,
}

/// Trailing-edge debounce holding at most one pending parse
///
/// Arming always replaces the previous deadline, so only an edit that stays
/// quiet for the whole delay ever fires.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<PendingParse>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a parse `delay` after `now`, returning the one it replaced
    pub fn arm(&mut self, now: Instant, version: u64) -> Option<PendingParse> {
        self.pending.replace(PendingParse {
            deadline: now + self.delay,
            version,
        })
    }

    /// Drop the pending parse, if any
    pub fn cancel(&mut self) -> Option<PendingParse> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<PendingParse> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending parse if its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<PendingParse> {
        match self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take(),
            _ => None,
        }
    }

    /// How long a host may sleep before the next `take_due` can fire
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|pending| pending.deadline.saturating_duration_since(now))
    }
}
