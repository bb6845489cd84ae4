//! Monotonic request tags for discarding stale responses.

use std::sync::atomic::{AtomicU64, Ordering};

/// Tag attached to an outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Issues increasing [`Ticket`]s and tells whether a ticket is still the
/// newest one.
///
/// A response is applied only if its ticket is current; anything older was
/// superseded while in flight.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// The most recently issued ticket, if any.
    pub fn latest(&self) -> Option<Ticket> {
        match self.latest.load(Ordering::SeqCst) {
            0 => None,
            n => Some(Ticket(n)),
        }
    }
}
