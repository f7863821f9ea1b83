//! View sequencing for fetch-then-render cycles.
//!
//! Each view change takes a ticket before fetching. When results come back, only the
//! most recently issued ticket may render; results for older tickets are dropped.

use serde::Serialize;

/// Ticket issued for one fetch-then-render cycle.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ViewTicket(u64);

/// Tracks the current view and the latest ticket. Owned by the caller, not global.
#[derive(Clone, Debug, Default)]
pub struct ViewSequencer<V> {
    latest: u64,
    current: Option<V>,
}

impl<V> ViewSequencer<V> {
    pub fn new() -> Self {
        Self {
            latest: 0,
            current: None,
        }
    }

    /// Start a cycle for `view`; any ticket issued before this one becomes stale.
    pub fn begin(&mut self, view: V) -> ViewTicket {
        self.latest += 1;
        self.current = Some(view);
        ViewTicket(self.latest)
    }

    pub fn is_current(&self, ticket: ViewTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Pass `output` through only if `ticket` is still the latest.
    pub fn accept<T>(&self, ticket: ViewTicket, output: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(output)
        } else {
            log::debug!("Dropping stale render for ticket {} (latest {})", ticket.0, self.latest);
            None
        }
    }

    pub fn current_view(&self) -> Option<&V> {
        self.current.as_ref()
    }
}
