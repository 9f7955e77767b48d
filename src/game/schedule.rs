//! Deferred pair resolutions.

use alloc::vec::Vec;

use super::state::{ResolutionTicket, SessionId};

/// Queue of pending resolutions ordered by due time.
///
/// Entries carry the id of the session that scheduled them and are never
/// purged on restart; the controller compares ids when an entry fires and
/// drops the ones that belong to a replaced session.
#[derive(Debug, Default)]
pub(crate) struct Scheduler {
    queue: Vec<ResolutionTicket>,
}

impl Scheduler {
    pub(crate) const fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Schedules a resolution for `session` at `due_at_ms`.
    pub(crate) fn schedule(&mut self, session: SessionId, due_at_ms: u64) -> ResolutionTicket {
        let ticket = ResolutionTicket { session, due_at_ms };
        // Equal due times keep insertion order.
        let index = self
            .queue
            .partition_point(|queued| queued.due_at_ms <= due_at_ms);
        self.queue.insert(index, ticket);
        ticket
    }

    /// Removes and returns the earliest entry due at or before `now_ms`.
    pub(crate) fn pop_due(&mut self, now_ms: u64) -> Option<ResolutionTicket> {
        if self.queue.first()?.due_at_ms <= now_ms {
            Some(self.queue.remove(0))
        } else {
            None
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }
}
