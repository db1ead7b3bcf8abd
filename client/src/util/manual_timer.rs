//! Virtual-clock `RepeatingTimer` for tests.

use super::autoplay::RepeatingTimer;

/// Timer driven by `advance` instead of the browser event loop.
#[derive(Debug, Default)]
pub(crate) struct ManualTimer {
    now_ms: u64,
    interval_ms: u64,
    next_due_ms: Option<u64>,
    pub(crate) starts: usize,
    pub(crate) stops: usize,
}

impl ManualTimer {
    /// Move the clock forward by `ms`, returning how many ticks fell due.
    pub(crate) fn advance(&mut self, ms: u64) -> usize {
        let target = self.now_ms + ms;
        let mut fired = 0;
        while let Some(due) = self.next_due_ms {
            if due > target {
                break;
            }
            fired += 1;
            self.next_due_ms = Some(due + self.interval_ms);
        }
        self.now_ms = target;
        fired
    }

    pub(crate) fn next_due_ms(&self) -> Option<u64> {
        self.next_due_ms
    }

    pub(crate) fn now_ms(&self) -> u64 {
        self.now_ms
    }
}

impl RepeatingTimer for ManualTimer {
    fn start(&mut self, interval_ms: u32) {
        assert!(self.next_due_ms.is_none(), "start called on a running timer");
        self.interval_ms = u64::from(interval_ms.max(1));
        self.next_due_ms = Some(self.now_ms + self.interval_ms);
        self.starts += 1;
    }

    fn stop(&mut self) {
        if self.next_due_ms.take().is_some() {
            self.stops += 1;
        }
    }

    fn is_running(&self) -> bool {
        self.next_due_ms.is_some()
    }
}
