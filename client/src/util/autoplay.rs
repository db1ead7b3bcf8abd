//! Cancellable repeating task used for carousel autoplay.
//!
//! DESIGN
//! ======
//! `RepeatingTimer` is the seam between carousel logic and the clock. The
//! browser implementation (`util::interval`) wraps a `gloo-timers` interval;
//! tests drive a virtual clock instead. `Autoplay` layers the start/stop/reset
//! contract on top so every caller gets the same guarantees:
//!
//! - at most one schedule is live (`start` always cancels first);
//! - `reset` grants a full fresh interval;
//! - a stopped timer never fires.

#[cfg(test)]
#[path = "autoplay_test.rs"]
mod autoplay_test;

/// Milliseconds between automatic slide advances.
pub const AUTOPLAY_INTERVAL_MS: u32 = 4500;

/// A repeating callback that can be scheduled and cancelled.
pub trait RepeatingTimer {
    /// Begin firing every `interval_ms`. Only called on an idle timer.
    fn start(&mut self, interval_ms: u32);

    /// Cancel any pending fire. No-op when idle.
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

/// Autoplay settings. Enabled with the standard interval by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoplayConfig {
    pub enabled: bool,
    pub interval_ms: u32,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: AUTOPLAY_INTERVAL_MS,
        }
    }
}

/// Start/stop/reset gate over a `RepeatingTimer`.
#[derive(Debug)]
pub struct Autoplay<T> {
    timer: T,
    config: AutoplayConfig,
}

impl<T: RepeatingTimer> Autoplay<T> {
    pub fn new(timer: T, config: AutoplayConfig) -> Self {
        Self { timer, config }
    }

    /// Schedule ticks from now. Replaces any running schedule.
    pub fn start(&mut self) {
        self.timer.stop();
        if self.config.enabled {
            self.timer.start(self.config.interval_ms);
        }
    }

    pub fn stop(&mut self) {
        self.timer.stop();
    }

    /// Cancel the pending tick and reschedule a full interval away.
    pub fn reset(&mut self) {
        self.stop();
        self.start();
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn config(&self) -> AutoplayConfig {
        self.config
    }

    #[cfg(test)]
    pub(crate) fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }
}
