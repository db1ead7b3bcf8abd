//! Browser `RepeatingTimer` backed by `setInterval`.
//!
//! With `hydrate`, `start` creates a `gloo_timers::callback::Interval`; dropping
//! it (on `stop` or when the timer itself is dropped) clears the interval.
//! Without `hydrate` (SSR and native tests) the timer only tracks whether it
//! would be running and never fires.

use std::rc::Rc;

use crate::util::autoplay::RepeatingTimer;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

pub struct IntervalTimer {
    on_tick: Rc<dyn Fn()>,
    #[cfg(feature = "hydrate")]
    handle: Option<Interval>,
    #[cfg(not(feature = "hydrate"))]
    running: bool,
}

impl IntervalTimer {
    pub fn new(on_tick: impl Fn() + 'static) -> Self {
        Self {
            on_tick: Rc::new(on_tick),
            #[cfg(feature = "hydrate")]
            handle: None,
            #[cfg(not(feature = "hydrate"))]
            running: false,
        }
    }
}

impl std::fmt::Debug for IntervalTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalTimer")
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl RepeatingTimer for IntervalTimer {
    fn start(&mut self, interval_ms: u32) {
        #[cfg(feature = "hydrate")]
        {
            let on_tick = Rc::clone(&self.on_tick);
            self.handle = Some(Interval::new(interval_ms, move || on_tick()));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (interval_ms, &self.on_tick);
            self.running = true;
        }
    }

    fn stop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            self.handle = None;
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.running = false;
        }
    }

    fn is_running(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.handle.is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.running
        }
    }
}
