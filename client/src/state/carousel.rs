//! Hero carousel: slide index arithmetic and the autoplay controller.
//!
//! DESIGN
//! ======
//! `CarouselState` is the pure model. It stores only the current index, and
//! every slide/dot flag is derived from it, so "exactly one slide and its dot
//! are active" holds by construction. The slide count is a `NonZeroUsize`, so
//! `next`/`prev` wrap modulo a count of at least one and cannot leave range.
//!
//! `CarouselController` pairs the model with an `Autoplay` gate and carries
//! the interaction rules:
//!
//! - manual navigation (buttons, dots) moves and then resets the timer;
//! - a timer tick advances without touching the schedule;
//! - pointer enter stops the timer, pointer leave starts a fresh interval.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use std::num::NonZeroUsize;

use thiserror::Error;

use crate::util::autoplay::{Autoplay, AutoplayConfig, RepeatingTimer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("slide index {index} is out of range for {count} slides")]
    OutOfRange { index: usize, count: usize },
}

/// Which slide is showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    count: NonZeroUsize,
    current: usize,
}

impl CarouselState {
    /// New carousel showing slide 0.
    pub fn new(count: NonZeroUsize) -> Self {
        Self { count, current: 0 }
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Show slide `index`. Callers wrap; out-of-range is rejected unchanged.
    pub fn go_to(&mut self, index: usize) -> Result<usize, CarouselError> {
        if index >= self.count() {
            return Err(CarouselError::OutOfRange {
                index,
                count: self.count(),
            });
        }
        self.current = index;
        Ok(index)
    }

    pub fn first(&mut self) -> usize {
        self.current = 0;
        0
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.count();
        self.current
    }

    pub fn prev(&mut self) -> usize {
        let count = self.count();
        self.current = (self.current + count - 1) % count;
        self.current
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    pub fn slide_class(&self, index: usize) -> &'static str {
        if self.is_active(index) { "slide active" } else { "slide" }
    }

    pub fn dot_class(&self, index: usize) -> &'static str {
        if self.is_active(index) { "dot active" } else { "dot" }
    }

    /// `aria-selected` value for the dot at `index`.
    pub fn aria_selected(&self, index: usize) -> &'static str {
        if self.is_active(index) { "true" } else { "false" }
    }
}

/// Carousel model plus its autoplay schedule.
#[derive(Debug)]
pub struct CarouselController<T> {
    state: CarouselState,
    autoplay: Autoplay<T>,
}

impl<T: RepeatingTimer> CarouselController<T> {
    pub fn new(count: NonZeroUsize, timer: T, config: AutoplayConfig) -> Self {
        Self {
            state: CarouselState::new(count),
            autoplay: Autoplay::new(timer, config),
        }
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Mount-time setup: show slide 0 and begin autoplay.
    pub fn start(&mut self) -> usize {
        let index = self.state.first();
        self.autoplay.start();
        index
    }

    /// Autoplay fire.
    pub fn tick(&mut self) -> usize {
        self.state.next()
    }

    pub fn manual_next(&mut self) -> usize {
        let index = self.state.next();
        self.autoplay.reset();
        index
    }

    pub fn manual_prev(&mut self) -> usize {
        let index = self.state.prev();
        self.autoplay.reset();
        index
    }

    /// Dot click. The schedule is left alone when the index is rejected.
    pub fn manual_go_to(&mut self, index: usize) -> Result<usize, CarouselError> {
        let index = self.state.go_to(index)?;
        self.autoplay.reset();
        Ok(index)
    }

    /// Pointer entered the carousel.
    pub fn pause(&mut self) {
        self.autoplay.stop();
    }

    /// Pointer left the carousel. Always a full fresh interval.
    pub fn resume(&mut self) {
        self.autoplay.start();
    }

    #[cfg(test)]
    pub(crate) fn timer_mut(&mut self) -> &mut T {
        self.autoplay.timer_mut()
    }
}
