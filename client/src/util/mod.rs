//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, clocks) from
//! page and component logic to improve reuse and testability.

pub mod autoplay;
pub mod interval;
#[cfg(test)]
pub(crate) mod manual_timer;
pub mod year;
