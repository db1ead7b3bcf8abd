use super::*;
use crate::util::manual_timer::ManualTimer;

fn count(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn controller(n: usize) -> CarouselController<ManualTimer> {
    CarouselController::new(count(n), ManualTimer::default(), AutoplayConfig::default())
}

/// Advance the virtual clock and deliver each due tick, like the browser would.
fn advance(ctrl: &mut CarouselController<ManualTimer>, ms: u64) -> usize {
    let fired = ctrl.timer_mut().advance(ms);
    for _ in 0..fired {
        ctrl.tick();
    }
    fired
}

fn assert_single_active(state: &CarouselState) {
    let active_slides = (0..state.count()).filter(|&i| state.slide_class(i) == "slide active").count();
    let active_dots = (0..state.count()).filter(|&i| state.dot_class(i) == "dot active").count();
    let selected = (0..state.count()).filter(|&i| state.aria_selected(i) == "true").count();
    assert_eq!(active_slides, 1);
    assert_eq!(active_dots, 1);
    assert_eq!(selected, 1);
    assert!(state.is_active(state.current()));
}

// =============================================================
// CarouselState index arithmetic
// =============================================================

#[test]
fn new_state_starts_at_first_slide() {
    let state = CarouselState::new(count(3));
    assert_eq!(state.current(), 0);
    assert_eq!(state.count(), 3);
    assert_single_active(&state);
}

#[test]
fn next_lands_on_successor_modulo_count() {
    for n in 1..=6 {
        for start in 0..n {
            let mut state = CarouselState::new(count(n));
            state.go_to(start).unwrap();
            assert_eq!(state.next(), (start + 1) % n);
        }
    }
}

#[test]
fn prev_lands_on_predecessor_modulo_count() {
    for n in 1..=6 {
        for start in 0..n {
            let mut state = CarouselState::new(count(n));
            state.go_to(start).unwrap();
            assert_eq!(state.prev(), (start + n - 1) % n);
        }
    }
}

#[test]
fn prev_from_first_wraps_to_last() {
    let mut state = CarouselState::new(count(4));
    assert_eq!(state.prev(), 3);
}

#[test]
fn next_applied_count_times_returns_to_start() {
    let mut state = CarouselState::new(count(5));
    state.go_to(2).unwrap();
    for _ in 0..5 {
        state.next();
    }
    assert_eq!(state.current(), 2);
}

#[test]
fn single_slide_stays_put() {
    let mut state = CarouselState::new(count(1));
    assert_eq!(state.next(), 0);
    assert_eq!(state.prev(), 0);
}

#[test]
fn go_to_rejects_out_of_range_without_moving() {
    let mut state = CarouselState::new(count(3));
    state.go_to(1).unwrap();
    assert_eq!(state.go_to(3), Err(CarouselError::OutOfRange { index: 3, count: 3 }));
    assert_eq!(state.current(), 1);
}

#[test]
fn exactly_one_slide_active_through_any_navigation() {
    let mut state = CarouselState::new(count(4));
    for step in 0..20 {
        match step % 3 {
            0 => {
                state.next();
            }
            1 => {
                state.prev();
            }
            _ => {
                state.go_to(step % 4).unwrap();
            }
        }
        assert_single_active(&state);
    }
}

#[test]
fn out_of_range_error_message_names_index_and_count() {
    let err = CarouselError::OutOfRange { index: 7, count: 3 };
    assert_eq!(err.to_string(), "slide index 7 is out of range for 3 slides");
}

// =============================================================
// CarouselController autoplay
// =============================================================

#[test]
fn start_shows_first_slide_and_runs_autoplay() {
    let mut ctrl = controller(3);
    ctrl.manual_next();
    assert_eq!(ctrl.start(), 0);
    assert_eq!(ctrl.state().current(), 0);
    assert!(ctrl.is_autoplaying());
}

#[test]
fn autoplay_advances_every_interval() {
    let mut ctrl = controller(3);
    ctrl.start();
    assert_eq!(advance(&mut ctrl, 4499), 0);
    assert_eq!(ctrl.state().current(), 0);
    assert_eq!(advance(&mut ctrl, 1), 1);
    assert_eq!(ctrl.state().current(), 1);
    advance(&mut ctrl, 9000);
    assert_eq!(ctrl.state().current(), 0);
}

#[test]
fn manual_next_resets_schedule() {
    let mut ctrl = controller(3);
    ctrl.start();
    advance(&mut ctrl, 4000);
    assert_eq!(ctrl.manual_next(), 1);

    // The old deadline at 4500 must not fire.
    assert_eq!(advance(&mut ctrl, 4499), 0);
    assert_eq!(ctrl.state().current(), 1);
    assert_eq!(advance(&mut ctrl, 1), 1);
    assert_eq!(ctrl.state().current(), 2);
}

#[test]
fn manual_prev_resets_schedule() {
    let mut ctrl = controller(3);
    ctrl.start();
    advance(&mut ctrl, 4400);
    assert_eq!(ctrl.manual_prev(), 2);
    assert_eq!(ctrl.timer_mut().next_due_ms(), Some(4400 + 4500));
    assert_eq!(advance(&mut ctrl, 4499), 0);
    assert_eq!(ctrl.state().current(), 2);
}

#[test]
fn manual_go_to_resets_schedule() {
    let mut ctrl = controller(4);
    ctrl.start();
    advance(&mut ctrl, 3000);
    assert_eq!(ctrl.manual_go_to(3), Ok(3));
    let now = ctrl.timer_mut().now_ms();
    assert_eq!(ctrl.timer_mut().next_due_ms(), Some(now + 4500));
}

#[test]
fn manual_go_to_out_of_range_keeps_schedule() {
    let mut ctrl = controller(2);
    ctrl.start();
    advance(&mut ctrl, 1000);
    assert!(ctrl.manual_go_to(5).is_err());
    assert_eq!(ctrl.timer_mut().next_due_ms(), Some(4500));
    assert_eq!(ctrl.state().current(), 0);
}

#[test]
fn tick_does_not_reschedule() {
    let mut ctrl = controller(3);
    ctrl.start();
    let starts = ctrl.timer_mut().starts;
    advance(&mut ctrl, 4500 * 3);
    assert_eq!(ctrl.timer_mut().starts, starts);
}

// =============================================================
// Hover pause
// =============================================================

#[test]
fn pause_stops_autoplay_until_resume() {
    let mut ctrl = controller(3);
    ctrl.start();
    advance(&mut ctrl, 2000);
    ctrl.pause();
    assert!(!ctrl.is_autoplaying());
    assert_eq!(advance(&mut ctrl, 60_000), 0);
    assert_eq!(ctrl.state().current(), 0);
}

#[test]
fn resume_grants_full_interval_not_remaining_time() {
    let mut ctrl = controller(3);
    ctrl.start();
    advance(&mut ctrl, 4000);
    ctrl.pause();
    advance(&mut ctrl, 100);
    ctrl.resume();
    assert!(ctrl.is_autoplaying());
    assert_eq!(advance(&mut ctrl, 4499), 0);
    assert_eq!(advance(&mut ctrl, 1), 1);
    assert_eq!(ctrl.state().current(), 1);
}

#[test]
fn manual_navigation_while_hovered_restarts_autoplay() {
    let mut ctrl = controller(3);
    ctrl.start();
    ctrl.pause();
    ctrl.manual_next();
    assert!(ctrl.is_autoplaying());
}

#[test]
fn resume_without_pause_keeps_a_single_schedule() {
    let mut ctrl = controller(3);
    ctrl.start();
    advance(&mut ctrl, 1000);
    ctrl.resume();
    assert_eq!(advance(&mut ctrl, 4500), 1);
}
