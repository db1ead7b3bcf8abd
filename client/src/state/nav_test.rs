use super::*;

#[test]
fn nav_state_default_is_collapsed() {
    let nav = NavState::default();
    assert!(!nav.expanded);
    assert_eq!(nav.aria_expanded(), "false");
    assert_eq!(nav.menu_display(), "");
}

#[test]
fn toggle_opens_then_closes() {
    let mut nav = NavState::default();
    assert!(nav.toggle());
    assert_eq!(nav.aria_expanded(), "true");
    assert_eq!(nav.menu_display(), "block");

    assert!(!nav.toggle());
    assert_eq!(nav.aria_expanded(), "false");
    assert_eq!(nav.menu_display(), "");
}

#[test]
fn from_aria_only_accepts_literal_true() {
    assert!(NavState::from_aria("true").expanded);
    assert!(!NavState::from_aria("false").expanded);
    assert!(!NavState::from_aria("").expanded);
    assert!(!NavState::from_aria("TRUE").expanded);
}

#[test]
fn aria_round_trips_through_toggle() {
    let mut nav = NavState::from_aria("false");
    nav.toggle();
    assert_eq!(NavState::from_aria(nav.aria_expanded()), nav);
}
