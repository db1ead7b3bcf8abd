//! Hamburger navigation toggle.
//!
//! The expanded flag lives on the toggle button as `aria-expanded`; the menu
//! panel mirrors it with an inline `display: block` when open. When collapsed
//! the inline value is cleared so the stylesheet default applies (hidden on
//! small layouts, visible on wide ones).

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub expanded: bool,
}

impl NavState {
    /// Parse an `aria-expanded` attribute value. Only `"true"` means expanded.
    pub fn from_aria(value: &str) -> Self {
        Self {
            expanded: value == "true",
        }
    }

    /// Invert the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }

    /// Inline `display` for the menu panel. Empty defers to the stylesheet.
    pub fn menu_display(self) -> &'static str {
        if self.expanded { "block" } else { "" }
    }
}
