//! Menu visibility state machine.
//!
//! Two states, hidden and visible, starting hidden. The toggle is a plain
//! synchronous flip with no suspension point, so the flag the renderer
//! reads always matches the state the last trigger produced.

/// Visibility of the feed menu panel.
///
/// `is_hidden` is the observable marker; the renderer consults it on the
/// same tick the toggle ran, so there is no intermediate observable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    hidden: bool,
}

impl Default for MenuState {
    /// The menu starts hidden.
    fn default() -> Self {
        Self { hidden: true }
    }
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip visibility: hidden becomes visible, visible becomes hidden.
    pub fn toggle(&mut self) {
        self.hidden = !self.hidden;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}
