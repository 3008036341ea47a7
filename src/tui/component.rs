//! Component trait pattern for TUI components.
//!
//! Self-contained popups that handle their own input and rendering and
//! report back to `AppState` through events.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A component that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to the parent.
    /// Returns `None` if input was handled internally without needing parent action.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Events emitted by popup components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentEvent {
    /// Component closed naturally (e.g., help overlay dismissed)
    Closed,
    /// User asked to quit from inside the popup
    QuitRequested,
}
