//! Search field input handler.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::shortcuts::SEARCH_CONTEXT;
use crate::tui::AppState;

/// Handle input while the search field has focus.
///
/// Bound keys dispatch actions; everything else edits the query.
pub fn handle_search_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if let Some(action) = state.shortcuts.lookup(SEARCH_CONTEXT, key) {
        return super::dispatch_action(state, action);
    }

    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            state.board.push_search_char(c);
        }
        KeyCode::Backspace => state.board.pop_search_char(),
        _ => {}
    }
    Ok(false)
}
