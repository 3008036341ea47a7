//! Action dispatch for the board TUI.

use anyhow::Result;

use crate::shortcuts::Action;
use crate::tui::{AppState, Focus, HelpOverlay};

/// Apply one action to the state. Returns `true` when the app should quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        Action::ShowUnfunded => {
            state.board.show_unfunded(&mut state.cards);
            state.set_status(showing(state.cards.len(), "unfunded"));
        }
        Action::ShowFunded => {
            state.board.show_funded(&mut state.cards);
            state.set_status(showing(state.cards.len(), "funded"));
        }
        Action::ShowAll => {
            state.board.show_all(&mut state.cards);
            state.clear_status();
        }

        Action::FocusSearch => {
            state.focus = Focus::Search;
            state.clear_status();
        }
        Action::SubmitSearch => {
            if state.board.submit_search(&mut state.cards) {
                let message = match state.cards.len() {
                    0 => "No games match your search".to_string(),
                    1 => "1 game found".to_string(),
                    n => format!("{n} games found"),
                };
                state.set_status(message);
                state.focus = Focus::Cards;
            } else {
                state.set_status("Type part of a game name, then press Enter");
            }
        }
        Action::LeaveSearch => state.focus = Focus::Cards,
        Action::ClearSearch => state.board.set_search_input(String::new()),

        Action::ScrollUp => state.cards.scroll_up(),
        Action::ScrollDown => state.cards.scroll_down(),
        Action::PageUp => state.cards.page_up(),
        Action::PageDown => state.cards.page_down(),
        Action::JumpToFirst => state.cards.jump_to_first(),
        Action::JumpToLast => state.cards.jump_to_last(),

        Action::ToggleHelp => {
            state.help = match state.help {
                Some(_) => None,
                None => Some(HelpOverlay::new(&state.shortcuts)),
            };
        }
        Action::Cancel => state.clear_status(),
        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
    }
    Ok(false)
}

fn showing(count: usize, kind: &str) -> String {
    if count == 1 {
        format!("Showing 1 {kind} game")
    } else {
        format!("Showing {count} {kind} games")
    }
}
