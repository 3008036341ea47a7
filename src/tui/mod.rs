//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

pub mod card_list;
pub mod component;
pub mod controls;
pub mod handlers;
pub mod help_overlay;
pub mod status_bar;
pub mod summary_panel;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::app::Board;
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::shortcuts::ShortcutRegistry;

// Re-export TUI components
pub use card_list::CardList;
pub use component::{Component, ComponentEvent};
pub use controls::Controls;
pub use help_overlay::HelpOverlay;
pub use status_bar::StatusBar;
pub use summary_panel::{SummaryPanel, SUMMARY_PANEL_HEIGHT};
pub use theme::Theme;

/// Which part of the screen receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Card list; single-letter shortcuts are active
    #[default]
    Cards,
    /// Search field; printable keys edit the query
    Search,
}

/// Application state - single source of truth
pub struct AppState {
    /// Campaign collection and current view
    pub board: Board,
    /// Rendered cards for the current view
    pub cards: CardList,
    /// Current theme
    pub theme: Theme,
    /// Application configuration
    pub config: Config,
    /// Key bindings
    pub shortcuts: ShortcutRegistry,
    /// Focused area
    pub focus: Focus,
    /// Help popup, when open
    pub help: Option<HelpOverlay>,
    /// One-line status message (empty shows key hints)
    pub status_message: String,
    /// Where the campaign data came from, for the status bar
    pub source: String,
    /// Set by the quit action
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state and paints the initial "all games" view.
    #[must_use]
    pub fn new(board: Board, config: Config, source: impl Into<String>) -> Self {
        let mut cards = CardList::new();
        board.render_current(&mut cards);

        let shortcuts = ShortcutRegistry::new();
        let help = config
            .ui
            .show_help_on_startup
            .then(|| HelpOverlay::new(&shortcuts));

        Self {
            board,
            cards,
            theme: Theme::from_mode(config.ui.theme_mode),
            config,
            shortcuts,
            focus: Focus::Cards,
            help,
            status_message: String::new(),
            source: source.into(),
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message.clear();
    }

    /// Title for the card container.
    #[must_use]
    pub fn cards_title(&self) -> String {
        format!("Our Games: {} ({})", self.board.view(), self.cards.len())
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout; resizes just redraw
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(state, key)? {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Title bar
            Constraint::Length(SUMMARY_PANEL_HEIGHT), // Stats, blurb, highlights
            Constraint::Length(3),                    // Filter buttons + search
            Constraint::Min(5),                       // Cards
            Constraint::Length(3),                    // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    SummaryPanel::render(f, chunks[1], &state.board, &state.theme);
    Controls::render(f, chunks[2], state);
    state
        .cards
        .render(f, chunks[3], &state.cards_title(), &state.theme);
    StatusBar::render(f, chunks[4], state, &state.theme);

    if let Some(help) = &state.help {
        help.render(f, f.area(), &state.theme);
    }
}

/// Render title bar with the application name
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title_widget = Paragraph::new(format!(" {APP_NAME}"))
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Helper function to create centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events. Returns `true` when the user quit.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    // Help overlay captures all input while open
    if let Some(help) = &mut state.help {
        match help.handle_input(key) {
            Some(ComponentEvent::Closed) => state.help = None,
            Some(ComponentEvent::QuitRequested) => {
                state.should_quit = true;
                return Ok(true);
            }
            None => {}
        }
        return Ok(false);
    }

    match state.focus {
        Focus::Cards => handlers::handle_main_input(state, key),
        Focus::Search => handlers::handle_search_input(state, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Campaign, CampaignCollection};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state() -> AppState {
        let board = Board::new(CampaignCollection::new(vec![
            Campaign::new("Emberfall", 50, 100, 5),
            Campaign::new("Tidewarden", 150, 100, 7),
            Campaign::new("Paper Orbit", 100, 100, 3),
        ]));
        let mut config = Config::default();
        config.ui.show_help_on_startup = false;
        config.ui.theme_mode = crate::config::ThemeMode::Dark;
        AppState::new(board, config, "test")
    }

    fn names(state: &AppState) -> Vec<&str> {
        state.cards.cards().iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_initial_view_shows_all() {
        let state = state();
        assert_eq!(names(&state), vec!["Emberfall", "Tidewarden", "Paper Orbit"]);
        assert_eq!(state.cards_title(), "Our Games: All games (3)");
    }

    #[test]
    fn test_help_on_startup() {
        let board = Board::new(CampaignCollection::default());
        let state = AppState::new(board, Config::default(), "test");
        assert!(state.help.is_some());
    }

    #[test]
    fn test_filter_keys() {
        let mut state = state();
        handle_key_event(&mut state, key(KeyCode::Char('u'))).unwrap();
        assert_eq!(names(&state), vec!["Emberfall"]);

        handle_key_event(&mut state, key(KeyCode::Char('f'))).unwrap();
        assert_eq!(names(&state), vec!["Tidewarden", "Paper Orbit"]);

        handle_key_event(&mut state, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(names(&state).len(), 3);
    }

    #[test]
    fn test_search_flow() {
        let mut state = state();
        handle_key_event(&mut state, key(KeyCode::Char('/'))).unwrap();
        assert_eq!(state.focus, Focus::Search);

        for c in "ORBIT".chars() {
            handle_key_event(&mut state, key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(state.board.search_input(), "ORBIT");

        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        assert_eq!(names(&state), vec!["Paper Orbit"]);

        handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();
        assert_eq!(state.focus, Focus::Cards);
    }

    #[test]
    fn test_empty_search_is_noop() {
        let mut state = state();
        handle_key_event(&mut state, key(KeyCode::Char('u'))).unwrap();
        handle_key_event(&mut state, key(KeyCode::Char('/'))).unwrap();
        handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
        assert_eq!(names(&state), vec!["Emberfall"]);
    }

    #[test]
    fn test_quit() {
        let mut state = state();
        assert!(handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap());
        assert!(state.should_quit);
    }

    #[test]
    fn test_help_captures_input() {
        let mut state = state();
        handle_key_event(&mut state, key(KeyCode::Char('?'))).unwrap();
        assert!(state.help.is_some());

        // Filter keys do nothing while help is open
        handle_key_event(&mut state, key(KeyCode::Char('u'))).unwrap();
        assert_eq!(names(&state).len(), 3);

        handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();
        assert!(state.help.is_none());
    }

    #[test]
    fn test_render_smoke() {
        let state = state();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Sea Monster Crowdfunding"));
        assert!(text.contains("Tidewarden"));
    }
}
