//! Help overlay listing every keyboard shortcut, grouped by input context.
//!
//! Content comes from the [`ShortcutRegistry`], so the overlay always shows
//! the bindings the handlers actually use.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::constants::APP_NAME;
use crate::shortcuts::{ShortcutRegistry, MAIN_CONTEXT, SEARCH_CONTEXT};

use super::component::{Component, ComponentEvent};
use super::Theme;

/// Width reserved for the key column.
const KEY_COLUMN: usize = 18;

/// One row of the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
enum HelpRow {
    Section(&'static str),
    Entry(String, &'static str),
    Blank,
}

/// Scrollable help popup.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    rows: Vec<HelpRow>,
    /// Current scroll offset (row number)
    scroll_offset: usize,
}

impl HelpOverlay {
    /// Builds the overlay from the registered shortcuts.
    #[must_use]
    pub fn new(registry: &ShortcutRegistry) -> Self {
        let mut rows = vec![HelpRow::Section("BROWSING")];
        rows.extend(
            registry
                .help_entries(MAIN_CONTEXT)
                .into_iter()
                .map(|(keys, desc)| HelpRow::Entry(keys, desc)),
        );
        rows.push(HelpRow::Blank);
        rows.push(HelpRow::Section("SEARCH FIELD"));
        rows.push(HelpRow::Entry("any character".to_string(), "Type into the query"));
        rows.push(HelpRow::Entry("Backspace".to_string(), "Delete last character"));
        rows.extend(
            registry
                .help_entries(SEARCH_CONTEXT)
                .into_iter()
                .map(|(keys, desc)| HelpRow::Entry(keys, desc)),
        );
        Self {
            rows,
            scroll_offset: 0,
        }
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.rows.len() {
            self.scroll_offset += 1;
        }
    }

    fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        self.rows
            .iter()
            .map(|row| match row {
                HelpRow::Section(title) => Line::from(Span::styled(
                    format!("═══ {title} ═══"),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                )),
                HelpRow::Entry(keys, desc) => Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{keys:<KEY_COLUMN$}"),
                        Style::default().fg(theme.success),
                    ),
                    Span::styled(*desc, Style::default().fg(theme.text)),
                ]),
                HelpRow::Blank => Line::from(""),
            })
            .collect()
    }
}

impl Component for HelpOverlay {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => Some(ComponentEvent::Closed),
            KeyCode::Char('q') => Some(ComponentEvent::QuitRequested),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down();
                None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = super::centered_rect(70, 80, area);
        f.render_widget(Clear, popup);

        let title = format!(" {APP_NAME} - Help ");
        let scroll = u16::try_from(self.scroll_offset).unwrap_or(u16::MAX);
        let help = Paragraph::new(self.lines(theme))
            .scroll((scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_bottom(Line::from(" ?/Esc close  ↑/↓ scroll ").alignment(Alignment::Center))
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(help, popup);

        let mut scrollbar_state = ScrollbarState::new(self.rows.len()).position(self.scroll_offset);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            popup,
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_lists_both_contexts() {
        let overlay = HelpOverlay::new(&ShortcutRegistry::new());
        assert!(overlay.rows.contains(&HelpRow::Section("BROWSING")));
        assert!(overlay.rows.contains(&HelpRow::Section("SEARCH FIELD")));
        assert!(overlay
            .rows
            .contains(&HelpRow::Entry("Enter".to_string(), "Search game names")));
    }

    #[test]
    fn test_close_keys() {
        let mut overlay = HelpOverlay::new(&ShortcutRegistry::new());
        assert_eq!(overlay.handle_input(key(KeyCode::Esc)), Some(ComponentEvent::Closed));
        assert_eq!(
            overlay.handle_input(key(KeyCode::Char('?'))),
            Some(ComponentEvent::Closed)
        );
        assert_eq!(
            overlay.handle_input(key(KeyCode::Char('q'))),
            Some(ComponentEvent::QuitRequested)
        );
    }

    #[test]
    fn test_scrolling() {
        let mut overlay = HelpOverlay::new(&ShortcutRegistry::new());
        assert_eq!(overlay.handle_input(key(KeyCode::Up)), None);
        assert_eq!(overlay.scroll_offset(), 0);

        overlay.handle_input(key(KeyCode::Down));
        overlay.handle_input(key(KeyCode::Char('j')));
        assert_eq!(overlay.scroll_offset(), 2);

        overlay.handle_input(key(KeyCode::Home));
        assert_eq!(overlay.scroll_offset(), 0);
    }
}
