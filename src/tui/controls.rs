//! Filter buttons and the search field.

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::Filter;

use super::{AppState, Focus};

/// Button order on screen, with the key that presses each one.
const BUTTONS: [(Filter, char); 3] = [
    (Filter::Unfunded, 'u'),
    (Filter::Funded, 'f'),
    (Filter::All, 'a'),
];

/// Controls row widget
pub struct Controls;

impl Controls {
    /// Render the filter buttons (left) and the search field (right).
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let active = state.board.view().filter();
        let mut spans: Vec<Span> = Vec::new();
        for (filter, key) in BUTTONS {
            let style = if active == Some(filter) {
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            spans.push(Span::styled(format!("[{key}] {}", filter.label()), style));
            spans.push(Span::raw("  "));
        }
        let buttons = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Filter ")
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(buttons, columns[0]);

        let focused = state.focus == Focus::Search;
        let border = if focused { theme.accent } else { theme.primary };
        let input = state.board.search_input();
        let text = if input.is_empty() && !focused {
            Span::styled("press / to search", Style::default().fg(theme.text_muted))
        } else {
            Span::styled(input.to_string(), Style::default().fg(theme.text))
        };
        let search = Paragraph::new(Line::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(search, columns[1]);

        if focused {
            let typed = u16::try_from(input.chars().count()).unwrap_or(u16::MAX);
            let max_x = columns[1].right().saturating_sub(2);
            let x = (columns[1].x + 1).saturating_add(typed).min(max_x);
            f.set_cursor_position(Position::new(x, columns[1].y + 1));
        }
    }
}
