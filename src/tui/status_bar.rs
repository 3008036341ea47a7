//! Status bar widget for status messages and contextual key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Focus, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: message (or hints) and the data source.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let first = if state.status_message.is_empty() {
            Self::hints_line(state.focus, theme)
        } else {
            Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.text),
            ))
        };

        let status = Paragraph::new(first)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .title_bottom(
                        Line::from(Span::styled(
                            format!(" Data: {} ", state.source),
                            Style::default().fg(theme.text_muted),
                        ))
                        .right_aligned(),
                    )
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Key hints for the focused area.
    fn hints_line(focus: Focus, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = match focus {
            Focus::Cards => &[
                ("u/f/a", "filter"),
                ("/", "search"),
                ("↑/↓", "scroll"),
                ("?", "help"),
                ("q", "quit"),
            ],
            Focus::Search => &[("Enter", "search"), ("Esc", "back"), ("Ctrl+u", "clear")],
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                (*action).to_string(),
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(spans)
    }
}
