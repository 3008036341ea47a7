//! Stats widgets, description blurb and the top-funded highlight panels.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::Board;
use crate::models::Campaign;
use crate::services::{format_dollars, format_thousands};

use super::Theme;

/// Rows the panel needs: stats (3) + blurb (4) + highlights (4).
pub const SUMMARY_PANEL_HEIGHT: u16 = 11;

/// Summary panel widget
pub struct SummaryPanel;

impl SummaryPanel {
    /// Render the panel for the board's full collection.
    pub fn render(f: &mut Frame, area: Rect, board: &Board, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(4),
            ])
            .split(area);

        let summary = board.summary();

        let stats = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(rows[0]);
        Self::render_stat(
            f,
            stats[0],
            "Individual Contributions",
            format_thousands(summary.total_backers),
            theme,
        );
        Self::render_stat(
            f,
            stats[1],
            "Total Raised",
            format_dollars(summary.total_pledged),
            theme,
        );
        Self::render_stat(
            f,
            stats[2],
            "Total Games",
            format_thousands(summary.count as u64),
            theme,
        );

        let blurb = Paragraph::new(summary.blurb())
            .style(Style::default().fg(theme.text_secondary))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" About "));
        f.render_widget(blurb, rows[1]);

        let highlights = board.highlights();
        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50); 2])
            .split(rows[2]);
        Self::render_highlight(f, panels[0], "Top Funded Game", highlights.first, theme);
        Self::render_highlight(f, panels[1], "Runner Up", highlights.second, theme);
    }

    fn render_stat(f: &mut Frame, area: Rect, label: &str, value: String, theme: &Theme) {
        let widget = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {label} "))
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(widget, area);
    }

    fn render_highlight(
        f: &mut Frame,
        area: Rect,
        label: &str,
        campaign: Option<&Campaign>,
        theme: &Theme,
    ) {
        let lines = match campaign {
            Some(campaign) => vec![
                Line::from(Span::styled(
                    campaign.name.clone(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("{} pledged", format_dollars(campaign.pledged)),
                    Style::default().fg(theme.funding(campaign.is_funded())),
                )),
            ],
            None => vec![Line::from(Span::styled(
                "Not enough games yet",
                Style::default().fg(theme.text_muted),
            ))],
        };

        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {label} "))
                .border_style(Style::default().fg(theme.accent)),
        );
        f.render_widget(widget, area);
    }
}
