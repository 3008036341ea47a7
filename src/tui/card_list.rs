//! Scrollable card list: the terminal's games container.
//!
//! Implements [`RenderTarget`] so the board repopulates it exactly like the
//! HTML and text renderers.

use std::cell::Cell;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::models::Campaign;
use crate::render::RenderTarget;
use crate::services::{format_dollars, format_thousands};

use super::Theme;

/// Card container state.
#[derive(Debug, Clone, Default)]
pub struct CardList {
    cards: Vec<Campaign>,
    /// Index of the first visible card
    offset: usize,
    /// Cards that fit in the last rendered area, for paging
    page: Cell<usize>,
}

impl CardList {
    /// Creates an empty card list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards currently in the container, in display order.
    #[must_use]
    pub fn cards(&self) -> &[Campaign] {
        &self.cards
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the container is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of the first visible card.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Scroll up one card.
    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// Scroll down one card.
    pub fn scroll_down(&mut self) {
        if self.offset + 1 < self.cards.len() {
            self.offset += 1;
        }
    }

    /// Scroll up one page of cards.
    pub fn page_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.page_size());
    }

    /// Scroll down one page of cards.
    pub fn page_down(&mut self) {
        self.offset = (self.offset + self.page_size()).min(self.last_index());
    }

    /// Scroll to the first card.
    pub fn jump_to_first(&mut self) {
        self.offset = 0;
    }

    /// Scroll to the last card.
    pub fn jump_to_last(&mut self) {
        self.offset = self.last_index();
    }

    fn last_index(&self) -> usize {
        self.cards.len().saturating_sub(1)
    }

    fn page_size(&self) -> usize {
        self.page.get().max(1)
    }

    /// Render the container with the given title.
    pub fn render(&self, f: &mut Frame, area: Rect, title: &str, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "))
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        let height = usize::from(inner.height);
        let width = usize::from(inner.width);

        let mut lines: Vec<Line> = Vec::new();
        let mut fitted = 0;
        if self.cards.is_empty() {
            lines.push(Line::from(Span::styled(
                "No games to show.",
                Style::default().fg(theme.text_muted),
            )));
        }
        for campaign in self.cards.iter().skip(self.offset) {
            let card = card_lines(campaign, width, theme);
            if fitted > 0 && lines.len() + card.len() > height {
                break;
            }
            lines.extend(card);
            fitted += 1;
        }
        self.page.set(fitted);

        f.render_widget(Paragraph::new(lines).block(block), area);

        if self.cards.len() > fitted {
            let mut scrollbar_state = ScrollbarState::new(self.cards.len()).position(self.offset);
            f.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                area,
                &mut scrollbar_state,
            );
        }
    }
}

impl RenderTarget for CardList {
    fn clear(&mut self) {
        self.cards.clear();
        self.offset = 0;
    }

    fn append_card(&mut self, campaign: &Campaign) {
        self.cards.push(campaign.clone());
    }
}

/// Lines for one card, followed by a blank separator.
fn card_lines(campaign: &Campaign, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let funded = campaign.is_funded();
    let status = if funded { "FUNDED" } else { "NEEDS FUNDING" };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            campaign.name.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("[{status}]"), Style::default().fg(theme.funding(funded))),
    ])];

    if !campaign.description.is_empty() {
        lines.push(Line::from(Span::styled(
            truncate(&campaign.description, width.saturating_sub(2)),
            Style::default().fg(theme.text_secondary),
        )));
    }

    lines.push(Line::from(vec![
        Span::styled("  Pledged: ", Style::default().fg(theme.text_muted)),
        Span::styled(
            format_dollars(campaign.pledged),
            Style::default().fg(theme.funding(funded)),
        ),
        Span::styled("   Goal: ", Style::default().fg(theme.text_muted)),
        Span::styled(format_dollars(campaign.goal), Style::default().fg(theme.text)),
        Span::styled("   Backers: ", Style::default().fg(theme.text_muted)),
        Span::styled(format_thousands(campaign.backers), Style::default().fg(theme.text)),
    ]));

    if !campaign.img.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  Image: {}", truncate(&campaign.img, width.saturating_sub(11))),
            Style::default().fg(theme.text_muted),
        )));
    }

    lines.push(Line::from(""));
    lines
}

/// Cuts `text` to `max` characters, marking the cut with "...".
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
