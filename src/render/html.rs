//! HTML game cards.

use html_escaper::Escape;
use std::fmt::Write as _;

use super::RenderTarget;
use crate::models::Campaign;
use crate::services::format_thousands;

/// Builds `<div class="game-card">` fragments.
#[derive(Debug, Clone, Default)]
pub struct HtmlCards {
    cards: Vec<String>,
}

impl HtmlCards {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when no cards are shown.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards concatenated, ready to drop into `#games-container`.
    pub fn to_html(&self) -> String {
        self.cards.concat()
    }
}

impl RenderTarget for HtmlCards {
    fn clear(&mut self) {
        self.cards.clear();
    }

    fn append_card(&mut self, campaign: &Campaign) {
        let mut card = String::new();
        // Writing into a String cannot fail.
        let _ = write!(
            card,
            "<div class=\"game-card\">\n  <img src=\"{}\" class=\"game-img\" alt=\"{}\" />\n  <b>{}</b>\n  <p>{}</p>\n  <p>Pledged: ${}</p>\n  <p>Goal: ${}</p>\n  <p>Backers: {}</p>\n</div>\n",
            Escape(&campaign.img),
            Escape(&campaign.name),
            Escape(&campaign.name),
            Escape(&campaign.description),
            format_thousands(campaign.pledged),
            format_thousands(campaign.goal),
            format_thousands(campaign.backers),
        );
        self.cards.push(card);
    }
}

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    Escape(input).to_string()
}
