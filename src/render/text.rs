//! Plain-text cards for terminal output.

use super::RenderTarget;
use crate::models::Campaign;
use crate::services::format_dollars;
use crate::services::format_thousands;

/// Collects cards as plain-text blocks.
#[derive(Debug, Clone, Default)]
pub struct TextCards {
    cards: Vec<String>,
}

impl TextCards {
    /// Creates an empty target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered cards in order.
    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when no cards are shown.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Joins all cards with a blank line between them.
    pub fn to_text(&self) -> String {
        self.cards.join("\n\n")
    }
}

impl RenderTarget for TextCards {
    fn clear(&mut self) {
        self.cards.clear();
    }

    fn append_card(&mut self, campaign: &Campaign) {
        self.cards.push(format_card(campaign));
    }
}

/// Formats one campaign as a text block.
pub fn format_card(campaign: &Campaign) -> String {
    let mut lines = vec![campaign.name.clone()];
    if !campaign.description.is_empty() {
        lines.push(format!("  {}", campaign.description));
    }
    lines.push(format!("  Pledged: {}", format_dollars(campaign.pledged)));
    lines.push(format!("  Goal:    {}", format_dollars(campaign.goal)));
    lines.push(format!("  Backers: {}", format_thousands(campaign.backers)));
    if !campaign.img.is_empty() {
        lines.push(format!("  Image:   {}", campaign.img));
    }
    lines.join("\n")
}
