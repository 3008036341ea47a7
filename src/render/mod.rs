//! Card rendering.
//!
//! A [`RenderTarget`] is anything that can be emptied and then receive one
//! card per campaign: the CLI's text output, an HTML fragment, or the card
//! list in the terminal UI. [`render`] drives a target the same way for all
//! of them.

pub mod html;
pub mod text;

pub use html::{escape_html, HtmlCards};
pub use text::TextCards;

use crate::models::Campaign;

/// A container that displays campaign cards.
pub trait RenderTarget {
    /// Removes every card currently shown.
    fn clear(&mut self);

    /// Appends one card after the existing ones.
    fn append_card(&mut self, campaign: &Campaign);
}

/// Replaces the target's cards with one card per campaign, in input order.
pub fn render<'a, T, I>(campaigns: I, target: &mut T)
where
    T: RenderTarget + ?Sized,
    I: IntoIterator<Item = &'a Campaign>,
{
    target.clear();
    for campaign in campaigns {
        target.append_card(campaign);
    }
}
