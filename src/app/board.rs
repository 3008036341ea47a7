//! The board: single owner of the campaign collection and the current view.
//!
//! Every user action (filter button, search submit) goes through a `Board`
//! method that picks a subset of the collection and re-renders a
//! [`RenderTarget`]. Nothing else holds the collection.

use std::fmt;

use crate::models::{Campaign, CampaignCollection};
use crate::render::{render, RenderTarget};
use crate::services::{search, summarize, top_by_pledged, Filter, Highlights, Summary};

/// What the card container is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Every campaign
    #[default]
    All,
    /// Only funded campaigns
    FundedOnly,
    /// Only unfunded campaigns
    UnfundedOnly,
    /// Results of the last submitted search
    SearchResults(String),
}

impl View {
    /// The filter button this view belongs to, if any.
    pub const fn filter(&self) -> Option<Filter> {
        match self {
            Self::All => Some(Filter::All),
            Self::FundedOnly => Some(Filter::Funded),
            Self::UnfundedOnly => Some(Filter::Unfunded),
            Self::SearchResults(_) => None,
        }
    }
}

impl From<Filter> for View {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::All => Self::All,
            Filter::Funded => Self::FundedOnly,
            Filter::Unfunded => Self::UnfundedOnly,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All games"),
            Self::FundedOnly => write!(f, "Funded games"),
            Self::UnfundedOnly => write!(f, "Unfunded games"),
            Self::SearchResults(query) => write!(f, "Search: \"{query}\""),
        }
    }
}

/// Coordinator for the campaign views.
#[derive(Debug, Clone)]
pub struct Board {
    campaigns: CampaignCollection,
    view: View,
    search_input: String,
    empty_query_shows_all: bool,
}

impl Board {
    /// Creates a board showing every campaign.
    pub fn new(campaigns: CampaignCollection) -> Self {
        Self {
            campaigns,
            view: View::All,
            search_input: String::new(),
            empty_query_shows_all: false,
        }
    }

    /// When enabled, submitting an empty search shows every campaign
    /// instead of leaving the view untouched.
    #[must_use]
    pub fn with_empty_query_shows_all(mut self, enabled: bool) -> Self {
        self.empty_query_shows_all = enabled;
        self
    }

    /// The full collection in load order.
    pub fn campaigns(&self) -> &CampaignCollection {
        &self.campaigns
    }

    /// Current view.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Current contents of the search field.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Replaces the search field contents without submitting.
    pub fn set_search_input(&mut self, input: impl Into<String>) {
        self.search_input = input.into();
    }

    /// Appends one character to the search field.
    pub fn push_search_char(&mut self, ch: char) {
        self.search_input.push(ch);
    }

    /// Removes the last character from the search field.
    pub fn pop_search_char(&mut self) {
        self.search_input.pop();
    }

    /// Totals over the full collection.
    pub fn summary(&self) -> Summary {
        summarize(&self.campaigns)
    }

    /// The `n` highest-pledged campaigns.
    pub fn top(&self, n: usize) -> Vec<&Campaign> {
        top_by_pledged(&self.campaigns, n)
    }

    /// The first/second highlight panels.
    pub fn highlights(&self) -> Highlights<'_> {
        Highlights::from_campaigns(&self.campaigns)
    }

    /// Campaigns belonging to the current view, in collection order.
    pub fn visible(&self) -> Vec<&Campaign> {
        self.visible_in(&self.view)
    }

    /// Campaigns belonging to `view`, in collection order.
    pub fn visible_in(&self, view: &View) -> Vec<&Campaign> {
        match view {
            View::SearchResults(query) => search(&self.campaigns, query).unwrap_or_default(),
            other => other.filter().unwrap_or_default().apply(&self.campaigns),
        }
    }

    /// The view a filter button followed by a search submit would land on,
    /// without touching this board. Follows the same empty-query rule as
    /// [`Board::submit_search`].
    pub fn view_for(&self, filter: Filter, query: Option<&str>) -> View {
        match query {
            Some(query) if !query.is_empty() => View::SearchResults(query.to_string()),
            Some(_) if self.empty_query_shows_all => View::All,
            _ => View::from(filter),
        }
    }

    /// Draws the current view without changing any state. Used for the
    /// first paint and after a target is recreated.
    pub fn render_current<T: RenderTarget + ?Sized>(&self, target: &mut T) {
        render(self.visible(), target);
    }

    /// Applies a filter button: clears the search field, shows the filtered
    /// campaigns and switches the view.
    pub fn apply_filter<T: RenderTarget + ?Sized>(&mut self, filter: Filter, target: &mut T) {
        self.search_input.clear();
        self.view = View::from(filter);
        let shown = filter.apply(&self.campaigns);
        tracing::debug!(?filter, shown = shown.len(), "applied filter");
        render(shown, target);
    }

    /// "Show All Games" button.
    pub fn show_all<T: RenderTarget + ?Sized>(&mut self, target: &mut T) {
        self.apply_filter(Filter::All, target);
    }

    /// "Show Funded Only" button.
    pub fn show_funded<T: RenderTarget + ?Sized>(&mut self, target: &mut T) {
        self.apply_filter(Filter::Funded, target);
    }

    /// "Show Unfunded Only" button.
    pub fn show_unfunded<T: RenderTarget + ?Sized>(&mut self, target: &mut T) {
        self.apply_filter(Filter::Unfunded, target);
    }

    /// Search button / Enter in the search field.
    ///
    /// Returns `true` when the target was re-rendered. An empty query leaves
    /// the target and view untouched unless the board was built with
    /// [`Board::with_empty_query_shows_all`].
    pub fn submit_search<T: RenderTarget + ?Sized>(&mut self, target: &mut T) -> bool {
        let query = self.search_input.clone();
        match search(&self.campaigns, &query) {
            Some(found) => {
                tracing::debug!(%query, matches = found.len(), "search submitted");
                render(found, target);
                self.view = View::SearchResults(query);
                true
            }
            None if self.empty_query_shows_all => {
                self.show_all(target);
                true
            }
            None => {
                tracing::trace!("empty search ignored");
                false
            }
        }
    }
}
