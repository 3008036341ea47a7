//! Ordered, load-once collection of campaigns.

use anyhow::{Context, Result};

use super::Campaign;

/// The full campaign list for one session.
///
/// Built once from the data source and owned by the board. There is no way
/// to add, remove or reorder entries after construction; every view is a
/// borrowed subset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CampaignCollection {
    campaigns: Vec<Campaign>,
}

impl CampaignCollection {
    /// Wraps an already-loaded list of campaigns.
    pub fn new(campaigns: Vec<Campaign>) -> Self {
        Self { campaigns }
    }

    /// Parses a JSON array of campaign records.
    pub fn from_json(json: &str) -> Result<Self> {
        let campaigns: Vec<Campaign> =
            serde_json::from_str(json).context("Campaign data must be a JSON array of records")?;
        Ok(Self::new(campaigns))
    }

    /// All campaigns in load order.
    pub fn as_slice(&self) -> &[Campaign] {
        &self.campaigns
    }

    /// Iterates campaigns in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, Campaign> {
        self.campaigns.iter()
    }

    /// Number of campaigns.
    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    /// True when nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }
}

impl<'a> IntoIterator for &'a CampaignCollection {
    type Item = &'a Campaign;
    type IntoIter = std::slice::Iter<'a, Campaign>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
