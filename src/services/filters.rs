//! Funding-status filters.

use serde::{Deserialize, Serialize};

use crate::models::Campaign;

/// Which campaigns a filter button keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every campaign
    #[default]
    All,
    /// Campaigns that reached their goal (`pledged >= goal`)
    Funded,
    /// Campaigns still below their goal (`pledged < goal`)
    Unfunded,
}

impl Filter {
    /// Tests one campaign against the filter.
    pub fn matches(self, campaign: &Campaign) -> bool {
        match self {
            Self::All => true,
            Self::Funded => campaign.is_funded(),
            Self::Unfunded => campaign.is_unfunded(),
        }
    }

    /// Keeps the matching campaigns, preserving their order.
    pub fn apply<'a, I>(self, campaigns: I) -> Vec<&'a Campaign>
    where
        I: IntoIterator<Item = &'a Campaign>,
    {
        campaigns.into_iter().filter(|c| self.matches(c)).collect()
    }

    /// Button label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Show All Games",
            Self::Funded => "Show Funded Only",
            Self::Unfunded => "Show Unfunded Only",
        }
    }
}

impl std::str::FromStr for Filter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "funded" => Ok(Self::Funded),
            "unfunded" => Ok(Self::Unfunded),
            other => anyhow::bail!("Unknown filter '{other}' (expected all, funded or unfunded)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs() -> Vec<Campaign> {
        vec![
            Campaign::new("first", 50, 100, 0),
            Campaign::new("second", 150, 100, 0),
            Campaign::new("third", 100, 100, 0),
        ]
    }

    fn names(list: &[&Campaign]) -> Vec<String> {
        list.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_unfunded_filter() {
        let campaigns = pairs();
        assert_eq!(names(&Filter::Unfunded.apply(&campaigns)), vec!["first"]);
    }

    #[test]
    fn test_funded_filter_includes_boundary() {
        let campaigns = pairs();
        assert_eq!(
            names(&Filter::Funded.apply(&campaigns)),
            vec!["second", "third"]
        );
    }

    #[test]
    fn test_all_filter_keeps_everything() {
        let campaigns = pairs();
        assert_eq!(Filter::All.apply(&campaigns).len(), campaigns.len());
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!("funded".parse::<Filter>().unwrap(), Filter::Funded);
        assert_eq!("UNFUNDED".parse::<Filter>().unwrap(), Filter::Unfunded);
        assert_eq!("".parse::<Filter>().unwrap(), Filter::All);
        assert!("pending".parse::<Filter>().is_err());
    }
}
