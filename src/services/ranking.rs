//! Top-N selection by pledged amount.

use crate::models::Campaign;

/// Returns the `n` highest-pledged campaigns, highest first.
///
/// Sorts a list of references, so the caller's collection keeps its order.
/// The sort is stable: campaigns with equal pledges keep their collection
/// order relative to each other.
pub fn top_by_pledged<'a, I>(campaigns: I, n: usize) -> Vec<&'a Campaign>
where
    I: IntoIterator<Item = &'a Campaign>,
{
    let mut ranked: Vec<&Campaign> = campaigns.into_iter().collect();
    ranked.sort_by(|a, b| b.pledged.cmp(&a.pledged));
    ranked.truncate(n);
    ranked
}

/// The two highlight panels ("Top Funded Game" and "Runner Up").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Highlights<'a> {
    /// Highest-pledged campaign
    pub first: Option<&'a Campaign>,
    /// Second-highest-pledged campaign
    pub second: Option<&'a Campaign>,
}

impl<'a> Highlights<'a> {
    /// Picks the top two campaigns. Panels stay empty when there are
    /// fewer than two campaigns.
    pub fn from_campaigns<I>(campaigns: I) -> Self
    where
        I: IntoIterator<Item = &'a Campaign>,
    {
        let mut top = top_by_pledged(campaigns, 2).into_iter();
        Self {
            first: top.next(),
            second: top.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<Campaign> {
        vec![
            Campaign::new("A", 500, 0, 0),
            Campaign::new("B", 900, 0, 0),
            Campaign::new("C", 100, 0, 0),
        ]
    }

    #[test]
    fn test_top_two() {
        let campaigns = abc();
        let top = top_by_pledged(&campaigns, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "B");
        assert_eq!(top[1].name, "A");
    }

    #[test]
    fn test_source_order_untouched() {
        let campaigns = abc();
        let _ = top_by_pledged(&campaigns, 3);
        let names: Vec<&str> = campaigns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_ties_keep_collection_order() {
        let campaigns = vec![
            Campaign::new("early", 300, 0, 0),
            Campaign::new("late", 300, 0, 0),
        ];
        let top = top_by_pledged(&campaigns, 2);
        assert_eq!(top[0].name, "early");
        assert_eq!(top[1].name, "late");
    }

    #[test]
    fn test_n_larger_than_collection() {
        let campaigns = abc();
        assert_eq!(top_by_pledged(&campaigns, 10).len(), 3);
        assert!(top_by_pledged(&campaigns, 0).is_empty());
    }

    #[test]
    fn test_highlights() {
        let campaigns = abc();
        let highlights = Highlights::from_campaigns(&campaigns);
        assert_eq!(highlights.first.map(|c| c.name.as_str()), Some("B"));
        assert_eq!(highlights.second.map(|c| c.name.as_str()), Some("A"));
    }

    #[test]
    fn test_highlights_short_collection() {
        let one = vec![Campaign::new("solo", 1, 0, 0)];
        let highlights = Highlights::from_campaigns(&one);
        assert_eq!(highlights.first.map(|c| c.name.as_str()), Some("solo"));
        assert!(highlights.second.is_none());

        let none: Vec<Campaign> = Vec::new();
        assert_eq!(Highlights::from_campaigns(&none), Highlights::default());
    }
}
