//! Crowdfunding campaign record.

use serde::{Deserialize, Deserializer, Serialize};

/// One crowdfunding campaign as shown on a card.
///
/// Records are read from a JSON array and never modified afterwards.
/// Missing fields fall back to empty text or zero, and numeric fields
/// accept integers, non-negative floats (truncated) or numeric strings.
/// Anything else reads as zero so a sloppy record still renders.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Campaign {
    /// Campaign title (e.g., "Emberfall Tactics")
    #[serde(default)]
    pub name: String,
    /// Image reference, usually a URL
    #[serde(default)]
    pub img: String,
    /// Short pitch text
    #[serde(default)]
    pub description: String,
    /// Amount pledged so far, in whole dollars
    #[serde(default, deserialize_with = "lenient_amount")]
    pub pledged: u64,
    /// Funding goal, in whole dollars
    #[serde(default, deserialize_with = "lenient_amount")]
    pub goal: u64,
    /// Number of backers
    #[serde(default, deserialize_with = "lenient_amount")]
    pub backers: u64,
}

impl Campaign {
    /// Creates a campaign with empty image and description.
    pub fn new(name: impl Into<String>, pledged: u64, goal: u64, backers: u64) -> Self {
        Self {
            name: name.into(),
            img: String::new(),
            description: String::new(),
            pledged,
            goal,
            backers,
        }
    }

    /// Sets the image reference.
    #[must_use]
    pub fn with_img(mut self, img: impl Into<String>) -> Self {
        self.img = img.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns true when the pledged amount has reached the goal.
    ///
    /// The boundary is inclusive: `pledged == goal` counts as funded.
    pub fn is_funded(&self) -> bool {
        self.pledged >= self.goal
    }

    /// Returns true when the pledged amount is still below the goal.
    pub fn is_unfunded(&self) -> bool {
        self.pledged < self.goal
    }
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(amount_from_value(&value))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn amount_from_value(value: &serde_json::Value) -> u64 {
    match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        serde_json::Value::String(s) => {
            let trimmed = s.trim();
            trimmed.parse::<u64>().ok().unwrap_or_else(|| {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map_or(0, |f| f as u64)
            })
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_funded_boundary_is_inclusive() {
        let exact = Campaign::new("Exact", 100, 100, 1);
        assert!(exact.is_funded());
        assert!(!exact.is_unfunded());
    }

    #[test]
    fn test_exactly_one_status_holds() {
        for (pledged, goal) in [(0, 0), (0, 1), (1, 0), (50, 100), (150, 100), (100, 100)] {
            let c = Campaign::new("c", pledged, goal, 0);
            assert_ne!(c.is_funded(), c.is_unfunded(), "pledged={pledged} goal={goal}");
        }
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "name": "Emberfall Tactics",
            "img": "https://example.com/ember.png",
            "description": "Turn-based strategy",
            "pledged": 52000,
            "goal": 40000,
            "backers": 811
        }"#;
        let c: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(c.name, "Emberfall Tactics");
        assert_eq!(c.pledged, 52_000);
        assert_eq!(c.goal, 40_000);
        assert_eq!(c.backers, 811);
        assert!(c.is_funded());
    }

    #[test]
    fn test_missing_fields_default_to_blank() {
        let c: Campaign = serde_json::from_str(r#"{"name": "Bare"}"#).unwrap();
        assert_eq!(c.name, "Bare");
        assert!(c.img.is_empty());
        assert!(c.description.is_empty());
        assert_eq!(c.pledged, 0);
        assert_eq!(c.goal, 0);
        assert_eq!(c.backers, 0);
    }

    #[test]
    fn test_lenient_numbers() {
        let c: Campaign = serde_json::from_str(
            r#"{"name": "Odd", "pledged": "1200", "goal": 999.9, "backers": null}"#,
        )
        .unwrap();
        assert_eq!(c.pledged, 1200);
        assert_eq!(c.goal, 999);
        assert_eq!(c.backers, 0);

        let c: Campaign =
            serde_json::from_str(r#"{"pledged": -5, "goal": "lots", "backers": [1]}"#).unwrap();
        assert_eq!(c.pledged, 0);
        assert_eq!(c.goal, 0);
        assert_eq!(c.backers, 0);
    }
}
