//! Aggregate statistics shown in the summary widgets.

use serde::Serialize;

use crate::models::Campaign;

/// Totals over a set of campaigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    /// Sum of backers across all campaigns
    pub total_backers: u64,
    /// Sum of pledged amounts across all campaigns
    pub total_pledged: u64,
    /// Number of campaigns
    pub count: usize,
    /// Number of campaigns still below their goal
    pub unfunded: usize,
}

impl Summary {
    /// Describes the totals in one paragraph for the description panel.
    pub fn blurb(&self) -> String {
        let remaining = if self.unfunded == 1 {
            format!("{} game remains", self.unfunded)
        } else {
            format!("{} games remain", self.unfunded)
        };

        format!(
            "A total of {} has been raised for {} games. Currently, {} unfunded. \
             We need your help to fund these amazing games!",
            format_dollars(self.total_pledged),
            format_thousands(self.count as u64),
            remaining
        )
    }
}

/// Folds a set of campaigns into a [`Summary`]. An empty input yields zeros.
pub fn summarize<'a, I>(campaigns: I) -> Summary
where
    I: IntoIterator<Item = &'a Campaign>,
{
    let campaigns: Vec<&Campaign> = campaigns.into_iter().collect();

    let mut summary = campaigns
        .iter()
        .fold(Summary::default(), |mut acc, campaign| {
            acc.total_backers = acc.total_backers.saturating_add(campaign.backers);
            acc.total_pledged = acc.total_pledged.saturating_add(campaign.pledged);
            acc
        });
    summary.count = campaigns.len();
    summary.unfunded = campaigns.iter().filter(|c| c.is_unfunded()).count();
    summary
}

/// Formats a number with en-US thousands separators (`1234567` → `1,234,567`).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a dollar amount (`$1,234`).
pub fn format_dollars(value: u64) -> String {
    format!("${}", format_thousands(value))
}
