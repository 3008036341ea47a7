//! Case-insensitive name search.

use crate::models::Campaign;

/// Finds campaigns whose name contains `query`, ignoring case.
///
/// Returns `None` for an empty query so callers can leave the current view
/// alone. Matches keep collection order.
pub fn search<'a, I>(campaigns: I, query: &str) -> Option<Vec<&'a Campaign>>
where
    I: IntoIterator<Item = &'a Campaign>,
{
    if query.is_empty() {
        return None;
    }

    let needle = query.to_lowercase();
    Some(
        campaigns
            .into_iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect(),
    )
}
