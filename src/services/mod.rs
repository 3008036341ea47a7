//! Service layer for business logic.
//!
//! Loading, aggregation, filtering, ranking and search over campaigns.
//! Everything here is synchronous and UI-independent.

pub mod catalog;
pub mod filters;
pub mod ranking;
pub mod search;
pub mod stats;

// Re-export commonly used types and functions
pub use catalog::{CatalogService, DataSource};
pub use filters::Filter;
pub use ranking::{top_by_pledged, Highlights};
pub use search::search;
pub use stats::{format_dollars, format_thousands, summarize, Summary};
