//! Data models for campaign records.
//!
//! Models are independent of UI and business logic.

pub mod campaign;
pub mod collection;

pub use campaign::Campaign;
pub use collection::CampaignCollection;
