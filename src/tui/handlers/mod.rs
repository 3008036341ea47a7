//! Input handler modules for the TUI focus areas.

pub mod actions;
pub mod main;
pub mod search;

// Re-export handler functions
pub use actions::dispatch_action;
pub use main::handle_main_input;
pub use search::handle_search_input;
