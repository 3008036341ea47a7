//! Export functionality for the campaign board.
//!
//! Currently a single HTML page generator, shared by the `export` command
//! and the web server.

pub mod page;

pub use page::{generate_page, generate_page_for, PageOptions, Stylesheet};
