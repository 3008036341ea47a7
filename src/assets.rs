//! Files embedded into the binary at compile time.
//!
//! `assets/games.json` is the bundled campaign dataset used when no data file
//! is configured. `assets/style.css` styles the exported HTML page.

use anyhow::{Context, Result};
use rust_embed::Embed;

/// Embedded asset directory.
#[derive(Embed)]
#[folder = "assets/"]
pub struct Assets;

/// File name of the bundled dataset inside [`Assets`].
pub const BUNDLED_DATA: &str = "games.json";

/// File name of the page stylesheet inside [`Assets`].
pub const STYLESHEET: &str = "style.css";

/// Returns an embedded file as UTF-8 text.
pub fn text(name: &str) -> Result<String> {
    let file = Assets::get(name).with_context(|| format!("Embedded asset not found: {name}"))?;
    String::from_utf8(file.data.into_owned())
        .with_context(|| format!("Embedded asset is not valid UTF-8: {name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_assets_present() {
        assert!(text(BUNDLED_DATA).unwrap().trim_start().starts_with('['));
        assert!(text(STYLESHEET).unwrap().contains(".game-card"));
    }

    #[test]
    fn test_missing_asset_is_error() {
        assert!(text("nope.txt").is_err());
    }
}
