//! Campaign data source.
//!
//! This module centralizes where campaign records come from: an explicit
//! JSON file, the file named in the config, or the bundled dataset.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets;
use crate::config::Config;
use crate::models::CampaignCollection;

/// Where the loaded collection came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A JSON file on disk
    File(PathBuf),
    /// The dataset compiled into the binary
    Bundled,
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Bundled => write!(f, "bundled dataset"),
        }
    }
}

/// Service for loading the campaign collection.
pub struct CatalogService;

impl CatalogService {
    /// Loads campaigns from a JSON file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use fundboard::services::CatalogService;
    ///
    /// let campaigns = CatalogService::load(Path::new("games.json"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<CampaignCollection> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read campaign data: {}", path.display()))?;
        let collection = CampaignCollection::from_json(&content)
            .with_context(|| format!("Failed to parse campaign data: {}", path.display()))?;
        tracing::debug!(path = %path.display(), count = collection.len(), "loaded campaigns");
        Ok(collection)
    }

    /// Loads the dataset embedded in the binary.
    pub fn load_bundled() -> Result<CampaignCollection> {
        let content = assets::text(assets::BUNDLED_DATA)?;
        let collection =
            CampaignCollection::from_json(&content).context("Bundled campaign data is invalid")?;
        tracing::debug!(count = collection.len(), "loaded bundled campaigns");
        Ok(collection)
    }

    /// Picks the data source: explicit path first, then `data.file` from
    /// the config, then the bundled dataset.
    pub fn resolve(explicit: Option<&Path>, config: &Config) -> DataSource {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| config.data.file.clone())
            .map_or(DataSource::Bundled, DataSource::File)
    }

    /// Loads from a resolved source.
    pub fn load_from(source: &DataSource) -> Result<CampaignCollection> {
        match source {
            DataSource::File(path) => Self::load(path),
            DataSource::Bundled => Self::load_bundled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("games.json");
        fs::write(
            &path,
            r#"[{"name": "A", "pledged": 1, "goal": 2, "backers": 3}]"#,
        )
        .unwrap();

        let collection = CatalogService::load(&path).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.as_slice()[0].name, "A");
    }

    #[test]
    fn test_load_missing_file() {
        let err = CatalogService::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read campaign data"));
    }

    #[test]
    fn test_load_bundled() {
        let collection = CatalogService::load_bundled().unwrap();
        assert!(collection.len() >= 2);
    }

    #[test]
    fn test_resolve_order() {
        let mut config = Config::new();
        assert_eq!(CatalogService::resolve(None, &config), DataSource::Bundled);

        config.data.file = Some(PathBuf::from("from_config.json"));
        assert_eq!(
            CatalogService::resolve(None, &config),
            DataSource::File(PathBuf::from("from_config.json"))
        );

        assert_eq!(
            CatalogService::resolve(Some(Path::new("explicit.json")), &config),
            DataSource::File(PathBuf::from("explicit.json"))
        );
    }
}
