//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use fundboard::models::{Campaign, CampaignCollection};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Three campaigns: one unfunded, one over goal, one exactly at goal.
pub fn sample_campaigns() -> Vec<Campaign> {
    vec![
        Campaign::new("Emberfall Tactics", 50, 100, 10)
            .with_description("Turn-based strategy in a burning kingdom"),
        Campaign::new("Tidewarden", 150, 100, 25).with_img("tidewarden.png"),
        Campaign::new("Paper Orbit", 100, 100, 5),
    ]
}

/// [`sample_campaigns`] as a collection.
pub fn sample_collection() -> CampaignCollection {
    CampaignCollection::new(sample_campaigns())
}

/// [`sample_campaigns`] as the JSON document the loader reads.
pub fn sample_json() -> Value {
    serde_json::to_value(sample_campaigns()).expect("Failed to serialize campaigns")
}

/// Records with malformed numeric fields; none of them should be rejected.
pub fn messy_json() -> Value {
    json!([
        {"name": "String Pledge", "pledged": "1200", "goal": 1000, "backers": "12"},
        {"name": "Float Goal", "pledged": 10, "goal": 99.9, "backers": 1},
        {"name": "Garbage", "pledged": "lots", "goal": null, "backers": -4},
        {"name": "Missing Fields"}
    ])
}

/// Writes `data` to a temp JSON file and returns its path.
pub fn write_data_file(data: &Value) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("games.json");
    fs::write(&path, serde_json::to_string_pretty(data).unwrap())
        .expect("Failed to write data file");
    (path, temp_dir)
}

/// Writes raw text (possibly invalid JSON) to a temp data file.
pub fn write_raw_data_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("games.json");
    fs::write(&path, content).expect("Failed to write data file");
    (path, temp_dir)
}

/// Writes a config file to a temp directory and returns its path.
pub fn write_config_file(toml: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, toml).expect("Failed to write config file");
    (path, temp_dir)
}

/// A config path that does not exist, so the binary runs on defaults
/// regardless of the user's own config file.
pub fn isolated_config() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    (path, temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_covers_funding_states() {
        let campaigns = sample_campaigns();
        assert_eq!(campaigns.iter().filter(|c| c.is_funded()).count(), 2);
        assert_eq!(campaigns.iter().filter(|c| c.is_unfunded()).count(), 1);
    }
}
