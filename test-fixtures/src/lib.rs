//! Test fixtures for the Cardinal workspace: golden scenario loader,
//! synthetic datasets, and capability doubles (model, scorer).

pub mod datasets;
pub mod doubles;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

pub use datasets::{blobs, line};
pub use doubles::{FixedScorer, NearestCentroidModel};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by path.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Golden ranked batch scenario: inputs plus the expected selection order.
#[derive(Debug, Clone, Deserialize)]
pub struct RankedBatchScenario {
    pub description: String,
    pub metric: String,
    pub batch_size: usize,
    pub features: Vec<Vec<f64>>,
    pub weights: Vec<f64>,
    pub expected: Vec<usize>,
}

/// Golden scored selection scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoredScenario {
    pub description: String,
    pub strategy: String,
    pub batch_size: usize,
    pub scores: Vec<f64>,
    pub expected: Vec<usize>,
}

/// Load every golden ranked batch scenario.
pub fn ranked_batch_scenarios() -> Vec<RankedBatchScenario> {
    list_fixtures("golden/ranked_batch")
        .iter()
        .map(|path| {
            let relative = path
                .strip_prefix(fixtures_root())
                .unwrap_or_else(|e| panic!("fixture outside root {}: {}", path.display(), e));
            load_fixture(&relative.to_string_lossy())
        })
        .collect()
}
