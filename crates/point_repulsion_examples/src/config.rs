//! RON-backed configuration for the example binaries.
use std::path::Path;

use anyhow::Context;
use point_repulsion::prelude::DistributionConfig;
use serde::Deserialize;

/// Example settings: the scene to generate plus the distribution parameters.
///
/// Fields missing from the file fall back to their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExampleConfig {
    /// Number of items in the generated scene.
    pub count: usize,
    /// Side length of the square the items are scattered in.
    pub extent: f64,
    /// Seed for the scene generator.
    pub seed: u64,
    /// Seed `spread` and `radius` from the scene instead of using the configured values.
    pub seed_from_items: bool,
    pub distribution: DistributionConfig,
}

impl Default for ExampleConfig {
    fn default() -> Self {
        Self {
            count: 200,
            extent: 40.0,
            seed: 42,
            seed_from_items: false,
            distribution: DistributionConfig::default(),
        }
    }
}

/// Parses an [`ExampleConfig`] from RON text.
pub fn parse_config(text: &str) -> anyhow::Result<ExampleConfig> {
    let config: ExampleConfig = ron::from_str(text).context("invalid example config")?;
    config.distribution.validate()?;
    Ok(config)
}

/// Loads an [`ExampleConfig`] from a RON file.
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<ExampleConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_config(&text).with_context(|| format!("failed to load {}", path.display()))
}
