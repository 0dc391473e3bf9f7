use crate::core::dedup::DEFAULT_PARALLEL_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub performance: PerformanceConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Sequence to deduplicate instead of the built-in sample
    pub values: Option<Vec<i32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Column width labels are padded to
    pub label_width: usize,
    pub show_original: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of rayon threads (0 = all available)
    pub threads: usize,
    pub parallel_threshold: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            label_width: 18,
            show_original: true,
        }
    }
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, crate::DedupError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| crate::DedupError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), crate::DedupError> {
    let contents = toml::to_string_pretty(config).map_err(|e| {
        crate::DedupError::Configuration(format!("Failed to serialize config: {}", e))
    })?;
    std::fs::write(path, contents)?;
    Ok(())
}
