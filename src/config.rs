use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration loaded from .file-risk.toml.
///
/// All fields are optional — the tool works with zero config. The
/// config can only extend the built-in heuristic tables and skip
/// list, never shrink them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Directory scan settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Heuristic table extensions
    #[serde(default)]
    pub heuristics: HeuristicsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScanConfig {
    /// Extra directory names to prune during traversal, in addition
    /// to the built-in .git/__pycache__/node_modules
    #[serde(default)]
    pub skip_dirs: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeuristicsConfig {
    /// Extra filename keywords that add 30 points each
    #[serde(default)]
    pub extra_keywords: Vec<String>,

    /// Extra directory names treated as sensitive
    #[serde(default)]
    pub extra_critical_dirs: Vec<String>,
}

impl Config {
    /// Load configuration from .file-risk.toml in the current
    /// directory. Returns default config if the file doesn't exist.
    pub fn load() -> Result<Config, ConfigError> {
        let path = Path::new(".file-risk.toml");
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load from a specific path (useful for testing).
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}
