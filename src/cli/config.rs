// config.rs - Configuration file support

use crate::error::{ContamError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub report: Option<String>,
    pub output: Option<String>,
    pub sample_name: Option<String>,
    pub details: Option<String>,

    // Classification rules
    pub window: Option<usize>,
    pub min_identity: Option<f64>,
    pub min_hits: Option<u64>,
    pub depth_fraction: Option<f64>,
    pub excluded_terms: Option<Vec<String>>,

    // Flags
    pub dry_run: Option<bool>,
    pub verbose: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ContamError::io(path, e))?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            ContamError::Config(format!("Failed to parse config file '{}': {}", path.display(), e))
        })?;

        log::info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| ContamError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content).map_err(|e| ContamError::io(path, e))?;

        log::info!("Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# mashcall.toml - Configuration file for mashcall
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Sorted Mash screen report for one sample
report = "/path/to/S1_sorted_winning.tab"

# Single-line call output
output = "S1_mash.tsv"

# Sample name (default: report file name without "_sorted_winning.tab")
# sample_name = "S1"

# JSON document describing how the call was reached
# details = "S1_mash_details.json"

# =============================================================================
# CLASSIFICATION RULES
# =============================================================================

# Number of leading hits considered
window = 20

# Minimum identity fraction for a hit to count
min_identity = 0.85

# Minimum number of matching hashes for a hit to count
min_hits = 100

# Fraction of the top hit's median multiplicity other hits must reach
depth_fraction = 0.05

# Case-sensitive terms excluding a non-top species
excluded_terms = ["phage", "Phage", "sp."]

# =============================================================================
# FLAGS
# =============================================================================

# Classify and print the call without writing files
dry_run = false

# Print diagnostic messages to stderr
verbose = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(&Config::generate_sample()).unwrap();
        assert_eq!(config.window, Some(20));
        assert_eq!(config.min_identity, Some(0.85));
        assert_eq!(config.min_hits, Some(100));
        assert_eq!(config.depth_fraction, Some(0.05));
        assert_eq!(
            config.excluded_terms,
            Some(vec!["phage".to_string(), "Phage".to_string(), "sp.".to_string()])
        );
        assert!(config.sample_name.is_none());
    }

    #[test]
    fn test_config_file_roundtrip() {
        let dir = std::env::temp_dir().join(format!("mashcall_config_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("mashcall.toml");

        let config = Config {
            report: Some("S1_sorted_winning.tab".to_string()),
            depth_fraction: Some(0.1),
            ..Config::new()
        };
        config.to_file(&path).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let dir = std::env::temp_dir().join(format!("mashcall_config_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        fs::write(&path, "window = \"twenty\"\n").unwrap();

        assert!(matches!(Config::from_file(&path), Err(ContamError::Config(_))));
    }
}
