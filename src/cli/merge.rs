// merge.rs - Merge configuration file with CLI arguments

use crate::cli::args::{DEFAULT_DEPTH_FRACTION, DEFAULT_MIN_HITS, DEFAULT_MIN_IDENTITY};
use crate::cli::{Args, Config};
use crate::error::Result;
use crate::report::DEFAULT_WINDOW;

/// Arguments plus the settings that only exist in the config file
#[derive(Debug)]
pub struct MergedArgs {
    pub args: Args,
    pub excluded_terms: Option<Vec<String>>,
}

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> MergedArgs {
        // Input/Output
        if self.report.is_none() {
            self.report = config.report;
        }
        if self.output.is_none() {
            self.output = config.output;
        }
        if self.sample_name.is_none() {
            self.sample_name = config.sample_name;
        }
        if self.details.is_none() {
            self.details = config.details;
        }

        // Classification rules (only override defaults, not explicit CLI values)
        if self.window == DEFAULT_WINDOW {
            self.window = config.window.unwrap_or(self.window);
        }
        if self.min_identity == DEFAULT_MIN_IDENTITY {
            self.min_identity = config.min_identity.unwrap_or(self.min_identity);
        }
        if self.min_hits == DEFAULT_MIN_HITS {
            self.min_hits = config.min_hits.unwrap_or(self.min_hits);
        }
        if self.depth_fraction == DEFAULT_DEPTH_FRACTION {
            self.depth_fraction = config.depth_fraction.unwrap_or(self.depth_fraction);
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }
        if !self.verbose && config.verbose.unwrap_or(false) {
            self.verbose = true;
        }

        MergedArgs {
            args: self,
            excluded_terms: config.excluded_terms,
        }
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<MergedArgs> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }

    /// No config file: keep the CLI values as they are
    pub fn without_config(self) -> MergedArgs {
        MergedArgs {
            args: self,
            excluded_terms: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    fn parse(cli: &[&str]) -> Args {
        Args::from_args(&["mashcall"], cli).unwrap_or_else(|e| panic!("{}", e.output))
    }

    #[test]
    fn test_config_fills_defaults() {
        let config = Config {
            report: Some("from_config.tab".to_string()),
            window: Some(10),
            depth_fraction: Some(0.1),
            excluded_terms: Some(vec!["sp.".to_string()]),
            verbose: Some(true),
            ..Config::new()
        };
        let merged = parse(&[]).merge_with_config(config);

        assert_eq!(merged.args.report.as_deref(), Some("from_config.tab"));
        assert_eq!(merged.args.window, 10);
        assert_eq!(merged.args.depth_fraction, 0.1);
        assert_eq!(merged.args.min_hits, DEFAULT_MIN_HITS);
        assert!(merged.args.verbose);
        assert_eq!(merged.excluded_terms, Some(vec!["sp.".to_string()]));
    }

    #[test]
    fn test_cli_wins_over_config() {
        let config = Config {
            report: Some("from_config.tab".to_string()),
            min_hits: Some(500),
            ..Config::new()
        };
        let merged = parse(&["--report", "cli.tab", "--min-hits", "50"]).merge_with_config(config);

        assert_eq!(merged.args.report.as_deref(), Some("cli.tab"));
        assert_eq!(merged.args.min_hits, 50);
    }
}
