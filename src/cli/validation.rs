// validation.rs - Input validation utilities

use crate::cli::merge::MergedArgs;
use crate::core::ClassifierConfig;
use crate::error::{ContamError, Result};
use std::path::PathBuf;

pub struct ValidationResult {
    pub report: PathBuf,
    pub output: Option<PathBuf>,
    pub details: Option<PathBuf>,
    pub sample_name: Option<String>,
    pub window: usize,
    pub classifier: ClassifierConfig,
}

/// Validate all command line arguments
pub fn validate_args(merged: &MergedArgs) -> Result<ValidationResult> {
    let args = &merged.args;

    let report = args
        .report
        .as_ref()
        .map(PathBuf::from)
        .ok_or_else(|| ContamError::Config("--report is required".to_string()))?;

    let output = match (&args.output, args.dry_run) {
        (Some(path), _) => Some(PathBuf::from(path)),
        (None, true) => None,
        (None, false) => {
            return Err(ContamError::Config(
                "--output is required (unless --dry-run)".to_string(),
            ))
        }
    };

    if args.window == 0 {
        return Err(ContamError::Config("--window must be at least 1".to_string()));
    }

    if let Some(name) = &args.sample_name {
        if name.trim().is_empty() {
            return Err(ContamError::Config("--sample-name cannot be empty".to_string()));
        }
        if name.contains(['\t', '\n', '\r']) {
            return Err(ContamError::Config(
                "--sample-name cannot contain tabs or newlines".to_string(),
            ));
        }
    }

    let mut classifier = ClassifierConfig {
        min_identity: args.min_identity,
        min_hits: args.min_hits,
        depth_fraction: args.depth_fraction,
        ..ClassifierConfig::default()
    };
    if let Some(terms) = &merged.excluded_terms {
        classifier.excluded_terms = terms.clone();
    }
    classifier.validate()?;

    Ok(ValidationResult {
        report,
        output,
        details: args.details.as_ref().map(PathBuf::from),
        sample_name: args.sample_name.clone(),
        window: args.window,
        classifier,
    })
}
