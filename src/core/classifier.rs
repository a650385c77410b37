// classifier.rs - Threshold-based selection of implicated species

use crate::core::selector::{select_top_hit_with, PHAGE_MARKER};
use crate::error::{ContamError, Result};
use crate::logging::Logger;
use crate::report::{RankedHitRecord, RankedReport};
use serde::Serialize;
use std::collections::HashSet;

/// Species implicated in a sample (deduplicated, unordered)
pub type ImplicatedSpecies = HashSet<String>;

/// Inclusion rules applied to the ranked hits
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifierConfig {
    /// Minimum identity (fraction) for a hit to count
    pub min_identity: f64,
    /// Minimum number of matching fragments for a hit to count
    pub min_hits: u64,
    /// Fraction of the top hit's median multiplicity other hits must reach
    pub depth_fraction: f64,
    /// Case-sensitive substrings that exclude a non-top species
    pub excluded_terms: Vec<String>,
    /// Case-insensitive marker that disqualifies a top-hit candidate
    pub top_hit_marker: String,
}

/// Outcome of the inclusion rules for one non-top hit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum HitVerdict {
    /// Identity or fragment count too low
    LowQuality,
    /// Species name contains an excluded term
    Excluded(String),
    /// Median multiplicity below the depth threshold
    BelowThreshold,
    /// Counted as an implicated species
    Included,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_identity: 0.85,
            min_hits: 100,
            depth_fraction: 0.05,
            excluded_terms: vec!["phage".to_string(), "Phage".to_string(), "sp.".to_string()],
            top_hit_marker: PHAGE_MARKER.to_string(),
        }
    }
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_identity) {
            return Err(ContamError::Config(
                "min_identity must be between 0.0 and 1.0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.depth_fraction) {
            return Err(ContamError::Config(
                "depth_fraction must be between 0.0 and 1.0".to_string(),
            ));
        }
        if self.top_hit_marker.trim().is_empty() {
            return Err(ContamError::Config("top_hit_marker cannot be empty".to_string()));
        }
        if self.excluded_terms.iter().any(|term| term.is_empty()) {
            return Err(ContamError::Config("excluded_terms cannot contain an empty term".to_string()));
        }
        Ok(())
    }

    /// Identity and fragment-count gate shared by the top hit and the rest
    pub fn passes_quality(&self, record: &RankedHitRecord) -> bool {
        record.identity >= self.min_identity && record.hit_count >= self.min_hits
    }

    /// First excluded term found in the species name, if any
    pub fn excluded_by<'a>(&'a self, species: &str) -> Option<&'a str> {
        self.excluded_terms
            .iter()
            .map(String::as_str)
            .find(|term| species.contains(term))
    }

    /// Depth cut-off derived from the top hit
    pub fn threshold_for(&self, top: &RankedHitRecord) -> f64 {
        self.depth_fraction * top.median_multiplicity
    }

    /// Apply the non-top inclusion rules to one hit
    pub fn assess(&self, record: &RankedHitRecord, threshold: f64) -> HitVerdict {
        if !self.passes_quality(record) {
            return HitVerdict::LowQuality;
        }
        if let Some(term) = self.excluded_by(&record.species) {
            return HitVerdict::Excluded(term.to_string());
        }
        if record.median_multiplicity >= threshold {
            HitVerdict::Included
        } else {
            HitVerdict::BelowThreshold
        }
    }
}

/// Intermediate values of one classification, kept for reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationTrace {
    pub top_hit: Option<RankedHitRecord>,
    pub top_index: Option<usize>,
    pub threshold: Option<f64>,
    pub species: ImplicatedSpecies,
}

/// Run the inclusion rules and keep the intermediate values.
///
/// The top hit anchors the expected depth of the host organism: any other
/// organism must reach `depth_fraction` of that depth to count as a
/// contaminant. Excluded terms are only applied to non-top hits.
pub fn classify_detailed(
    report: &RankedReport,
    config: &ClassifierConfig,
    logger: &dyn Logger,
) -> ClassificationTrace {
    let mut species = ImplicatedSpecies::new();

    let (top, top_index) = match select_top_hit_with(report, &config.top_hit_marker, logger) {
        Some(found) => found,
        None => {
            logger.log("Returning empty species set due to lack of non-phage hits");
            return ClassificationTrace {
                top_hit: None,
                top_index: None,
                threshold: None,
                species,
            };
        }
    };

    if config.passes_quality(top) {
        species.insert(top.species.clone());
        logger.log(&format!("Top hit passes thresholds: {}", top.species));
    }

    let threshold = config.threshold_for(top);
    logger.log(&format!("Median multiplicity threshold set to {}", threshold));

    for (idx, record) in report.iter().enumerate() {
        if idx == top_index {
            continue;
        }
        if config.assess(record, threshold) == HitVerdict::Included {
            logger.log(&format!("Adding additional species {}", record.species));
            species.insert(record.species.clone());
        }
    }

    let mut listed: Vec<&String> = species.iter().collect();
    listed.sort();
    logger.log(&format!("Implicated species: {:?}", listed));

    ClassificationTrace {
        top_hit: Some(top.clone()),
        top_index: Some(top_index),
        threshold: Some(threshold),
        species,
    }
}

/// Species implicated by the report
pub fn classify(report: &RankedReport, config: &ClassifierConfig, logger: &dyn Logger) -> ImplicatedSpecies {
    classify_detailed(report, config, logger).species
}
