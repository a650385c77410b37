// record.rs - One ranked hit of a Mash screen report and its line parser

use crate::error::{ContamError, Result};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// RefSeq-style accession, e.g. NC_000913.3 or NZ_CP009072.1
static PRIMARY_ACCESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"N[A-Z]_[0-9A-Z]+\.[0-9]").expect("valid accession pattern"));

/// Generic two-letter accession, e.g. AP_012306.1
static FALLBACK_ACCESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{2}_[0-9]+\.[0-9]").expect("valid accession pattern"));

/// Minimum number of tab-separated fields in a hit line
const MIN_FIELDS: usize = 4;

/// One line of a ranked report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedHitRecord {
    /// Fraction (0.0-1.0) of the query matching the reference
    pub identity: f64,
    /// Matching fragments (numerator of the "matches/total" field)
    pub hit_count: u64,
    /// Median sequencing depth across matches
    pub median_multiplicity: f64,
    /// Trailing description field
    pub free_text: String,
    /// First two words after the accession token
    pub species: String,
}

impl RankedHitRecord {
    /// True when the description mentions a phage (case-insensitive)
    pub fn is_phage_hit(&self, marker: &str) -> bool {
        self.free_text
            .to_lowercase()
            .contains(&marker.to_lowercase())
    }
}

/// Locate the accession token in a description field.
///
/// The RefSeq pattern is tried first; the generic pattern is only consulted
/// when the first one finds nothing. Returns `None` when both miss.
pub fn find_accession(free_text: &str) -> Option<&str> {
    PRIMARY_ACCESSION
        .find(free_text)
        .or_else(|| FALLBACK_ACCESSION.find(free_text))
        .map(|m| m.as_str())
}

/// Species name: first two whitespace-separated words after the first
/// occurrence of `accession` in `line`
fn species_after(line: &str, accession: &str) -> Option<String> {
    let (_, rest) = line.split_once(accession)?;
    let words: Vec<&str> = rest.split_whitespace().take(2).collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn parse_identity(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| ContamError::field("identity", raw, format!("{}", e)))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ContamError::field(
            "identity",
            raw,
            "must be a fraction between 0.0 and 1.0",
        ));
    }
    Ok(value)
}

fn parse_hit_count(raw: &str) -> Result<u64> {
    let numerator = raw.split('/').next().unwrap_or(raw).trim();
    numerator
        .parse::<u64>()
        .map_err(|e| ContamError::field("hit count", raw, format!("{}", e)))
}

fn parse_multiplicity(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| ContamError::field("median multiplicity", raw, format!("{}", e)))?;
    if !value.is_finite() || value < 0.0 {
        return Err(ContamError::field(
            "median multiplicity",
            raw,
            "must be a non-negative finite number",
        ));
    }
    Ok(value)
}

/// Parse one tab-separated hit line:
///
/// ```text
/// identity <TAB> hits/total <TAB> median-multiplicity <TAB> ... <TAB> description
/// ```
pub fn parse_hit_line(line: &str) -> Result<RankedHitRecord> {
    let line = line.trim_end();
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return Err(ContamError::field(
            "line",
            line,
            format!(
                "expected at least {} tab-separated fields, found {}",
                MIN_FIELDS,
                fields.len()
            ),
        ));
    }

    let free_text = fields[fields.len() - 1];
    let accession = find_accession(free_text).ok_or_else(|| ContamError::PatternMatch {
        free_text: free_text.to_string(),
    })?;
    let species = species_after(line, accession).ok_or_else(|| ContamError::PatternMatch {
        free_text: free_text.to_string(),
    })?;

    Ok(RankedHitRecord {
        identity: parse_identity(fields[0])?,
        hit_count: parse_hit_count(fields[1])?,
        median_multiplicity: parse_multiplicity(fields[2])?,
        free_text: free_text.to_string(),
        species,
    })
}
