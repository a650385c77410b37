// mod.rs - Output writers for contamination calls

use crate::core::{ClassificationTrace, ClassifierConfig, ContaminationCall};
use crate::error::{ContamError, Result};
use crate::logging::Logger;
use crate::report::RankedHitRecord;
use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).map_err(|e| ContamError::io(parent, e))?;
        }
    }
    Ok(())
}

/// Render the single output record for a sample.
///
/// ```text
/// <sample>\tNA\tNA
/// <sample>\tContaminated\t<species1> <species2> ...
/// ```
pub fn serialize_call(sample_name: &str, call: &ContaminationCall) -> Result<String> {
    if sample_name.contains(['\t', '\n', '\r']) {
        return Err(ContamError::InvariantViolation(format!(
            "sample name {:?} contains a field or record separator",
            sample_name
        )));
    }
    match call {
        ContaminationCall::Clean => Ok(format!("{}\tNA\tNA\n", sample_name)),
        ContaminationCall::Contaminated(species) => {
            let mut listed: Vec<&str> = species.iter().map(String::as_str).collect();
            listed.sort_unstable();
            listed.dedup();
            if listed.len() < 2 {
                return Err(ContamError::InvariantViolation(format!(
                    "contaminated call for '{}' carries {} distinct species, expected at least 2",
                    sample_name,
                    listed.len()
                )));
            }
            Ok(format!(
                "{}\tContaminated\t{}\n",
                sample_name,
                listed.join(" ")
            ))
        }
    }
}

/// Write the output record to any writer
pub fn write_call_to<W: Write>(writer: &mut W, sample_name: &str, call: &ContaminationCall) -> Result<()> {
    let record = serialize_call(sample_name, call)?;
    writer
        .write_all(record.as_bytes())
        .map_err(|e| ContamError::io("<writer>", e))?;
    Ok(())
}

/// Write the output record to a file.
///
/// The record is rendered before the file is created, so a rejected call
/// never leaves a partial file behind.
pub fn write_call(path: &Path, sample_name: &str, call: &ContaminationCall, logger: &dyn Logger) -> Result<()> {
    let record = serialize_call(sample_name, call)?;
    logger.log(&format!(
        "Writing Mash report for {} with status={}",
        sample_name,
        call.status_label()
    ));

    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| ContamError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(record.as_bytes())
        .map_err(|e| ContamError::io(path, e))?;
    writer.flush().map_err(|e| ContamError::io(path, e))?;

    logger.log(&format!("Completed writing Mash report to {}", path.display()));
    Ok(())
}

/// JSON document describing how a call was reached
#[derive(Debug, Serialize)]
pub struct CallDetails<'a> {
    pub sample: &'a str,
    pub generated: String,
    pub version: &'static str,
    pub settings: &'a ClassifierConfig,
    pub top_hit: Option<&'a RankedHitRecord>,
    pub top_index: Option<usize>,
    pub threshold: Option<f64>,
    pub call: &'a ContaminationCall,
}

impl<'a> CallDetails<'a> {
    pub fn new(
        sample: &'a str,
        settings: &'a ClassifierConfig,
        trace: &'a ClassificationTrace,
        call: &'a ContaminationCall,
    ) -> Self {
        Self {
            sample,
            generated: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            version: env!("CARGO_PKG_VERSION"),
            settings,
            top_hit: trace.top_hit.as_ref(),
            top_index: trace.top_index,
            threshold: trace.threshold,
            call,
        }
    }
}

/// Write the call details as pretty JSON
pub fn write_details(path: &Path, details: &CallDetails<'_>, logger: &dyn Logger) -> Result<()> {
    let json = serde_json::to_string_pretty(details)?;
    ensure_parent_dir(path)?;
    std::fs::write(path, json + "\n").map_err(|e| ContamError::io(path, e))?;
    logger.log(&format!("Call details written to {}", path.display()));
    Ok(())
}
