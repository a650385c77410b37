// lib.rs - mashcall library root

//! # mashcall - Contamination calls from ranked Mash screen reports
//!
//! Given the per-sample report of reference genomes ranked by Mash screen
//! (most confident first), mashcall picks the best-supported non-phage hit,
//! derives a depth threshold from it and decides whether further hits are
//! distinct contaminating organisms.
//!
//! ## Features
//!
//! - **Accession-aware parsing**: species names are read after the RefSeq (or generic) accession token
//! - **Phage-aware top hit**: phage references never anchor the host call
//! - **Relative depth threshold**: contaminants must reach 5% of the host's median multiplicity
//! - **Injected logging**: every step reports through a caller-supplied [`logging::Logger`]
//! - **TOML configuration**: thresholds can be tuned per run
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use mashcall::prelude::*;
//! use std::path::Path;
//!
//! let logger = FacadeLogger::default();
//! let (sample, report) = load_report(Path::new("S1_sorted_winning.tab"), DEFAULT_WINDOW, &logger)?;
//! let species = classify(&report, &ClassifierConfig::default(), &logger);
//! let call = build_call(&species, &logger);
//! write_call(Path::new("S1_mash.tsv"), &sample, &call, &logger)?;
//! # Ok::<(), mashcall::ContamError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod logging;
pub mod output;
pub mod report;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, Config, ValidationResult};
    pub use crate::core::{build_call, classify, classify_detailed, select_top_hit};
    pub use crate::core::{ClassificationTrace, ClassifierConfig, ContaminationCall, ImplicatedSpecies};
    pub use crate::error::{ContamError, Result};
    pub use crate::logging::{FacadeLogger, Logger, MemoryLogger, SilentLogger};
    pub use crate::output::{serialize_call, write_call, write_call_to, write_details, CallDetails};
    pub use crate::report::{load_report, parse_hit_line, RankedHitRecord, RankedReport, DEFAULT_WINDOW};
}

// Re-export main types at the root level for convenience
pub use crate::core::{ClassifierConfig, ContaminationCall};
pub use error::ContamError;
pub use report::{RankedHitRecord, RankedReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "mashcall v{} - Contamination caller for Mash screen reports",
        VERSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_info() {
        assert!(get_info().contains(VERSION));
    }
}
