// call.rs - Reduction of implicated species to a contamination call

use crate::core::classifier::ImplicatedSpecies;
use crate::logging::Logger;
use serde::Serialize;
use std::fmt;

/// Final classification of one sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "species")]
pub enum ContaminationCall {
    /// At most one organism detected
    Clean,
    /// Two or more distinct organisms, sorted ascending
    Contaminated(Vec<String>),
}

impl ContaminationCall {
    pub fn is_contaminated(&self) -> bool {
        matches!(self, ContaminationCall::Contaminated(_))
    }

    /// Species carried by the call (empty when clean)
    pub fn species(&self) -> &[String] {
        match self {
            ContaminationCall::Clean => &[],
            ContaminationCall::Contaminated(species) => species,
        }
    }

    /// Status column of the output record
    pub fn status_label(&self) -> &'static str {
        match self {
            ContaminationCall::Clean => "NA",
            ContaminationCall::Contaminated(_) => "Contaminated",
        }
    }
}

impl fmt::Display for ContaminationCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContaminationCall::Clean => write!(f, "Clean"),
            ContaminationCall::Contaminated(species) => {
                write!(f, "Contaminated ({})", species.join(", "))
            }
        }
    }
}

/// Build the call: a single organism (or none) is clean
pub fn build_call(species: &ImplicatedSpecies, logger: &dyn Logger) -> ContaminationCall {
    let call = if species.len() <= 1 {
        ContaminationCall::Clean
    } else {
        let mut sorted: Vec<String> = species.iter().cloned().collect();
        sorted.sort();
        ContaminationCall::Contaminated(sorted)
    };
    logger.log(&format!("Contamination call produced: {}", call));
    call
}
