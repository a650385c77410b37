// error.rs - Error types shared by the parser, classifier and writers

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort the classification of one sample
#[derive(Debug, Error)]
pub enum ContamError {
    /// Neither accession pattern matched the description field
    #[error("No accession match found in description: '{free_text}'")]
    PatternMatch { free_text: String },

    /// A numeric field could not be parsed or is out of range
    #[error("Invalid {field} value '{value}': {reason}")]
    FieldFormat {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// Internal consistency check failed (programming defect)
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// A record inside a report failed; carries the 1-based line number
    #[error("Report line {line_number}: {source}")]
    Line {
        line_number: usize,
        #[source]
        source: Box<ContamError>,
    },

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContamError {
    pub fn field(field: &'static str, value: &str, reason: impl Into<String>) -> Self {
        ContamError::FieldFormat {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ContamError::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach a report line number to a record-level error
    pub fn at_line(self, line_number: usize) -> Self {
        ContamError::Line {
            line_number,
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping line-number wrappers
    pub fn root(&self) -> &ContamError {
        match self {
            ContamError::Line { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_context_message() {
        let err = ContamError::PatternMatch {
            free_text: "no accession here".to_string(),
        }
        .at_line(3);

        let message = err.to_string();
        assert!(message.starts_with("Report line 3:"));
        assert!(message.contains("no accession here"));
        assert!(matches!(err.root(), ContamError::PatternMatch { .. }));
    }

    #[test]
    fn test_field_format_message() {
        let err = ContamError::field("identity", "abc", "not a number");
        assert_eq!(err.to_string(), "Invalid identity value 'abc': not a number");
    }
}
