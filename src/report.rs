use serde::Serialize;

use crate::error::InstrumentError;

/// Per-file failure value handed to the orchestrator's report writer.
#[derive(Debug, Clone, Serialize)]
pub struct FailureReport {
    pub file: String,
    pub cause: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl FailureReport {
    pub fn new(file: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            cause: cause.into(),
            line: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Build from an error, picking up the offending line when it has one.
    pub fn from_error(file: impl Into<String>, err: &InstrumentError) -> Self {
        let line = match err {
            InstrumentError::PostInjectionSyntaxInvalid { line, .. } => Some(*line),
            _ => None,
        };
        Self {
            file: file.into(),
            cause: err.to_string(),
            line,
        }
    }
}
