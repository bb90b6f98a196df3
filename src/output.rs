//! JSON output types and serialization for CLI responses.
//!
//! Every response carries `status` as its first field and a schema version
//! so consumers can detect shape changes. Reports serialize deterministically
//! (field order fixed, sibling lists in operation order).

use std::io::{self, Write};

use serde::Serialize;

use crate::error::MoverError;

/// Current schema version for all responses.
pub const SCHEMA_VERSION: &str = "1";

/// Outcome of an operation that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpStatus {
    /// The source document was rewritten.
    Changed,
    /// The operation aborted with a warning; nothing was touched.
    Skipped,
}

/// Report returned by every extract/inline operation.
#[derive(Debug, Clone, Serialize)]
pub struct OpReport {
    /// Outcome of the operation.
    pub status: OpStatus,
    /// Response schema version.
    pub schema_version: String,
    /// Human-readable outcome description.
    pub message: String,
    /// Sibling files created (extract) or inlined (inline), in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub siblings: Vec<String>,
    /// Sibling files deleted after confirmation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub deleted: Vec<String>,
}

impl OpReport {
    /// Report a completed transformation touching the given siblings.
    pub fn changed(message: impl Into<String>, siblings: Vec<String>) -> Self {
        OpReport {
            status: OpStatus::Changed,
            schema_version: SCHEMA_VERSION.to_string(),
            message: message.into(),
            siblings,
            deleted: Vec::new(),
        }
    }

    /// Report a warning abort; no side effects were performed.
    pub fn skipped(message: impl Into<String>) -> Self {
        OpReport {
            status: OpStatus::Skipped,
            schema_version: SCHEMA_VERSION.to_string(),
            message: message.into(),
            siblings: Vec::new(),
            deleted: Vec::new(),
        }
    }

    /// Attach the deleted-siblings list.
    pub fn with_deleted(mut self, deleted: Vec<String>) -> Self {
        self.deleted = deleted;
        self
    }
}

/// Error envelope for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    /// Always `"error"`.
    pub status: String,
    /// Response schema version.
    pub schema_version: String,
    /// Stable error code (also the process exit code).
    pub code: u8,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorReport {
    /// Build the envelope for an operation error.
    pub fn from_error(err: &MoverError) -> Self {
        ErrorReport {
            status: "error".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            code: err.error_code().code(),
            message: err.to_string(),
        }
    }
}

/// Serialize a response as pretty JSON followed by a newline.
pub fn emit_response<T: Serialize>(response: &T, writer: &mut dyn Write) -> io::Result<()> {
    let json = serde_json::to_string_pretty(response)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    writeln!(writer, "{}", json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_report_serializes_with_status_first() {
        let report = OpReport::changed("template extracted", vec!["hero.html".to_string()]);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.starts_with("{\"status\":\"changed\""));
        assert!(json.contains("\"siblings\":[\"hero.html\"]"));
        assert!(!json.contains("deleted"));
    }

    #[test]
    fn skipped_report_omits_empty_lists() {
        let report = OpReport::skipped("nothing to do");
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("siblings"));
        assert!(!json.contains("deleted"));
    }

    #[test]
    fn error_report_carries_code() {
        let err = MoverError::file_not_found("hero.html");
        let report = ErrorReport::from_error(&err);
        assert_eq!(report.code, 3);
        assert_eq!(report.status, "error");
        assert!(report.message.contains("hero.html"));
    }

    #[test]
    fn emit_response_appends_newline() {
        let report = OpReport::skipped("x");
        let mut buffer = Vec::new();
        emit_response(&report, &mut buffer).unwrap();
        assert!(buffer.ends_with(b"\n"));
    }
}
