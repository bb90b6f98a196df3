//! Error types and error code constants for ngmover.
//!
//! This module provides a unified error type (`MoverError`) covering every
//! way an extract/inline operation can abort, plus a stable integer code
//! mapping (`OutputErrorCode`) used for process exit codes and JSON output.
//!
//! ## Error Code Mapping
//!
//! - `2`: Invalid arguments (target file has the wrong extension)
//! - `3`: Resolution errors (no annotation/field, referenced file missing,
//!   metadata not parseable)
//! - `4`: Apply errors (failed to write the sibling or rewrite the source)
//! - `10`: Internal errors (bugs, unexpected state)
//!
//! ## Warnings vs errors
//!
//! A subset of conditions ("no inline template found", "failed to parse
//! component metadata", "no style files found") abort the operation without
//! touching the file system and are surfaced as warnings, not failures; the
//! operation front doors report them through [`Host::notify`] and return a
//! skipped report instead of propagating them. `MoverError::is_warning`
//! identifies that subset.
//!
//! [`Host::notify`]: crate::host::Host::notify

use std::fmt;

use thiserror::Error;

use crate::locator::FieldKind;
use crate::metadata::MetadataError;

// ============================================================================
// Output Error Codes
// ============================================================================

/// Stable error codes for JSON output and process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OutputErrorCode {
    /// Invalid arguments from caller (wrong target file type).
    InvalidArguments = 2,
    /// Resolution errors (field not found, referenced file missing).
    ResolutionError = 3,
    /// Apply errors (failed to write changes).
    ApplyError = 4,
    /// Internal errors (bugs, unexpected state).
    InternalError = 10,
}

impl OutputErrorCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for OutputErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Unified error type for extract/inline operations.
#[derive(Debug, Error)]
pub enum MoverError {
    /// Target file has the wrong extension for this operation.
    #[error("expected a {expected} file: {path}")]
    WrongFileType { path: String, expected: &'static str },

    /// Source contains no `@Component` decorator block.
    #[error("no @Component decorator found in this file")]
    AnnotationNotFound,

    /// The metadata block exists but the requested field does not.
    #[error("{}", .field.missing_message())]
    FieldNotFound { field: FieldKind },

    /// The metadata block could not be parsed as a literal object.
    #[error("failed to parse component metadata: {reason}")]
    ParseFailure { reason: String },

    /// A referenced sibling (or companion source) file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// Every referenced stylesheet was missing.
    #[error("no style files found or they are empty")]
    NoStylesFound,

    /// File I/O failed while reading, writing, or deleting.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (bug or unexpected state).
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl From<MetadataError> for MoverError {
    fn from(err: MetadataError) -> Self {
        MoverError::ParseFailure {
            reason: err.to_string(),
        }
    }
}

impl From<&MoverError> for OutputErrorCode {
    fn from(err: &MoverError) -> Self {
        match err {
            MoverError::WrongFileType { .. } => OutputErrorCode::InvalidArguments,
            MoverError::AnnotationNotFound => OutputErrorCode::ResolutionError,
            MoverError::FieldNotFound { .. } => OutputErrorCode::ResolutionError,
            MoverError::ParseFailure { .. } => OutputErrorCode::ResolutionError,
            MoverError::FileNotFound { .. } => OutputErrorCode::ResolutionError,
            MoverError::NoStylesFound => OutputErrorCode::ResolutionError,
            MoverError::Io(_) => OutputErrorCode::ApplyError,
            MoverError::Internal { .. } => OutputErrorCode::InternalError,
        }
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl MoverError {
    /// Create a wrong-file-type error.
    pub fn wrong_file_type(path: impl fmt::Display, expected: &'static str) -> Self {
        MoverError::WrongFileType {
            path: path.to_string(),
            expected,
        }
    }

    /// Create a file-not-found error.
    pub fn file_not_found(path: impl fmt::Display) -> Self {
        MoverError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a parse-failure error.
    pub fn parse_failure(reason: impl Into<String>) -> Self {
        MoverError::ParseFailure {
            reason: reason.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        MoverError::Internal {
            message: message.into(),
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> OutputErrorCode {
        OutputErrorCode::from(self)
    }

    /// Whether this condition aborts as a warning (no side effects, exit 0)
    /// rather than a hard failure.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            MoverError::AnnotationNotFound
                | MoverError::FieldNotFound { .. }
                | MoverError::ParseFailure { .. }
                | MoverError::NoStylesFound
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
