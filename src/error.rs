//! Error types for RosterDB
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::record::Field;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Unified error type for RosterDB operations
#[derive(Debug, Error)]
pub enum RosterError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error opening database file {}: {source}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stream ended before a complete field line was read
    #[error("Unexpected end of input")]
    EndOfInput,

    // -------------------------------------------------------------------------
    // Format Errors
    // -------------------------------------------------------------------------
    #[error("Failed to read database file: expected label {:?} for the {field} field", .field.label())]
    PrefixMismatch { field: Field },

    #[error("Invalid {field} found in database file")]
    InvalidField { field: Field },

    #[error("Database file is incorrectly formatted: missing blank line after record {record}")]
    MalformedSeparator { record: usize },

    #[error("Database file ended in the middle of a record")]
    TruncatedDatabase,

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("Invalid {field}: {reason}")]
    InvalidRecord { field: Field, reason: &'static str },

    // -------------------------------------------------------------------------
    // Resource Errors
    // -------------------------------------------------------------------------
    #[error("Problem allocating memory for another employee")]
    Allocation,

    // -------------------------------------------------------------------------
    // Process Errors
    // -------------------------------------------------------------------------
    /// Bad process arguments; holds the rendered usage message
    #[error("{0}")]
    Usage(String),
}

impl RosterError {
    /// Whether the error means the database file itself is corrupt
    pub fn is_malformed_database(&self) -> bool {
        matches!(
            self,
            RosterError::PrefixMismatch { .. }
                | RosterError::InvalidField { .. }
                | RosterError::MalformedSeparator { .. }
                | RosterError::TruncatedDatabase
        )
    }
}
