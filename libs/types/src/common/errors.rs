//! Error types for the header data model
//!
//! Errors raised by the data layer itself: capacity violations in the
//! fixed-capacity collections and unrecognized protocol revisions. The codec
//! crate wraps both into its own `HeaderError`.

use thiserror::Error;

/// Errors that can occur while filling bounded collections
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// Attempted to insert more elements than maximum capacity
    #[error("Capacity exceeded: max={max_capacity}, attempted={attempted}")]
    CapacityExceeded {
        max_capacity: usize,
        attempted: usize,
    },

    /// Slice is longer than the collection can hold
    #[error("Invalid length: expected max {expected_max}, got {got}")]
    InvalidLength { expected_max: usize, got: usize },
}

/// Protocol revision could not be recognized
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// Numeric revision outside the supported set
    #[error("Unsupported MRCP version {0}: supported versions are 1, 2")]
    UnsupportedNumber(u8),

    /// Version token that is not `MRCP/1.0` or `MRCP/2.0`
    #[error("Unsupported MRCP version token '{0}': expected MRCP/1.0 or MRCP/2.0")]
    UnsupportedToken(String),
}

/// Value rejected when stored into a header field
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldValueError {
    /// Value of the wrong shape offered for a field
    #[error("Field {field} does not hold {expected} values")]
    WrongKind {
        field: &'static str,
        expected: &'static str,
    },

    /// Text containing CR or LF would split the header line
    #[error("Field {field} value contains a line break")]
    LineBreak { field: &'static str, value: String },
}
