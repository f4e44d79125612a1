//! Shared building blocks used across the header data model

pub mod errors;

pub use errors::{FieldValueError, PayloadError, VersionError};
