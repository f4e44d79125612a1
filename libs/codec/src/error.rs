//! Header-level errors for generic header processing
//!
//! Every failure of name resolution, table selection, value decoding or list
//! capacity is returned as a `HeaderError`. Each variant carries enough
//! context (field, revision, offending text) to explain the rejection
//! without re-reading the message.

use mrcp_types::{FieldValueError, GenericHeaderId, MrcpVersion, PayloadError, VersionError};
use thiserror::Error;

/// Generic header errors with diagnostic context
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// Field name is not a generic header of this revision
    ///
    /// Recoverable: the message engine decides whether to skip or reject.
    #[error("Unknown generic header '{name}' for {version}")]
    NotFound { name: String, version: MrcpVersion },

    /// Identifier is not active in this revision
    #[error("Header field {field} is not defined for {version} (introduced in {introduced_in})")]
    InvalidField {
        field: &'static str,
        version: MrcpVersion,
        introduced_in: MrcpVersion,
    },

    /// Revision outside the supported set
    #[error("Unsupported MRCP version {version}: supported versions are {supported_versions}")]
    UnsupportedVersion {
        version: String,
        supported_versions: String,
    },

    /// Value text does not match the field's grammar
    #[error("Malformed {field} value '{value}': {reason}")]
    MalformedField {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// Active request id list already holds its maximum
    #[error("Active request id list full: capacity {capacity}")]
    Full { capacity: usize },
}

impl HeaderError {
    pub fn not_found(name: impl Into<String>, version: MrcpVersion) -> Self {
        Self::NotFound {
            name: name.into(),
            version,
        }
    }

    pub fn invalid_field(id: GenericHeaderId, version: MrcpVersion) -> Self {
        Self::InvalidField {
            field: id.name(),
            version,
            introduced_in: id.introduced_in(),
        }
    }

    pub fn unsupported_version(version: impl ToString) -> Self {
        let supported_versions = MrcpVersion::ALL
            .iter()
            .map(|v| v.token())
            .collect::<Vec<_>>()
            .join(", ");

        Self::UnsupportedVersion {
            version: version.to_string(),
            supported_versions,
        }
    }

    pub fn malformed(
        id: GenericHeaderId,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedField {
            field: id.name(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Whether the engine may continue with the rest of the message
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            HeaderError::UnsupportedVersion { .. } | HeaderError::InvalidField { .. }
        )
    }
}

impl From<VersionError> for HeaderError {
    fn from(err: VersionError) -> Self {
        match err {
            VersionError::UnsupportedNumber(n) => HeaderError::unsupported_version(n),
            VersionError::UnsupportedToken(token) => HeaderError::unsupported_version(token),
        }
    }
}

impl From<PayloadError> for HeaderError {
    fn from(err: PayloadError) -> Self {
        match err {
            PayloadError::CapacityExceeded { max_capacity, .. } => HeaderError::Full {
                capacity: max_capacity,
            },
            PayloadError::InvalidLength { expected_max, .. } => HeaderError::Full {
                capacity: expected_max,
            },
        }
    }
}

impl From<FieldValueError> for HeaderError {
    fn from(err: FieldValueError) -> Self {
        match err {
            FieldValueError::WrongKind { field, expected } => HeaderError::MalformedField {
                field,
                value: String::new(),
                reason: format!("field does not hold {} values", expected),
            },
            FieldValueError::LineBreak { field, value } => HeaderError::MalformedField {
                field,
                value,
                reason: "line break in header value".to_owned(),
            },
        }
    }
}

/// Result type for header operations
pub type HeaderResult<T> = std::result::Result<T, HeaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = HeaderError::invalid_field(GenericHeaderId::Accept, MrcpVersion::V1);
        assert_eq!(
            err.to_string(),
            "Header field Accept is not defined for MRCP/1.0 (introduced in MRCP/2.0)"
        );

        let err = HeaderError::unsupported_version(3u8);
        assert_eq!(
            err.to_string(),
            "Unsupported MRCP version 3: supported versions are MRCP/1.0, MRCP/2.0"
        );

        let err = HeaderError::malformed(GenericHeaderId::ContentLength, "-1", "not a decimal");
        assert!(err.to_string().contains("Content-Length"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_line_break_maps_to_malformed() {
        let err: HeaderError = FieldValueError::LineBreak {
            field: "Logging-Tag",
            value: "a\r\nb".to_owned(),
        }
        .into();
        assert!(matches!(
            err,
            HeaderError::MalformedField {
                field: "Logging-Tag",
                ..
            }
        ));
        assert!(err.to_string().contains("line break"));
    }

    #[test]
    fn test_payload_error_maps_to_full() {
        let err: HeaderError = PayloadError::CapacityExceeded {
            max_capacity: 5,
            attempted: 6,
        }
        .into();
        assert_eq!(err, HeaderError::Full { capacity: 5 });
    }
}
