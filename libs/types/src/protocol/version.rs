//! # MRCP Protocol Revisions
//!
//! Two revisions of the protocol share one generic-header enumeration. A
//! revision does not redefine identifiers; it only decides how many of them
//! are active. Revision 1 activates the first twelve, revision 2 all sixteen.

use std::fmt;
use std::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::common::VersionError;

/// Protocol revision selecting the active generic-header subset
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MrcpVersion {
    /// MRCP version 1 (RTSP tunnelled)
    V1 = 1,
    /// MRCP version 2 (SIP negotiated)
    V2 = 2,
}

impl MrcpVersion {
    /// Every supported revision, oldest first
    pub const ALL: [MrcpVersion; 2] = [MrcpVersion::V1, MrcpVersion::V2];

    /// Resolve a numeric revision
    pub fn from_number(number: u8) -> Result<Self, VersionError> {
        Self::try_from_primitive(number).map_err(|e| VersionError::UnsupportedNumber(e.number))
    }

    /// Wire token used in the start line (`MRCP/1.0`, `MRCP/2.0`)
    pub fn token(&self) -> &'static str {
        match self {
            MrcpVersion::V1 => "MRCP/1.0",
            MrcpVersion::V2 => "MRCP/2.0",
        }
    }

    /// Number of generic header fields active in this revision
    ///
    /// Active fields always form a prefix of the declaration order.
    pub fn field_count(&self) -> usize {
        match self {
            MrcpVersion::V1 => 12,
            MrcpVersion::V2 => 16,
        }
    }
}

impl fmt::Display for MrcpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for MrcpVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        MrcpVersion::ALL
            .iter()
            .copied()
            .find(|v| v.token().eq_ignore_ascii_case(token))
            .ok_or_else(|| VersionError::UnsupportedToken(token.to_string()))
    }
}
