//! # Generic Header Field Registry - Identifiers and Metadata
//!
//! ## Purpose
//!
//! Closed enumeration of every generic header field known to the message
//! stack, with the canonical wire name and value shape of each. The
//! enumeration is shared by both protocol revisions: revision 2 appends four
//! fields after the twelve revision-1 fields, so the active set of any
//! revision is a prefix of the declaration order.
//!
//! ## Integration Points
//!
//! - **Name Resolution**: the codec registry matches wire names against `name()`
//! - **Generation Order**: `ALL` is the deterministic emission order
//! - **Presence Tracking**: the discriminant is the bit index in `FieldPresence`
//! - **Dispatch**: `value_kind()` selects the parse/generate routine family
//!
//! ## Field Organization
//!
//! | Range | Revision | Fields |
//! |-------|----------|--------|
//! | 0-11  | 1 and 2  | Active-Request-Id-List .. Vendor-Specific-Parameters |
//! | 12-15 | 2 only   | Accept, Fetch-Timeout, Set-Cookie, Set-Cookie2 |

use num_enum::TryFromPrimitive;

use crate::protocol::version::MrcpVersion;

/// Shape of the decoded value stored for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValueKind {
    /// Owned text copied verbatim from the wire
    Text,
    /// Unsigned decimal integer
    Size,
    /// Comma-separated request identifiers, at most five
    RequestIdList,
    /// Comma-separated `name=value` pairs, unbounded
    VendorParams,
}

/// Introspection record for one generic header field
#[derive(Debug, Clone)]
pub struct GenericHeaderInfo {
    /// Stable identifier
    pub id: GenericHeaderId,
    /// Canonical wire name
    pub name: &'static str,
    /// What the field carries
    pub description: &'static str,
    /// Decoded value shape
    pub value_kind: FieldValueKind,
    /// First revision in which the field is active
    pub introduced_in: MrcpVersion,
}

/// Generic header field identifiers in declaration order
///
/// The discriminant doubles as the position in generation order and as the
/// presence bit index. `COUNT` is the sentinel count of identifiers.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenericHeaderId {
    ActiveRequestIdList = 0,
    ProxySyncId = 1,
    AcceptCharset = 2,
    ContentType = 3,
    ContentId = 4,
    ContentBase = 5,
    ContentEncoding = 6,
    ContentLocation = 7,
    ContentLength = 8,
    CacheControl = 9,
    LoggingTag = 10,
    VendorSpecificParams = 11,

    // Revision 2 additions
    Accept = 12,
    FetchTimeout = 13,
    SetCookie = 14,
    SetCookie2 = 15,
}

impl GenericHeaderId {
    /// Sentinel count of known identifiers
    pub const COUNT: usize = 16;

    /// Every identifier in declaration order
    pub const ALL: [GenericHeaderId; Self::COUNT] = [
        GenericHeaderId::ActiveRequestIdList,
        GenericHeaderId::ProxySyncId,
        GenericHeaderId::AcceptCharset,
        GenericHeaderId::ContentType,
        GenericHeaderId::ContentId,
        GenericHeaderId::ContentBase,
        GenericHeaderId::ContentEncoding,
        GenericHeaderId::ContentLocation,
        GenericHeaderId::ContentLength,
        GenericHeaderId::CacheControl,
        GenericHeaderId::LoggingTag,
        GenericHeaderId::VendorSpecificParams,
        GenericHeaderId::Accept,
        GenericHeaderId::FetchTimeout,
        GenericHeaderId::SetCookie,
        GenericHeaderId::SetCookie2,
    ];

    /// Canonical wire name of this field
    pub fn name(&self) -> &'static str {
        match self {
            GenericHeaderId::ActiveRequestIdList => "Active-Request-Id-List",
            GenericHeaderId::ProxySyncId => "Proxy-Sync-Id",
            GenericHeaderId::AcceptCharset => "Accept-Charset",
            GenericHeaderId::ContentType => "Content-Type",
            GenericHeaderId::ContentId => "Content-Id",
            GenericHeaderId::ContentBase => "Content-Base",
            GenericHeaderId::ContentEncoding => "Content-Encoding",
            GenericHeaderId::ContentLocation => "Content-Location",
            GenericHeaderId::ContentLength => "Content-Length",
            GenericHeaderId::CacheControl => "Cache-Control",
            GenericHeaderId::LoggingTag => "Logging-Tag",
            GenericHeaderId::VendorSpecificParams => "Vendor-Specific-Parameters",
            GenericHeaderId::Accept => "Accept",
            GenericHeaderId::FetchTimeout => "Fetch-Timeout",
            GenericHeaderId::SetCookie => "Set-Cookie",
            GenericHeaderId::SetCookie2 => "Set-Cookie2",
        }
    }

    /// Short description for diagnostics and generated docs
    pub fn description(&self) -> &'static str {
        match self {
            GenericHeaderId::ActiveRequestIdList => {
                "Request ids of still-active requests this message applies to"
            }
            GenericHeaderId::ProxySyncId => {
                "Marks an event already processed through direct resource interaction"
            }
            GenericHeaderId::AcceptCharset => "Acceptable character set for returned entities",
            GenericHeaderId::ContentType => "Media type of the message body",
            GenericHeaderId::ContentId => "Name by which the body content can be referenced",
            GenericHeaderId::ContentBase => "Base URI for relative URIs inside the body",
            GenericHeaderId::ContentEncoding => "Content coding applied to the body",
            GenericHeaderId::ContentLocation => "Location of the resource for this entity",
            GenericHeaderId::ContentLength => "Length of the message body in octets",
            GenericHeaderId::CacheControl => "Default caching algorithm for the session or request",
            GenericHeaderId::LoggingTag => "Tag for logs generated by the media server",
            GenericHeaderId::VendorSpecificParams => "Vendor-defined name/value parameters",
            GenericHeaderId::Accept => "Acceptable media types for returned entities",
            GenericHeaderId::FetchTimeout => "Timeout for content fetched over the network",
            GenericHeaderId::SetCookie | GenericHeaderId::SetCookie2 => {
                "Cookie store synchronization between client and server"
            }
        }
    }

    /// Decoded value shape
    pub fn value_kind(&self) -> FieldValueKind {
        match self {
            GenericHeaderId::ActiveRequestIdList => FieldValueKind::RequestIdList,
            GenericHeaderId::VendorSpecificParams => FieldValueKind::VendorParams,
            GenericHeaderId::ContentLength | GenericHeaderId::FetchTimeout => FieldValueKind::Size,
            _ => FieldValueKind::Text,
        }
    }

    /// First revision carrying this field
    pub fn introduced_in(&self) -> MrcpVersion {
        if self.index() < MrcpVersion::V1.field_count() {
            MrcpVersion::V1
        } else {
            MrcpVersion::V2
        }
    }

    /// Whether the field is part of the given revision's active subset
    pub fn is_active_in(&self, version: MrcpVersion) -> bool {
        self.index() < version.field_count()
    }

    /// Position in declaration order
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Active identifiers for a revision, in declaration order
    pub fn active_in(version: MrcpVersion) -> &'static [GenericHeaderId] {
        &Self::ALL[..version.field_count()]
    }

    /// Full introspection record
    pub fn info(&self) -> GenericHeaderInfo {
        GenericHeaderInfo {
            id: *self,
            name: self.name(),
            description: self.description(),
            value_kind: self.value_kind(),
            introduced_in: self.introduced_in(),
        }
    }
}
