//! # MRCP Generic Header Types
//!
//! Data model for the generic header section of MRCP messages: the header
//! fields common to requests, responses and events regardless of which media
//! resource the message addresses.
//!
//! ## Design Philosophy
//!
//! - **Closed Field Set**: one enumeration covers both protocol revisions;
//!   a revision only selects how many identifiers are active
//! - **Presence Beside Value**: a bitmask records which fields are set, so a
//!   zero length or empty text is distinguishable from "not sent"
//! - **Owned Values**: text is copied out of the wire buffer; records never
//!   borrow from it
//! - **Bounded Where the Protocol Bounds**: the active request id list is an
//!   inline five-slot collection, vendor parameters are unbounded
//!
//! ## Quick Start
//!
//! ```rust
//! use mrcp_types::{GenericHeaderId, GenericHeaderRecord, MrcpVersion};
//!
//! let mut record = GenericHeaderRecord::new();
//! record.set_content_type("application/ssml+xml");
//! record.set_content_length(0);
//! record.append_active_request_id(42).unwrap();
//!
//! assert!(record.is_present(GenericHeaderId::ContentLength));
//! assert!(!GenericHeaderId::Accept.is_active_in(MrcpVersion::V1));
//! ```
//!
//! Parsing and generating wire text lives in the `mrcp-codec` crate.

pub mod common;
pub mod protocol;

pub use common::{FieldValueError, PayloadError, VersionError};
pub use protocol::{
    ActiveRequestIdList, DynamicPayload, FieldPresence, FieldValueKind, FixedVec, GenericHeader,
    GenericHeaderId, GenericHeaderInfo, GenericHeaderRecord, MrcpVersion, RequestId, VendorParam,
    VendorParamList, MAX_ACTIVE_REQUEST_ID_COUNT,
};
