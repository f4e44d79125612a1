//! # MRCP Generic Header Codec
//!
//! ## Purpose
//!
//! Protocol rules for the generic header section of MRCP messages: resolving
//! field names per revision, decoding header values into a
//! `GenericHeaderRecord`, regenerating the header lines of every present
//! field, and copying fields between records.
//!
//! ## Integration Points
//!
//! - **Message Parser**: hands each `Name: value` line (or the whole block)
//!   to `parse_header_line` / `parse_header_block`
//! - **Message Generator**: `generate_headers` produces the lines to frame
//! - **Request/Response Handling**: `inherit_headers` and `merge_headers`
//!   carry fields from a request into its response
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] → message framing
//!     ↑           ↓
//! Record &     Registry, accessor tables,
//! field ids    per-field wire rules
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - Start-line parsing, message framing or body handling
//! - Resource-specific headers (recognizer, synthesizer, ...)
//! - Transport or session management
//!
//! ## Quick Start
//!
//! ```rust
//! use mrcp_codec::{generate_header_block, parse_header_block, UnknownFieldPolicy};
//! use mrcp_types::{GenericHeaderRecord, MrcpVersion};
//!
//! let mut record = GenericHeaderRecord::new();
//! parse_header_block(
//!     "Content-Type: text/plain\r\nContent-Length: 0\r\n",
//!     MrcpVersion::V2,
//!     &mut record,
//!     UnknownFieldPolicy::Ignore,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     generate_header_block(&record, MrcpVersion::V2).unwrap(),
//!     "Content-Type: text/plain\r\nContent-Length: 0\r\n"
//! );
//! ```

pub mod accessor;
pub mod config;
pub mod engine;
pub mod error;
pub mod fields;
pub mod registry;

pub use accessor::{
    generic_header_vtable, generic_header_vtable_for, FieldText, GenericHeaderVTable,
};
pub use config::{CodecConfig, UnknownFieldPolicy, CONFIG};
pub use engine::{
    duplicate_header, duplicate_headers, generate_header_block, generate_headers,
    inherit_headers, merge_headers, parse_header_block, parse_header_block_default,
    parse_header_block_with_config, parse_header_line, HeaderLine,
};
pub use error::{HeaderError, HeaderResult};
pub use fields::{
    decode_request_id_list, decode_vendor_params, encode_request_id_list, encode_vendor_param,
};
pub use registry::GenericHeaderRegistry;
