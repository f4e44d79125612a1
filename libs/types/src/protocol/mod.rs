//! Protocol layer modules
//!
//! Revision handling, the generic header data model, and the bounded
//! collection primitive it is built on.

pub mod dynamic_payload;
pub mod header;
pub mod version;

pub use dynamic_payload::{DynamicPayload, FixedVec};
pub use header::*;
pub use version::MrcpVersion;
