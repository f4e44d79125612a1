//! Active Request ID List
//!
//! Lets one message (typically a STOP request or its response) refer to
//! several previously issued requests that are still in progress. The list
//! is append-only and bounded at five identifiers.

use crate::common::PayloadError;
use crate::protocol::dynamic_payload::{DynamicPayload, FixedVec};

/// MRCP request identifier (32-bit unsigned on the wire)
pub type RequestId = u32;

/// Max number of request ids in an active request id list
pub const MAX_ACTIVE_REQUEST_ID_COUNT: usize = 5;

/// Bounded list of active request identifiers
///
/// Duplicates are allowed; lookups are membership tests, not positional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveRequestIdList {
    ids: FixedVec<RequestId, MAX_ACTIVE_REQUEST_ID_COUNT>,
}

impl ActiveRequestIdList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an identifier
    ///
    /// Fails with `CapacityExceeded` once five identifiers are held, leaving
    /// the list unchanged.
    pub fn append(&mut self, request_id: RequestId) -> Result<(), PayloadError> {
        self.ids.try_push(request_id)
    }

    /// Whether `request_id` occurs anywhere in the list
    pub fn find(&self, request_id: RequestId) -> bool {
        self.ids.contains(&request_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.is_full()
    }

    pub fn as_slice(&self) -> &[RequestId] {
        self.ids.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RequestId> {
        self.ids.iter()
    }

    /// Build a list from a slice of at most five identifiers
    pub fn from_slice(ids: &[RequestId]) -> Result<Self, PayloadError> {
        Ok(Self {
            ids: FixedVec::from_slice(ids)?,
        })
    }
}
