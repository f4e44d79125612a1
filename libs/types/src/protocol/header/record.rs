//! # Generic Header Record
//!
//! ## Purpose
//!
//! Fixed-shape aggregate holding the decoded value of every generic header
//! field of one message, paired with the presence bitmask that says which of
//! those values are meaningful. A field is absent until set; an empty text or
//! a zero integer that has been set is present.
//!
//! ## Ownership
//!
//! Text values are owned copies, so the wire buffer a record was parsed from
//! can be released as soon as parsing finishes. The vendor parameter list is
//! owned by the record and only allocated once a parameter is stored.
//!
//! ## Architecture Role
//!
//! ```text
//! wire line → [codec parse] → GenericHeaderRecord → [codec generate] → wire line
//!                                    ↑
//!                          application setters
//! ```

use crate::common::{FieldValueError, PayloadError};

use super::field_id::{FieldValueKind, GenericHeaderId};
use super::presence::FieldPresence;
use super::request_id_list::{ActiveRequestIdList, RequestId};
use super::vendor_params::VendorParamList;

/// Decoded values of every generic header field
///
/// Values of absent fields are meaningless; consult `FieldPresence`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenericHeader {
    active_request_id_list: ActiveRequestIdList,
    proxy_sync_id: String,
    accept_charset: String,
    content_type: String,
    content_id: String,
    content_base: String,
    content_encoding: String,
    content_location: String,
    content_length: usize,
    cache_control: String,
    logging_tag: String,
    vendor_specific_params: Option<VendorParamList>,

    // Revision 2 additions
    accept: String,
    fetch_timeout: usize,
    set_cookie: String,
    set_cookie2: String,
}

impl GenericHeader {
    fn text_slot(&self, id: GenericHeaderId) -> Option<&String> {
        let slot = match id {
            GenericHeaderId::ProxySyncId => &self.proxy_sync_id,
            GenericHeaderId::AcceptCharset => &self.accept_charset,
            GenericHeaderId::ContentType => &self.content_type,
            GenericHeaderId::ContentId => &self.content_id,
            GenericHeaderId::ContentBase => &self.content_base,
            GenericHeaderId::ContentEncoding => &self.content_encoding,
            GenericHeaderId::ContentLocation => &self.content_location,
            GenericHeaderId::CacheControl => &self.cache_control,
            GenericHeaderId::LoggingTag => &self.logging_tag,
            GenericHeaderId::Accept => &self.accept,
            GenericHeaderId::SetCookie => &self.set_cookie,
            GenericHeaderId::SetCookie2 => &self.set_cookie2,
            _ => return None,
        };
        Some(slot)
    }

    fn text_slot_mut(&mut self, id: GenericHeaderId) -> Option<&mut String> {
        let slot = match id {
            GenericHeaderId::ProxySyncId => &mut self.proxy_sync_id,
            GenericHeaderId::AcceptCharset => &mut self.accept_charset,
            GenericHeaderId::ContentType => &mut self.content_type,
            GenericHeaderId::ContentId => &mut self.content_id,
            GenericHeaderId::ContentBase => &mut self.content_base,
            GenericHeaderId::ContentEncoding => &mut self.content_encoding,
            GenericHeaderId::ContentLocation => &mut self.content_location,
            GenericHeaderId::CacheControl => &mut self.cache_control,
            GenericHeaderId::LoggingTag => &mut self.logging_tag,
            GenericHeaderId::Accept => &mut self.accept,
            GenericHeaderId::SetCookie => &mut self.set_cookie,
            GenericHeaderId::SetCookie2 => &mut self.set_cookie2,
            _ => return None,
        };
        Some(slot)
    }

    fn size_slot(&self, id: GenericHeaderId) -> Option<usize> {
        match id {
            GenericHeaderId::ContentLength => Some(self.content_length),
            GenericHeaderId::FetchTimeout => Some(self.fetch_timeout),
            _ => None,
        }
    }

    fn size_slot_mut(&mut self, id: GenericHeaderId) -> Option<&mut usize> {
        match id {
            GenericHeaderId::ContentLength => Some(&mut self.content_length),
            GenericHeaderId::FetchTimeout => Some(&mut self.fetch_timeout),
            _ => None,
        }
    }

    fn reset(&mut self, id: GenericHeaderId) {
        match id.value_kind() {
            FieldValueKind::Text => {
                if let Some(slot) = self.text_slot_mut(id) {
                    slot.clear();
                }
            }
            FieldValueKind::Size => {
                if let Some(slot) = self.size_slot_mut(id) {
                    *slot = 0;
                }
            }
            FieldValueKind::RequestIdList => {
                self.active_request_id_list = ActiveRequestIdList::new();
            }
            FieldValueKind::VendorParams => {
                self.vendor_specific_params = None;
            }
        }
    }
}

/// Header values plus the presence mask kept alongside them
///
/// One instance per message. Every mutation that stores a value also marks
/// the field present; nothing marks a field present without a value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenericHeaderRecord {
    header: GenericHeader,
    presence: FieldPresence,
}

impl GenericHeaderRecord {
    /// Record with every field absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw values, including those of absent fields
    pub fn values(&self) -> &GenericHeader {
        &self.header
    }

    pub fn presence(&self) -> FieldPresence {
        self.presence
    }

    pub fn is_present(&self, id: GenericHeaderId) -> bool {
        self.presence.contains(id)
    }

    /// Present identifiers in declaration order
    pub fn present_fields(&self) -> impl Iterator<Item = GenericHeaderId> + '_ {
        self.presence.iter()
    }

    pub fn present_count(&self) -> usize {
        self.presence.len()
    }

    /// Drop a field's value and mark it absent
    pub fn clear(&mut self, id: GenericHeaderId) {
        self.header.reset(id);
        self.presence.remove(id);
    }

    /// Text value of a present text field
    pub fn text(&self, id: GenericHeaderId) -> Option<&str> {
        if !self.is_present(id) {
            return None;
        }
        self.header.text_slot(id).map(String::as_str)
    }

    /// Store a text value and mark the field present
    ///
    /// Values containing CR or LF are rejected and leave the field as it was.
    pub fn set_text(
        &mut self,
        id: GenericHeaderId,
        value: impl Into<String>,
    ) -> Result<(), FieldValueError> {
        let value = value.into();
        let slot = self
            .header
            .text_slot_mut(id)
            .ok_or(FieldValueError::WrongKind {
                field: id.name(),
                expected: "text",
            })?;
        if value.contains(['\r', '\n']) {
            return Err(FieldValueError::LineBreak {
                field: id.name(),
                value,
            });
        }
        *slot = value;
        self.presence.insert(id);
        Ok(())
    }

    /// Integer value of a present size field
    pub fn size(&self, id: GenericHeaderId) -> Option<usize> {
        if !self.is_present(id) {
            return None;
        }
        self.header.size_slot(id)
    }

    /// Store an integer value and mark the field present
    pub fn set_size(&mut self, id: GenericHeaderId, value: usize) -> Result<(), FieldValueError> {
        let slot = self
            .header
            .size_slot_mut(id)
            .ok_or(FieldValueError::WrongKind {
                field: id.name(),
                expected: "unsigned integer",
            })?;
        *slot = value;
        self.presence.insert(id);
        Ok(())
    }

    /// Active request id list, if present
    pub fn active_request_ids(&self) -> Option<&ActiveRequestIdList> {
        if !self.is_present(GenericHeaderId::ActiveRequestIdList) {
            return None;
        }
        Some(&self.header.active_request_id_list)
    }

    /// Replace the whole active request id list and mark it present
    pub fn set_active_request_ids(&mut self, list: ActiveRequestIdList) {
        self.header.active_request_id_list = list;
        self.presence.insert(GenericHeaderId::ActiveRequestIdList);
    }

    /// Mutable active request id list, created empty on first use
    pub fn active_request_ids_mut(&mut self) -> &mut ActiveRequestIdList {
        if !self.is_present(GenericHeaderId::ActiveRequestIdList) {
            self.header.active_request_id_list = ActiveRequestIdList::new();
            self.presence.insert(GenericHeaderId::ActiveRequestIdList);
        }
        &mut self.header.active_request_id_list
    }

    /// Append one request id, marking the list present on success
    ///
    /// A full list is left unchanged and its presence is not altered.
    pub fn append_active_request_id(&mut self, request_id: RequestId) -> Result<(), PayloadError> {
        if !self.is_present(GenericHeaderId::ActiveRequestIdList) {
            self.header.active_request_id_list = ActiveRequestIdList::new();
        }
        self.header.active_request_id_list.append(request_id)?;
        self.presence.insert(GenericHeaderId::ActiveRequestIdList);
        Ok(())
    }

    /// Whether `request_id` is listed; false when the list is absent
    pub fn find_active_request_id(&self, request_id: RequestId) -> bool {
        self.active_request_ids()
            .map_or(false, |list| list.find(request_id))
    }

    /// Vendor parameter list, if present
    ///
    /// A present list always holds at least one pair.
    pub fn vendor_params(&self) -> Option<&VendorParamList> {
        if !self.is_present(GenericHeaderId::VendorSpecificParams) {
            return None;
        }
        self.header.vendor_specific_params.as_ref()
    }

    /// Replace the vendor parameter list
    ///
    /// An empty list marks the field absent, since it has no wire form.
    pub fn set_vendor_params(&mut self, list: VendorParamList) {
        if list.is_empty() {
            self.clear(GenericHeaderId::VendorSpecificParams);
            return;
        }
        self.header.vendor_specific_params = Some(list);
        self.presence.insert(GenericHeaderId::VendorSpecificParams);
    }

    /// Append every pair of `list` after the pairs already present
    pub fn extend_vendor_params(&mut self, list: VendorParamList) {
        if list.is_empty() {
            return;
        }
        if self.is_present(GenericHeaderId::VendorSpecificParams) {
            if let Some(existing) = self.header.vendor_specific_params.as_mut() {
                existing.extend_from(list);
                return;
            }
        }
        self.set_vendor_params(list);
    }

    /// Append one vendor parameter, creating the list if needed
    pub fn append_vendor_param(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let mut list = VendorParamList::new();
        list.append(name, value);
        self.extend_vendor_params(list);
    }
}

macro_rules! text_field_accessors {
    ($($getter:ident, $setter:ident => $id:ident;)*) => {
        impl GenericHeaderRecord {
            $(
                #[doc = concat!("`", stringify!($id), "` text if present")]
                pub fn $getter(&self) -> Option<&str> {
                    self.text(GenericHeaderId::$id)
                }

                #[doc = concat!("Set `", stringify!($id), "` and mark it present")]
                ///
                /// Stored as given; generation refuses line breaks and surrounding whitespace.
                pub fn $setter(&mut self, value: impl Into<String>) {
                    if let Some(slot) = self.header.text_slot_mut(GenericHeaderId::$id) {
                        *slot = value.into();
                        self.presence.insert(GenericHeaderId::$id);
                    }
                }
            )*
        }
    };
}

macro_rules! size_field_accessors {
    ($($getter:ident, $setter:ident => $id:ident;)*) => {
        impl GenericHeaderRecord {
            $(
                #[doc = concat!("`", stringify!($id), "` value if present")]
                pub fn $getter(&self) -> Option<usize> {
                    self.size(GenericHeaderId::$id)
                }

                #[doc = concat!("Set `", stringify!($id), "` and mark it present")]
                pub fn $setter(&mut self, value: usize) {
                    if let Some(slot) = self.header.size_slot_mut(GenericHeaderId::$id) {
                        *slot = value;
                        self.presence.insert(GenericHeaderId::$id);
                    }
                }
            )*
        }
    };
}

text_field_accessors! {
    proxy_sync_id, set_proxy_sync_id => ProxySyncId;
    accept_charset, set_accept_charset => AcceptCharset;
    content_type, set_content_type => ContentType;
    content_id, set_content_id => ContentId;
    content_base, set_content_base => ContentBase;
    content_encoding, set_content_encoding => ContentEncoding;
    content_location, set_content_location => ContentLocation;
    cache_control, set_cache_control => CacheControl;
    logging_tag, set_logging_tag => LoggingTag;
    accept, set_accept => Accept;
    set_cookie, set_set_cookie => SetCookie;
    set_cookie2, set_set_cookie2 => SetCookie2;
}

size_field_accessors! {
    content_length, set_content_length => ContentLength;
    fetch_timeout, set_fetch_timeout => FetchTimeout;
}
