//! # Generic Header Accessor Tables
//!
//! ## Purpose
//!
//! One immutable table per protocol revision exposing parse, generate and
//! duplicate for every active field. The message engine calls through the
//! table and never looks at field types itself, so per-field rules and the
//! engine evolve independently.
//!
//! ## Dispatch
//!
//! The field set is closed, so dispatch is a `match` on the field's value
//! kind rather than a table of function pointers. Both tables share the same
//! routines; they differ only in how many identifiers they accept. Tables are
//! `static` and need no initialization, so any number of threads may read
//! them concurrently.
//!
//! ```text
//! name ─► GenericHeaderRegistry::resolve ─► id
//!                                           │
//! version ─► generic_header_vtable ─► table.parse(id, value, record)
//! ```

use mrcp_types::{FieldValueKind, GenericHeaderId, GenericHeaderRecord, MrcpVersion};
use tracing::{debug, trace};

use crate::error::{HeaderError, HeaderResult};
use crate::fields;

/// Encoded text of one field
///
/// Scalar fields and the request id list produce one line. Vendor parameters
/// produce one line per pair, possibly none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldText {
    /// A single header line value
    Line(String),
    /// One header line value per element, in order
    Lines(Vec<String>),
}

impl FieldText {
    /// Values to emit, one per header line
    pub fn values(&self) -> &[String] {
        match self {
            FieldText::Line(value) => std::slice::from_ref(value),
            FieldText::Lines(values) => values,
        }
    }

    pub fn into_values(self) -> Vec<String> {
        match self {
            FieldText::Line(value) => vec![value],
            FieldText::Lines(values) => values,
        }
    }
}

/// Accessor table for one protocol revision
#[derive(Debug, PartialEq, Eq)]
pub struct GenericHeaderVTable {
    version: MrcpVersion,
}

static GENERIC_HEADER_VTABLE_V1: GenericHeaderVTable = GenericHeaderVTable {
    version: MrcpVersion::V1,
};

static GENERIC_HEADER_VTABLE_V2: GenericHeaderVTable = GenericHeaderVTable {
    version: MrcpVersion::V2,
};

/// Accessor table for `version`
pub fn generic_header_vtable(version: MrcpVersion) -> &'static GenericHeaderVTable {
    match version {
        MrcpVersion::V1 => &GENERIC_HEADER_VTABLE_V1,
        MrcpVersion::V2 => &GENERIC_HEADER_VTABLE_V2,
    }
}

/// Accessor table for a numeric revision; anything but 1 or 2 is rejected
pub fn generic_header_vtable_for(version: u8) -> HeaderResult<&'static GenericHeaderVTable> {
    let version = MrcpVersion::from_number(version)?;
    debug!(%version, fields = version.field_count(), "Selected generic header table");
    Ok(generic_header_vtable(version))
}

impl GenericHeaderVTable {
    pub fn version(&self) -> MrcpVersion {
        self.version
    }

    /// Number of fields this table accepts
    pub fn field_count(&self) -> usize {
        self.version.field_count()
    }

    /// Accepted identifiers in generation order
    pub fn fields(&self) -> &'static [GenericHeaderId] {
        GenericHeaderId::active_in(self.version)
    }

    pub fn supports(&self, id: GenericHeaderId) -> bool {
        id.is_active_in(self.version)
    }

    fn ensure_active(&self, id: GenericHeaderId) -> HeaderResult<()> {
        if self.supports(id) {
            Ok(())
        } else {
            Err(HeaderError::invalid_field(id, self.version))
        }
    }

    /// Decode `value` into `record` and mark the field present
    ///
    /// On error the field is left exactly as it was.
    pub fn parse(
        &self,
        id: GenericHeaderId,
        value: &str,
        record: &mut GenericHeaderRecord,
    ) -> HeaderResult<()> {
        self.ensure_active(id)?;
        trace!(field = id.name(), version = %self.version, "parsing generic header field");

        match id.value_kind() {
            FieldValueKind::Text => fields::parse_text(id, value, record),
            FieldValueKind::Size => fields::parse_size(id, value, record),
            FieldValueKind::RequestIdList => fields::parse_request_id_list(value, record),
            FieldValueKind::VendorParams => fields::parse_vendor_params(value, record),
        }
    }

    /// Encode a field of `record`; `None` when the field is absent
    ///
    /// Fails with `MalformedField` when the stored value has no wire form
    /// that would parse back to it.
    pub fn generate(
        &self,
        id: GenericHeaderId,
        record: &GenericHeaderRecord,
    ) -> HeaderResult<Option<FieldText>> {
        self.ensure_active(id)?;

        match id.value_kind() {
            FieldValueKind::Text => fields::generate_text(id, record),
            FieldValueKind::Size => fields::generate_size(id, record),
            FieldValueKind::RequestIdList => fields::generate_request_id_list(record),
            FieldValueKind::VendorParams => fields::generate_vendor_params(record),
        }
    }

    /// Deep-copy one field's value and presence from `src` to `dst`
    pub fn duplicate(
        &self,
        id: GenericHeaderId,
        src: &GenericHeaderRecord,
        dst: &mut GenericHeaderRecord,
    ) -> HeaderResult<()> {
        self.ensure_active(id)?;
        fields::duplicate(id, src, dst)
    }
}
