//! Generic header data model
//!
//! Field identifiers, the header record with its presence mask, and the two
//! collections embedded in header values.

pub mod field_id;
pub mod presence;
pub mod record;
pub mod request_id_list;
pub mod vendor_params;

pub use field_id::{FieldValueKind, GenericHeaderId, GenericHeaderInfo};
pub use presence::FieldPresence;
pub use record::{GenericHeader, GenericHeaderRecord};
pub use request_id_list::{ActiveRequestIdList, RequestId, MAX_ACTIVE_REQUEST_ID_COUNT};
pub use vendor_params::{VendorParam, VendorParamList};
