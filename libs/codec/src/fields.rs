//! Per-field parse, generate and duplicate routines
//!
//! One routine family per `FieldValueKind`. Parsing decodes into a local
//! value first and only then stores it, so a rejected value never leaves a
//! half-written field behind. Generation refuses values that would not parse
//! back to themselves: line breaks anywhere, surrounding whitespace, and list
//! separators inside vendor parameters.
//!
//! Wire grammar handled here:
//!
//! ```text
//! text fields              literal text, stored verbatim
//! Content-Length etc.      1*DIGIT
//! Active-Request-Id-List   request-id *("," request-id), at most 5
//! Vendor-Specific-Params   name ["=" value] *("," name ["=" value])
//! ```

use mrcp_types::{
    ActiveRequestIdList, GenericHeaderId, GenericHeaderRecord, PayloadError, RequestId,
    VendorParamList, MAX_ACTIVE_REQUEST_ID_COUNT,
};

use crate::accessor::FieldText;
use crate::error::{HeaderError, HeaderResult};

const LIST_SEPARATOR: char = ',';
const PAIR_SEPARATOR: char = '=';
const LINE_BREAKS: [char; 2] = ['\r', '\n'];

/// Text that survives `Name: value` framing and value trimming unchanged
fn check_line_value(id: GenericHeaderId, value: &str) -> HeaderResult<()> {
    if value.contains(LINE_BREAKS) {
        return Err(HeaderError::malformed(id, value, "line break in header value"));
    }
    if value.trim() != value {
        return Err(HeaderError::malformed(
            id,
            value,
            "surrounding whitespace in header value",
        ));
    }
    Ok(())
}

/// Decode a non-empty run of ASCII digits
fn decode_decimal<T: std::str::FromStr>(id: GenericHeaderId, value: &str) -> HeaderResult<T> {
    let digits = value.trim();
    if digits.is_empty() {
        return Err(HeaderError::malformed(id, value, "empty value"));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HeaderError::malformed(
            id,
            value,
            "expected unsigned decimal integer",
        ));
    }
    digits
        .parse()
        .map_err(|_| HeaderError::malformed(id, value, "integer out of range"))
}

pub(crate) fn parse_text(
    id: GenericHeaderId,
    value: &str,
    record: &mut GenericHeaderRecord,
) -> HeaderResult<()> {
    record.set_text(id, value)?;
    Ok(())
}

pub(crate) fn generate_text(
    id: GenericHeaderId,
    record: &GenericHeaderRecord,
) -> HeaderResult<Option<FieldText>> {
    match record.text(id) {
        Some(text) => {
            check_line_value(id, text)?;
            Ok(Some(FieldText::Line(text.to_owned())))
        }
        None => Ok(None),
    }
}

pub(crate) fn parse_size(
    id: GenericHeaderId,
    value: &str,
    record: &mut GenericHeaderRecord,
) -> HeaderResult<()> {
    let size = decode_decimal::<usize>(id, value)?;
    record.set_size(id, size)?;
    Ok(())
}

pub(crate) fn generate_size(
    id: GenericHeaderId,
    record: &GenericHeaderRecord,
) -> HeaderResult<Option<FieldText>> {
    Ok(record.size(id).map(|size| FieldText::Line(size.to_string())))
}

/// Decode a comma-separated request id list
///
/// Whitespace around ids is ignored; an empty value is an empty list.
pub fn decode_request_id_list(value: &str) -> HeaderResult<ActiveRequestIdList> {
    let id = GenericHeaderId::ActiveRequestIdList;
    let mut list = ActiveRequestIdList::new();
    if value.trim().is_empty() {
        return Ok(list);
    }

    for item in value.split(LIST_SEPARATOR) {
        let request_id = decode_decimal::<RequestId>(id, item).map_err(|_| {
            HeaderError::malformed(id, value, format!("invalid request id '{}'", item.trim()))
        })?;

        list.append(request_id).map_err(|err| match err {
            PayloadError::CapacityExceeded { .. } | PayloadError::InvalidLength { .. } => {
                HeaderError::malformed(
                    id,
                    value,
                    format!("more than {} request ids", MAX_ACTIVE_REQUEST_ID_COUNT),
                )
            }
        })?;
    }
    Ok(list)
}

/// Render a request id list as `id1,id2,...`
pub fn encode_request_id_list(list: &ActiveRequestIdList) -> String {
    list.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub(crate) fn parse_request_id_list(
    value: &str,
    record: &mut GenericHeaderRecord,
) -> HeaderResult<()> {
    let list = decode_request_id_list(value)?;
    record.set_active_request_ids(list);
    Ok(())
}

pub(crate) fn generate_request_id_list(
    record: &GenericHeaderRecord,
) -> HeaderResult<Option<FieldText>> {
    Ok(record
        .active_request_ids()
        .map(|list| FieldText::Line(encode_request_id_list(list))))
}

/// Decode comma-separated `name=value` pairs
///
/// A pair without `=` has an empty value. Empty items and empty names are
/// rejected.
pub fn decode_vendor_params(value: &str) -> HeaderResult<VendorParamList> {
    let id = GenericHeaderId::VendorSpecificParams;
    let mut params = VendorParamList::new();
    if value.trim().is_empty() {
        return Ok(params);
    }

    for item in value.split(LIST_SEPARATOR) {
        let item = item.trim();
        let (name, param_value) = match item.split_once(PAIR_SEPARATOR) {
            Some((name, param_value)) => (name.trim(), param_value.trim()),
            None => (item, ""),
        };
        if name.is_empty() {
            return Err(HeaderError::malformed(
                id,
                value,
                "vendor parameter without a name",
            ));
        }
        params.append(name, param_value);
    }
    Ok(params)
}

/// Render one vendor parameter the way it appears on the wire
///
/// Names must be non-empty and free of `,` and `=`; values must be free of
/// `,`. Neither may carry line breaks or surrounding whitespace.
pub fn encode_vendor_param(name: &str, value: &str) -> HeaderResult<String> {
    let id = GenericHeaderId::VendorSpecificParams;
    check_line_value(id, name)?;
    check_line_value(id, value)?;
    if name.is_empty() {
        return Err(HeaderError::malformed(
            id,
            value,
            "vendor parameter without a name",
        ));
    }
    if name.contains([LIST_SEPARATOR, PAIR_SEPARATOR]) {
        return Err(HeaderError::malformed(
            id,
            name,
            "separator in vendor parameter name",
        ));
    }
    if value.contains(LIST_SEPARATOR) {
        return Err(HeaderError::malformed(
            id,
            value,
            "separator in vendor parameter value",
        ));
    }

    if value.is_empty() {
        Ok(name.to_owned())
    } else {
        Ok(format!("{}{}{}", name, PAIR_SEPARATOR, value))
    }
}

/// Appends to pairs already present, so one-line-per-pair output re-assembles
///
/// A value with no pairs leaves the field untouched.
pub(crate) fn parse_vendor_params(
    value: &str,
    record: &mut GenericHeaderRecord,
) -> HeaderResult<()> {
    let params = decode_vendor_params(value)?;
    record.extend_vendor_params(params);
    Ok(())
}

/// One line per pair, in insertion order
pub(crate) fn generate_vendor_params(
    record: &GenericHeaderRecord,
) -> HeaderResult<Option<FieldText>> {
    let Some(params) = record.vendor_params() else {
        return Ok(None);
    };
    let lines = params
        .iter()
        .map(|(name, value)| encode_vendor_param(name, value))
        .collect::<HeaderResult<Vec<_>>>()?;
    Ok(Some(FieldText::Lines(lines)))
}

/// Copy one field's value and presence from `src` to `dst`
///
/// Text and vendor parameters are copied, not shared, so the two records
/// have independent lifetimes afterwards.
pub(crate) fn duplicate(
    id: GenericHeaderId,
    src: &GenericHeaderRecord,
    dst: &mut GenericHeaderRecord,
) -> HeaderResult<()> {
    if !src.is_present(id) {
        dst.clear(id);
        return Ok(());
    }

    match id {
        GenericHeaderId::ActiveRequestIdList => {
            if let Some(list) = src.active_request_ids() {
                dst.set_active_request_ids(*list);
            }
        }
        GenericHeaderId::VendorSpecificParams => {
            if let Some(params) = src.vendor_params() {
                dst.set_vendor_params(params.clone());
            }
        }
        GenericHeaderId::ContentLength | GenericHeaderId::FetchTimeout => {
            if let Some(size) = src.size(id) {
                dst.set_size(id, size)?;
            }
        }
        _ => {
            if let Some(text) = src.text(id) {
                dst.set_text(id, text.to_owned())?;
            }
        }
    }
    Ok(())
}
