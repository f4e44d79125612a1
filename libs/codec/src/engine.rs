//! # Header Block Engine
//!
//! ## Purpose
//!
//! Message-level operations over a `GenericHeaderRecord`: parse one header
//! line or a whole block, generate every present field in declaration
//! order, and copy fields between records for request/response inheritance.
//!
//! ## Integration Points
//!
//! - **Input**: `Name: value` lines split off the start line of a message
//! - **Output**: `HeaderLine`s or a CRLF-terminated block ready for framing
//! - **Dispatch**: all per-field work goes through the revision's
//!   `GenericHeaderVTable`
//!
//! Resource-specific headers share the block with generic ones, so unknown
//! names are skipped by default and only rejected under
//! `UnknownFieldPolicy::Reject`.

use std::fmt;

use mrcp_types::{GenericHeaderId, GenericHeaderRecord, MrcpVersion};
use tracing::{debug, warn};

use crate::accessor::generic_header_vtable;
use crate::config::{self, CodecConfig, UnknownFieldPolicy};
use crate::error::{HeaderError, HeaderResult};
use crate::registry::GenericHeaderRegistry;

const NAME_SEPARATOR: char = ':';
const LINE_TERMINATOR: &str = "\r\n";

/// One `Name: value` header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLine {
    pub name: String,
    pub value: String,
}

impl HeaderLine {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for HeaderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} {}", self.name, NAME_SEPARATOR, self.value)
    }
}

/// Parse one header line already split into name and raw value
///
/// Surrounding whitespace of the value is dropped before decoding.
pub fn parse_header_line(
    name: &str,
    value: &str,
    version: MrcpVersion,
    record: &mut GenericHeaderRecord,
) -> HeaderResult<()> {
    let id = GenericHeaderRegistry::resolve(name.trim(), version)?;
    generic_header_vtable(version)
        .parse(id, value.trim(), record)
        .map_err(|err| {
            warn!(field = id.name(), %version, error = %err, "Rejected generic header value");
            err
        })
}

/// Parse a block of `Name: value` lines separated by CRLF or LF
///
/// Blank lines are skipped. Lines that are not generic headers of `version`
/// are handled according to `policy`; any other failure stops the block.
/// Returns the number of generic header lines stored.
pub fn parse_header_block(
    text: &str,
    version: MrcpVersion,
    record: &mut GenericHeaderRecord,
    policy: UnknownFieldPolicy,
) -> HeaderResult<usize> {
    let mut parsed = 0;

    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let (name, value) = line.split_once(NAME_SEPARATOR).ok_or_else(|| {
            HeaderError::MalformedField {
                field: "header line",
                value: line.to_owned(),
                reason: "missing ':' separator".to_owned(),
            }
        })?;

        match parse_header_line(name, value, version, record) {
            Ok(()) => parsed += 1,
            Err(HeaderError::NotFound { name, .. }) if policy == UnknownFieldPolicy::Ignore => {
                debug!(%name, %version, "Skipping non-generic header line");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(parsed)
}

/// Parse a block with the revision and unknown-name policy from `config`
pub fn parse_header_block_with_config(
    text: &str,
    record: &mut GenericHeaderRecord,
    config: &CodecConfig,
) -> HeaderResult<usize> {
    parse_header_block(text, config.version()?, record, config.unknown_field_policy)
}

/// Parse a block with the process-wide configuration
pub fn parse_header_block_default(
    text: &str,
    record: &mut GenericHeaderRecord,
) -> HeaderResult<usize> {
    parse_header_block(
        text,
        config::default_version(),
        record,
        config::unknown_field_policy(),
    )
}

/// Encode every present field of `record`, in declaration order
///
/// Vendor parameters yield one line per pair.
pub fn generate_headers(
    record: &GenericHeaderRecord,
    version: MrcpVersion,
) -> HeaderResult<Vec<HeaderLine>> {
    let table = generic_header_vtable(version);
    let mut lines = Vec::with_capacity(record.present_count());

    for &id in table.fields() {
        if let Some(text) = table.generate(id, record)? {
            lines.extend(
                text.into_values()
                    .into_iter()
                    .map(|value| HeaderLine::new(id.name(), value)),
            );
        }
    }

    Ok(lines)
}

/// Encode every present field as CRLF-terminated lines
pub fn generate_header_block(
    record: &GenericHeaderRecord,
    version: MrcpVersion,
) -> HeaderResult<String> {
    let mut block = String::new();
    for line in generate_headers(record, version)? {
        block.push_str(&line.to_string());
        block.push_str(LINE_TERMINATOR);
    }
    Ok(block)
}

/// Deep-copy one field's value and presence from `src` into `dst`
pub fn duplicate_header(
    src: &GenericHeaderRecord,
    dst: &mut GenericHeaderRecord,
    id: GenericHeaderId,
    version: MrcpVersion,
) -> HeaderResult<()> {
    generic_header_vtable(version).duplicate(id, src, dst)
}

/// Copy every field of `version` from `src` into `dst`, presence included
///
/// Afterwards `dst` generates exactly what `src` does.
pub fn duplicate_headers(
    src: &GenericHeaderRecord,
    dst: &mut GenericHeaderRecord,
    version: MrcpVersion,
) -> HeaderResult<()> {
    let table = generic_header_vtable(version);
    for &id in table.fields() {
        table.duplicate(id, src, dst)?;
    }
    Ok(())
}

/// Copy fields present in `src` but absent in `dst`; returns how many
///
/// Fields `dst` already carries keep their own values.
pub fn inherit_headers(
    src: &GenericHeaderRecord,
    dst: &mut GenericHeaderRecord,
    version: MrcpVersion,
) -> HeaderResult<usize> {
    let table = generic_header_vtable(version);
    let mut inherited = 0;
    for &id in table.fields() {
        if src.is_present(id) && !dst.is_present(id) {
            table.duplicate(id, src, dst)?;
            inherited += 1;
        }
    }
    Ok(inherited)
}

/// Copy every field present in `src` over `dst`; returns how many
///
/// Fields absent in `src` are left untouched in `dst`.
pub fn merge_headers(
    src: &GenericHeaderRecord,
    dst: &mut GenericHeaderRecord,
    version: MrcpVersion,
) -> HeaderResult<usize> {
    let table = generic_header_vtable(version);
    let mut merged = 0;
    for &id in table.fields() {
        if src.is_present(id) {
            table.duplicate(id, src, dst)?;
            merged += 1;
        }
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_line_display() {
        let line = HeaderLine::new("Content-Length", "42");
        assert_eq!(line.to_string(), "Content-Length: 42");
    }

    #[test]
    fn test_parse_line_trims_value() {
        let mut record = GenericHeaderRecord::new();
        parse_header_line(
            "Content-Type",
            "  application/ssml+xml \t",
            MrcpVersion::V2,
            &mut record,
        )
        .unwrap();
        assert_eq!(record.content_type(), Some("application/ssml+xml"));
    }

    #[test]
    fn test_block_policy() {
        let block = "Completion-Cause: 000 success\r\nContent-Length: 12\r\n";

        let mut record = GenericHeaderRecord::new();
        let parsed =
            parse_header_block(block, MrcpVersion::V2, &mut record, UnknownFieldPolicy::Ignore)
                .unwrap();
        assert_eq!(parsed, 1);
        assert_eq!(record.content_length(), Some(12));

        let mut record = GenericHeaderRecord::new();
        let err =
            parse_header_block(block, MrcpVersion::V2, &mut record, UnknownFieldPolicy::Reject)
                .unwrap_err();
        assert_eq!(err, HeaderError::not_found("Completion-Cause", MrcpVersion::V2));
    }

    #[test]
    fn test_block_with_config() {
        let block = "Fetch-Timeout: 500\r\nCompletion-Cause: 000 success\r\n";

        let v1_ignore = CodecConfig {
            default_version: 1,
            unknown_field_policy: UnknownFieldPolicy::Ignore,
        };
        let mut record = GenericHeaderRecord::new();
        assert_eq!(
            parse_header_block_with_config(block, &mut record, &v1_ignore).unwrap(),
            0
        );
        assert!(!record.is_present(GenericHeaderId::FetchTimeout));

        let v2_reject = CodecConfig {
            default_version: 2,
            unknown_field_policy: UnknownFieldPolicy::Reject,
        };
        let mut record = GenericHeaderRecord::new();
        let err = parse_header_block_with_config(block, &mut record, &v2_reject).unwrap_err();
        assert_eq!(err, HeaderError::not_found("Completion-Cause", MrcpVersion::V2));
        assert_eq!(record.fetch_timeout(), Some(500));

        let invalid = CodecConfig {
            default_version: 7,
            ..CodecConfig::default()
        };
        assert!(matches!(
            parse_header_block_with_config(block, &mut GenericHeaderRecord::new(), &invalid),
            Err(HeaderError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn test_block_with_global_config() {
        let block = "Content-Length: 12\r\n";
        let mut expected = GenericHeaderRecord::new();
        let parsed = parse_header_block(
            block,
            config::default_version(),
            &mut expected,
            config::unknown_field_policy(),
        )
        .unwrap();

        let mut record = GenericHeaderRecord::new();
        assert_eq!(parse_header_block_default(block, &mut record).unwrap(), parsed);
        assert_eq!(record, expected);
        assert_eq!(record.content_length(), Some(12));
    }

    #[test]
    fn test_block_requires_separator() {
        let mut record = GenericHeaderRecord::new();
        let err = parse_header_block(
            "Content-Length 12\n",
            MrcpVersion::V2,
            &mut record,
            UnknownFieldPolicy::Ignore,
        )
        .unwrap_err();
        assert!(matches!(err, HeaderError::MalformedField { .. }));
    }

    #[test]
    fn test_revision_two_names_unknown_in_revision_one() {
        let mut record = GenericHeaderRecord::new();
        let parsed = parse_header_block(
            "Accept: text/plain\nFetch-Timeout: 500\n",
            MrcpVersion::V1,
            &mut record,
            UnknownFieldPolicy::Ignore,
        )
        .unwrap();
        assert_eq!(parsed, 0);
        assert_eq!(record.present_count(), 0);
    }

    #[test]
    fn test_generate_skips_fields_outside_revision() {
        let mut record = GenericHeaderRecord::new();
        record.set_fetch_timeout(500);
        assert_eq!(generate_headers(&record, MrcpVersion::V1).unwrap(), vec![]);
        assert_eq!(
            generate_headers(&record, MrcpVersion::V2).unwrap(),
            vec![HeaderLine::new("Fetch-Timeout", "500")]
        );
    }

    #[test]
    fn test_duplicate_header_single_field() {
        let mut src = GenericHeaderRecord::new();
        src.set_content_id("a@b");
        src.set_logging_tag("call-1");

        let mut dst = GenericHeaderRecord::new();
        duplicate_header(&src, &mut dst, GenericHeaderId::ContentId, MrcpVersion::V1).unwrap();
        assert_eq!(dst.content_id(), Some("a@b"));
        assert_eq!(dst.present_count(), 1);

        assert!(matches!(
            duplicate_header(&src, &mut dst, GenericHeaderId::SetCookie, MrcpVersion::V1),
            Err(HeaderError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_inherit_keeps_existing_values() {
        let mut request = GenericHeaderRecord::new();
        request.set_content_type("text/plain");
        request.set_logging_tag("call-9");

        let mut response = GenericHeaderRecord::new();
        response.set_content_type("application/x-nlsml");

        let inherited = inherit_headers(&request, &mut response, MrcpVersion::V2).unwrap();
        assert_eq!(inherited, 1);
        assert_eq!(response.content_type(), Some("application/x-nlsml"));
        assert_eq!(response.logging_tag(), Some("call-9"));
    }

    #[test]
    fn test_merge_overwrites_present_only() {
        let mut update = GenericHeaderRecord::new();
        update.set_content_type("text/plain");

        let mut target = GenericHeaderRecord::new();
        target.set_content_type("application/x-nlsml");
        target.set_content_length(3);

        let merged = merge_headers(&update, &mut target, MrcpVersion::V2).unwrap();
        assert_eq!(merged, 1);
        assert_eq!(target.content_type(), Some("text/plain"));
        assert_eq!(target.content_length(), Some(3));
        assert!(target.is_present(GenericHeaderId::ContentLength));
    }
}
