//! # Generic Header Registry - Name Resolution per Revision
//!
//! ## Purpose
//!
//! Canonical mapping between wire field names and `GenericHeaderId`, scoped
//! by protocol revision. Matching is case-insensitive and exact: header
//! names are fixed tokens, so prefixes and partial matches never resolve.
//!
//! ## Integration Points
//!
//! - **Parsing**: the engine resolves each incoming line's name here before
//!   dispatching through the revision's accessor table
//! - **Generation**: `fields()` supplies the emission order
//! - **Diagnostics**: `name_of()` renders identifiers back to wire names
//!
//! ## Performance Profile
//!
//! Linear scan over at most sixteen static names with ASCII case folding;
//! no allocation on either the hit or the miss path.

use mrcp_types::{GenericHeaderId, MrcpVersion};

use crate::error::{HeaderError, HeaderResult};

/// Registry of generic header names per revision
pub struct GenericHeaderRegistry;

impl GenericHeaderRegistry {
    /// Resolve a wire name to its identifier for `version`
    ///
    /// Names of fields introduced in a later revision are `NotFound`.
    pub fn resolve(name: &str, version: MrcpVersion) -> HeaderResult<GenericHeaderId> {
        GenericHeaderId::active_in(version)
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| HeaderError::not_found(name, version))
    }

    /// Canonical wire name of `id`, if active in `version`
    pub fn name_of(id: GenericHeaderId, version: MrcpVersion) -> HeaderResult<&'static str> {
        if !id.is_active_in(version) {
            return Err(HeaderError::invalid_field(id, version));
        }
        Ok(id.name())
    }

    /// Active identifiers in generation order
    pub fn fields(version: MrcpVersion) -> &'static [GenericHeaderId] {
        GenericHeaderId::active_in(version)
    }

    /// Whether `name` is a generic header of `version`
    pub fn is_generic_header(name: &str, version: MrcpVersion) -> bool {
        Self::resolve(name, version).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(
            GenericHeaderRegistry::resolve("content-length", MrcpVersion::V2).unwrap(),
            GenericHeaderId::ContentLength
        );
        assert_eq!(
            GenericHeaderRegistry::resolve("VENDOR-SPECIFIC-PARAMETERS", MrcpVersion::V1).unwrap(),
            GenericHeaderId::VendorSpecificParams
        );
    }

    #[test]
    fn test_version_gating() {
        assert_eq!(
            GenericHeaderRegistry::resolve("Accept", MrcpVersion::V1),
            Err(HeaderError::not_found("Accept", MrcpVersion::V1))
        );
        assert_eq!(
            GenericHeaderRegistry::resolve("Accept", MrcpVersion::V2).unwrap(),
            GenericHeaderId::Accept
        );

        assert!(matches!(
            GenericHeaderRegistry::name_of(GenericHeaderId::Accept, MrcpVersion::V1),
            Err(HeaderError::InvalidField { .. })
        ));
        assert_eq!(
            GenericHeaderRegistry::name_of(GenericHeaderId::Accept, MrcpVersion::V2).unwrap(),
            "Accept"
        );
    }

    #[test]
    fn test_no_partial_matches() {
        // "Accept" must not resolve through "Accept-Charset" and vice versa
        assert!(GenericHeaderRegistry::resolve("Accept-Char", MrcpVersion::V2).is_err());
        assert!(GenericHeaderRegistry::resolve("Content", MrcpVersion::V2).is_err());
        assert!(GenericHeaderRegistry::resolve("Set-Cookie22", MrcpVersion::V2).is_err());
        assert!(GenericHeaderRegistry::resolve("", MrcpVersion::V2).is_err());
        assert_eq!(
            GenericHeaderRegistry::resolve("Set-Cookie2", MrcpVersion::V2).unwrap(),
            GenericHeaderId::SetCookie2
        );
    }

    #[test]
    fn test_every_active_name_round_trips() {
        for version in MrcpVersion::ALL {
            for id in GenericHeaderRegistry::fields(version) {
                let name = GenericHeaderRegistry::name_of(*id, version).unwrap();
                assert_eq!(GenericHeaderRegistry::resolve(name, version).unwrap(), *id);
            }
        }
    }
}
