//! # Codec Configuration
//!
//! Runtime knobs for header block processing: which revision to assume when
//! the caller does not name one, and what to do with header lines that are
//! not generic headers of that revision.
//!
//! Values come from the environment (`MRCP_DEFAULT_VERSION`,
//! `MRCP_UNKNOWN_FIELD_POLICY`) or from a TOML document, and are validated
//! before use.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

use mrcp_types::MrcpVersion;

use crate::error::HeaderResult;

/// Handling of header lines whose name is not a generic header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFieldPolicy {
    /// Skip the line; resource-specific headers travel in the same block
    #[default]
    Ignore,
    /// Fail the block with `NotFound`
    Reject,
}

impl std::str::FromStr for UnknownFieldPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(UnknownFieldPolicy::Ignore),
            "reject" => Ok(UnknownFieldPolicy::Reject),
            other => Err(format!("unknown field policy '{}'", other)),
        }
    }
}

/// Header codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Revision number used when none is given (1 or 2)
    pub default_version: u8,
    pub unknown_field_policy: UnknownFieldPolicy,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            default_version: 2,
            unknown_field_policy: UnknownFieldPolicy::Ignore,
        }
    }
}

impl CodecConfig {
    /// Load from environment variables, keeping defaults for unset or unparsable values
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = env::var("MRCP_DEFAULT_VERSION") {
            if let Ok(number) = val.trim().parse() {
                config.default_version = number;
            }
        }

        if let Ok(val) = env::var("MRCP_UNKNOWN_FIELD_POLICY") {
            if let Ok(policy) = val.parse() {
                config.unknown_field_policy = policy;
            }
        }

        config
    }

    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, String> {
        let config: Self =
            toml::from_str(text).map_err(|e| format!("invalid codec configuration: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if MrcpVersion::from_number(self.default_version).is_err() {
            return Err(format!(
                "default_version must be 1 or 2, got {}",
                self.default_version
            ));
        }
        Ok(())
    }

    /// The configured default revision
    pub fn version(&self) -> HeaderResult<MrcpVersion> {
        Ok(MrcpVersion::from_number(self.default_version)?)
    }
}

/// Process-wide configuration, loaded once from the environment
pub static CONFIG: Lazy<CodecConfig> = Lazy::new(|| {
    let config = CodecConfig::from_env();
    if let Err(e) = config.validate() {
        warn!(error = %e, "Invalid codec configuration, using defaults");
        CodecConfig::default()
    } else {
        config
    }
});

/// Revision assumed when the caller does not name one
pub fn default_version() -> MrcpVersion {
    CONFIG.version().unwrap_or(MrcpVersion::V2)
}

pub fn unknown_field_policy() -> UnknownFieldPolicy {
    CONFIG.unknown_field_policy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.default_version, 2);
        assert_eq!(config.unknown_field_policy, UnknownFieldPolicy::Ignore);
        assert!(config.validate().is_ok());
        assert_eq!(config.version().unwrap(), MrcpVersion::V2);
    }

    #[test]
    fn test_validation() {
        let mut config = CodecConfig::default();

        config.default_version = 0;
        assert!(config.validate().is_err());
        assert!(config.version().is_err());

        config.default_version = 3;
        assert!(config.validate().is_err());

        config.default_version = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let config = CodecConfig::from_toml_str(
            r#"
            default_version = 1
            unknown_field_policy = "reject"
            "#,
        )
        .unwrap();
        assert_eq!(config.version().unwrap(), MrcpVersion::V1);
        assert_eq!(config.unknown_field_policy, UnknownFieldPolicy::Reject);

        let partial = CodecConfig::from_toml_str("default_version = 1").unwrap();
        assert_eq!(partial.unknown_field_policy, UnknownFieldPolicy::Ignore);

        assert!(CodecConfig::from_toml_str("default_version = 9").is_err());
        assert!(CodecConfig::from_toml_str("unknown_field_policy = \"drop\"").is_err());
    }

    #[test]
    fn test_global_config_is_valid() {
        assert!(CONFIG.validate().is_ok());
        assert_eq!(default_version(), CONFIG.version().unwrap());
        assert_eq!(unknown_field_policy(), CONFIG.unknown_field_policy);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("IGNORE".parse(), Ok(UnknownFieldPolicy::Ignore));
        assert_eq!(" reject ".parse(), Ok(UnknownFieldPolicy::Reject));
        assert!("skip".parse::<UnknownFieldPolicy>().is_err());
    }
}
