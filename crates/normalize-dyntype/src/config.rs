//! Factory configuration.
//!
//! Example config.toml:
//! ```toml
//! allow_empty_enums = false          # reject enums without members (default)
//! blank_descriptions_absent = false  # treat "   " like "" (default: keep verbatim)
//! ```

use crate::error::FactoryError;
use serde::Deserialize;
use std::path::Path;

/// Policies for [`TypeFactory`](crate::TypeFactory).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Accept enum definitions with no members.
    pub allow_empty_enums: bool,
    /// Collapse whitespace-only descriptions to absent, not just empty ones.
    pub blank_descriptions_absent: bool,
}

impl FactoryConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, FactoryError> {
        Ok(toml::from_str(source)?)
    }

    /// Load config from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, FactoryError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no factory config, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}
