//! Configuration types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extra label exceptions, keyed by identifier. These take precedence
    /// over the built-in table.
    pub labels: BTreeMap<String, String>,

    /// Output document settings
    pub output: OutputConfig,
}

/// Output document configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Document extension without the leading dot. Falls back to the
    /// formatter's own extension when unset.
    pub extension: Option<String>,
}
