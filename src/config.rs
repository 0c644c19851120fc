//! Logging configuration schema.
//!
//! Host clients embed this block in their own config files; all fields
//! have defaults so an absent block means plain-text output at INFO.

use serde::{Deserialize, Serialize};

use crate::level::LogLevel;

/// Settings for constructing a [`StructuredLogger`](crate::StructuredLogger).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit records as flat JSON objects instead of plain text.
    pub json_format: bool,

    /// Minimum severity the bound sink records.
    pub min_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json_format: false,
            min_level: LogLevel::Info,
        }
    }
}
