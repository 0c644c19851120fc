//! Log record definition and serialization.
//!
//! # Responsibilities
//! - Hold one fully-populated record: timestamp, level name, caller
//!   attribution, sanitized message
//! - Serialize to the flat JSON shape consumed by machine parsers
//!
//! # Design Decisions
//! - Every field is populated for every record; none is optional
//! - A record is immutable once built and never reused; the facade keeps
//!   no history of past records
//! - Timestamps use local wall-clock time formatted `YYYY-MM-DD HH:MM:SS`

use chrono::Local;
use serde::Serialize;

use crate::callsite::CallSite;
use crate::error::LogError;
use crate::level::LogLevel;

/// Timestamp format used in records.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One line of structured log output.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    /// Wall-clock time the record was created.
    pub time: String,
    /// Human-readable level name (e.g. "ERROR"), never the numeric code.
    pub level: String,
    /// Base filename of the invoking source location.
    pub caller_file: String,
    /// Name of the invoking function.
    pub caller_name: String,
    /// Line number within `caller_file`.
    pub caller_line: u32,
    /// Sanitized primary message text.
    pub message: String,
}

impl LogRecord {
    /// Build a record for a resolved call-site. `message` must already be
    /// sanitized.
    pub fn new(level: LogLevel, site: &CallSite, message: String) -> Self {
        Self {
            time: Local::now().format(TIME_FORMAT).to_string(),
            level: level.name().to_string(),
            caller_file: site.file_name().to_string(),
            caller_name: site.function_name().to_string(),
            caller_line: site.line(),
            message,
        }
    }

    /// Serialize to one flat JSON object.
    pub fn to_json(&self) -> Result<String, LogError> {
        Ok(serde_json::to_string(self)?)
    }
}
