//! Structured logging facade for a language-server client.
//!
//! Emits diagnostic and error messages in human-readable or JSON form,
//! annotating every record with the call-site that produced it. The facade
//! decides what to record and how to shape it; a shared [`sink`] decides
//! where output goes.

pub mod callsite;
pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod record;
pub mod sanitize;
pub mod sink;

pub use callsite::CallSite;
pub use config::LoggingConfig;
pub use error::{LogError, LogResult};
pub use level::LogLevel;
pub use logger::StructuredLogger;
pub use record::LogRecord;
pub use sink::{LogSink, SinkHandle};
