//! The structured logging facade.
//!
//! # Responsibilities
//! - Sanitize message text
//! - Resolve the attributed caller frame
//! - Build one record per call and hand it to the sink in the configured
//!   shape
//!
//! # Design Decisions
//! - Format is fixed per instance at construction; two loggers sharing a
//!   sink may disagree on format without interfering
//! - No retries and no fallback shapes: attribution and serialization
//!   failures propagate so audit trails stay trustworthy
//! - The facade holds no record history and owns no synchronization; the
//!   sink is responsible for concurrent-write safety

use crate::callsite::{resolve_frame, CallSite};
use crate::config::LoggingConfig;
use crate::error::LogResult;
use crate::level::LogLevel;
use crate::record::LogRecord;
use crate::sanitize::sanitize;
use crate::sink::SinkHandle;

/// Emits caller-attributed diagnostic records to a shared sink.
///
/// Plain value type; clone-cheap handles to one sink may back any number
/// of instances, and each instance keeps its own format flag.
pub struct StructuredLogger {
    sink: SinkHandle,
    json_format: bool,
}

impl StructuredLogger {
    /// Bind to a shared sink and seed its minimum severity threshold.
    ///
    /// No I/O happens here; the sink decides where output ultimately goes.
    pub fn new(sink: SinkHandle, json_format: bool, min_level: LogLevel) -> Self {
        sink.set_min_level(min_level);
        Self { sink, json_format }
    }

    /// Construct from a [`LoggingConfig`] block.
    pub fn from_config(config: &LoggingConfig, sink: SinkHandle) -> Self {
        Self::new(sink, config.json_format, config.min_level)
    }

    /// Whether this instance emits JSON records.
    pub fn json_format(&self) -> bool {
        self.json_format
    }

    /// Log a message attributed to `site`, the direct caller's capture.
    ///
    /// Most call-sites use the [`log!`](crate::log!) macro instead, which
    /// captures the site for them.
    pub fn log(&self, message: &str, level: LogLevel, site: CallSite) -> LogResult<()> {
        self.log_at(message, level, "", &[site], 1)
    }

    /// Like [`log`](Self::log), additionally carrying a sanitized
    /// secondary message. See [`log_at`](Self::log_at) for what becomes of
    /// it.
    pub fn log_sanitized(
        &self,
        message: &str,
        level: LogLevel,
        sanitized_message: &str,
        site: CallSite,
    ) -> LogResult<()> {
        self.log_at(message, level, sanitized_message, &[site], 1)
    }

    /// The full logging operation.
    ///
    /// `frames` is a chain of captured call-sites ordered nearest-first and
    /// `call_depth` selects the attributed frame, 1-based: depth 1 is the
    /// direct caller. A helper that wraps this call must prepend its own
    /// [`callsite!`](crate::callsite!) capture, forward the site it was
    /// handed, and pass an incremented depth; the facade does not detect
    /// wrapping on its own.
    ///
    /// Both messages are sanitized (single-quotes become double-quotes,
    /// newlines become spaces), but only the sanitized primary message is
    /// ever emitted. The secondary message exists for callers that prepare
    /// a detail-stripped variant; it is accepted and sanitized for
    /// contract stability while the current record shape carries the
    /// primary only.
    ///
    /// In JSON mode the sink receives the serialized record; in plain mode
    /// it receives the sanitized message itself and applies its own
    /// prefixing.
    pub fn log_at(
        &self,
        message: &str,
        level: LogLevel,
        sanitized_message: &str,
        frames: &[CallSite],
        call_depth: usize,
    ) -> LogResult<()> {
        let message = sanitize(message);
        let _sanitized_message = sanitize(sanitized_message);

        let site = resolve_frame(frames, call_depth)?;
        let record = LogRecord::new(level, site, message);

        if self.json_format {
            let payload = record.to_json()?;
            self.sink.log_at(level, &payload, call_depth);
        } else {
            self.sink.log_at(level, &record.message, call_depth);
        }
        Ok(())
    }
}

/// Log through a [`StructuredLogger`], capturing the call-site here.
///
/// ```
/// use langserver_logging::{log, LogLevel, StructuredLogger, SinkHandle};
/// use langserver_logging::sink::BufferSink;
///
/// let logger = StructuredLogger::new(
///     SinkHandle::new(BufferSink::default()),
///     false,
///     LogLevel::Debug,
/// );
/// log!(logger, LogLevel::Info, "initialized in {}ms", 12).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log(&format!($($arg)+), $level, $crate::callsite!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{BufferSink, LogSink};
    use std::sync::Arc;

    fn buffered(json_format: bool) -> (StructuredLogger, Arc<BufferSink>) {
        let sink = Arc::new(BufferSink::default());
        let logger = StructuredLogger::new(
            SinkHandle::from_arc(sink.clone()),
            json_format,
            LogLevel::Debug,
        );
        (logger, sink)
    }

    #[test]
    fn test_plain_mode_payload_is_sanitized_message_only() {
        let (logger, sink) = buffered(false);
        logger
            .log("it's a test\nline two", LogLevel::Info, crate::callsite!())
            .unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].payload, "it\"s a test line two");
        assert_eq!(lines[0].level, LogLevel::Info);
        assert_eq!(lines[0].attribution_depth, 1);
    }

    #[test]
    fn test_json_mode_record_shape() {
        let (logger, sink) = buffered(true);
        let line = line!() + 1;
        logger.log("it's fine", LogLevel::Error, crate::callsite!()).unwrap();

        let payload = &sink.lines()[0].payload;
        let value: serde_json::Value = serde_json::from_str(payload).unwrap();
        assert_eq!(value["level"], "ERROR");
        assert_eq!(value["message"], "it\"s fine");
        assert_eq!(value["caller_file"], "logger.rs");
        assert_eq!(value["caller_name"], "test_json_mode_record_shape");
        assert_eq!(value["caller_line"], line);
    }

    #[test]
    fn test_secondary_message_is_not_emitted() {
        let (logger, sink) = buffered(true);
        logger
            .log_sanitized("primary", LogLevel::Info, "secondary", crate::callsite!())
            .unwrap();

        let payload = &sink.lines()[0].payload;
        let value: serde_json::Value = serde_json::from_str(payload).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["message"], "primary");
        // The record carries the primary message only; no field holds the
        // secondary variant.
        assert!(object.values().all(|field| field != "secondary"));
    }

    #[test]
    fn test_wrapper_attribution_with_incremented_depth() {
        fn helper(
            logger: &StructuredLogger,
            message: &str,
            origin: CallSite,
        ) -> crate::error::LogResult<()> {
            logger.log_at(message, LogLevel::Warning, "", &[crate::callsite!(), origin], 2)
        }

        let (logger, sink) = buffered(true);
        let line = line!() + 1;
        helper(&logger, "wrapped", crate::callsite!()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&sink.lines()[0].payload).unwrap();
        assert_eq!(
            value["caller_name"],
            "test_wrapper_attribution_with_incremented_depth"
        );
        assert_eq!(value["caller_line"], line);
        assert_eq!(sink.lines()[0].attribution_depth, 2);
    }

    #[test]
    fn test_unresolvable_depth_emits_nothing() {
        let (logger, sink) = buffered(false);
        let result = logger.log_at("lost", LogLevel::Info, "", &[crate::callsite!()], 5);

        assert!(matches!(
            result,
            Err(crate::error::LogError::FrameResolution {
                requested: 5,
                available: 1,
            })
        ));
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_shared_sink_formats_stay_per_instance() {
        let sink = Arc::new(BufferSink::default());
        let plain = StructuredLogger::new(
            SinkHandle::from_arc(sink.clone()),
            false,
            LogLevel::Debug,
        );
        let json = StructuredLogger::new(
            SinkHandle::from_arc(sink.clone()),
            true,
            LogLevel::Debug,
        );

        plain.log("first", LogLevel::Info, crate::callsite!()).unwrap();
        json.log("second", LogLevel::Info, crate::callsite!()).unwrap();
        plain.log("third", LogLevel::Info, crate::callsite!()).unwrap();

        let lines = sink.lines();
        assert_eq!(lines[0].payload, "first");
        assert!(serde_json::from_str::<serde_json::Value>(&lines[1].payload).is_ok());
        assert_eq!(lines[2].payload, "third");
    }

    #[test]
    fn test_from_config() {
        let sink = Arc::new(BufferSink::default());
        let config = LoggingConfig {
            json_format: true,
            min_level: LogLevel::Warning,
        };
        let logger = StructuredLogger::from_config(&config, SinkHandle::from_arc(sink.clone()));

        assert!(logger.json_format());
        assert_eq!(sink.min_level(), LogLevel::Warning);
    }

    #[test]
    fn test_log_macro_attributes_to_expansion_site() {
        let (logger, sink) = buffered(true);
        let line = line!() + 1;
        log!(logger, LogLevel::Debug, "count = {}", 3).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&sink.lines()[0].payload).unwrap();
        assert_eq!(value["message"], "count = 3");
        assert_eq!(value["caller_line"], line);
        assert_eq!(
            value["caller_name"],
            "test_log_macro_attributes_to_expansion_site"
        );
    }
}
