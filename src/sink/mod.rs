//! Log sinks.
//!
//! # Responsibilities
//! - Define the sink contract the facade hands records to
//! - Provide a shared, clonable sink handle so independently constructed
//!   loggers converge on one output stream
//!
//! # Design Decisions
//! - Sinks own level filtering; the facade never filters
//! - Sinks must be safe for concurrent invocation (`Send + Sync` bound)
//! - Sharing is explicit via `SinkHandle` clones, not a global registry

pub mod buffer;
pub mod tracing;

use std::ops::Deref;
use std::sync::Arc;

use crate::level::LogLevel;

pub use self::buffer::{BufferSink, CapturedLine};
pub use self::tracing::TracingSink;

/// Destination for rendered log output.
///
/// Implementations must be safe for concurrent invocation and apply their
/// own minimum-severity threshold; any blocking or I/O behavior belongs
/// here, not in the facade.
pub trait LogSink: Send + Sync {
    /// Record one rendered payload at the given level. `attribution_depth`
    /// is a hint for sinks that perform secondary attribution of their
    /// own; sinks without one ignore it.
    fn log_at(&self, level: LogLevel, rendered: &str, attribution_depth: usize);

    /// Set the minimum severity this sink records.
    fn set_min_level(&self, level: LogLevel);

    /// The minimum severity this sink records.
    fn min_level(&self) -> LogLevel;
}

/// Shared handle to a sink.
///
/// Cloning the handle shares the underlying sink, so every logger
/// constructed with a clone writes to the same stream. Read-only after
/// construction; the facade never reassigns or locks it.
#[derive(Clone)]
pub struct SinkHandle(Arc<dyn LogSink>);

impl SinkHandle {
    /// Wrap a sink in a shareable handle.
    pub fn new(sink: impl LogSink + 'static) -> Self {
        Self(Arc::new(sink))
    }

    /// Share an already-reference-counted sink.
    pub fn from_arc(sink: Arc<dyn LogSink>) -> Self {
        Self(sink)
    }
}

impl Deref for SinkHandle {
    type Target = dyn LogSink;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_clones_share_the_sink() {
        let sink = Arc::new(BufferSink::new(LogLevel::Debug));
        let handle = SinkHandle::from_arc(sink.clone());
        let clone = handle.clone();

        handle.log_at(LogLevel::Info, "from handle", 1);
        clone.log_at(LogLevel::Info, "from clone", 1);

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].payload, "from handle");
        assert_eq!(lines[1].payload, "from clone");
    }

    #[test]
    fn test_handle_threshold_is_shared() {
        let sink = Arc::new(BufferSink::new(LogLevel::Debug));
        let handle = SinkHandle::from_arc(sink.clone());
        let clone = handle.clone();

        clone.set_min_level(LogLevel::Error);
        assert_eq!(handle.min_level(), LogLevel::Error);
    }
}
