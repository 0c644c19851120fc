//! In-memory capturing sink.
//!
//! Used by the integration tests and by host clients that surface
//! diagnostics in their own UI instead of a terminal.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Mutex;

use crate::level::LogLevel;
use crate::sink::LogSink;

/// One payload captured by a [`BufferSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    pub level: LogLevel,
    pub payload: String,
    pub attribution_depth: usize,
}

/// Sink that records every payload at or above its threshold.
pub struct BufferSink {
    lines: Mutex<Vec<CapturedLine>>,
    min_level: AtomicU8,
}

impl BufferSink {
    pub fn new(min_level: LogLevel) -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
            min_level: AtomicU8::new(min_level as u8),
        }
    }

    /// Snapshot of everything captured so far.
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.lock_lines().clone()
    }

    /// Drop everything captured so far.
    pub fn clear(&self) {
        self.lock_lines().clear();
    }

    // A panic while holding the lock leaves valid data; recover instead of
    // poisoning every later log call.
    fn lock_lines(&self) -> std::sync::MutexGuard<'_, Vec<CapturedLine>> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for BufferSink {
    fn default() -> Self {
        Self::new(LogLevel::Debug)
    }
}

impl LogSink for BufferSink {
    fn log_at(&self, level: LogLevel, rendered: &str, attribution_depth: usize) {
        if level < self.min_level() {
            return;
        }
        self.lock_lines().push(CapturedLine {
            level,
            payload: rendered.to_string(),
            attribution_depth,
        });
    }

    fn set_min_level(&self, level: LogLevel) {
        self.min_level.store(level as u8, Ordering::Relaxed);
    }

    fn min_level(&self) -> LogLevel {
        LogLevel::from_repr(self.min_level.load(Ordering::Relaxed))
    }
}
