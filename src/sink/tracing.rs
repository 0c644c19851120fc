//! Sink forwarding to the `tracing` ecosystem.
//!
//! # Responsibilities
//! - Map facade levels onto `tracing` levels
//! - Apply the sink's minimum-severity threshold
//! - Offer a default subscriber setup for hosts that have none
//!
//! # Design Decisions
//! - Threshold reads are a relaxed atomic load; logging must stay cheap
//! - CRITICAL maps to `tracing`'s ERROR with a `critical` marker field,
//!   since `tracing` has no level above ERROR
//! - The attribution-depth hint is ignored; caller attribution is already
//!   rendered into the payload

use std::io;
use std::sync::atomic::{AtomicU8, Ordering};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::level::LogLevel;
use crate::sink::LogSink;

/// Event target used for every forwarded record.
pub const TARGET: &str = "langserver";

/// Production sink that emits through the active `tracing` subscriber.
pub struct TracingSink {
    min_level: AtomicU8,
}

impl TracingSink {
    pub fn new(min_level: LogLevel) -> Self {
        Self {
            min_level: AtomicU8::new(min_level as u8),
        }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl LogSink for TracingSink {
    fn log_at(&self, level: LogLevel, rendered: &str, _attribution_depth: usize) {
        if level < self.min_level() {
            return;
        }
        match level {
            LogLevel::Debug => tracing::debug!(target: TARGET, "{}", rendered),
            LogLevel::Info => tracing::info!(target: TARGET, "{}", rendered),
            LogLevel::Warning => tracing::warn!(target: TARGET, "{}", rendered),
            LogLevel::Error => tracing::error!(target: TARGET, "{}", rendered),
            LogLevel::Critical => {
                tracing::error!(target: TARGET, critical = true, "{}", rendered)
            }
        }
    }

    fn set_min_level(&self, level: LogLevel) {
        self.min_level.store(level as u8, Ordering::Relaxed);
    }

    fn min_level(&self) -> LogLevel {
        LogLevel::from_repr(self.min_level.load(Ordering::Relaxed))
    }
}

/// Install a default `tracing` subscriber for host applications that have
/// not configured one: stderr writer, no ANSI, env-filter defaulting to the
/// crate target at TRACE so filtering stays with the sink threshold.
///
/// Panics if a global subscriber is already set, as `tracing-subscriber`'s
/// `init` does.
pub fn init_subscriber() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(io::stderr);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{TARGET}=trace")));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
