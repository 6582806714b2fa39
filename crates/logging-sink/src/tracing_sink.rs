//! crates/logging-sink/src/tracing_sink.rs
//! Sink that forwards every call into the `tracing` ecosystem.
//!
//! Useful when an application already installs a `tracing` subscriber and
//! wants tag-addressed output to share its formatting and filtering. The tag
//! is recorded as the `tag` field; the text becomes the event message.
//!
//! Priority mapping: `Verbose` → `TRACE`, `Debug` → `DEBUG`, `Info` → `INFO`,
//! `Warn` → `WARN`, `Error` → `ERROR`.

use tracing::Level;

use crate::priority::Priority;
use crate::sink::LogSink;

/// Target attached to every event emitted by [`TracingSink`].
pub const TRACING_TARGET: &str = "logging_sink";

/// [`LogSink`] emitting one `tracing` event per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a sink priority to a tracing level.
    #[must_use]
    pub const fn level_for(priority: Priority) -> Level {
        match priority {
            Priority::Verbose => Level::TRACE,
            Priority::Debug => Level::DEBUG,
            Priority::Info => Level::INFO,
            Priority::Warn => Level::WARN,
            Priority::Error => Level::ERROR,
        }
    }
}

impl LogSink for TracingSink {
    fn write(&self, priority: Priority, tag: &str, text: &str) -> i32 {
        // `event!` needs a constant level, hence one arm per priority.
        match priority {
            Priority::Verbose => tracing::trace!(target: TRACING_TARGET, tag, "{text}"),
            Priority::Debug => tracing::debug!(target: TRACING_TARGET, tag, "{text}"),
            Priority::Info => tracing::info!(target: TRACING_TARGET, tag, "{text}"),
            Priority::Warn => tracing::warn!(target: TRACING_TARGET, tag, "{text}"),
            Priority::Error => tracing::error!(target: TRACING_TARGET, tag, "{text}"),
        }
        i32::try_from(text.len()).unwrap_or(i32::MAX)
    }
}
