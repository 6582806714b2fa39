//! crates/logging/src/logger.rs
//! The logging facade: filtering, normalization, formatting and chunked dispatch.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use logging_sink::{LogSink, Priority};

use crate::chunk::{MAX_CHUNK_CHARS, chunks};
use crate::config::LoggerConfig;
use crate::error::FormatError;
use crate::format::{Arg, format};
use crate::levels::{LevelMask, Severity};
use crate::strict::{strict, strict_owned};

/// Tag-addressed logger writing into a [`LogSink`].
///
/// Every call goes through the same steps:
///
/// 1. the message is normalized so it is never absent or empty (formatted
///    calls apply their format string first),
/// 2. calls whose severity is not in the enabled [`LevelMask`] are dropped,
/// 3. text longer than [`MAX_CHUNK_CHARS`] characters is split into ordered
///    chunks, one sink call each.
///
/// The level mask is a plain relaxed atomic. Concurrent [`set_level`] and log
/// calls are not ordered against each other: a call may observe either the
/// previous or the new mask. Chunks of concurrent oversized messages may
/// interleave at the sink.
///
/// [`set_level`]: Self::set_level
///
/// # Examples
///
/// ```
/// use logging::{Logger, Severity};
/// use logging_sink::WriterSink;
///
/// let logger = Logger::new(WriterSink::new(Vec::new()));
/// logger.debug("Net", "connecting");
/// logger.info_fmt("Net", "%s:%d", &["example.org".into(), 443.into()]).unwrap();
/// logger.set_level(i64::from(logging::ERROR));
/// logger.info("Net", "dropped by the mask");
///
/// let output = String::from_utf8(logger.into_sink().into_inner()).unwrap();
/// assert_eq!(output, "D/Net: connecting\nI/Net: example.org:443\n");
/// ```
pub struct Logger<S> {
    sink: S,
    mask: AtomicU32,
    internal_tag: String,
}

impl<S> Logger<S>
where
    S: LogSink,
{
    /// Creates a logger with every severity enabled.
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, LoggerConfig::default())
    }

    /// Creates a logger from explicit settings.
    pub fn with_config(sink: S, config: LoggerConfig) -> Self {
        Self {
            sink,
            mask: AtomicU32::new(config.levels.bits()),
            internal_tag: config.internal_tag,
        }
    }

    /// Borrows the sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the logger and returns its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Returns the tag used for the logger's own diagnostics.
    pub fn internal_tag(&self) -> &str {
        &self.internal_tag
    }

    /// Returns the currently enabled severities.
    pub fn level(&self) -> LevelMask {
        LevelMask::from_bits_truncate(self.mask.load(Ordering::Relaxed))
    }

    /// Replaces the enabled severities with a mask that is valid by construction.
    pub fn set_levels(&self, levels: LevelMask) {
        self.mask.store(levels.bits(), Ordering::Relaxed);
    }

    /// Replaces the enabled severities with a raw bitmask.
    ///
    /// Values outside `0..=ALL_LEVEL` leave the mask unchanged and produce one
    /// ERROR line under the internal tag describing the rejected value. That
    /// line is written regardless of the current mask.
    pub fn set_level(&self, mask: i64) {
        match LevelMask::try_from_bits(mask) {
            Ok(levels) => self.set_levels(levels),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(target: "logging", value = err.value(), "rejected log level mask");
                self.sink
                    .write(Priority::Error, &self.internal_tag, &format!("[Error] {err}"));
            }
        }
    }

    /// Reports whether calls at `severity` currently reach the sink.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.level().contains(severity)
    }

    /// Logs a literal message. An absent or empty message is logged as a single space.
    pub fn log<'m>(&self, severity: Severity, tag: &str, message: impl Into<Option<&'m str>>) {
        self.print(severity, tag, &strict(message.into()));
    }

    /// Formats `args` into `format` and logs the result.
    ///
    /// An absent format logs a single space without looking at `args`. A
    /// format that does not fit its arguments returns the error and writes
    /// nothing, whatever the current mask.
    pub fn log_fmt<'f>(
        &self,
        severity: Severity,
        tag: &str,
        format_str: impl Into<Option<&'f str>>,
        args: &[Arg<'_>],
    ) -> Result<(), FormatError> {
        match format_str.into() {
            Some(template) => {
                let message = strict_owned(format(template, args)?);
                self.print(severity, tag, &message);
            }
            None => self.print(severity, tag, &strict(None)),
        }
        Ok(())
    }

    /// Logs a literal message at [`Severity::Verbose`].
    pub fn verbose<'m>(&self, tag: &str, message: impl Into<Option<&'m str>>) {
        self.log(Severity::Verbose, tag, message);
    }

    /// Logs a literal message at [`Severity::Debug`].
    pub fn debug<'m>(&self, tag: &str, message: impl Into<Option<&'m str>>) {
        self.log(Severity::Debug, tag, message);
    }

    /// Logs a literal message at [`Severity::Info`].
    pub fn info<'m>(&self, tag: &str, message: impl Into<Option<&'m str>>) {
        self.log(Severity::Info, tag, message);
    }

    /// Logs a literal message at [`Severity::Warn`].
    pub fn warn<'m>(&self, tag: &str, message: impl Into<Option<&'m str>>) {
        self.log(Severity::Warn, tag, message);
    }

    /// Logs a literal message at [`Severity::Error`].
    pub fn error<'m>(&self, tag: &str, message: impl Into<Option<&'m str>>) {
        self.log(Severity::Error, tag, message);
    }

    /// Logs a formatted message at [`Severity::Verbose`].
    pub fn verbose_fmt<'f>(
        &self,
        tag: &str,
        format_str: impl Into<Option<&'f str>>,
        args: &[Arg<'_>],
    ) -> Result<(), FormatError> {
        self.log_fmt(Severity::Verbose, tag, format_str, args)
    }

    /// Logs a formatted message at [`Severity::Debug`].
    pub fn debug_fmt<'f>(
        &self,
        tag: &str,
        format_str: impl Into<Option<&'f str>>,
        args: &[Arg<'_>],
    ) -> Result<(), FormatError> {
        self.log_fmt(Severity::Debug, tag, format_str, args)
    }

    /// Logs a formatted message at [`Severity::Info`].
    pub fn info_fmt<'f>(
        &self,
        tag: &str,
        format_str: impl Into<Option<&'f str>>,
        args: &[Arg<'_>],
    ) -> Result<(), FormatError> {
        self.log_fmt(Severity::Info, tag, format_str, args)
    }

    /// Logs a formatted message at [`Severity::Warn`].
    pub fn warn_fmt<'f>(
        &self,
        tag: &str,
        format_str: impl Into<Option<&'f str>>,
        args: &[Arg<'_>],
    ) -> Result<(), FormatError> {
        self.log_fmt(Severity::Warn, tag, format_str, args)
    }

    /// Logs a formatted message at [`Severity::Error`].
    pub fn error_fmt<'f>(
        &self,
        tag: &str,
        format_str: impl Into<Option<&'f str>>,
        args: &[Arg<'_>],
    ) -> Result<(), FormatError> {
        self.log_fmt(Severity::Error, tag, format_str, args)
    }

    /// Filters `message` and hands it to the sink. `message` is already normalized.
    fn print(&self, severity: Severity, tag: &str, message: &str) {
        if !self.is_enabled(severity) {
            #[cfg(feature = "tracing")]
            tracing::trace!(target: "logging", %severity, tag, "message filtered by level mask");
            return;
        }

        match severity.priority() {
            Some(priority) => self.dispatch(priority, tag, message),
            None => {
                let warning = format!("[Error] Unknown Log Level ({})", severity.bits());
                self.sink.write(Priority::Warn, &self.internal_tag, &warning);
                self.dispatch(Priority::Error, tag, message);
            }
        }
    }

    fn dispatch(&self, priority: Priority, tag: &str, message: &str) {
        for chunk in chunks(message, MAX_CHUNK_CHARS) {
            self.sink.write(priority, tag, chunk);
        }
    }
}

impl<S> fmt::Debug for Logger<S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("sink", &self.sink)
            .field(
                "level",
                &LevelMask::from_bits_truncate(self.mask.load(Ordering::Relaxed)),
            )
            .field("internal_tag", &self.internal_tag)
            .finish()
    }
}
