//! crates/logging/src/global.rs
//! Process-wide default logger behind free functions.
//!
//! The first call to [`install`] (or [`install_with_config`]) decides which
//! sink the process-wide logger writes to. Any log call made before that
//! installs a [`WriterSink`] on standard error instead, after which
//! installation fails with [`InstallError::AlreadyInstalled`].

use std::sync::OnceLock;

use logging_sink::{LogSink, WriterSink};

use crate::config::LoggerConfig;
use crate::error::{FormatError, InstallError};
use crate::format::Arg;
use crate::levels::LevelMask;
use crate::logger::Logger;

/// Logger type stored process-wide.
pub type GlobalLogger = Logger<Box<dyn LogSink>>;

static GLOBAL: OnceLock<GlobalLogger> = OnceLock::new();

/// Installs `sink` as the destination of the process-wide logger with every
/// severity enabled.
///
/// ```
/// use std::sync::Arc;
/// use logging::global;
/// use logging_sink::WriterSink;
///
/// let sink = Arc::new(WriterSink::new(Vec::new()));
/// global::install(Arc::clone(&sink)).unwrap();
/// global::info("Main", "ready");
/// assert!(global::install(WriterSink::stderr()).is_err());
/// ```
pub fn install<S>(sink: S) -> Result<&'static GlobalLogger, InstallError>
where
    S: LogSink + 'static,
{
    install_with_config(sink, LoggerConfig::default())
}

/// Installs `sink` with explicit settings.
pub fn install_with_config<S>(
    sink: S,
    config: LoggerConfig,
) -> Result<&'static GlobalLogger, InstallError>
where
    S: LogSink + 'static,
{
    let sink: Box<dyn LogSink> = Box::new(sink);
    GLOBAL
        .set(Logger::with_config(sink, config))
        .map_err(|_| InstallError::AlreadyInstalled)?;
    Ok(logger())
}

/// Returns the process-wide logger, installing the standard error default on first use.
pub fn logger() -> &'static GlobalLogger {
    GLOBAL.get_or_init(|| {
        let sink: Box<dyn LogSink> = Box::new(WriterSink::stderr());
        Logger::new(sink)
    })
}

/// See [`Logger::set_level`].
pub fn set_level(mask: i64) {
    logger().set_level(mask);
}

/// See [`Logger::level`].
pub fn level() -> LevelMask {
    logger().level()
}

/// Logs a literal message at VERBOSE.
pub fn verbose<'m>(tag: &str, message: impl Into<Option<&'m str>>) {
    logger().verbose(tag, message);
}

/// Logs a literal message at DEBUG.
pub fn debug<'m>(tag: &str, message: impl Into<Option<&'m str>>) {
    logger().debug(tag, message);
}

/// Logs a literal message at INFO.
pub fn info<'m>(tag: &str, message: impl Into<Option<&'m str>>) {
    logger().info(tag, message);
}

/// Logs a literal message at WARN.
pub fn warn<'m>(tag: &str, message: impl Into<Option<&'m str>>) {
    logger().warn(tag, message);
}

/// Logs a literal message at ERROR.
pub fn error<'m>(tag: &str, message: impl Into<Option<&'m str>>) {
    logger().error(tag, message);
}

/// Logs a formatted message at VERBOSE.
pub fn verbose_fmt<'f>(
    tag: &str,
    format_str: impl Into<Option<&'f str>>,
    args: &[Arg<'_>],
) -> Result<(), FormatError> {
    logger().verbose_fmt(tag, format_str, args)
}

/// Logs a formatted message at DEBUG.
pub fn debug_fmt<'f>(
    tag: &str,
    format_str: impl Into<Option<&'f str>>,
    args: &[Arg<'_>],
) -> Result<(), FormatError> {
    logger().debug_fmt(tag, format_str, args)
}

/// Logs a formatted message at INFO.
pub fn info_fmt<'f>(
    tag: &str,
    format_str: impl Into<Option<&'f str>>,
    args: &[Arg<'_>],
) -> Result<(), FormatError> {
    logger().info_fmt(tag, format_str, args)
}

/// Logs a formatted message at WARN.
pub fn warn_fmt<'f>(
    tag: &str,
    format_str: impl Into<Option<&'f str>>,
    args: &[Arg<'_>],
) -> Result<(), FormatError> {
    logger().warn_fmt(tag, format_str, args)
}

/// Logs a formatted message at ERROR.
pub fn error_fmt<'f>(
    tag: &str,
    format_str: impl Into<Option<&'f str>>,
    args: &[Arg<'_>],
) -> Result<(), FormatError> {
    logger().error_fmt(tag, format_str, args)
}
