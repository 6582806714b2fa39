//! crates/logging/src/macros.rs
//! Formatting macros that convert their arguments into [`Arg`](crate::Arg) values.
//!
//! Each macro takes a logger, a tag, a printf-style format string and any
//! number of arguments, and evaluates to the `Result` of the matching
//! `*_fmt` method.

/// Logs a formatted message at an explicit severity.
///
/// # Example
/// ```
/// use logging::{Logger, Severity, log_at};
/// use logging_sink::WriterSink;
///
/// let logger = Logger::new(WriterSink::new(Vec::new()));
/// log_at!(logger, Severity::Warn, "Disk", "%d%% full", 93).unwrap();
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $severity:expr, $tag:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_fmt($severity, $tag, $format, &[$($crate::Arg::from($arg)),*])
    };
}

/// Logs a formatted message at VERBOSE.
///
/// # Example
/// ```
/// use logging::{Logger, log_verbose};
/// use logging_sink::WriterSink;
///
/// let logger = Logger::new(WriterSink::new(Vec::new()));
/// log_verbose!(logger, "Cache", "evicted %d entries", 12).unwrap();
/// ```
#[macro_export]
macro_rules! log_verbose {
    ($logger:expr, $tag:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.verbose_fmt($tag, $format, &[$($crate::Arg::from($arg)),*])
    };
}

/// Logs a formatted message at DEBUG.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $tag:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug_fmt($tag, $format, &[$($crate::Arg::from($arg)),*])
    };
}

/// Logs a formatted message at INFO.
///
/// # Example
/// ```
/// use logging::{Logger, log_info};
/// use logging_sink::WriterSink;
///
/// let logger = Logger::new(WriterSink::new(Vec::new()));
/// log_info!(logger, "Net", "%s:%d", "example.org", 443u16).unwrap();
/// let output = String::from_utf8(logger.into_sink().into_inner()).unwrap();
/// assert_eq!(output, "I/Net: example.org:443\n");
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $tag:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.info_fmt($tag, $format, &[$($crate::Arg::from($arg)),*])
    };
}

/// Logs a formatted message at WARN.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $tag:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn_fmt($tag, $format, &[$($crate::Arg::from($arg)),*])
    };
}

/// Logs a formatted message at ERROR.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $tag:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.error_fmt($tag, $format, &[$($crate::Arg::from($arg)),*])
    };
}
