//! Syslog backend.
//!
//! Uses libc `openlog`/`syslog`/`closelog` directly rather than pulling in a
//! dedicated syslog crate. The tag of each call travels inside the message
//! text because syslog(3) only has a single per-process ident.

use std::ffi::CString;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::priority::Priority;
use crate::sink::LogSink;

/// Syslog facility codes matching the POSIX syslog(3) constants.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(i32)]
pub enum SyslogFacility {
    /// User-level messages (LOG_USER), the default for applications.
    #[default]
    User = libc::LOG_USER,
    /// System daemons (LOG_DAEMON).
    Daemon = libc::LOG_DAEMON,
    /// Security/authorization messages (LOG_AUTH).
    Auth = libc::LOG_AUTH,
    /// Reserved for local use (LOG_LOCAL0).
    Local0 = libc::LOG_LOCAL0,
    /// Reserved for local use (LOG_LOCAL1).
    Local1 = libc::LOG_LOCAL1,
    /// Reserved for local use (LOG_LOCAL2).
    Local2 = libc::LOG_LOCAL2,
    /// Reserved for local use (LOG_LOCAL3).
    Local3 = libc::LOG_LOCAL3,
    /// Reserved for local use (LOG_LOCAL4).
    Local4 = libc::LOG_LOCAL4,
    /// Reserved for local use (LOG_LOCAL5).
    Local5 = libc::LOG_LOCAL5,
    /// Reserved for local use (LOG_LOCAL6).
    Local6 = libc::LOG_LOCAL6,
    /// Reserved for local use (LOG_LOCAL7).
    Local7 = libc::LOG_LOCAL7,
}

impl SyslogFacility {
    /// Parses a case-insensitive facility name.
    ///
    /// ```
    /// # #[cfg(unix)]
    /// # {
    /// use logging_sink::syslog::SyslogFacility;
    ///
    /// assert_eq!(SyslogFacility::from_name("LOCAL3"), Some(SyslogFacility::Local3));
    /// assert_eq!(SyslogFacility::from_name("kern"), None);
    /// # }
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "user" => Some(Self::User),
            "daemon" => Some(Self::Daemon),
            "auth" => Some(Self::Auth),
            "local0" => Some(Self::Local0),
            "local1" => Some(Self::Local1),
            "local2" => Some(Self::Local2),
            "local3" => Some(Self::Local3),
            "local4" => Some(Self::Local4),
            "local5" => Some(Self::Local5),
            "local6" => Some(Self::Local6),
            "local7" => Some(Self::Local7),
            _ => None,
        }
    }

    /// Returns the lowercase facility name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Daemon => "daemon",
            Self::Auth => "auth",
            Self::Local0 => "local0",
            Self::Local1 => "local1",
            Self::Local2 => "local2",
            Self::Local3 => "local3",
            Self::Local4 => "local4",
            Self::Local5 => "local5",
            Self::Local6 => "local6",
            Self::Local7 => "local7",
        }
    }
}

impl fmt::Display for SyslogFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ident used when none is configured or the configured one contains a NUL byte.
pub const DEFAULT_SYSLOG_IDENT: &str = "logging";

/// Facility and ident passed to [`openlog(3)`](libc::openlog).
///
/// Constructing a [`SyslogConfig`] does not open the connection; call
/// [`open`](Self::open) to obtain a [`SyslogSink`].
///
/// ```
/// # #[cfg(unix)]
/// # {
/// use logging_sink::syslog::{SyslogConfig, SyslogFacility};
///
/// let config = SyslogConfig::new(SyslogFacility::Local5, "my-app");
/// assert_eq!(config.facility(), SyslogFacility::Local5);
/// assert_eq!(config.ident(), "my-app");
/// # }
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyslogConfig {
    facility: SyslogFacility,
    ident: String,
}

impl SyslogConfig {
    /// Creates a configuration with the given facility and ident.
    pub fn new(facility: SyslogFacility, ident: impl Into<String>) -> Self {
        Self {
            facility,
            ident: ident.into(),
        }
    }

    /// Returns the configured facility.
    pub const fn facility(&self) -> SyslogFacility {
        self.facility
    }

    /// Returns the configured ident.
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Opens the syslog connection and returns a sink bound to it.
    ///
    /// syslog(3) keeps a single connection per process, shared by every
    /// [`SyslogSink`]. The first sink opens it with this configuration's
    /// facility and ident; sinks opened while another is still alive join the
    /// existing connection and their own facility and ident are ignored. The
    /// connection is closed when the last sink is dropped, after which the
    /// next `open` starts a fresh one.
    pub fn open(&self) -> SyslogSink {
        let mut connection = Connection::lock();
        if connection.open_sinks == 0 {
            let ident = CString::new(self.ident.as_str())
                .or_else(|_| CString::new(DEFAULT_SYSLOG_IDENT))
                .unwrap_or_default();
            // SAFETY: syslog(3) keeps the ident pointer; the CString is owned by
            // the connection state and only released after closelog.
            unsafe {
                libc::openlog(ident.as_ptr(), libc::LOG_PID, self.facility as libc::c_int);
            }
            connection.ident = Some(ident);
        }
        connection.open_sinks += 1;

        SyslogSink { _private: () }
    }
}

/// Process-wide syslog(3) connection state.
struct Connection {
    open_sinks: usize,
    ident: Option<CString>,
}

static CONNECTION: Mutex<Connection> = Mutex::new(Connection {
    open_sinks: 0,
    ident: None,
});

impl Connection {
    fn lock() -> MutexGuard<'static, Self> {
        CONNECTION.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Number of [`SyslogSink`] values currently sharing the connection.
pub fn open_sinks() -> usize {
    Connection::lock().open_sinks
}

impl Default for SyslogConfig {
    fn default() -> Self {
        Self::new(SyslogFacility::default(), DEFAULT_SYSLOG_IDENT)
    }
}

/// Syslog severity constants used by [`SyslogSink`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(i32)]
pub enum SyslogPriority {
    /// Error conditions (LOG_ERR).
    Error = libc::LOG_ERR,
    /// Warning conditions (LOG_WARNING).
    Warning = libc::LOG_WARNING,
    /// Informational messages (LOG_INFO).
    Info = libc::LOG_INFO,
    /// Debug-level messages (LOG_DEBUG).
    Debug = libc::LOG_DEBUG,
}

impl From<Priority> for SyslogPriority {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Verbose | Priority::Debug => Self::Debug,
            Priority::Info => Self::Info,
            Priority::Warn => Self::Warning,
            Priority::Error => Self::Error,
        }
    }
}

/// Sends `message` to syslog(3) at `priority`.
///
/// Returns the number of bytes handed to syslog, or `None` when the message
/// contains an interior NUL byte and cannot be passed as a C string.
pub fn syslog_message(priority: SyslogPriority, message: &str) -> Option<usize> {
    let c_message = CString::new(message).ok()?;

    // syslog(3) interprets `%` as a format specifier; routing the text through
    // "%s" keeps caller content from being parsed as one.
    // SAFETY: both pointers are valid NUL-terminated C strings for the duration
    // of the call, and syslog is thread-safe once openlog has returned.
    unsafe {
        libc::syslog(priority as libc::c_int, c"%s".as_ptr(), c_message.as_ptr());
    }
    Some(message.len())
}

/// [`LogSink`] writing `"<tag>: <text>"` entries to syslog(3).
///
/// Created by [`SyslogConfig::open`]. Dropping the last live sink calls
/// `closelog(3)`; see [`SyslogConfig::open`] for how sinks share the connection.
///
/// ```no_run
/// # #[cfg(unix)]
/// # {
/// use logging_sink::syslog::{SyslogConfig, SyslogFacility};
/// use logging_sink::{LogSink, Priority};
///
/// let sink = SyslogConfig::new(SyslogFacility::User, "my-app").open();
/// sink.write(Priority::Info, "Main", "started");
/// # }
/// ```
#[derive(Debug)]
pub struct SyslogSink {
    _private: (),
}

impl LogSink for SyslogSink {
    fn write(&self, priority: Priority, tag: &str, text: &str) -> i32 {
        let line = format!("{tag}: {text}");
        match syslog_message(priority.into(), &line) {
            Some(len) => i32::try_from(len).unwrap_or(i32::MAX),
            None => -1,
        }
    }
}

impl Drop for SyslogSink {
    fn drop(&mut self) {
        let mut connection = Connection::lock();
        connection.open_sinks = connection.open_sinks.saturating_sub(1);
        if connection.open_sinks == 0 {
            // SAFETY: no other sink is alive, so nothing logs through the
            // connection while it closes; the ident is released only afterwards.
            unsafe {
                libc::closelog();
            }
            connection.ident = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_facility_is_user() {
        assert_eq!(SyslogFacility::default(), SyslogFacility::User);
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(SyslogFacility::from_name("DAEMON"), Some(SyslogFacility::Daemon));
        assert_eq!(SyslogFacility::from_name("Local0"), Some(SyslogFacility::Local0));
        assert_eq!(SyslogFacility::from_name(""), None);
        assert_eq!(SyslogFacility::from_name("local8"), None);
    }

    #[test]
    fn as_str_round_trips_with_from_name() {
        let facilities = [
            SyslogFacility::User,
            SyslogFacility::Daemon,
            SyslogFacility::Auth,
            SyslogFacility::Local0,
            SyslogFacility::Local4,
            SyslogFacility::Local7,
        ];
        for facility in facilities {
            assert_eq!(SyslogFacility::from_name(facility.as_str()), Some(facility));
            assert_eq!(facility.to_string(), facility.as_str());
        }
    }

    #[test]
    fn facility_values_match_libc_constants() {
        assert_eq!(SyslogFacility::User as i32, libc::LOG_USER);
        assert_eq!(SyslogFacility::Daemon as i32, libc::LOG_DAEMON);
        assert_eq!(SyslogFacility::Local7 as i32, libc::LOG_LOCAL7);
    }

    #[test]
    fn priorities_map_to_syslog_levels() {
        assert_eq!(SyslogPriority::from(Priority::Verbose), SyslogPriority::Debug);
        assert_eq!(SyslogPriority::from(Priority::Debug), SyslogPriority::Debug);
        assert_eq!(SyslogPriority::from(Priority::Info), SyslogPriority::Info);
        assert_eq!(SyslogPriority::from(Priority::Warn), SyslogPriority::Warning);
        assert_eq!(SyslogPriority::from(Priority::Error), SyslogPriority::Error);
        assert_eq!(SyslogPriority::Error as i32, libc::LOG_ERR);
    }

    #[test]
    fn config_default_uses_default_ident() {
        let config = SyslogConfig::default();
        assert_eq!(config.facility(), SyslogFacility::User);
        assert_eq!(config.ident(), DEFAULT_SYSLOG_IDENT);
    }

    // Tests that open sinks share one process-wide connection.
    static SERIAL: Mutex<()> = Mutex::new(());

    fn serial() -> MutexGuard<'static, ()> {
        SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn sink_reports_bytes_and_rejects_nul() {
        let _serial = serial();
        let sink = SyslogConfig::new(SyslogFacility::User, "logging-tests").open();
        assert_eq!(sink.write(Priority::Info, "T", "syslog sink test"), 19);
        assert_eq!(sink.write(Priority::Debug, "T", "with % sign %d"), 17);
        assert_eq!(sink.write(Priority::Error, "T", "before\0after"), -1);
    }

    #[test]
    fn dropping_one_sink_keeps_the_connection_for_others() {
        let _serial = serial();
        let first = SyslogConfig::new(SyslogFacility::User, "logging-first").open();
        let second = SyslogConfig::new(SyslogFacility::Local3, "logging-second").open();
        assert_eq!(open_sinks(), 2);

        drop(first);
        assert_eq!(open_sinks(), 1);
        assert!(Connection::lock().ident.is_some());
        assert_eq!(second.write(Priority::Warn, "T", "still open"), 13);

        drop(second);
        assert_eq!(open_sinks(), 0);
        assert!(Connection::lock().ident.is_none());

        let reopened = SyslogConfig::default().open();
        assert_eq!(open_sinks(), 1);
        assert_eq!(
            Connection::lock().ident.as_deref(),
            Some(c"logging")
        );
        drop(reopened);
    }
}
