//! crates/logging-sink/src/priority.rs
//! Priorities a sink can be addressed with.

use std::fmt;

/// Priority attached to every line handed to a [`LogSink`](crate::LogSink).
///
/// The five variants match the levels understood by logcat-style platform
/// logs. Each priority renders as a single letter (`V`, `D`, `I`, `W`, `E`)
/// in the `"<letter>/<tag>: <text>"` line format used by
/// [`WriterSink`](crate::WriterSink).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Priority {
    /// Very fine-grained diagnostics.
    Verbose,
    /// Debugging output.
    Debug,
    /// Informational messages.
    Info,
    /// Potentially harmful situations.
    Warn,
    /// Errors.
    Error,
}

impl Priority {
    /// All priorities, lowest first.
    pub const ALL: [Self; 5] = [
        Self::Verbose,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
    ];

    /// Returns the single-letter code used in rendered lines.
    ///
    /// ```
    /// use logging_sink::Priority;
    ///
    /// assert_eq!(Priority::Warn.letter(), 'W');
    /// ```
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Verbose => 'V',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }

    /// Returns the lowercase name of the priority.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
