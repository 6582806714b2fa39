#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` defines the seam between the `logging` facade and whatever
//! actually records a diagnostic: the [`LogSink`] trait, addressed by
//! [`Priority`], tag and text, plus a few concrete sinks.
//!
//! # Design
//!
//! A sink sees one bounded piece of text per call. Splitting, filtering and
//! normalization all happen upstream, so sinks stay small:
//!
//! - [`WriterSink`] renders `"<letter>/<tag>: <text>"` lines into any
//!   [`std::io::Write`] implementor (standard error, files, buffers).
//! - `syslog::SyslogSink` (unix only) routes calls to syslog(3).
//! - `TracingSink` (feature `tracing`) emits `tracing` events.
//!
//! # Invariants
//!
//! - Each call reaches the underlying device as one unit; sinks never tear a
//!   single call.
//! - No sink orders calls from different threads.
//! - The return value is a byte count on success and negative on failure.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{LineMode, LogSink, Priority, WriterSink};
//!
//! let sink = WriterSink::with_line_mode(Vec::new(), LineMode::WithNewline);
//! sink.write(Priority::Info, "Boot", "stage one");
//! sink.write(Priority::Warn, "Boot", "slow disk");
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output.lines().count(), 2);
//! assert!(output.starts_with("I/Boot: stage one"));
//! ```

mod line_mode;
mod priority;
mod sink;

#[cfg(unix)]
#[allow(unsafe_code)]
pub mod syslog;

#[cfg(feature = "tracing")]
mod tracing_sink;

pub use line_mode::LineMode;
pub use priority::Priority;
pub use sink::{LogSink, WriterSink};

#[cfg(feature = "tracing")]
pub use tracing_sink::{TRACING_TARGET, TracingSink};
