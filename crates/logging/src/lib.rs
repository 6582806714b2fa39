#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//!
//! # Overview
//!
//! `logging` is a small tag-addressed logging facade. Callers log at one of
//! five severities, either a literal message or a printf-style format string
//! with typed arguments, and a [`Logger`] decides whether the message reaches
//! its [`LogSink`].
//!
//! # Design
//!
//! - [`Severity`] values are single bit flags and a [`LevelMask`] is any
//!   combination of them. A call is dropped when its severity shares no bit
//!   with the logger's mask.
//! - Messages are normalized by [`strict()`]: absent or empty text becomes a
//!   single space so sinks never see an empty payload.
//! - Text longer than [`MAX_CHUNK_CHARS`] characters is split by [`chunks()`]
//!   and written as several ordered sink calls.
//! - [`format()`] implements the printf subset used by the `*_fmt` entry points
//!   and the `log_*!` macros.
//! - [`global`] offers the same entry points as free functions over a
//!   process-wide logger.
//!
//! # Invariants
//!
//! - A sink call never carries an empty text or more than
//!   [`MAX_CHUNK_CHARS`] characters.
//! - [`Logger::set_level`] never stores a value outside `0..=ALL_LEVEL`.
//! - A [`FormatError`] is the only failure a logging call reports, and when
//!   it occurs nothing is written.
//!
//! # Examples
//!
//! ```
//! use logging::{LevelMask, Logger, Severity, log_warn};
//! use logging_sink::WriterSink;
//!
//! let logger = Logger::new(WriterSink::new(Vec::new()));
//! logger.set_levels(Severity::Warn | Severity::Error);
//!
//! logger.info("Db", "hidden");
//! log_warn!(logger, "Db", "slow query: %d ms", 1250).unwrap();
//! logger.error("Db", None);
//!
//! let output = String::from_utf8(logger.into_sink().into_inner()).unwrap();
//! assert_eq!(output, "W/Db: slow query: 1250 ms\nE/Db:  \n");
//! assert_eq!("warn|error".parse::<LevelMask>().unwrap().bits(), 24);
//! ```
//!
//! # See also
//!
//! - [`logging_sink`] for the sink trait and the bundled sinks.

mod chunk;
mod config;
mod error;
mod format;
pub mod global;
mod levels;
mod logger;
mod macros;
mod strict;

pub use chunk::{Chunks, MAX_CHUNK_CHARS, chunks};
pub use config::{INTERNAL_TAG, LoggerConfig};
pub use error::{FormatError, InstallError, LevelMaskError, ParseLevelError};
pub use format::{Arg, format};
pub use levels::{ALL_LEVEL, DEBUG, ERROR, INFO, LevelMask, Severity, VERBOSE, WARN};
pub use logger::Logger;
pub use strict::{PLACEHOLDER, strict};

pub use logging_sink::{LineMode, LogSink, Priority, WriterSink};

#[cfg(feature = "tracing")]
pub use logging_sink::TracingSink;
