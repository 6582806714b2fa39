use std::fmt;
use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::line_mode::LineMode;

mod writing;

/// Sink that renders each call as a `"<letter>/<tag>: <text>"` line into an
/// [`io::Write`] target.
///
/// The writer lives behind a [`Mutex`] together with a scratch buffer that is
/// reused for every rendered line, so a single [`write`](crate::LogSink::write)
/// reaches the writer as one `write_all` and is never torn by a concurrent
/// call. No lock is held between calls, which means lines produced by
/// different threads can interleave in any order.
///
/// # Examples
///
/// Collect rendered lines into a [`Vec<u8>`]:
///
/// ```
/// use logging_sink::{LogSink, Priority, WriterSink};
///
/// let sink = WriterSink::new(Vec::new());
/// sink.write(Priority::Debug, "Net", "connected");
/// sink.write(Priority::Error, "Net", "reset by peer");
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "D/Net: connected\nE/Net: reset by peer\n");
/// ```
///
/// Render without newline terminators:
///
/// ```
/// use logging_sink::{LineMode, LogSink, Priority, WriterSink};
///
/// let sink = WriterSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
/// assert_eq!(sink.write(Priority::Info, "App", "ready"), 12);
/// assert_eq!(sink.into_inner(), b"I/App: ready".to_vec());
/// ```
pub struct WriterSink<W> {
    state: Mutex<State<W>>,
    line_mode: LineMode,
}

struct State<W> {
    writer: W,
    scratch: String,
}

impl<W> WriterSink<W> {
    /// Creates a sink that appends a newline after each rendered line.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            state: Mutex::new(State {
                writer,
                scratch: String::new(),
            }),
            line_mode,
        }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Mutably borrows the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self
            .state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }

    fn lock(&self) -> MutexGuard<'_, State<W>> {
        // A panic inside a writer leaves the state usable: the scratch buffer is
        // cleared before every render.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WriterSink<io::Stderr> {
    /// Creates a sink writing newline-terminated lines to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W> Default for WriterSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> fmt::Debug for WriterSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("WriterSink")
            .field("writer", &state.writer)
            .field("line_mode", &self.line_mode)
            .finish()
    }
}
