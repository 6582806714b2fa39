mod writer_sink;

use std::sync::Arc;

use crate::priority::Priority;

pub use writer_sink::WriterSink;

/// The platform log facility a logger writes into.
///
/// A sink receives one already-normalized, already-bounded piece of text per
/// call together with its [`Priority`] and tag. The return value follows the
/// convention of platform log calls: a non-negative count (bytes written) on
/// success, a negative value on failure. Callers are free to ignore it.
///
/// Implementations must be callable from several threads at once. Nothing
/// orders calls made by different threads; a sink only has to keep each
/// individual call intact.
///
/// # Examples
///
/// ```
/// use std::sync::Mutex;
/// use logging_sink::{LogSink, Priority};
///
/// #[derive(Default)]
/// struct Collect(Mutex<Vec<String>>);
///
/// impl LogSink for Collect {
///     fn write(&self, priority: Priority, tag: &str, text: &str) -> i32 {
///         let line = format!("{}/{tag}: {text}", priority.letter());
///         let len = line.len() as i32;
///         self.0.lock().unwrap().push(line);
///         len
///     }
/// }
///
/// let sink = Collect::default();
/// sink.write(Priority::Info, "App", "ready");
/// assert_eq!(sink.0.lock().unwrap()[0], "I/App: ready");
/// ```
pub trait LogSink: Send + Sync {
    /// Records `text` under `tag` at `priority`.
    fn write(&self, priority: Priority, tag: &str, text: &str) -> i32;
}

impl<T> LogSink for &T
where
    T: LogSink + ?Sized,
{
    fn write(&self, priority: Priority, tag: &str, text: &str) -> i32 {
        (**self).write(priority, tag, text)
    }
}

impl<T> LogSink for Box<T>
where
    T: LogSink + ?Sized,
{
    fn write(&self, priority: Priority, tag: &str, text: &str) -> i32 {
        (**self).write(priority, tag, text)
    }
}

impl<T> LogSink for Arc<T>
where
    T: LogSink + ?Sized,
{
    fn write(&self, priority: Priority, tag: &str, text: &str) -> i32 {
        (**self).write(priority, tag, text)
    }
}
