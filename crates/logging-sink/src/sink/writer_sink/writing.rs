use std::fmt::Write as _;
use std::io::{self, Write};

use super::{State, WriterSink};
use crate::line_mode::LineMode;
use crate::priority::Priority;
use crate::sink::LogSink;

impl<W> State<W>
where
    W: Write,
{
    fn render(
        &mut self,
        priority: Priority,
        tag: &str,
        text: &str,
        line_mode: LineMode,
    ) -> io::Result<usize> {
        self.scratch.clear();
        // Writing into a String cannot fail.
        let _ = write!(self.scratch, "{}/{tag}: {text}", priority.letter());
        if line_mode.append_newline() {
            self.scratch.push('\n');
        }
        self.writer.write_all(self.scratch.as_bytes())?;
        Ok(self.scratch.len())
    }
}

impl<W> WriterSink<W>
where
    W: Write,
{
    /// Renders one line and reports I/O failures instead of folding them into
    /// the sink's integer status.
    pub fn try_write(&self, priority: Priority, tag: &str, text: &str) -> io::Result<usize> {
        self.lock().render(priority, tag, text, self.line_mode)
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().writer.flush()
    }
}

impl<W> LogSink for WriterSink<W>
where
    W: Write + Send,
{
    fn write(&self, priority: Priority, tag: &str, text: &str) -> i32 {
        match self.try_write(priority, tag, text) {
            Ok(written) => i32::try_from(written).unwrap_or(i32::MAX),
            Err(_) => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("device unavailable"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn renders_letter_tag_and_text() {
        let sink = WriterSink::new(Vec::new());
        assert_eq!(sink.write(Priority::Verbose, "Cache", "miss"), 14);
        assert_eq!(sink.write(Priority::Warn, "Cache", "evicted"), 17);

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("V/Cache: miss"));
        assert_eq!(lines.next(), Some("W/Cache: evicted"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn without_newline_concatenates_lines() {
        let sink = WriterSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
        sink.write(Priority::Info, "a", "1");
        sink.write(Priority::Info, "b", "2");
        assert_eq!(sink.into_inner(), b"I/a: 1I/b: 2".to_vec());
    }

    #[test]
    fn set_line_mode_applies_to_later_writes() {
        let mut sink = WriterSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
        sink.write(Priority::Info, "t", "one");
        sink.set_line_mode(LineMode::WithNewline);
        sink.write(Priority::Info, "t", "two");
        assert_eq!(sink.line_mode(), LineMode::WithNewline);
        assert_eq!(sink.into_inner(), b"I/t: oneI/t: two\n".to_vec());
    }

    #[test]
    fn io_error_reports_negative_status() {
        let sink = WriterSink::new(FailingWriter);
        assert_eq!(sink.write(Priority::Error, "t", "lost"), -1);
        assert!(sink.try_write(Priority::Error, "t", "lost").is_err());
    }

    #[test]
    fn multibyte_text_counts_bytes() {
        let sink = WriterSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
        // "D/t: " is 5 bytes, "é" is 2.
        assert_eq!(sink.write(Priority::Debug, "t", "é"), 7);
    }

    #[test]
    fn get_mut_exposes_writer() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write(Priority::Info, "t", "x");
        sink.get_mut().clear();
        assert!(sink.into_inner().is_empty());
    }

    #[test]
    fn debug_format_names_the_sink() {
        let sink = WriterSink::new(Vec::<u8>::new());
        let debug = format!("{sink:?}");
        assert!(debug.contains("WriterSink"));
        assert!(debug.contains("WithNewline"));
    }
}
