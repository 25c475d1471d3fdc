use std::{
    io::{self, Write},
    sync::{Mutex, PoisonError},
};

use crate::log::{log_entry::LogEntry, log_sink::LogSink};

/// Line-oriented sink over any [`Write`] implementor.
///
/// Each entry is written as its decorated line plus `\n` in a single
/// `write_all` while holding the sink's mutex, so lines from concurrent
/// threads never interleave. Write and flush errors are ignored.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use rootlog::log::{registry::Registry, writer_sink::WriterSink};
///
/// let registry = Registry::without_outputs();
/// registry.add_output(Arc::new(WriterSink::stderr()));
/// registry.warn("disk almost full");
/// ```
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl WriterSink<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl WriterSink<io::Stderr> {
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn log(&self, entry: &LogEntry<'_>) {
        let mut buf = String::with_capacity(entry.line.len() + 1);
        buf.push_str(entry.line);
        buf.push('\n');

        // Poisoned by a panicking writer; the buffer is still usable.
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.write_all(buf.as_bytes());
        let _ = writer.flush();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::log_level::LogLevel;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("disk gone"))
        }
    }

    #[test]
    fn writes_line_with_newline() {
        let sink = WriterSink::new(Vec::new());
        let entry = LogEntry::new(LogLevel::Info, "", "hi", "(ts) [INFO ] hi");
        sink.log(&entry);
        sink.log(&entry);

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "(ts) [INFO ] hi\n(ts) [INFO ] hi\n");
    }

    #[test]
    fn ignores_the_undecorated_message() {
        let sink = WriterSink::new(Vec::new());
        sink.log(&LogEntry::new(LogLevel::Warn, "net", "raw", "decorated"));
        assert_eq!(sink.into_inner(), b"decorated\n".to_vec());
    }

    #[test]
    fn write_errors_are_swallowed() {
        let sink = WriterSink::new(FailingWriter);
        sink.log(&LogEntry::new(LogLevel::Fatal, "", "boom", "boom"));
    }
}
