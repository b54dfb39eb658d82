//! crates/logging-sink/src/sink/stream.rs
//! Line-oriented writer over any [`std::io::Write`] target.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use logging::{LogEntry, Writer};

use super::guard::LineModeGuard;
use crate::line_mode::LineMode;
use crate::render::render_entry;

/// Writer that renders each entry as one text line into a byte stream.
///
/// The stream is kept behind a mutex so one `StreamWriter` can be shared by
/// several threads, each line being written with a single `write_all`.
///
/// [`Writer::write`] has no way to report failures, so the first I/O error is
/// kept and can be collected with [`take_error`](Self::take_error). Later
/// entries are still attempted.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::{LogRequest, Logger, LoggerConfig};
/// use logging_sink::StreamWriter;
///
/// let logger = Logger::new(LoggerConfig::default());
/// let stream = Arc::new(StreamWriter::new(Vec::new()));
/// logger.add_shared_writer("buffer", stream.clone());
///
/// logger.log(LogRequest::new("started").with_writer("buffer")).unwrap();
///
/// logger.remove_writer("buffer");
/// let stream = Arc::try_unwrap(stream).ok().unwrap();
/// let output = String::from_utf8(stream.into_inner()).unwrap();
/// assert!(output.ends_with("[] : started\n"));
/// ```
pub struct StreamWriter<W> {
    state: Mutex<StreamState<W>>,
}

struct StreamState<W> {
    writer: W,
    line_mode: LineMode,
    error: Option<io::Error>,
}

impl<W> StreamWriter<W> {
    /// Creates a writer that terminates each entry with a newline.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a writer with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            state: Mutex::new(StreamState {
                writer,
                line_mode,
                error: None,
            }),
        }
    }

    /// Current newline policy.
    #[must_use]
    pub fn line_mode(&self) -> LineMode {
        self.lock().line_mode
    }

    /// Replaces the newline policy for subsequent entries.
    pub fn set_line_mode(&self, line_mode: LineMode) {
        self.lock().line_mode = line_mode;
    }

    /// Temporarily switches to `line_mode` until the returned guard drops.
    ///
    /// ```
    /// use logging_sink::{LineMode, StreamWriter};
    ///
    /// let stream = StreamWriter::new(Vec::<u8>::new());
    /// {
    ///     let _guard = stream.scoped_line_mode(LineMode::WithoutNewline);
    ///     assert_eq!(stream.line_mode(), LineMode::WithoutNewline);
    /// }
    /// assert_eq!(stream.line_mode(), LineMode::WithNewline);
    /// ```
    pub fn scoped_line_mode(&self, line_mode: LineMode) -> LineModeGuard<'_, W> {
        let previous = std::mem::replace(&mut self.lock().line_mode, line_mode);
        LineModeGuard::new(self, previous)
    }

    /// Removes and returns the first I/O error seen since the last call.
    pub fn take_error(&self) -> Option<io::Error> {
        self.lock().error.take()
    }

    /// Consumes the writer and returns the wrapped stream.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .writer
    }

    fn lock(&self) -> MutexGuard<'_, StreamState<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> StreamWriter<W> {
    /// Renders and writes `entry`, reporting failures to the caller instead
    /// of retaining them.
    pub fn write_entry(&self, entry: &LogEntry) -> io::Result<()> {
        let mut state = self.lock();
        let mut line = render_entry(entry);
        if state.line_mode.append_newline() {
            line.push('\n');
        }
        state.writer.write_all(line.as_bytes())
    }

    /// Flushes the wrapped stream.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().writer.flush()
    }
}

impl StreamWriter<io::Stdout> {
    /// Writer over the process standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl StreamWriter<io::Stderr> {
    /// Writer over the process standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W> Writer for StreamWriter<W>
where
    W: Write + Send,
{
    fn write(&self, entry: LogEntry) {
        if let Err(error) = self.write_entry(&entry) {
            let mut state = self.lock();
            if state.error.is_none() {
                state.error = Some(error);
            }
        }
    }
}

impl<W: Default> Default for StreamWriter<W> {
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W: fmt::Debug> fmt::Debug for StreamWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("StreamWriter")
            .field("writer", &state.writer)
            .field("line_mode", &state.line_mode)
            .field("error", &state.error)
            .finish()
    }
}
