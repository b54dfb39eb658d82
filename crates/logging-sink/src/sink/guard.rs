//! crates/logging-sink/src/sink/guard.rs
//! Scoped line mode override for [`StreamWriter`].

use super::StreamWriter;
use crate::line_mode::LineMode;

/// RAII guard that temporarily overrides a [`StreamWriter`]'s [`LineMode`].
///
/// Created by [`StreamWriter::scoped_line_mode`]. While the guard is alive,
/// every entry written through the stream uses the scoped mode; dropping the
/// guard restores the previous mode. The override is visible to all threads
/// sharing the stream.
#[must_use = "dropping the guard immediately restores the previous line mode"]
pub struct LineModeGuard<'a, W> {
    stream: &'a StreamWriter<W>,
    previous: LineMode,
    restore: bool,
}

impl<'a, W> LineModeGuard<'a, W> {
    pub(crate) const fn new(stream: &'a StreamWriter<W>, previous: LineMode) -> Self {
        Self {
            stream,
            previous,
            restore: true,
        }
    }

    /// Returns the [`LineMode`] restored when the guard is dropped.
    #[must_use]
    pub const fn previous_line_mode(&self) -> LineMode {
        self.previous
    }

    /// Consumes the guard without restoring the previous mode, making the
    /// override the stream's new baseline.
    ///
    /// ```
    /// use logging_sink::{LineMode, StreamWriter};
    ///
    /// let stream = StreamWriter::new(Vec::<u8>::new());
    /// stream.scoped_line_mode(LineMode::WithoutNewline).keep();
    /// assert_eq!(stream.line_mode(), LineMode::WithoutNewline);
    /// ```
    pub fn keep(mut self) -> &'a StreamWriter<W> {
        self.restore = false;
        self.stream
    }
}

impl<W> Drop for LineModeGuard<'_, W> {
    fn drop(&mut self) {
        if self.restore {
            self.stream.set_line_mode(self.previous);
        }
    }
}

impl<W> std::ops::Deref for LineModeGuard<'_, W> {
    type Target = StreamWriter<W>;

    fn deref(&self) -> &Self::Target {
        self.stream
    }
}
