//! crates/logging-sink/src/sink/memory.rs
//! Writer that keeps every entry it receives.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use logging::{LogEntry, Writer};

/// Collects entries in memory, in arrival order.
///
/// Clones share the same buffer, so one handle can be registered with a
/// logger while another is kept for inspection.
///
/// # Examples
///
/// ```
/// use logging::{LogRequest, Logger, LoggerConfig};
/// use logging_sink::MemoryWriter;
///
/// let logger = Logger::new(LoggerConfig::default());
/// let memory = MemoryWriter::new();
/// logger.add_writer("memory", memory.clone());
///
/// logger.log(LogRequest::new("one").with_writer("memory")).unwrap();
/// logger.log(LogRequest::new("two").with_writer("memory")).unwrap();
///
/// assert_eq!(memory.messages(), ["one", "two"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryWriter {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemoryWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies of every entry received so far.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    /// Messages of every entry received so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|entry| entry.message.clone()).collect()
    }

    /// Removes and returns every entry received so far.
    pub fn drain(&self) -> Vec<LogEntry> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of entries held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no entries are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discards every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Writer for MemoryWriter {
    fn write(&self, entry: LogEntry) {
        self.lock().push(entry);
    }
}
