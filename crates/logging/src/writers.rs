//! crates/logging/src/writers.rs
//! Writer capability and the registry mapping writer ids to writers.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::entry::LogEntry;
use super::levels::WriterId;

/// Sink that consumes finished [`LogEntry`] values.
///
/// Any `Fn(LogEntry) + Send + Sync` closure is a writer. Failures inside a
/// writer are the writer's own concern; the dispatcher neither observes nor
/// reports them.
///
/// Writers must tolerate concurrent invocation unless the owning logger was
/// built with [`LoggerConfig::use_lock`](crate::LoggerConfig::use_lock).
pub trait Writer: Send + Sync {
    /// Consumes one entry.
    fn write(&self, entry: LogEntry);
}

impl<F> Writer for F
where
    F: Fn(LogEntry) + Send + Sync,
{
    fn write(&self, entry: LogEntry) {
        self(entry);
    }
}

/// Mapping from [`WriterId`] to the writer registered under it.
///
/// At most one writer is registered per id; registering again replaces the
/// previous writer.
#[derive(Clone, Default)]
pub struct WriterRegistry {
    writers: FxHashMap<WriterId, Arc<dyn Writer>>,
}

impl WriterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `writer` under `id`, returning the writer it replaced.
    pub fn add_writer(
        &mut self,
        id: impl Into<WriterId>,
        writer: Arc<dyn Writer>,
    ) -> Option<Arc<dyn Writer>> {
        self.writers.insert(id.into(), writer)
    }

    /// Removes and returns the writer registered under `id`.
    pub fn remove_writer(&mut self, id: impl AsRef<str>) -> Option<Arc<dyn Writer>> {
        self.writers.remove(id.as_ref())
    }

    /// Returns a handle to the writer registered under `id`.
    #[must_use]
    pub fn lookup(&self, id: impl AsRef<str>) -> Option<Arc<dyn Writer>> {
        self.writers.get(id.as_ref()).cloned()
    }

    /// Reports whether a writer is registered under `id`.
    #[must_use]
    pub fn contains(&self, id: impl AsRef<str>) -> bool {
        self.writers.contains_key(id.as_ref())
    }

    /// Registered ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<WriterId> {
        let mut ids: Vec<_> = self.writers.keys().cloned().collect();
        ids.sort_unstable_by(|a, b| a.as_str().cmp(b.as_str()));
        ids
    }

    /// Number of registered writers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.writers.len()
    }

    /// Reports whether no writer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }
}

impl fmt::Debug for WriterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterRegistry")
            .field("ids", &self.ids())
            .finish()
    }
}
