//! crates/logging/src/logger.rs
//! The gating-and-dispatch engine.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::config::LoggerConfig;
use super::enablement::EnablementRegistry;
use super::entry::{LogEntry, LogRequest, Timestamp};
use super::error::{DispatchError, DispatchResult};
use super::levels::{Category, Level, WriterId};
use super::writers::{Writer, WriterRegistry};

/// Gates log requests and routes accepted ones to registered writers.
///
/// A logger owns its enablement state, its writers, and its configuration;
/// separate loggers share nothing. All methods take `&self`, so a logger can
/// be shared across threads behind an [`Arc`].
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use logging::{Category, DispatchError, Level, LogEntry, LogRequest, Logger, LoggerConfig};
///
/// let logger = Logger::new(
///     LoggerConfig::default()
///         .with_default_levels(true)
///         .with_default_category(true),
/// );
///
/// let last = Arc::new(Mutex::new(None));
/// let capture = Arc::clone(&last);
/// logger.add_writer("out", move |entry: LogEntry| {
///     *capture.lock().unwrap() = Some(entry.message);
/// });
///
/// let request = LogRequest::new("hi")
///     .with_writer("out")
///     .with_level(Level::INFO)
///     .with_category(Category::DEFAULT);
/// logger.log(request)?;
/// assert_eq!(last.lock().unwrap().as_deref(), Some("hi"));
///
/// let missing = LogRequest::new("lost").with_writer("missing");
/// assert_eq!(
///     logger.log(missing),
///     Err(DispatchError::WriterNotFound("missing".into()))
/// );
/// # Ok::<(), DispatchError>(())
/// ```
pub struct Logger {
    config: LoggerConfig,
    enablement: RwLock<EnablementRegistry>,
    writers: RwLock<WriterRegistry>,
    dispatch_lock: Option<Mutex<()>>,
}

/// Creates a [`Logger`] for `config`.
#[must_use]
pub fn new_logger(config: LoggerConfig) -> Logger {
    Logger::new(config)
}

impl Logger {
    /// Creates a logger, seeding the built-in level and category enablement
    /// requested by `config`.
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        let mut enablement = EnablementRegistry::new();
        if config.enable_default_levels {
            for level in Level::DEFAULTS {
                enablement.enable_level(level);
            }
        }
        if config.enable_default_category {
            enablement.enable_category(Category::DEFAULT);
        }

        Self {
            config,
            enablement: RwLock::new(enablement),
            writers: RwLock::new(WriterRegistry::new()),
            dispatch_lock: config.use_lock.then(|| Mutex::new(())),
        }
    }

    /// Returns the configuration the logger was built with.
    #[must_use]
    pub const fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Gates, resolves, stamps, and dispatches one request.
    ///
    /// Checks run in a fixed order: category gate, level gate, then writer
    /// resolution. The first failing check is reported and nothing after it
    /// runs. Gates only reject when the matching enforcement option is set.
    ///
    /// The writer's own success or failure is not observed. With
    /// [`LoggerConfig::use_lock`] set, the writer runs under the logger-wide
    /// lock, which is released on every exit path including unwinding.
    pub fn log(&self, request: LogRequest) -> DispatchResult<()> {
        self.check_gates(&request)?;

        let resolved = self.read_writers().lookup(&request.writer);
        let Some(writer) = resolved else {
            return Err(DispatchError::WriterNotFound(request.writer));
        };

        let entry = LogEntry::from_request(request, Timestamp::now());

        match &self.dispatch_lock {
            Some(lock) => {
                let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
                writer.write(entry);
            }
            None => writer.write(entry),
        }
        Ok(())
    }

    fn check_gates(&self, request: &LogRequest) -> DispatchResult<()> {
        if !self.config.enforces_any() {
            return Ok(());
        }

        let enablement = self.read_enablement();
        if self.config.enforce_categories && !enablement.is_category_enabled(&request.category) {
            return Err(DispatchError::CategoryNotEnabled(request.category.clone()));
        }
        if self.config.enforce_levels && !enablement.is_level_enabled(&request.level) {
            return Err(DispatchError::LevelNotEnabled(request.level.clone()));
        }
        Ok(())
    }

    /// Registers `writer` under `id`, replacing any previous writer.
    pub fn add_writer<W>(&self, id: impl Into<WriterId>, writer: W)
    where
        W: Writer + 'static,
    {
        self.add_shared_writer(id, Arc::new(writer));
    }

    /// Registers an already shared writer under `id`, returning the writer it
    /// replaced.
    pub fn add_shared_writer(
        &self,
        id: impl Into<WriterId>,
        writer: Arc<dyn Writer>,
    ) -> Option<Arc<dyn Writer>> {
        self.write_writers().add_writer(id, writer)
    }

    /// Unregisters the writer under `id`.
    pub fn remove_writer(&self, id: impl AsRef<str>) -> Option<Arc<dyn Writer>> {
        self.write_writers().remove_writer(id)
    }

    /// Reports whether a writer is registered under `id`.
    #[must_use]
    pub fn has_writer(&self, id: impl AsRef<str>) -> bool {
        self.read_writers().contains(id)
    }

    /// Registered writer ids, sorted.
    #[must_use]
    pub fn writer_ids(&self) -> Vec<WriterId> {
        self.read_writers().ids()
    }

    /// Enables `category`.
    pub fn enable_category(&self, category: impl Into<Category>) {
        self.write_enablement().enable_category(category);
    }

    /// Disables `category`; unknown categories stay absent.
    pub fn disable_category(&self, category: impl AsRef<str>) {
        self.write_enablement().disable_category(category);
    }

    /// Enables `level`.
    pub fn enable_level(&self, level: impl Into<Level>) {
        self.write_enablement().enable_level(level);
    }

    /// Disables `level`; unknown levels stay absent.
    pub fn disable_level(&self, level: impl AsRef<str>) {
        self.write_enablement().disable_level(level);
    }

    /// Disables every currently known category.
    pub fn disable_all_categories(&self) {
        self.write_enablement().disable_all_categories();
    }

    /// Disables every currently known level.
    pub fn disable_all_levels(&self) {
        self.write_enablement().disable_all_levels();
    }

    /// Reports whether `category` is enabled.
    #[must_use]
    pub fn is_category_enabled(&self, category: impl AsRef<str>) -> bool {
        self.read_enablement().is_category_enabled(category)
    }

    /// Reports whether `level` is enabled.
    #[must_use]
    pub fn is_level_enabled(&self, level: impl AsRef<str>) -> bool {
        self.read_enablement().is_level_enabled(level)
    }

    /// Categories currently enabled, sorted.
    #[must_use]
    pub fn enabled_categories(&self) -> Vec<Category> {
        self.read_enablement().enabled_categories()
    }

    /// Levels currently enabled, sorted.
    #[must_use]
    pub fn enabled_levels(&self) -> Vec<Level> {
        self.read_enablement().enabled_levels()
    }

    /// Copy of the current enablement state.
    #[must_use]
    pub fn enablement(&self) -> EnablementRegistry {
        self.read_enablement().clone()
    }

    fn read_enablement(&self) -> RwLockReadGuard<'_, EnablementRegistry> {
        self.enablement
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_enablement(&self) -> RwLockWriteGuard<'_, EnablementRegistry> {
        self.enablement
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn read_writers(&self) -> RwLockReadGuard<'_, WriterRegistry> {
        self.writers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_writers(&self) -> RwLockWriteGuard<'_, WriterRegistry> {
        self.writers.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("enablement", &*self.read_enablement())
            .field("writers", &*self.read_writers())
            .finish()
    }
}
