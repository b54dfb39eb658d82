//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the gating dispatcher.
//!
//! [`DispatchLayer`] is a tracing-subscriber layer that turns every tracing
//! event into a [`LogRequest`] and hands it to a shared [`Logger`]. Standard
//! tracing macros (`trace!`, `debug!`, `info!`, `warn!`, `error!`) then pass
//! through the same category and level gates as direct `log` calls.
//!
//! # Mapping
//!
//! - The `message` field becomes the request message; every other field is
//!   copied into the metadata.
//! - `ERROR`, `WARN`, `INFO`, and `DEBUG` map to the built-in levels of the
//!   same name; `TRACE` maps to [`Level::DEBUG`].
//! - The category is the event target unless the layer was given a fixed
//!   category.
//!
//! # Re-entrancy
//!
//! A writer that emits a tracing event while the layer is dispatching on the
//! same thread does not reach the logger again. The nested event is counted
//! as a rejection instead, so a writer that logs through `tracing` neither
//! recurses nor blocks on the logger's dispatch lock.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use logging::{Logger, LoggerConfig, init_tracing};
//!
//! let logger = Arc::new(Logger::new(LoggerConfig::default()));
//! logger.add_writer("console", |entry: logging::LogEntry| eprintln!("{}", entry.message));
//! init_tracing(Arc::clone(&logger), "console")?;
//!
//! tracing::info!(target: "app::db", rows = 3, "query finished");
//! ```

use std::cell::Cell;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use super::entry::LogRequest;
use super::levels::{Category, Level, WriterId};
use super::logger::Logger;
use super::metadata::{Metadata, Value};

/// Shared count of events a [`DispatchLayer`] failed to dispatch.
///
/// Handles stay valid after the layer is moved into a subscriber.
#[derive(Clone, Debug, Default)]
pub struct RejectionCounter(Arc<AtomicU64>);

impl RejectionCounter {
    /// Current count.
    #[must_use]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    fn increment(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

/// A tracing layer that dispatches events through a [`Logger`].
///
/// Requests rejected by the logger are counted rather than reported, since a
/// layer has no caller to return errors to.
pub struct DispatchLayer {
    logger: Arc<Logger>,
    writer: WriterId,
    category: Option<Category>,
    rejected: RejectionCounter,
}

impl DispatchLayer {
    /// Creates a layer routing every event to `writer` on `logger`.
    #[must_use]
    pub fn new(logger: Arc<Logger>, writer: impl Into<WriterId>) -> Self {
        Self {
            logger,
            writer: writer.into(),
            category: None,
            rejected: RejectionCounter::default(),
        }
    }

    /// Uses `category` for every event instead of the event target.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Number of events the logger rejected so far.
    #[must_use]
    pub fn rejected(&self) -> u64 {
        self.rejected.get()
    }

    /// Handle to the rejection count that outlives moving the layer.
    #[must_use]
    pub fn rejections(&self) -> RejectionCounter {
        self.rejected.clone()
    }

    /// Map a tracing level to a built-in level.
    fn level_for(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::ERROR,
            tracing::Level::WARN => Level::WARN,
            tracing::Level::INFO => Level::INFO,
            tracing::Level::DEBUG | tracing::Level::TRACE => Level::DEBUG,
        }
    }

    fn request_for(&self, event: &Event<'_>) -> LogRequest {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let category = self
            .category
            .clone()
            .unwrap_or_else(|| Category::new(metadata.target().to_owned()));

        LogRequest::new(visitor.message.unwrap_or_default())
            .with_metadata(visitor.fields)
            .with_writer(self.writer.clone())
            .with_level(Self::level_for(metadata.level()))
            .with_category(category)
    }
}

impl fmt::Debug for DispatchLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchLayer")
            .field("writer", &self.writer)
            .field("category", &self.category)
            .field("rejected", &self.rejected())
            .finish_non_exhaustive()
    }
}

impl<S> Layer<S> for DispatchLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let Some(_scope) = DispatchScope::enter() else {
            self.rejected.increment();
            return;
        };
        if self.logger.log(self.request_for(event)).is_err() {
            self.rejected.increment();
        }
    }
}

thread_local! {
    static DISPATCHING: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as inside a layer dispatch until dropped.
struct DispatchScope;

impl DispatchScope {
    /// Returns `None` when the thread is already dispatching.
    fn enter() -> Option<Self> {
        DISPATCHING.with(|dispatching| (!dispatching.replace(true)).then_some(Self))
    }
}

impl Drop for DispatchScope {
    fn drop(&mut self) {
        DISPATCHING.with(|dispatching| dispatching.set(false));
    }
}

/// Collects the message and remaining fields of a tracing event.
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Metadata,
}

impl FieldVisitor {
    fn record_value(&mut self, field: &Field, value: Value) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.insert(field.name(), value);
        }
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_value(field, Value::String(format!("{value:?}")));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_value(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_value(field, Value::Int(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let value = i64::try_from(value).map_or(Value::Float(value as f64), Value::Int);
        self.record_value(field, value);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.record_value(field, Value::Float(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.record_value(field, Value::Bool(value));
    }
}

/// Install a [`DispatchLayer`] as the global tracing subscriber.
///
/// Fails when a global subscriber is already set.
pub fn init_tracing(logger: Arc<Logger>, writer: impl Into<WriterId>) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(DispatchLayer::new(logger, writer))
        .try_init()
}

/// Install a [`DispatchLayer`] behind an additional filter layer.
///
/// # Example
///
/// ```rust,ignore
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(logger, "console", EnvFilter::from_default_env())?;
/// ```
pub fn init_tracing_with_filter<F>(
    logger: Arc<Logger>,
    writer: impl Into<WriterId>,
    filter: F,
) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(DispatchLayer::new(logger, writer))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(DispatchLayer::level_for(&tracing::Level::ERROR), Level::ERROR);
        assert_eq!(DispatchLayer::level_for(&tracing::Level::WARN), Level::WARN);
        assert_eq!(DispatchLayer::level_for(&tracing::Level::INFO), Level::INFO);
        assert_eq!(DispatchLayer::level_for(&tracing::Level::DEBUG), Level::DEBUG);
        assert_eq!(DispatchLayer::level_for(&tracing::Level::TRACE), Level::DEBUG);
    }

    #[test]
    fn dispatch_scope_rejects_nested_entry() {
        let outer = DispatchScope::enter();
        assert!(outer.is_some());
        assert!(DispatchScope::enter().is_none());
        drop(outer);
        assert!(DispatchScope::enter().is_some());
    }

    #[test]
    fn dispatch_scope_is_per_thread() {
        let _outer = DispatchScope::enter();
        let other = std::thread::spawn(|| DispatchScope::enter().is_some())
            .join()
            .unwrap();
        assert!(other);
    }

    #[test]
    fn fixed_category_overrides_target() {
        let layer = DispatchLayer::new(Arc::new(Logger::default()), "w").with_category("audit");
        assert_eq!(layer.category, Some(Category::from("audit")));
        assert_eq!(layer.rejected(), 0);
    }
}

#[cfg(test)]
#[path = "tracing_bridge_tests.rs"]
mod integration_tests;
