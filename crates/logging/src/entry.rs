//! crates/logging/src/entry.rs
//! Request and entry types flowing through the dispatcher.

use std::cmp::Ordering;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use super::levels::{Category, Level, WriterId};
use super::metadata::{Metadata, Value};

/// Caller-constructed description of an event to dispatch.
///
/// Nothing is validated on construction; [`Logger::log`](crate::Logger::log)
/// decides whether the request is accepted.
///
/// # Examples
///
/// ```
/// use logging::{Category, Level, LogRequest};
///
/// let request = LogRequest::new("cache warmed")
///     .with_writer("console")
///     .with_level(Level::INFO)
///     .with_category(Category::DEFAULT)
///     .with_field("entries", 128);
///
/// assert_eq!(request.writer, "console");
/// assert_eq!(request.metadata.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogRequest {
    /// Human readable message.
    pub message: String,
    /// Opaque structured payload.
    #[cfg_attr(feature = "serde", serde(default))]
    pub metadata: Metadata,
    /// Writer the entry is routed to.
    pub writer: WriterId,
    /// Severity label checked against the level gate.
    pub level: Level,
    /// Origin label checked against the category gate.
    pub category: Category,
}

impl LogRequest {
    /// Creates a request carrying `message` with empty identifiers and metadata.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Sets the target writer.
    #[must_use]
    pub fn with_writer(mut self, writer: impl Into<WriterId>) -> Self {
        self.writer = writer.into();
        self
    }

    /// Sets the level.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<Level>) -> Self {
        self.level = level.into();
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        self.category = category.into();
        self
    }

    /// Replaces the metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Adds a single metadata field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key, value);
        self
    }
}

/// Point in time at which the dispatcher accepted a request.
///
/// Holds both a wall-clock reading for display and a monotonic reading for
/// ordering. Comparisons only use the monotonic part.
#[derive(Clone, Copy, Debug)]
pub struct Timestamp {
    wall: SystemTime,
    monotonic: Instant,
}

impl Timestamp {
    /// Captures the current time.
    #[must_use]
    pub fn now() -> Self {
        Self {
            wall: SystemTime::now(),
            monotonic: Instant::now(),
        }
    }

    /// Captures the current monotonic time paired with a caller-chosen wall
    /// clock reading, for replaying or rendering entries deterministically.
    #[must_use]
    pub fn with_system_time(wall: SystemTime) -> Self {
        Self {
            wall,
            monotonic: Instant::now(),
        }
    }

    /// Wall-clock reading.
    #[must_use]
    pub const fn system_time(&self) -> SystemTime {
        self.wall
    }

    /// Monotonic reading.
    #[must_use]
    pub const fn instant(&self) -> Instant {
        self.monotonic
    }

    /// Duration since the Unix epoch, or zero for clocks set before it.
    #[must_use]
    pub fn since_unix_epoch(&self) -> Duration {
        self.wall.duration_since(UNIX_EPOCH).unwrap_or_default()
    }

    /// Monotonic time elapsed from `earlier` to `self`, saturating at zero.
    #[must_use]
    pub fn saturating_since(&self, earlier: &Self) -> Duration {
        self.monotonic.saturating_duration_since(earlier.monotonic)
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.monotonic == other.monotonic
    }
}

impl Eq for Timestamp {}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.monotonic.cmp(&other.monotonic)
    }
}

/// Finished event handed to exactly one writer.
///
/// The writer owns the entry for the duration of the call; the dispatcher
/// keeps nothing after invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    /// Moment the request passed every gate and resolved its writer.
    pub timestamp: Timestamp,
    /// Origin label.
    pub category: Category,
    /// Writer the entry was routed to.
    pub writer: WriterId,
    /// Severity label.
    pub level: Level,
    /// Human readable message.
    pub message: String,
    /// Opaque structured payload.
    pub metadata: Metadata,
}

impl LogEntry {
    /// Builds the entry for an accepted request, stamping it with `timestamp`.
    #[must_use]
    pub fn from_request(request: LogRequest, timestamp: Timestamp) -> Self {
        let LogRequest {
            message,
            metadata,
            writer,
            level,
            category,
        } = request;

        Self {
            timestamp,
            category,
            writer,
            level,
            message,
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_sets_every_field() {
        let request = LogRequest::new("disk almost full")
            .with_writer("ops")
            .with_level(Level::WARN)
            .with_category("storage")
            .with_field("free_mb", 512)
            .with_field("volume", "/var");

        assert_eq!(request.message, "disk almost full");
        assert_eq!(request.writer, "ops");
        assert_eq!(request.level, Level::WARN);
        assert_eq!(request.category, "storage");
        assert_eq!(request.metadata.get("free_mb"), Some(&Value::Int(512)));
    }

    #[test]
    fn new_request_has_empty_identifiers() {
        let request = LogRequest::new("bare");
        assert_eq!(request.writer.as_str(), "");
        assert_eq!(request.level.as_str(), "");
        assert_eq!(request.category.as_str(), "");
        assert!(request.metadata.is_empty());
    }

    #[test]
    fn entry_copies_request_fields() {
        let request = LogRequest::new("hi")
            .with_writer("out")
            .with_level(Level::INFO)
            .with_category(Category::DEFAULT)
            .with_field("key", "value");
        let timestamp = Timestamp::now();

        let entry = LogEntry::from_request(request.clone(), timestamp);

        assert_eq!(entry.timestamp, timestamp);
        assert_eq!(entry.message, request.message);
        assert_eq!(entry.writer, request.writer);
        assert_eq!(entry.level, request.level);
        assert_eq!(entry.category, request.category);
        assert_eq!(entry.metadata, request.metadata);
    }

    #[test]
    fn timestamps_never_go_backwards() {
        let first = Timestamp::now();
        let second = Timestamp::now();

        assert!(second >= first);
        assert_eq!(first.saturating_since(&second), Duration::ZERO);
    }

    #[test]
    fn wall_clock_is_after_epoch() {
        assert!(Timestamp::now().since_unix_epoch() > Duration::ZERO);
    }
}
