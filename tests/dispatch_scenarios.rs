//! End-to-end dispatch scenarios through the facade crate.
//!
//! These tests verify typical embedding flows: seeding defaults, routing to
//! several bundled writers, runtime writer removal, and recovery from a
//! panicking writer while the dispatch lock is held.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use gatelog::sink::{MemoryWriter, StreamWriter};
use gatelog::{
    Category, DispatchError, Level, LogEntry, LogRequest, Logger, LoggerConfig, log_error,
    log_misc, new_logger,
};

fn seeded_strict() -> Logger {
    new_logger(
        LoggerConfig::default()
            .force_enforcement(true)
            .with_default_levels(true)
            .with_default_category(true),
    )
}

fn exploding_writer(_: LogEntry) {
    panic!("writer failure");
}

// ============================================================================
// Seeding Scenarios
// ============================================================================

/// Verifies seeded built-ins are usable immediately and nothing else is.
#[test]
fn seeded_builtins_are_the_only_enabled_identifiers() {
    let logger = seeded_strict();
    let memory = MemoryWriter::new();
    logger.add_writer("memory", memory.clone());

    for level in Level::DEFAULTS {
        let request = LogRequest::new(level.as_str())
            .with_writer("memory")
            .with_level(level)
            .with_category(Category::DEFAULT);
        logger.log(request).unwrap();
    }
    assert_eq!(memory.len(), Level::DEFAULTS.len());

    assert_eq!(
        log_misc!(logger, "memory", "custom", "no"),
        Err(DispatchError::CategoryNotEnabled("custom".into()))
    );
    assert_eq!(
        logger.log(
            LogRequest::new("no")
                .with_writer("memory")
                .with_level("TRACE_LEVEL")
                .with_category(Category::DEFAULT)
        ),
        Err(DispatchError::LevelNotEnabled("TRACE_LEVEL".into()))
    );
}

/// Verifies disabling everything then re-enabling one level narrows dispatch.
#[test]
fn disable_all_then_enable_one() {
    let logger = seeded_strict();
    let memory = MemoryWriter::new();
    logger.add_writer("memory", memory.clone());

    logger.disable_all_levels();
    logger.enable_level(Level::ERROR);

    assert!(log_error!(logger, "memory", Category::DEFAULT, "kept").is_ok());
    assert!(log_misc!(logger, "memory", Category::DEFAULT, "dropped").is_err());
    assert_eq!(logger.enabled_levels(), [Level::ERROR]);
    assert_eq!(memory.messages(), ["kept"]);
}

// ============================================================================
// Writer Routing Scenarios
// ============================================================================

/// Verifies each request reaches only the writer it names.
#[test]
fn requests_route_to_named_writer_only() {
    let logger = Logger::default();
    let audit = MemoryWriter::new();
    let debug = MemoryWriter::new();
    logger.add_writer("audit", audit.clone());
    logger.add_writer("debug", debug.clone());

    logger.log(LogRequest::new("login").with_writer("audit")).unwrap();
    logger.log(LogRequest::new("cache miss").with_writer("debug")).unwrap();
    logger.log(LogRequest::new("logout").with_writer("audit")).unwrap();

    assert_eq!(audit.messages(), ["login", "logout"]);
    assert_eq!(debug.messages(), ["cache miss"]);
    assert_eq!(logger.writer_ids(), ["audit", "debug"]);
}

/// Verifies a removed writer is no longer resolvable.
#[test]
fn removed_writer_is_not_found() {
    let logger = Logger::default();
    let stream = Arc::new(StreamWriter::new(Vec::<u8>::new()));
    logger.add_shared_writer("stream", stream.clone());
    assert!(logger.has_writer("stream"));

    let removed = logger.remove_writer("stream");
    assert!(removed.is_some());
    drop(removed);

    assert_eq!(
        logger.log(LogRequest::new("late").with_writer("stream")),
        Err(DispatchError::WriterNotFound("stream".into()))
    );
    let stream = Arc::try_unwrap(stream).ok().unwrap();
    assert!(stream.into_inner().is_empty());
}

// ============================================================================
// Failure Recovery Scenarios
// ============================================================================

/// Verifies a panicking writer does not wedge the dispatch lock.
#[test]
fn panicking_writer_releases_lock() {
    let logger = Logger::new(LoggerConfig::default().with_use_lock(true));
    let memory = MemoryWriter::new();
    logger.add_writer("boom", exploding_writer);
    logger.add_writer("memory", memory.clone());

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        logger.log(LogRequest::new("x").with_writer("boom"))
    }));
    assert!(outcome.is_err());

    logger.log(LogRequest::new("after").with_writer("memory")).unwrap();
    assert_eq!(memory.messages(), ["after"]);
}
