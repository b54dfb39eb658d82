//! Integration tests for bundled writers registered with a logger.
//!
//! These tests verify that entries accepted by the dispatcher reach the
//! stream and memory writers intact, and that rejected requests leave them
//! untouched.

use std::io;
use std::sync::Arc;
use std::thread;

use logging::{Category, Level, LogRequest, Logger, LoggerConfig, log_info, log_warn};
use logging_sink::{LineMode, MemoryWriter, StreamWriter};

fn strict_logger() -> Logger {
    Logger::new(
        LoggerConfig::default()
            .force_enforcement(true)
            .with_default_levels(true)
            .with_default_category(true),
    )
}

/// Stream that accepts a fixed number of bytes and then fails.
struct Limited {
    remaining: usize,
    data: Vec<u8>,
}

impl io::Write for Limited {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "stream exhausted"));
        }
        let take = buf.len().min(self.remaining);
        self.remaining -= take;
        self.data.extend_from_slice(&buf[..take]);
        Ok(take)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// Memory Writer Tests
// ============================================================================

/// Verifies accepted entries carry the request fields and routing writer.
#[test]
fn memory_writer_receives_accepted_entries() {
    let logger = strict_logger();
    let memory = MemoryWriter::new();
    logger.add_writer("memory", memory.clone());

    log_info!(logger, "memory", Category::DEFAULT, "hello {}", "world").unwrap();

    let entries = memory.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, "hello world");
    assert_eq!(entries[0].level, Level::INFO);
    assert_eq!(entries[0].category, Category::DEFAULT);
    assert_eq!(entries[0].writer, "memory");
}

/// Verifies rejected requests never reach the memory writer.
#[test]
fn memory_writer_ignores_rejected_requests() {
    let logger = strict_logger();
    let memory = MemoryWriter::new();
    logger.add_writer("memory", memory.clone());

    assert!(log_warn!(logger, "memory", "unseeded", "dropped").is_err());
    logger.disable_level(Level::WARN);
    assert!(log_warn!(logger, "memory", Category::DEFAULT, "dropped").is_err());

    assert!(memory.is_empty());
}

/// Verifies entries from several threads are all collected.
#[test]
fn memory_writer_collects_from_threads() {
    let logger = Arc::new(Logger::new(LoggerConfig::default().with_use_lock(true)));
    let memory = MemoryWriter::new();
    logger.add_writer("memory", memory.clone());

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for item in 0..25 {
                    logger
                        .log(LogRequest::new(format!("{index}:{item}")).with_writer("memory"))
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(memory.len(), 100);
}

// ============================================================================
// Stream Writer Tests
// ============================================================================

/// Verifies the rendered line layout through a logger.
#[test]
fn stream_writer_renders_lines() {
    let logger = strict_logger();
    let stream = Arc::new(StreamWriter::new(Vec::new()));
    logger.add_shared_writer("stream", stream.clone());

    logger
        .log(
            LogRequest::new("connected")
                .with_writer("stream")
                .with_level(Level::INFO)
                .with_category(Category::DEFAULT)
                .with_field("port", 22)
                .with_field("host", "example"),
        )
        .unwrap();

    drop(logger);
    let stream = Arc::try_unwrap(stream).ok().unwrap();
    let output = String::from_utf8(stream.into_inner()).unwrap();
    assert!(
        output.ends_with(" [INFO_LEVEL] DEFAULT_CATEGORY: connected host=example port=22\n"),
        "{output}"
    );
}

/// Verifies a scoped line mode only affects entries written inside the scope.
#[test]
fn scoped_line_mode_through_logger() {
    let logger = Logger::default();
    let stream = Arc::new(StreamWriter::new(Vec::new()));
    logger.add_shared_writer("stream", stream.clone());

    {
        let _guard = stream.scoped_line_mode(LineMode::WithoutNewline);
        logger.log(LogRequest::new("progress").with_writer("stream")).unwrap();
    }
    logger.log(LogRequest::new("done").with_writer("stream")).unwrap();

    drop(logger);
    let stream = Arc::try_unwrap(stream).ok().unwrap();
    let output = String::from_utf8(stream.into_inner()).unwrap();
    assert_eq!(output.matches('\n').count(), 1);
    assert!(output.contains("progress"));
    assert!(output.ends_with("done\n"));
}

/// Verifies a failing stream keeps its first error and dispatch still succeeds.
#[test]
fn stream_errors_are_retained_not_returned() {
    let logger = Logger::default();
    let stream = Arc::new(StreamWriter::new(Limited {
        remaining: 8,
        data: Vec::new(),
    }));
    logger.add_shared_writer("stream", stream.clone());

    assert!(logger.log(LogRequest::new("first").with_writer("stream")).is_ok());
    assert!(logger.log(LogRequest::new("second").with_writer("stream")).is_ok());

    let error = stream.take_error().expect("first failure retained");
    assert_eq!(error.kind(), io::ErrorKind::WriteZero);
    assert!(stream.take_error().is_none());
}
