#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is the gating-and-dispatch engine of the gatelog workspace. An
//! embedding application builds one [`Logger`], registers named writers, and
//! submits [`LogRequest`]s. The logger checks each request against its
//! enabled categories and levels, resolves the target writer, stamps the
//! finished [`LogEntry`], and hands it to that writer.
//!
//! # Design
//!
//! - [`EnablementRegistry`] holds two independent default-off membership
//!   maps, one for categories and one for levels.
//! - [`WriterRegistry`] maps a [`WriterId`] to a shared [`Writer`]; any
//!   `Fn(LogEntry) + Send + Sync` closure is a writer.
//! - [`LoggerConfig`] is fixed at construction and decides which gates are
//!   enforced, which built-in identifiers are seeded, and whether writer
//!   invocations are serialized behind one logger-wide lock.
//!
//! # Invariants
//!
//! - Checks run category gate, then level gate, then writer resolution; the
//!   first failure is reported and nothing after it runs.
//! - Gates only reject when their enforcement option is set.
//! - With [`LoggerConfig::use_lock`], at most one writer runs at a time per
//!   logger, and the lock is released even when a writer panics.
//! - Loggers never share state.
//!
//! # Errors
//!
//! [`Logger::log`] returns [`DispatchError`] synchronously. Failures inside a
//! writer are not observed by the logger.
//!
//! # Examples
//!
//! ```
//! use logging::{Category, DispatchError, Level, LogEntry, LogRequest, Logger, LoggerConfig};
//!
//! let logger = Logger::new(LoggerConfig::default().force_enforcement(true));
//! logger.add_writer("console", |entry: LogEntry| println!("{}", entry.message));
//!
//! // Nothing is enabled yet, so the category gate rejects the request.
//! let request = LogRequest::new("hello")
//!     .with_writer("console")
//!     .with_level(Level::INFO)
//!     .with_category(Category::DEFAULT);
//! assert_eq!(
//!     logger.log(request.clone()),
//!     Err(DispatchError::CategoryNotEnabled(Category::DEFAULT))
//! );
//!
//! logger.enable_category(Category::DEFAULT);
//! logger.enable_level(Level::INFO);
//! assert!(logger.log(request).is_ok());
//! ```
//!
//! # See also
//!
//! - `logging-sink` for ready-made stream and in-memory writers.
//! - The `tracing` feature for [`DispatchLayer`], which routes `tracing`
//!   events through a logger.

mod config;
mod enablement;
mod entry;
mod error;
mod levels;
mod logger;
mod macros;
mod metadata;
#[cfg(feature = "tracing")]
mod tracing_bridge;
mod writers;

pub use config::LoggerConfig;
pub use enablement::EnablementRegistry;
pub use entry::{LogEntry, LogRequest, Timestamp};
pub use error::{ConfigError, DispatchError, DispatchResult};
pub use levels::{Category, Level, WriterId};
pub use logger::{Logger, new_logger};
pub use metadata::{Metadata, Value};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{DispatchLayer, RejectionCounter, init_tracing, init_tracing_with_filter};
pub use writers::{Writer, WriterRegistry};
