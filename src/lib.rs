#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Overview
//!
//! `gatelog` is an embeddable logging dispatcher. Applications register named
//! writers with a [`Logger`], enable the categories and levels they care
//! about, and submit [`LogRequest`]s. Each request is checked against the
//! category gate, then the level gate, then routed to exactly one writer.
//!
//! This crate re-exports the dispatcher from the `logging` workspace crate
//! and the bundled writers from `logging-sink` under [`sink`].
//!
//! # Features
//!
//! - `serde`: serialization for [`LoggerConfig`], identifiers, requests, and
//!   metadata.
//! - `tracing`: a `tracing-subscriber` layer that routes `tracing` events
//!   through a logger.
//!
//! # Examples
//!
//! ```
//! use gatelog::sink::MemoryWriter;
//! use gatelog::{Category, DispatchError, Level, Logger, LoggerConfig, log_info};
//!
//! let config: LoggerConfig = "force_enforcement enable_default_levels".parse().unwrap();
//! let logger = Logger::new(config);
//! let memory = MemoryWriter::new();
//! logger.add_writer("memory", memory.clone());
//!
//! // Levels were seeded, categories were not.
//! assert_eq!(
//!     log_info!(logger, "memory", "db", "connected"),
//!     Err(DispatchError::CategoryNotEnabled(Category::from("db")))
//! );
//!
//! logger.enable_category("db");
//! log_info!(logger, "memory", "db", "connected to {}", "primary").unwrap();
//! assert_eq!(memory.messages(), ["connected to primary"]);
//! assert!(logger.is_level_enabled(Level::MISC));
//! ```

pub use logging::*;

/// Bundled writers: line-oriented streams and in-memory collection.
pub mod sink {
    pub use logging_sink::*;
}
