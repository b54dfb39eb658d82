#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides ready-made [`logging::Writer`] implementations for
//! the gatelog dispatcher: [`StreamWriter`] renders entries as text lines into
//! any [`std::io::Write`] target, and [`MemoryWriter`] keeps entries in memory
//! for inspection.
//!
//! # Design
//!
//! Writers receive entries through `&self`, so both types keep their state
//! behind a mutex and can be registered with several loggers or shared across
//! threads. [`render_entry`] produces the line format used by
//! [`StreamWriter`] and is exposed for callers building their own writers.
//!
//! # Invariants
//!
//! - Each entry is rendered as exactly one line: control characters are
//!   escaped and metadata values containing spaces or `=` are quoted.
//!   Metadata keys appear sorted.
//! - A [`StreamWriter`] issues one `write_all` per entry, so lines from
//!   concurrent callers never interleave within the stream.
//! - A [`LineModeGuard`] restores the previous [`LineMode`] when dropped.
//!
//! # Errors
//!
//! [`StreamWriter::write_entry`] reports [`std::io::Error`] directly. When used
//! as a registered writer the first failure is retained for
//! [`StreamWriter::take_error`].
//!
//! # Examples
//!
//! ```
//! use logging::{Category, Level, LogRequest, Logger, LoggerConfig};
//! use logging_sink::{MemoryWriter, StreamWriter};
//!
//! let logger = Logger::new(
//!     LoggerConfig::default()
//!         .force_enforcement(true)
//!         .with_default_levels(true)
//!         .with_default_category(true),
//! );
//! let memory = MemoryWriter::new();
//! logger.add_writer("memory", memory.clone());
//! logger.add_writer("console", StreamWriter::stderr());
//!
//! let request = LogRequest::new("ready")
//!     .with_writer("memory")
//!     .with_level(Level::INFO)
//!     .with_category(Category::DEFAULT);
//! logger.log(request).unwrap();
//!
//! assert_eq!(memory.messages(), ["ready"]);
//! ```
//!
//! # See also
//!
//! - `logging` for the dispatcher and the [`logging::Writer`] trait.

mod line_mode;
mod render;
mod sink;

pub use line_mode::LineMode;
pub use render::{format_timestamp, render_entry};
pub use sink::{LineModeGuard, MemoryWriter, StreamWriter};
