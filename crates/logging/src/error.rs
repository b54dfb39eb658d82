//! crates/logging/src/error.rs
//!
//! Error types for dispatching and configuration parsing.

use thiserror::Error;

use super::levels::{Category, Level, WriterId};

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Reasons a [`Logger::log`](crate::Logger::log) call can fail.
///
/// Variants are reported in gate order: a request rejected by the category
/// gate never reports a level or writer failure.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DispatchError {
    /// Category enforcement is active and the category is not enabled.
    #[error("category {0} not enabled")]
    CategoryNotEnabled(Category),
    /// Level enforcement is active and the level is not enabled.
    #[error("level {0} not enabled")]
    LevelNotEnabled(Level),
    /// Both gates passed but no writer is registered under the id.
    #[error("writer {0} not found")]
    WriterNotFound(WriterId),
}

/// Errors produced while parsing a [`LoggerConfig`](crate::LoggerConfig) from text.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// A separator produced an empty option token, e.g. `"use_lock,,"`.
    #[error("empty option token")]
    EmptyToken,
    /// The option name is not recognised.
    #[error("unknown logger option: {0}")]
    UnknownOption(String),
    /// The option value is not a boolean spelling.
    #[error("invalid value {value:?} for logger option {option}")]
    InvalidValue {
        /// Option the value was given for.
        option: String,
        /// Rejected value.
        value: String,
    },
}
