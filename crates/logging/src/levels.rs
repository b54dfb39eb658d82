//! crates/logging/src/levels.rs
//! Opaque identifiers for categories, levels, and writers.
//!
//! None of the identifiers carry ordering or hierarchy. The built-in constants
//! exist for convenience only; any string is a valid identifier.
//!
//! Identifiers only compare for equality:
//!
//! ```compile_fail
//! use logging::Level;
//!
//! let _ = Level::ERROR < Level::WARN;
//! ```

use std::borrow::{Borrow, Cow};
use std::fmt;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(Cow<'static, str>);

        impl $name {
            /// Creates an identifier from a static string without allocating.
            #[must_use]
            pub const fn from_static(name: &'static str) -> Self {
                Self(Cow::Borrowed(name))
            }

            /// Creates an identifier from any string-like value.
            #[must_use]
            pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
                Self(name.into())
            }

            /// Returns the identifier text.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&'static str> for $name {
            fn from(name: &'static str) -> Self {
                Self::from_static(name)
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(Cow::Owned(name))
            }
        }

        impl From<&$name> for $name {
            fn from(name: &$name) -> Self {
                name.clone()
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

identifier! {
    /// Free-form label partitioning log events by subsystem or origin.
    Category
}

identifier! {
    /// Free-form severity label.
    ///
    /// Levels form an unordered set: enabling [`Level::ERROR`] says nothing
    /// about [`Level::WARN`].
    Level
}

identifier! {
    /// Name under which a writer is registered with a logger.
    WriterId
}

impl Category {
    /// The built-in default category.
    pub const DEFAULT: Self = Self::from_static("DEFAULT_CATEGORY");
}

impl Level {
    /// Debugging output.
    pub const DEBUG: Self = Self::from_static("DEBUG_LEVEL");
    /// Errors.
    pub const ERROR: Self = Self::from_static("ERROR_LEVEL");
    /// Informational output.
    pub const INFO: Self = Self::from_static("INFO_LEVEL");
    /// Warnings.
    pub const WARN: Self = Self::from_static("WARN_LEVEL");
    /// Anything that fits none of the other built-in levels.
    pub const MISC: Self = Self::from_static("MISC_LEVEL");

    /// The five built-in levels seeded by
    /// [`LoggerConfig::enable_default_levels`](crate::LoggerConfig::enable_default_levels).
    pub const DEFAULTS: [Self; 5] = [
        Self::DEBUG,
        Self::ERROR,
        Self::INFO,
        Self::WARN,
        Self::MISC,
    ];
}

impl Default for Category {
    fn default() -> Self {
        Self::from_static("")
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::from_static("")
    }
}

impl Default for WriterId {
    fn default() -> Self {
        Self::from_static("")
    }
}
