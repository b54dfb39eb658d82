//! crates/logging/src/config.rs
//! Construction-time switches interpreted by the logger.

use std::str::FromStr;

use super::error::ConfigError;

/// Immutable option set fixed when a [`Logger`](crate::Logger) is built.
///
/// Every combination is legal. The default enforces nothing, seeds nothing,
/// and dispatches without a lock.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "repr::LoggerConfigRepr"))]
pub struct LoggerConfig {
    /// Reject requests whose category is not enabled.
    pub enforce_categories: bool,
    /// Reject requests whose level is not enabled.
    pub enforce_levels: bool,
    /// Enable the five built-in levels at construction.
    pub enable_default_levels: bool,
    /// Enable [`Category::DEFAULT`](crate::Category::DEFAULT) at construction.
    pub enable_default_category: bool,
    /// Serialize every writer invocation behind one logger-wide lock.
    pub use_lock: bool,
}

impl LoggerConfig {
    /// Turns both gates on or off.
    #[must_use]
    pub const fn force_enforcement(mut self, force: bool) -> Self {
        self.enforce_categories = force;
        self.enforce_levels = force;
        self
    }

    /// Inverse of [`force_enforcement`](Self::force_enforcement): allowing
    /// disabled logging bypasses both gates.
    #[must_use]
    pub const fn allow_disabled(self, allow: bool) -> Self {
        self.force_enforcement(!allow)
    }

    /// Sets category enforcement alone.
    #[must_use]
    pub const fn with_category_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_categories = enforce;
        self
    }

    /// Sets level enforcement alone.
    #[must_use]
    pub const fn with_level_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_levels = enforce;
        self
    }

    /// Seeds the built-in levels at construction.
    #[must_use]
    pub const fn with_default_levels(mut self, enable: bool) -> Self {
        self.enable_default_levels = enable;
        self
    }

    /// Seeds the built-in category at construction.
    #[must_use]
    pub const fn with_default_category(mut self, enable: bool) -> Self {
        self.enable_default_category = enable;
        self
    }

    /// Serializes writer invocations.
    #[must_use]
    pub const fn with_use_lock(mut self, use_lock: bool) -> Self {
        self.use_lock = use_lock;
        self
    }

    /// Reports whether either gate can reject a request.
    #[must_use]
    pub const fn enforces_any(&self) -> bool {
        self.enforce_categories || self.enforce_levels
    }

    /// Reports whether requests bypass both gates.
    #[must_use]
    pub const fn allows_disabled(&self) -> bool {
        !self.enforces_any()
    }

    /// Applies a single option token such as `"use_lock"` or
    /// `"allow-disabled=no"`.
    pub fn apply_option(&mut self, token: &str) -> Result<(), ConfigError> {
        let (name, value) = parse_option_token(token)?;
        let option = LoggerOption::from_name(&name)
            .ok_or_else(|| ConfigError::UnknownOption(name.clone()))?;

        match option {
            LoggerOption::AllowDisabled => *self = self.allow_disabled(value),
            LoggerOption::ForceEnforcement => *self = self.force_enforcement(value),
            LoggerOption::EnforceCategories => self.enforce_categories = value,
            LoggerOption::EnforceLevels => self.enforce_levels = value,
            LoggerOption::EnableDefaultLevels => self.enable_default_levels = value,
            LoggerOption::EnableDefaultCategory => self.enable_default_category = value,
            LoggerOption::UseLock => self.use_lock = value,
        }
        Ok(())
    }
}

impl FromStr for LoggerConfig {
    type Err = ConfigError;

    /// Parses comma- or whitespace-separated option tokens, applied left to
    /// right on top of [`LoggerConfig::default`]. Whitespace around `=` is
    /// part of the same `name=value` token.
    ///
    /// ```
    /// use logging::LoggerConfig;
    ///
    /// let config: LoggerConfig = "force_enforcement, use-lock enable_default_levels=off"
    ///     .parse()
    ///     .unwrap();
    /// assert!(config.enforce_categories && config.enforce_levels);
    /// assert!(config.use_lock);
    /// assert!(!config.enable_default_levels);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut config = Self::default();
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(config);
        }

        for chunk in trimmed.split(',') {
            let chunk = chunk.trim();
            if chunk.is_empty() {
                return Err(ConfigError::EmptyToken);
            }
            for token in option_tokens(chunk) {
                config.apply_option(&token)?;
            }
        }
        Ok(config)
    }
}

/// Splits a chunk on whitespace, rejoining words around `=`.
fn option_tokens(chunk: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut glue = false;
    for word in chunk.split_whitespace() {
        match tokens.last_mut() {
            Some(last) if glue || word.starts_with('=') => last.push_str(word),
            _ => tokens.push(word.to_owned()),
        }
        glue = word.ends_with('=');
    }
    tokens
}

/// Recognised option names.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LoggerOption {
    AllowDisabled,
    ForceEnforcement,
    EnforceCategories,
    EnforceLevels,
    EnableDefaultLevels,
    EnableDefaultCategory,
    UseLock,
}

impl LoggerOption {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "allow_disabled" | "allow_logging_disabled" => Some(Self::AllowDisabled),
            "force_enforcement" => Some(Self::ForceEnforcement),
            "enforce_categories" | "force_category_enabling" => Some(Self::EnforceCategories),
            "enforce_levels" | "force_level_enabling" => Some(Self::EnforceLevels),
            "enable_default_levels" => Some(Self::EnableDefaultLevels),
            "enable_default_category" => Some(Self::EnableDefaultCategory),
            "use_lock" => Some(Self::UseLock),
            _ => None,
        }
    }
}

/// Splits `"name=value"` into a normalized name and boolean; a bare name is `true`.
fn parse_option_token(token: &str) -> Result<(String, bool), ConfigError> {
    if token.is_empty() {
        return Err(ConfigError::EmptyToken);
    }

    let (raw_name, raw_value) = match token.split_once('=') {
        Some((name, value)) => (name.trim(), Some(value.trim())),
        None => (token, None),
    };
    if raw_name.is_empty() {
        return Err(ConfigError::EmptyToken);
    }

    let name = raw_name.to_ascii_lowercase().replace('-', "_");
    let value = match raw_value {
        None => true,
        Some(value) => parse_bool(value).ok_or_else(|| ConfigError::InvalidValue {
            option: name.clone(),
            value: value.to_owned(),
        })?,
    };
    Ok((name, value))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(feature = "serde")]
mod repr {
    use super::LoggerConfig;

    /// Accepts both historical option namings.
    ///
    /// Per-gate fields win over `force_enforcement`, which wins over
    /// `allow_disabled`.
    #[derive(serde::Deserialize, Default)]
    #[serde(default, deny_unknown_fields)]
    pub(super) struct LoggerConfigRepr {
        allow_disabled: Option<bool>,
        force_enforcement: Option<bool>,
        enforce_categories: Option<bool>,
        enforce_levels: Option<bool>,
        enable_default_levels: bool,
        enable_default_category: bool,
        use_lock: bool,
    }

    impl From<LoggerConfigRepr> for LoggerConfig {
        fn from(repr: LoggerConfigRepr) -> Self {
            let whole = repr
                .force_enforcement
                .or(repr.allow_disabled.map(|allow| !allow))
                .unwrap_or(false);

            Self {
                enforce_categories: repr.enforce_categories.unwrap_or(whole),
                enforce_levels: repr.enforce_levels.unwrap_or(whole),
                enable_default_levels: repr.enable_default_levels,
                enable_default_category: repr.enable_default_category,
                use_lock: repr.use_lock,
            }
        }
    }
}
