//! crates/logging/src/macros.rs
//! Convenience macros that build a request from format arguments and dispatch it.
//!
//! Every macro evaluates to the [`DispatchResult`](crate::DispatchResult)
//! returned by [`Logger::log`](crate::Logger::log).

/// Dispatch a formatted message to `writer` with an explicit level and category.
///
/// # Example
/// ```
/// use logging::{log_to, LogEntry, Logger};
///
/// let logger = Logger::default();
/// logger.add_writer("console", |entry: LogEntry| println!("{}", entry.message));
///
/// log_to!(logger, "console", "NOTICE", "net", "listening on port {}", 8080).unwrap();
/// ```
#[macro_export]
macro_rules! log_to {
    ($logger:expr, $writer:expr, $level:expr, $category:expr, $($arg:tt)+) => {
        $logger.log(
            $crate::LogRequest::new(::std::format!($($arg)+))
                .with_writer($writer)
                .with_level($level)
                .with_category($category),
        )
    };
}

/// Dispatch a formatted message at [`Level::DEBUG`](crate::Level::DEBUG).
///
/// # Example
/// ```ignore
/// log_debug!(logger, "console", "cache", "evicted {} entries", count);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $writer:expr, $category:expr, $($arg:tt)+) => {
        $crate::log_to!($logger, $writer, $crate::Level::DEBUG, $category, $($arg)+)
    };
}

/// Dispatch a formatted message at [`Level::INFO`](crate::Level::INFO).
///
/// # Example
/// ```ignore
/// log_info!(logger, "console", Category::DEFAULT, "started in {:?}", elapsed);
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $writer:expr, $category:expr, $($arg:tt)+) => {
        $crate::log_to!($logger, $writer, $crate::Level::INFO, $category, $($arg)+)
    };
}

/// Dispatch a formatted message at [`Level::WARN`](crate::Level::WARN).
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $writer:expr, $category:expr, $($arg:tt)+) => {
        $crate::log_to!($logger, $writer, $crate::Level::WARN, $category, $($arg)+)
    };
}

/// Dispatch a formatted message at [`Level::ERROR`](crate::Level::ERROR).
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $writer:expr, $category:expr, $($arg:tt)+) => {
        $crate::log_to!($logger, $writer, $crate::Level::ERROR, $category, $($arg)+)
    };
}

/// Dispatch a formatted message at [`Level::MISC`](crate::Level::MISC).
#[macro_export]
macro_rules! log_misc {
    ($logger:expr, $writer:expr, $category:expr, $($arg:tt)+) => {
        $crate::log_to!($logger, $writer, $crate::Level::MISC, $category, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Category, DispatchError, Level, LogEntry, Logger, LoggerConfig};
    use std::sync::{Arc, Mutex};

    fn recording_logger() -> (Logger, Arc<Mutex<Vec<LogEntry>>>) {
        let logger = Logger::new(
            LoggerConfig::default()
                .force_enforcement(true)
                .with_default_levels(true)
                .with_default_category(true),
        );
        let entries = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&entries);
        logger.add_writer("mem", move |entry: LogEntry| sink.lock().unwrap().push(entry));
        (logger, entries)
    }

    #[test]
    fn log_to_formats_message() {
        let (logger, entries) = recording_logger();
        log_to!(logger, "mem", Level::WARN, Category::DEFAULT, "{} of {}", 3, 4).unwrap();

        let entries = entries.lock().unwrap();
        assert_eq!(entries[0].message, "3 of 4");
        assert_eq!(entries[0].level, Level::WARN);
    }

    #[test]
    fn level_macros_pick_builtin_levels() {
        let (logger, entries) = recording_logger();
        log_debug!(logger, "mem", Category::DEFAULT, "d").unwrap();
        log_error!(logger, "mem", Category::DEFAULT, "e").unwrap();
        log_info!(logger, "mem", Category::DEFAULT, "i").unwrap();
        log_warn!(logger, "mem", Category::DEFAULT, "w").unwrap();
        log_misc!(logger, "mem", Category::DEFAULT, "m").unwrap();

        let levels: Vec<_> = entries
            .lock()
            .unwrap()
            .iter()
            .map(|entry| entry.level.clone())
            .collect();
        assert_eq!(levels, Level::DEFAULTS);
    }

    #[test]
    fn macros_surface_dispatch_errors() {
        let (logger, _) = recording_logger();
        let result = log_info!(logger, "mem", "unlisted", "dropped");
        assert_eq!(
            result,
            Err(DispatchError::CategoryNotEnabled("unlisted".into()))
        );
    }
}
