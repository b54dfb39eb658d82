//! crates/logging-sink/src/render.rs
//! Single-line text rendering of log entries.

use std::fmt::Write as _;
use std::time::SystemTime;

use logging::LogEntry;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Renders `entry` as `TIMESTAMP [LEVEL] category: message key=value ...`.
///
/// Metadata keys are emitted in sorted order. No trailing newline is added.
///
/// The result is always a single line. Backslashes and control characters in
/// the level, category, message, and metadata are escaped (`\n`, `\r`, `\t`,
/// `\u{..}`). Metadata keys and values that are empty or contain whitespace,
/// `=`, `"`, or escapes are wrapped in double quotes.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use logging::{LogEntry, LogRequest, Timestamp};
/// use logging_sink::render_entry;
///
/// let request = LogRequest::new("ready")
///     .with_level("INFO_LEVEL")
///     .with_category("net")
///     .with_field("port", 8080);
/// let stamp = Timestamp::with_system_time(UNIX_EPOCH + Duration::from_secs(60));
/// let entry = LogEntry::from_request(request, stamp);
///
/// assert_eq!(
///     render_entry(&entry),
///     "1970-01-01T00:01:00Z [INFO_LEVEL] net: ready port=8080"
/// );
/// ```
#[must_use]
pub fn render_entry(entry: &LogEntry) -> String {
    let mut line = format_timestamp(entry.timestamp.system_time());
    line.push_str(" [");
    push_escaped(&mut line, entry.level.as_str());
    line.push_str("] ");
    push_escaped(&mut line, entry.category.as_str());
    line.push_str(": ");
    push_escaped(&mut line, &entry.message);
    for (key, value) in entry.metadata.sorted() {
        line.push(' ');
        push_field_text(&mut line, key);
        line.push('=');
        push_field_text(&mut line, &value.to_string());
    }
    line
}

fn push_escaped(line: &mut String, text: &str) {
    for ch in text.chars() {
        push_escaped_char(line, ch);
    }
}

fn push_escaped_char(line: &mut String, ch: char) {
    match ch {
        '\\' => line.push_str("\\\\"),
        '\n' => line.push_str("\\n"),
        '\r' => line.push_str("\\r"),
        '\t' => line.push_str("\\t"),
        // Writing into a String cannot fail.
        ch if ch.is_control() => {
            let _ = write!(line, "\\u{{{:x}}}", u32::from(ch));
        }
        ch => line.push(ch),
    }
}

fn push_field_text(line: &mut String, text: &str) {
    let bare = !text.is_empty()
        && !text
            .chars()
            .any(|ch| ch.is_whitespace() || ch.is_control() || matches!(ch, '=' | '"' | '\\'));
    if bare {
        line.push_str(text);
        return;
    }

    line.push('"');
    for ch in text.chars() {
        if ch == '"' {
            line.push_str("\\\"");
        } else {
            push_escaped_char(line, ch);
        }
    }
    line.push('"');
}

/// Formats a wall-clock reading as RFC 3339 in UTC.
///
/// Readings outside the representable range fall back to whole seconds since
/// the Unix epoch.
#[must_use]
pub fn format_timestamp(wall: SystemTime) -> String {
    OffsetDateTime::from(wall)
        .format(&Rfc3339)
        .unwrap_or_else(|_| {
            let seconds = wall
                .duration_since(SystemTime::UNIX_EPOCH)
                .map_or(0, |elapsed| elapsed.as_secs());
            seconds.to_string()
        })
}
