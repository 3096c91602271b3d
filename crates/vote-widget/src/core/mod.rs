//! Core vote model
//!
//! Platform-neutral types shared by the mock DOM and the browser binding:
//! the two vote directions, the toggle state, the counters and the error type.

mod state;

pub use state::{Counters, VoteSnapshot, VoteState};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for widget operations
pub type VoteResult<T> = Result<T, VoteError>;

/// Errors raised while binding or configuring a vote widget
#[derive(Debug, Error)]
pub enum VoteError {
    /// A count display did not hold a parseable integer
    #[error("Malformed counter text in #{element_id}: {text:?}")]
    MalformedCounterText {
        /// ID of the count display
        element_id: String,
        /// The text that failed to parse
        text: String,
    },

    /// A bound element could not be found on the page
    #[error("Element not found: #{id}")]
    MissingElement {
        /// The missing element ID
        id: String,
    },

    /// Widget configuration could not be decoded
    #[error("Invalid widget configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

impl VoteError {
    /// Create a malformed counter text error
    #[must_use]
    pub fn malformed_counter(element_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::MalformedCounterText {
            element_id: element_id.into(),
            text: text.into(),
        }
    }

    /// Create a missing element error
    #[must_use]
    pub fn missing_element(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }
}

/// Which of the two buttons a click targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    /// The thumbs-up button
    Up,
    /// The thumbs-down button
    Down,
}

impl VoteDirection {
    /// Both directions, up first
    pub const ALL: [Self; 2] = [Self::Up, Self::Down];

    /// The button this one disables while voted
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Lowercase label used in log events
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl std::fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses the integer shown in a count display.
///
/// Surrounding whitespace is ignored; anything else that is not a signed
/// decimal integer is rejected. `i64::MAX` is rejected too, since a vote on
/// top of it could not be retracted back to the seed.
pub fn parse_counter(element_id: &str, text: &str) -> VoteResult<i64> {
    match text.trim().parse::<i64>() {
        Ok(value) if value < i64::MAX => Ok(value),
        _ => Err(VoteError::malformed_counter(element_id, text)),
    }
}

/// Reads a counter, falling back to 0 on malformed text.
pub fn read_counter(element_id: &str, text: &str) -> i64 {
    match parse_counter(element_id, text) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(element_id, text, error = %err, "defaulting counter to 0");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLog {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_parse_counter_plain() {
        assert_eq!(parse_counter("c", "42").unwrap(), 42);
    }

    #[test]
    fn test_parse_counter_trims_whitespace() {
        assert_eq!(parse_counter("c", "\n  7 \t").unwrap(), 7);
    }

    #[test]
    fn test_parse_counter_negative() {
        assert_eq!(parse_counter("c", "-3").unwrap(), -3);
    }

    #[test]
    fn test_parse_counter_rejects_garbage() {
        let err = parse_counter("up_votes_count", "12 votes").unwrap_err();
        assert!(matches!(
            &err,
            VoteError::MalformedCounterText { element_id, text }
                if element_id == "up_votes_count" && text == "12 votes"
        ));
        assert!(err.to_string().contains("#up_votes_count"));
    }

    #[test]
    fn test_parse_counter_rejects_empty() {
        assert!(parse_counter("c", "").is_err());
        assert!(parse_counter("c", "   ").is_err());
    }

    #[test]
    fn test_parse_counter_rejects_fraction() {
        assert!(parse_counter("c", "1.5").is_err());
    }

    #[test]
    fn test_parse_counter_rejects_no_headroom() {
        assert!(parse_counter("c", &i64::MAX.to_string()).is_err());
        assert_eq!(parse_counter("c", &(i64::MAX - 1).to_string()).unwrap(), i64::MAX - 1);
        assert_eq!(parse_counter("c", &i64::MIN.to_string()).unwrap(), i64::MIN);
    }

    #[test]
    fn test_read_counter_falls_back_to_zero() {
        assert_eq!(read_counter("c", "n/a"), 0);
        assert_eq!(read_counter("c", "9"), 9);
    }

    #[test]
    fn test_read_counter_logs_warning() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let value = tracing::subscriber::with_default(subscriber, || {
            read_counter("up_votes_count", "n/a")
        });

        assert_eq!(value, 0);
        let text = log.text();
        assert!(text.contains("WARN"));
        assert!(text.contains("up_votes_count"));
        assert!(text.contains("defaulting counter to 0"));
    }

    #[test]
    fn test_read_counter_silent_on_valid_text() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || read_counter("c", "3"));

        assert!(log.text().is_empty());
    }

    #[test]
    fn test_direction_opposite() {
        assert_eq!(VoteDirection::Up.opposite(), VoteDirection::Down);
        assert_eq!(VoteDirection::Down.opposite(), VoteDirection::Up);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(VoteDirection::Up.to_string(), "up");
        assert_eq!(VoteDirection::Down.to_string(), "down");
    }

    #[test]
    fn test_missing_element_display() {
        let err = VoteError::missing_element("thumbs_up");
        assert_eq!(err.to_string(), "Element not found: #thumbs_up");
    }
}
