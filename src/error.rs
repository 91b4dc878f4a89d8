use crate::chat::Timestamp;

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ChatError {
    #[error(
        "Message time {} is before the specified initial time {}",
        display_hms(.message),
        display_hms(.initial)
    )]
    OutOfRangeTimestamp { message: Duration, initial: Duration },
    #[error("Malformed chat line, expected '<HH:MM:SS> From <text>': '{0}'")]
    MalformedLine(String),
    #[error("Malformed timestamp, expected HH:MM:SS: '{0}'")]
    MalformedTimestamp(String),
}

impl ChatError {
    pub fn out_of_range(message: Timestamp, initial: Timestamp) -> Self {
        ChatError::OutOfRangeTimestamp {
            message: message.since_midnight(),
            initial: initial.since_midnight(),
        }
    }
}

/// Renders a duration as `H:MM:SS`, the way chat times are shown in diagnostics.
pub fn display_hms(duration: &Duration) -> String {
    let total_secs = duration.as_secs();
    format!(
        "{}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs % 3600) / 60,
        total_secs % 60
    )
}
