use crate::chat::Timestamp;
use crate::error::ChatError;
use crate::parser;
use crate::srt::Subtitle;

use std::time::Duration;

use tracing::debug;

/// Reading speed used to size subtitle windows: 15 words per 6 seconds (150 wpm).
const WORDS_PER_STEP: u64 = 15;
const SECS_PER_STEP: u64 = 6;

/// Offset of `message` from `initial`, pushed back to `previous` when the two would overlap.
pub fn start(
    message: Timestamp,
    initial: Timestamp,
    previous: Option<Duration>,
) -> Result<Duration, ChatError> {
    let start = message
        .since_midnight()
        .checked_sub(initial.since_midnight())
        .ok_or_else(|| ChatError::out_of_range(message, initial))?;

    match previous {
        Some(previous) if start < previous => {
            debug!(
                "Moving start from {:?} to {:?} to avoid overlap",
                start, previous
            );
            Ok(previous)
        }
        _ => Ok(start),
    }
}

/// End of the display window for `text` shown from `start`.
pub fn end(start: Duration, text: &str) -> Duration {
    if text.is_empty() {
        return start;
    }
    let words = text.split_whitespace().count() as u64;
    let secs = (words * SECS_PER_STEP + WORDS_PER_STEP - 1) / WORDS_PER_STEP;
    start + Duration::from_secs(secs)
}

/// Turns one transcript line into a numbered subtitle.
///
/// Returns the subtitle together with its end offset, which the caller feeds back
/// in as `previous` for the following line.
pub fn transform(
    line: &str,
    sequence_number: usize,
    initial: Timestamp,
    previous: Option<Duration>,
) -> Result<(Subtitle, Duration), ChatError> {
    let msg = parser::parse_line(line)?;
    let sent_at = parser::parse_timestamp(msg.sent_at)?;

    let show_at = start(sent_at, initial, previous)?;
    let hide_at = end(show_at, msg.text);

    Ok((
        Subtitle {
            sequence_number,
            show_at,
            hide_at,
            text: msg.text.to_string(),
        },
        hide_at,
    ))
}
