use std::time::Duration;

/// A single numbered SRT entry. Offsets are relative to the reference timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Subtitle {
    pub(crate) sequence_number: usize,
    pub(crate) show_at: Duration,
    pub(crate) hide_at: Duration,
    pub(crate) text: String,
}
