use std::fmt;
use std::time::Duration;

/// Wall-clock time of day at which a chat message was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl Timestamp {
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Option<Self> {
        if hours < 24 && minutes < 60 && seconds < 60 {
            Some(Self {
                hours,
                minutes,
                seconds,
            })
        } else {
            None
        }
    }

    pub fn since_midnight(self) -> Duration {
        Duration::from_secs(
            u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds),
        )
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// One line of a chat transcript. The `From` token between the time and the
/// text is checked for but not kept.
#[derive(Debug, PartialEq)]
pub struct Message<'a> {
    pub sent_at: &'a str,
    pub text: &'a str,
}
