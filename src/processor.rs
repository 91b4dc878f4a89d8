use crate::chat::Timestamp;
use crate::error::ChatError;
use crate::parser;
use crate::srt::Subtitle;
use crate::timeline;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{debug, info, warn};

/// Zoom marks direct messages with this between the recipient and the text.
const PRIVATE_MARKER: &str = "(privately) :";

pub struct ProcessOpts {
    pub initial: Option<Timestamp>,
    pub drop_patterns: Vec<Regex>,
}

/// Converts a whole transcript into numbered subtitles, stopping at the first bad line.
pub fn process(input: &str, opts: ProcessOpts) -> Result<Vec<Subtitle>> {
    let mut processor = LineProcessor::new(opts);
    for (idx, line) in input.lines().enumerate() {
        let line = if idx == 0 {
            parser::strip_bom(line)
        } else {
            line
        };
        processor
            .feed(line)
            .with_context(|| format!("Failed to process line {}", idx + 1))?;
    }

    info!(
        "Converted {} messages, skipped {}",
        processor.subs.len(),
        processor.skipped
    );
    if processor.subs.is_empty() {
        warn!("The transcript did not contain any public messages.");
    }
    Ok(processor.subs)
}

#[derive(Debug, Clone, Copy)]
enum State {
    AwaitingReference,
    Streaming {
        initial: Timestamp,
        previous: Option<Duration>,
    },
}

struct LineProcessor {
    state: State,
    drop_patterns: Vec<Regex>,
    subs: Vec<Subtitle>,
    skipped: usize,
}

impl LineProcessor {
    fn new(opts: ProcessOpts) -> Self {
        let state = match opts.initial {
            Some(initial) => State::Streaming {
                initial,
                previous: None,
            },
            None => State::AwaitingReference,
        };
        Self {
            state,
            drop_patterns: opts.drop_patterns,
            subs: Vec::new(),
            skipped: 0,
        }
    }

    fn feed(&mut self, line: &str) -> Result<(), ChatError> {
        // The reference is taken from the first line even if that line is filtered below.
        let (initial, previous) = match self.state {
            State::AwaitingReference => {
                let initial = reference_from(line)?;
                debug!("Using {} as the initial timestamp", initial);
                (initial, None)
            }
            State::Streaming { initial, previous } => (initial, previous),
        };
        self.state = State::Streaming { initial, previous };

        if line.contains(PRIVATE_MARKER) {
            debug!("Skipping private message: '{}'", line);
            self.skipped += 1;
            return Ok(());
        }
        if let Some(regex) = self.drop_patterns.iter().find(|r| r.is_match(line)) {
            debug!("Matched \"{}\" against /{}/", line, regex);
            self.skipped += 1;
            return Ok(());
        }

        let (sub, end) = timeline::transform(line, self.subs.len() + 1, initial, previous)?;
        self.subs.push(sub);
        self.state = State::Streaming {
            initial,
            previous: Some(end),
        };
        Ok(())
    }
}

fn reference_from(line: &str) -> Result<Timestamp, ChatError> {
    let token =
        parser::first_token(line).ok_or_else(|| ChatError::MalformedLine(line.to_string()))?;
    parser::parse_timestamp(token)
}

/// Reads regular expressions for lines to leave out, one per line.
pub fn load_drop_patterns<P: AsRef<Path>>(path: P) -> Result<Vec<Regex>> {
    let path = path.as_ref();
    let patterns = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read regex file: '{}'", path.display()))?;
    parse_patterns(&patterns)
}

fn parse_patterns(patterns: &str) -> Result<Vec<Regex>> {
    let patterns = patterns
        .lines()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty() && !p.starts_with('#'));
    debug!("Drop patterns: {:?}", patterns.clone().collect::<Vec<&str>>());
    patterns
        .map(|p| Regex::new(p).with_context(|| format!("Invalid regex: '{}'", p)))
        .collect()
}
