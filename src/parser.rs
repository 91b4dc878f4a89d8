use crate::chat::{Message, Timestamp};
use crate::error::ChatError;

use nom::bytes::complete::{tag, take_till1, take_while1, take_while_m_n};
use nom::combinator::{all_consuming, map_res, opt, rest, verify};
use nom::error::{convert_error, ErrorKind, VerboseError};
use nom::sequence::terminated;
use nom::{error_position, Err, IResult};
use tracing::debug;

/// Parses a fixed-width `HH:MM:SS` time of day.
pub fn parse_timestamp(input: &str) -> Result<Timestamp, ChatError> {
    match all_consuming(timestamp)(input) {
        Ok((_, ts)) => Ok(ts),
        Err(Err::Error(err)) | Err(Err::Failure(err)) => {
            debug!("{}", convert_error(input, err));
            Err(ChatError::MalformedTimestamp(input.to_string()))
        }
        Err(Err::Incomplete(_)) => {
            unreachable!("Incomplete data received by non-streaming parser.")
        }
    }
}

/// Splits a transcript line into its timestamp token and text, dropping the sender marker.
/// The line must not carry its line terminator.
pub fn parse_line(input: &str) -> Result<Message<'_>, ChatError> {
    match chat_line(input) {
        Ok((_, msg)) => Ok(msg),
        Err(Err::Error(err)) | Err(Err::Failure(err)) => {
            debug!("{}", convert_error(input, err));
            Err(ChatError::MalformedLine(input.to_string()))
        }
        Err(Err::Incomplete(_)) => {
            unreachable!("Incomplete data received by non-streaming parser.")
        }
    }
}

/// Returns the first whitespace-delimited token of a line, if there is one.
pub fn first_token(input: &str) -> Option<&str> {
    let leading: IResult<&str, Option<&str>, VerboseError<&str>> = opt(gap)(input);
    let input = leading.map_or(input, |(input, _)| input);
    field(input).ok().map(|(_, tok)| tok)
}

/// Strips a leading byte-order mark, if present.
pub fn strip_bom(input: &str) -> &str {
    let bom: IResult<&str, Option<&str>, VerboseError<&str>> = opt(tag("\u{FEFF}"))(input);
    bom.map_or(input, |(input, _)| input)
}

fn chat_line(input: &str) -> IResult<&str, Message<'_>, VerboseError<&str>> {
    let (input, _) = opt(gap)(input)?;
    let (input, sent_at) = terminated(field, gap)(input)?;
    let (input, _) = terminated(field, gap)(input)?;
    let (input, text) = verify(rest, |s: &str| !s.is_empty())(input)?;

    Ok((input, Message { sent_at, text }))
}

fn field(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    take_till1(|c: char| c.is_whitespace())(input)
}

fn gap(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    take_while1(|c: char| c.is_whitespace())(input)
}

fn timestamp(input: &str) -> IResult<&str, Timestamp, VerboseError<&str>> {
    let (input, hours) = two_digits(input)?;
    let (input, _) = tag(":")(input)?;
    let (input, minutes) = two_digits(input)?;
    let (input, _) = tag(":")(input)?;
    let (rem, seconds) = two_digits(input)?;

    match Timestamp::new(hours, minutes, seconds) {
        Some(ts) => Ok((rem, ts)),
        None => Err(Err::Error(error_position!(input, ErrorKind::Verify))),
    }
}

fn two_digits(input: &str) -> IResult<&str, u8, VerboseError<&str>> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
        |s: &str| s.parse(),
    )(input)
}
