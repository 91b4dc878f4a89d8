use crate::srt::Subtitle;

use std::io::{BufWriter, Write};
use std::time::Duration;

use anyhow::{Context, Result};

/// Offsets below this are written with an extra leading zero.
const PAD_BELOW: Duration = Duration::from_secs(10 * 3600);

pub fn serialise<W: Write>(subs: &[Subtitle], dst: W) -> Result<()> {
    let mut writer = BufWriter::new(dst);
    write_subs(&mut writer, subs).context("Failed to write subtitles.")?;
    writer.flush().context("Failed to write subtitles.")?;
    Ok(())
}

/// The three lines of an SRT entry: sequence number, time range and text.
pub fn entry_lines(sub: &Subtitle) -> [String; 3] {
    [
        sub.sequence_number.to_string(),
        format!(
            "{},000 --> {},000",
            format_offset(sub.show_at),
            format_offset(sub.hide_at)
        ),
        sub.text.clone(),
    ]
}

fn write_subs<W: Write>(buf: &mut W, subs: &[Subtitle]) -> Result<()> {
    for sub in subs {
        write_sub(buf, sub)?;
    }
    Ok(())
}

fn write_sub<W: Write>(buf: &mut W, sub: &Subtitle) -> Result<()> {
    for line in &entry_lines(sub) {
        write!(buf, "\n{}", line)?;
    }
    writeln!(buf)?;
    Ok(())
}

fn format_offset(offset: Duration) -> String {
    let total_secs = offset.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let padding = if offset < PAD_BELOW { "0" } else { "" };
    format!("{}{}:{:02}:{:02}", padding, hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Duration;

    macro_rules! test_format_offset {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (input, expected) = $value;

                let offset = Duration::from_secs(input);

                assert_eq!(format_offset(offset), expected);
            }
        )*
        }
    }

    test_format_offset! {
        test_format_offset_0: (0, "00:00:00"),
        test_format_offset_1: (1, "00:00:01"),
        test_format_offset_2: (59, "00:00:59"),
        test_format_offset_3: (60, "00:01:00"),
        test_format_offset_4: (80, "00:01:20"),
        test_format_offset_5: (3_600, "01:00:00"),
        test_format_offset_6: (35_999, "09:59:59"),
        test_format_offset_7: (36_000, "10:00:00"),
        test_format_offset_8: (39_680, "11:01:20"),
        test_format_offset_9: (90_000, "25:00:00"),
        test_format_offset_10: (360_000, "100:00:00"),
    }

    fn sub(sequence_number: usize, show_at: u64, hide_at: u64, text: &str) -> Subtitle {
        Subtitle {
            sequence_number,
            show_at: Duration::from_secs(show_at),
            hide_at: Duration::from_secs(hide_at),
            text: text.to_string(),
        }
    }

    #[test]
    fn pads_each_side_independently() {
        let lines = entry_lines(&sub(7, 35_998, 36_001, "a : late"));
        assert_eq!(lines[1], "09:59:58,000 --> 10:00:01,000");
    }

    #[test]
    fn writes_blank_line_before_each_entry() {
        let subs = vec![sub(1, 0, 2, "a : hello"), sub(2, 5, 6, "b : hi")];
        let mut buf = Cursor::new(vec![]);

        serialise(&subs, &mut buf).expect("Failed to write to buffer");

        assert_eq!(
            String::from_utf8(buf.into_inner()).unwrap(),
            "\n1\n00:00:00,000 --> 00:00:02,000\na : hello\n\
             \n2\n00:00:05,000 --> 00:00:06,000\nb : hi\n"
        );
    }

    #[test]
    fn writes_nothing_for_no_entries() {
        let mut buf = Cursor::new(vec![]);
        serialise(&[], &mut buf).unwrap();
        assert!(buf.into_inner().is_empty());
    }
}
