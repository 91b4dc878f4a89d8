mod chat;
mod error;
mod parser;
mod processor;
mod serialiser;
mod srt;
mod timeline;

use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => (),
        Err(err) => {
            eprintln!("An error occurred: {}", err);
            for cause in err.chain().skip(1) {
                eprintln!("    {}", cause);
            }
            process::exit(1);
        }
    }
}

#[derive(ClapParser)]
#[command(about = "Transform a chat log into an SRT file")]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "The chat log to read from. If not supplied, it will be read from standard input. \
                Example line: \"hh:mm:ss    From Guest1 : A kind message to everyone\"",
        default_value = "-"
    )]
    input: String,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "The file to write to. If not supplied, the subtitles will be written to standard output.",
        default_value = "-"
    )]
    output: String,
    #[arg(
        short = 't',
        long,
        value_name = "HH:MM:SS",
        help = "Time of the day at which the video content started. Defaults to the time of the first chat message."
    )]
    initial_timestamp: Option<String>,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Leave out chat lines matching any of the regular expressions in the given file."
    )]
    drop_file: Option<String>,
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Log more details to standard error. Repeat for more."
    )]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let data = read_input(&cli.input)?;

    let initial = cli
        .initial_timestamp
        .as_deref()
        .map(parser::parse_timestamp)
        .transpose()
        .context("Invalid initial timestamp")?;
    let drop_patterns = match &cli.drop_file {
        Some(path) => processor::load_drop_patterns(path)?,
        None => Vec::new(),
    };

    let opts = processor::ProcessOpts {
        initial,
        drop_patterns,
    };
    let subs = processor::process(&data, opts)
        .with_context(|| format!("Failed to convert chat log: '{}'", cli.input))?;

    if cli.output == "-" {
        let dst = io::stdout();
        serialiser::serialise(&subs, dst.lock())?;
    } else {
        let dst = std::fs::File::create(&cli.output)
            .with_context(|| format!("Failed to create output file: '{}'", cli.output))?;
        serialiser::serialise(&subs, dst)?;
    };

    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to open input file: '{}'", input))
    }
}
