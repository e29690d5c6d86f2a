use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use kandr::animation::constants::{DEFAULT_WIDTH, MIN_WIDTH};
use kandr::animation::StarConfig;
use kandr::filters::eof::EOF_EXIT_STATUS;

#[derive(Debug, Parser, Clone)]
#[clap(version, about = "K&R C exercises: stream filters, tables and a moving star")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Bounce a star between two bars on one line
    Star(StarArgs),
    /// Copy input, doubling backslashes
    Escape,
    /// Collapse runs of spaces into one
    Squeeze,
    /// Count spaces, tabs and newlines
    Blanks,
    /// Count each decimal digit
    Digits(DigitsArgs),
    /// Print the EOF value and whether input was available
    Eof,
    /// Fahrenheit to Celsius table
    Fahr,
    /// Ell to inches and centimeters table
    Frodo,
    /// ASCII code chart
    Ascii,
}

impl Command {
    /// Process exit status after a successful run
    pub fn exit_status(&self) -> u8 {
        match self {
            Command::Eof => EOF_EXIT_STATUS,
            _ => 0,
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct StarArgs {
    /// Columns between the two bars
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = parse_width)]
    pub width: usize,

    /// Milliseconds between frames
    #[arg(long = "interval-ms", default_value_t = 50)]
    pub interval_ms: u64,

    /// Stop after this many frames instead of running until interrupted
    #[arg(long)]
    pub frames: Option<u64>,
}

impl StarArgs {
    pub fn config(&self) -> StarConfig {
        StarConfig {
            width: self.width,
            interval: Duration::from_millis(self.interval_ms),
            frames: self.frames,
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct DigitsArgs {
    /// Draw a log2 star histogram instead of raw counts
    #[arg(long)]
    pub log: bool,
}

fn parse_width(value: &str) -> Result<usize, String> {
    let width: usize = value
        .parse()
        .map_err(|e| format!("Invalid width '{}': {}", value, e))?;
    if width < MIN_WIDTH {
        return Err(format!("Width must be >= {}.", MIN_WIDTH));
    }
    Ok(width)
}
