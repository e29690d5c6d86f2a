// kandr: K&R C exercises as subcommands

mod cli;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};

use cli::{CliArgs, Command};
use kandr::animation::terminal::run_on_stdout;
use kandr::filters::{count_blanks, count_digits, escape, probe_eof, squeeze};
use kandr::logger::init_logging;
use kandr::tables::{write_ascii_table, write_ell_table, write_temperature_table};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose, args.no_color);
    debug!(command = ?args.command, "starting");

    let status = args.command.exit_status();
    match run(args.command) {
        Ok(()) => ExitCode::from(status),
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> kandr::Result<()> {
    match command {
        Command::Star(star) => {
            run_on_stdout(star.config())?;
        }
        Command::Escape => escape(io::stdin().lock(), &mut io::stdout().lock())?,
        Command::Squeeze => squeeze(io::stdin().lock(), &mut io::stdout().lock())?,
        Command::Blanks => {
            let counts = count_blanks(io::stdin().lock())?;
            counts.write_to(&mut io::stdout().lock())?;
        }
        Command::Digits(digits) => {
            let counts = count_digits(io::stdin().lock())?;
            let mut stdout = io::stdout().lock();
            if digits.log {
                counts.write_histogram(&mut stdout)?;
            } else {
                counts.write_table(&mut stdout)?;
            }
        }
        Command::Eof => {
            let got_byte = probe_eof(io::stdin().lock(), &mut io::stdout().lock())?;
            debug!(got_byte, "probed input");
        }
        Command::Fahr => write_temperature_table(&mut io::stdout().lock())?,
        Command::Frodo => write_ell_table(&mut io::stdout().lock())?,
        Command::Ascii => write_ascii_table(&mut io::stdout().lock())?,
    }
    Ok(())
}
