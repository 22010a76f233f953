//!  Skybook Booking Shell
//!
//!  Copyright (C) 2026  Skybook contributors
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Interactive shell for the booking command validator.
//!
//! Reads one command per line from stdin and answers `OK` or `Error` on
//! stdout. Logging goes to stderr so verdict output stays clean.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use skybook_booking_shell::{CommandInterpreter, ReferenceCodes};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "skybook-shell")]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Airport code list, one IATA code per line
    #[arg(long, default_value = "data/airport_codes.txt")]
    airport_codes: PathBuf,

    /// Airline prefix list, one two-letter designator prefix per line
    #[arg(long, default_value = "data/airline_codes.txt")]
    airline_codes: PathBuf,

    /// Suppress the intro banner (useful when piping scripted input)
    #[arg(short, long, default_value = "false")]
    quiet: bool,

    /// Verbose output
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

/// Configure logging based on verbosity level. `RUST_LOG` wins when set.
fn setup_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_intro() {
    println!(
        "Welcome to the Skybook booking shell.\n\
         Responds with 'OK' to valid commands and 'Error' to invalid commands.\n\
         Example commands:\n\
         \x20 - shop flight fares AAA AAB OneWay C 2026-09-10\n\
         \x20 - air book req\n\
         \x20     seg AAA AAB AA123 2026-09-10 C 5\n\
         \x20     EOC"
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    setup_logging(args.verbose);

    tracing::info!("Starting skybook-shell");
    tracing::debug!("Args: {:?}", args);

    let codes = ReferenceCodes::load(&args.airport_codes, &args.airline_codes)
        .context("Failed to load reference code lists")?;
    tracing::info!(
        "Loaded {} airport codes and {} airline prefixes",
        codes.airport_count(),
        codes.airline_prefix_count()
    );

    let mut interpreter = CommandInterpreter::new(Arc::new(codes));

    if !args.quiet {
        print_intro();
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", interpreter.prompt());
        std::io::stdout().flush().context("Failed to flush prompt")?;

        let Some(line) = lines.next_line().await.context("Failed to read stdin")? else {
            break;
        };

        if let Some(verdict) = interpreter.eval_line(&line) {
            tracing::debug!("Line {:?} -> {}", line, verdict);
            println!("{verdict}");
        }
    }

    tracing::info!("Input closed, exiting");
    Ok(())
}
