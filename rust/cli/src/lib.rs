//! # Punto Banco CLI Library
//!
//! Command-line front end for the `puntobanco-engine` crate. Each invocation
//! plays at most one round; there is no session state between runs.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `deal`: Deal and resolve one round, optionally settling a bet on it and
//!   appending it to a JSONL file
//! - `cfg`: Display current configuration settings
//! - `rules`: Print the third-card drawing tables

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
mod logging;
pub mod ui;

use cli::{Commands, PuntoBancoCli};
use commands::{handle_cfg_command, handle_deal_command, handle_rules_command, DealBet};

pub use error::CliError;
pub use logging::init_logging;

const COMMANDS: &[&str] = &["deal", "cfg", "rules"];

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["puntobanco", "deal", "--seed", "42"];
/// let code = puntobanco_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = PuntoBancoCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write_usage(err, &e);
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => {
            let result = match cli.cmd {
                Commands::Deal {
                    seed,
                    decks,
                    output,
                    bet,
                    stake,
                    balance,
                } => {
                    let bet = bet.map(|on| DealBet::new(on.outcome(), stake, balance));
                    handle_deal_command(decks, seed, output, bet, out)
                }
                Commands::Cfg => match handle_cfg_command(out, err) {
                    // cfg already reported the problem on stderr
                    Err(CliError::Config(_)) => return exit_code::ERROR,
                    other => other,
                },
                Commands::Rules => handle_rules_command(out),
            };
            match result {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    let _ = ui::write_error(err, &e.to_string());
                    exit_code::ERROR
                }
            }
        }
    }
}

fn write_usage(err: &mut dyn Write, e: &clap::Error) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "Punto Banco CLI")?;
    writeln!(err, "Usage: puntobanco <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: puntobanco --help")
}
