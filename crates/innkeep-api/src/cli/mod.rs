//! CLI command definitions for the `innkeep` binary.
//!
//! Uses clap derive macros for argument parsing. Commands are grouped by
//! resource (`innkeep employee add`, `innkeep reservation list`).

pub mod employee;
pub mod guest;
pub mod reservation;
pub mod seed;
pub mod stats;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use indicatif::{ProgressBar, ProgressStyle};

/// Run the hotel's staff directory and reservation ledger.
#[derive(Parser)]
#[command(name = "innkeep", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage employees (add, list, show, find, search, update, status, delete).
    #[command(alias = "emp")]
    Employee {
        #[command(subcommand)]
        action: employee::EmployeeCommand,
    },

    /// Headcount and payroll statistics.
    Stats {
        /// Break the numbers down per department.
        #[arg(long)]
        departments: bool,
    },

    /// Manage reservations (add, list, delete).
    Reservation {
        #[command(subcommand)]
        action: reservation::ReservationCommand,
    },

    /// Manage guests (add, list).
    Guest {
        #[command(subcommand)]
        action: guest::GuestCommand,
    },

    /// Load the sample staff roster into an empty directory.
    Seed,

    /// Start the REST API server.
    Serve {
        /// Port to listen on (overrides config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config.toml).
        #[arg(long)]
        host: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Default log directive for the given verbosity flags.
pub fn log_directive(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info,innkeep=debug",
        _ => "trace",
    }
}

/// A steady-ticking spinner in the given color.
pub(crate) fn spinner(color: &str, message: impl Into<String>) -> anyhow::Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner().template(&format!("{{spinner:.{color}}} {{msg}}"))?,
    );
    spinner.set_message(message.into());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    Ok(spinner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_directive() {
        assert_eq!(log_directive(0, true), "error");
        assert_eq!(log_directive(0, false), "warn");
        assert_eq!(log_directive(1, false), "info,innkeep=debug");
        assert_eq!(log_directive(3, true), "trace");
    }

    #[test]
    fn test_parse_employee_search() {
        let cli = Cli::try_parse_from(["innkeep", "--json", "employee", "search", "an"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Employee {
                action: employee::EmployeeCommand::Search { term },
            } => assert_eq!(term, "an"),
            _ => panic!("expected employee search"),
        }
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["innkeep", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Commands::Serve { port, host } => {
                assert_eq!(port, Some(9000));
                assert!(host.is_none());
            }
            _ => panic!("expected serve"),
        }
    }
}
