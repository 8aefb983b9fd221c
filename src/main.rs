//! `prestamos`: terminal front end for the equipment-loan desk.
//!
//! Talks to the same REST API as the browser page and applies the same form
//! rules through the `desk` crate.

mod commands;
mod config;
mod csrf;
mod error;
mod http;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands::{ExportFormat, LendArgs};
use crate::config::ClientConfig;
use crate::error::CliError;
use crate::http::HttpApi;

#[derive(Parser, Debug)]
#[command(name = "prestamos", about = "Equipment-loan desk terminal client")]
struct Cli {
    #[arg(long, env = "PRESTAMOS_BASE_URL", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    /// Refuse to send create/return requests without a CSRF token.
    #[arg(long, default_value_t = false)]
    require_csrf: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List users, locations, assistants, and equipment.
    Reference,
    /// Show pending loans.
    Pending {
        #[arg(long)]
        search: Option<String>,
    },
    /// Register a new loan.
    Lend(LendArgs),
    /// Record the return of a pending loan.
    Return {
        loan_id: i64,
        #[arg(long)]
        received_by: String,
    },
    /// Download the loan history report.
    Export {
        #[arg(value_enum)]
        format: ExportFormat,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ClientConfig::from_env()?;
    let require_csrf = cli.require_csrf || config.require_csrf;
    let mut api = HttpApi::new(&cli.base_url, &config)?;

    match cli.command {
        Command::Reference => commands::run_reference(&api).await,
        Command::Pending { search } => commands::run_pending(&api, search.as_deref()).await,
        Command::Lend(args) => {
            api.establish_session(require_csrf).await?;
            commands::run_lend(&api, args).await
        }
        Command::Return { loan_id, received_by } => {
            api.establish_session(require_csrf).await?;
            commands::run_return(&api, loan_id, &received_by).await
        }
        Command::Export { format, out } => commands::run_export(&api, format, out).await,
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
