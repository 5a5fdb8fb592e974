//! Command-line interface for the pilgrimage planner.
//!
//! `pilgrim serve` runs the HTTP API, `pilgrim seed` writes reference sites
//! into a SQLite database, and `pilgrim plan` answers a single request read
//! from a JSON file. Options layer CLI flags over `PILGRIM_*` environment
//! variables and configuration files.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod logging;
mod plan;
mod seed;
mod serve;
mod store;

pub use error::CliError;

const ARG_BIND: &str = "bind";
const ARG_STORE: &str = "store";
const ARG_DATABASE: &str = "database";
const ARG_SITES: &str = "sites";
const ARG_PLAN_REQUEST: &str = "request";
const ENV_PLAN_REQUEST: &str = "PILGRIM_CMDS_PLAN_REQUEST_PATH";

const DEFAULT_BIND: &str = "127.0.0.1:3000";
const DEFAULT_DATABASE: &str = "pilgrim.db";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments fail to parse, configuration cannot be
/// resolved, or the selected command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    logging::init(cli.verbose)?;
    match cli.command {
        Command::Serve(args) => serve::run_serve(args),
        Command::Seed(args) => seed::run_seed(args),
        Command::Plan(args) => plan::run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "pilgrim",
    about = "Plan budget-constrained pilgrimage itineraries",
    version
)]
struct Cli {
    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the planner over HTTP.
    Serve(serve::ServeArgs),
    /// Write reference sites into a SQLite database.
    Seed(seed::SeedArgs),
    /// Plan one itinerary from a JSON request file.
    Plan(plan::PlanArgs),
}

#[cfg(test)]
mod tests;
