//! Seed command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pilgrim_data::{load_sites, reference_sites, seed_sqlite};
use serde::{Deserialize, Serialize};

use crate::store::require_existing;
use crate::{ARG_DATABASE, ARG_SITES, CliError, DEFAULT_DATABASE};

/// CLI arguments for the `seed` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Replace the sites stored in a SQLite database with the \
                 built-in catalogue or a JSON catalogue file. Persisted plans \
                 are kept.",
    about = "Seed a SQLite database with reference sites"
)]
#[ortho_config(prefix = "PILGRIM")]
pub(crate) struct SeedArgs {
    /// SQLite database to write; created when missing.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
    /// JSON array of sites to load instead of the built-in catalogue.
    #[arg(long = ARG_SITES, value_name = "path")]
    #[serde(default)]
    pub(crate) sites: Option<Utf8PathBuf>,
}

impl SeedArgs {
    pub(crate) fn into_config(self) -> Result<SeedConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(SeedConfig::from(merged))
    }
}

/// Resolved `seed` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SeedConfig {
    pub(crate) database: Utf8PathBuf,
    pub(crate) sites: Option<Utf8PathBuf>,
}

impl From<SeedArgs> for SeedConfig {
    fn from(args: SeedArgs) -> Self {
        Self {
            database: args
                .database
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATABASE)),
            sites: args.sites,
        }
    }
}

pub(crate) fn run_seed(args: SeedArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_seed_with(args, &mut stdout)
}

pub(crate) fn run_seed_with(args: SeedArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let sites = match &config.sites {
        Some(path) => {
            require_existing(path, ARG_SITES)?;
            load_sites(path)?
        }
        None => reference_sites(),
    };
    let written = seed_sqlite(&config.database, &sites)?;
    writeln!(writer, "seeded {written} sites into {}", config.database)
        .map_err(CliError::WriteOutput)
}
