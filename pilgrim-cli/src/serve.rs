//! Serve command implementation.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pilgrim_server::AppState;
use serde::{Deserialize, Serialize};

use crate::store::{DefaultStoreBuilder, StoreBackend, StoreBuilder, StoreSelection};
use crate::{ARG_BIND, ARG_DATABASE, ARG_STORE, CliError, DEFAULT_BIND};

/// CLI arguments for the `serve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Serve the planner HTTP API. Sites come from the built-in \
                 catalogue (memory store) or a seeded SQLite database.",
    about = "Serve the planner over HTTP"
)]
#[ortho_config(prefix = "PILGRIM")]
pub(crate) struct ServeArgs {
    /// Socket address to listen on.
    #[arg(long = ARG_BIND, value_name = "addr")]
    #[serde(default)]
    pub(crate) bind: Option<String>,
    /// Store backend holding sites and plans.
    #[arg(long = ARG_STORE, value_enum, value_name = "backend")]
    #[serde(default)]
    pub(crate) store: Option<StoreBackend>,
    /// SQLite database path; implies `--store sqlite`.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
}

impl ServeArgs {
    pub(crate) fn into_config(self) -> Result<ServeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(ServeConfig::from(merged))
    }
}

/// Resolved `serve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServeConfig {
    pub(crate) bind: String,
    pub(crate) store: StoreSelection,
}

impl From<ServeArgs> for ServeConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            bind: args.bind.unwrap_or_else(|| DEFAULT_BIND.to_owned()),
            store: StoreSelection::resolve(args.store, args.database),
        }
    }
}

pub(crate) fn run_serve(args: ServeArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.store.validate()?;
    let stores = DefaultStoreBuilder.build(&config.store)?;
    let state = AppState::new(stores.sites, stores.plans);
    log::info!("starting server with the {} store", config.store);
    actix_web::rt::System::new()
        .block_on(pilgrim_server::serve(config.bind.as_str(), state))
        .map_err(|source| CliError::Serve {
            bind: config.bind.clone(),
            source,
        })
}
