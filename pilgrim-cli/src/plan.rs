//! Plan command implementation.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pilgrim_core::{Itinerary, PlanRequest, Planner};
use pilgrim_data::fs::open_utf8_file;
use serde::{Deserialize, Serialize};

use crate::store::{
    DefaultStoreBuilder, StoreBackend, StoreBuilder, StoreSelection, require_existing,
};
use crate::{ARG_DATABASE, ARG_PLAN_REQUEST, ARG_STORE, CliError, ENV_PLAN_REQUEST};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan one itinerary from a JSON file holding religion, \
                 budget, days, and region, then print the itinerary as JSON.",
    about = "Plan a single itinerary"
)]
#[ortho_config(prefix = "PILGRIM")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a plan request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Store backend holding sites and plans.
    #[arg(long = ARG_STORE, value_enum, value_name = "backend")]
    #[serde(default)]
    pub(crate) store: Option<StoreBackend>,
    /// SQLite database path; implies `--store sqlite`.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    pub(crate) request_path: Utf8PathBuf,
    pub(crate) store: StoreSelection,
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        Ok(Self {
            request_path,
            store: StoreSelection::resolve(args.store, args.database),
        })
    }
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &DefaultStoreBuilder, &mut stdout)
}

pub(crate) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn StoreBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let itinerary = execute_plan(args, builder)?;
    write_itinerary(writer, &itinerary)
}

fn execute_plan(args: PlanArgs, builder: &dyn StoreBuilder) -> Result<Itinerary, CliError> {
    let config = args.into_config()?;
    require_existing(&config.request_path, ARG_PLAN_REQUEST)?;
    config.store.validate()?;
    let request = load_plan_request(&config.request_path)?;
    request
        .validate()
        .map_err(|source| CliError::InvalidPlanRequest {
            path: config.request_path.clone(),
            source,
        })?;
    let stores = builder.build(&config.store)?;
    Planner::new(stores.sites, stores.plans)
        .plan(&request)
        .map_err(|source| CliError::Plan { source })
}

/// Loads a JSON-encoded [`PlanRequest`] from disk.
pub(crate) fn load_plan_request(path: &Utf8Path) -> Result<PlanRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPlanRequest {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParsePlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_itinerary(writer: &mut dyn Write, itinerary: &Itinerary) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(itinerary).map_err(CliError::SerialisePlan)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
