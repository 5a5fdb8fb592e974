//! Store backend selection shared by `serve` and `plan`.

use std::{fmt, sync::Arc};

use camino::{Utf8Path, Utf8PathBuf};
use clap::ValueEnum;
use pilgrim_core::{MemoryStore, PlanStore, SiteStore, SqliteStore};
use pilgrim_data::reference_sites;
use serde::{Deserialize, Serialize};

use crate::{ARG_DATABASE, CliError, DEFAULT_DATABASE};

/// Backend named on the command line or in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum StoreBackend {
    /// Reference sites held in memory; plans vanish on exit.
    Memory,
    /// Sites and plans in a SQLite database.
    Sqlite,
}

/// Resolved backend and its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreSelection {
    Memory,
    Sqlite { database: Utf8PathBuf },
}

impl StoreSelection {
    /// Pick a backend; naming a database without a backend implies SQLite.
    pub(crate) fn resolve(backend: Option<StoreBackend>, database: Option<Utf8PathBuf>) -> Self {
        match (backend, database) {
            (Some(StoreBackend::Memory), Some(database)) => {
                log::warn!("ignoring --{ARG_DATABASE} {database} for the memory store");
                Self::Memory
            }
            (Some(StoreBackend::Memory), None) | (None, None) => Self::Memory,
            (Some(StoreBackend::Sqlite), database) => Self::Sqlite {
                database: database.unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATABASE)),
            },
            (None, Some(database)) => Self::Sqlite { database },
        }
    }

    /// Ensure a SQLite database already exists; `pilgrim seed` creates it.
    pub(crate) fn validate(&self) -> Result<(), CliError> {
        match self {
            Self::Memory => Ok(()),
            Self::Sqlite { database } => require_existing(database, ARG_DATABASE),
        }
    }
}

impl fmt::Display for StoreSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::Sqlite { database } => write!(f, "sqlite ({database})"),
        }
    }
}

/// Site and plan stores handed to the planner.
pub(crate) struct Stores {
    pub(crate) sites: Arc<dyn SiteStore>,
    pub(crate) plans: Arc<dyn PlanStore>,
}

impl Stores {
    pub(crate) fn shared<S: SiteStore + PlanStore + 'static>(store: S) -> Self {
        let store = Arc::new(store);
        Self {
            sites: Arc::clone(&store) as Arc<dyn SiteStore>,
            plans: store,
        }
    }
}

/// Opens the stores for the current invocation.
pub(crate) trait StoreBuilder {
    fn build(&self, selection: &StoreSelection) -> Result<Stores, CliError>;
}

pub(crate) struct DefaultStoreBuilder;

impl StoreBuilder for DefaultStoreBuilder {
    fn build(&self, selection: &StoreSelection) -> Result<Stores, CliError> {
        match selection {
            StoreSelection::Memory => Ok(Stores::shared(MemoryStore::with_sites(
                reference_sites(),
            ))),
            StoreSelection::Sqlite { database } => {
                let store = SqliteStore::open(database.as_std_path())?;
                if store.all_sites()?.is_empty() {
                    log::warn!("{database} holds no sites; run `pilgrim seed` to load them");
                }
                Ok(Stores::shared(store))
            }
        }
    }
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match pilgrim_data::fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}
