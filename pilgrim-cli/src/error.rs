//! Error types emitted by the pilgrim CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use pilgrim_core::{PlanError, PlanRequestError, StoreError};
use pilgrim_data::SeedError;
use thiserror::Error;
use tracing_subscriber::util::TryInitError;

/// Errors emitted by the pilgrim CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} path (pass <path> or set {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The global log subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    InitLogging(#[from] TryInitError),
    /// Opening or reading a store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    /// Loading or seeding reference sites failed.
    #[error(transparent)]
    Seed(#[from] SeedError),
    /// The HTTP server could not bind or stopped with an error.
    #[error("server on {bind} failed: {source}")]
    Serve {
        bind: String,
        #[source]
        source: std::io::Error,
    },
    /// Opening the plan request file failed.
    #[error("failed to open plan request at {path:?}: {source}")]
    OpenPlanRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Plan request JSON could not be decoded.
    #[error("failed to parse plan request JSON at {path:?}: {source}")]
    ParsePlanRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The plan request failed validation.
    #[error("plan request in {path:?} failed validation: {source}")]
    InvalidPlanRequest {
        path: Utf8PathBuf,
        #[source]
        source: PlanRequestError,
    },
    /// The planner could not produce an itinerary.
    #[error("planning failed: {source}")]
    Plan { source: PlanError },
    /// Serialising the itinerary failed.
    #[error("failed to serialise itinerary: {0}")]
    SerialisePlan(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
