//! Facade crate for the pilgrimage planner.
//!
//! This crate re-exports the core domain types and exposes the SQLite store,
//! reference data, and HTTP server behind feature flags.

#![forbid(unsafe_code)]

pub use pilgrim_core::{
    Budget, Category, GreedySelector, IdGenerator, Itinerary, MemoryStore, NO_VIABLE_PLAN_NOTE,
    PlanError, PlanId, PlanRequest, PlanRequestError, PlanStore, Planner, Selection, Selector,
    Site, SiteStore, SiteSummary, StoreError, UnknownCategory, UuidGenerator, ValidPlanRequest,
};

#[cfg(feature = "store-sqlite")]
pub use pilgrim_core::SqliteStore;

#[cfg(feature = "seed-data")]
pub use pilgrim_data::{SeedError, load_sites, reference_sites, seed_sqlite};

#[cfg(feature = "server")]
pub use pilgrim_server::{ApiError, AppState, SharedPlanner, configure, serve};
