//! Core domain types for the pilgrimage planner.
//!
//! The crate holds the itinerary [`Selector`], the request validation that
//! guards it, the data-access traits for reference sites and persisted plans,
//! and the [`Planner`] service that wires them together.
#![forbid(unsafe_code)]

pub mod category;
pub mod ids;
pub mod itinerary;
pub mod planner;
pub mod request;
pub mod selector;
pub mod site;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use category::{Category, UnknownCategory};
pub use ids::{IdGenerator, PlanId, UuidGenerator};
pub use itinerary::{Itinerary, NO_VIABLE_PLAN_NOTE};
pub use planner::{PlanError, Planner};
pub use request::{Budget, PlanRequest, PlanRequestError, ValidPlanRequest};
pub use selector::{GreedySelector, Selection, Selector};
pub use site::{Site, SiteSummary};
pub use store::{MemoryStore, PlanStore, SiteStore, StoreError};

#[cfg(feature = "store-sqlite")]
pub use store::SqliteStore;
