//! Shared application state.

use std::{fmt, sync::Arc};

use pilgrim_core::{
    GreedySelector, IdGenerator, PlanStore, Planner, SiteStore, UuidGenerator,
};

/// Planner over type-erased stores, as selected at start-up.
pub type SharedPlanner = Planner<Arc<dyn SiteStore>, Arc<dyn PlanStore>, Arc<dyn IdGenerator>>;

/// State handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    planner: Arc<SharedPlanner>,
}

impl AppState {
    /// Build state with random plan identifiers.
    #[must_use]
    pub fn new(sites: Arc<dyn SiteStore>, plans: Arc<dyn PlanStore>) -> Self {
        Self::with_ids(sites, plans, Arc::new(UuidGenerator))
    }

    /// Build state with an explicit identifier generator.
    #[must_use]
    pub fn with_ids(
        sites: Arc<dyn SiteStore>,
        plans: Arc<dyn PlanStore>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            planner: Arc::new(Planner::with_parts(sites, plans, ids, GreedySelector)),
        }
    }

    /// Shared handle suitable for moving onto the blocking pool.
    #[must_use]
    pub fn planner(&self) -> Arc<SharedPlanner> {
        Arc::clone(&self.planner)
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
