//! Request-scoped planning service.
//!
//! [`Planner`] validates a request, fetches candidates, runs the selector,
//! assigns an id, and persists the itinerary. It owns no mutable state of
//! its own; every collaborator is injected.

use thiserror::Error;

use crate::{
    GreedySelector, IdGenerator, Itinerary, PlanId, PlanRequest, PlanRequestError, PlanStore,
    Selector, Site, SiteStore, StoreError, UuidGenerator,
};

/// Failures surfaced to planner callers.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The request was rejected before any store access.
    #[error(transparent)]
    Validation(#[from] PlanRequestError),
    /// No itinerary exists under the requested id.
    #[error("plan {id} not found")]
    NotFound {
        /// Identifier that was looked up.
        id: PlanId,
    },
    /// Reading or writing a store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PlanError {
    /// Whether the same request may succeed if retried.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

/// Plans itineraries against injected stores.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use pilgrim_core::{Category, MemoryStore, PlanRequest, Planner, Site};
///
/// let store = Arc::new(MemoryStore::with_sites([
///     Site::new("A", Category::Buddhism, "X", 500.0, 2.0),
///     Site::new("B", Category::Buddhism, "X", 300.0, 1.0),
/// ]));
/// let planner = Planner::new(Arc::clone(&store), store);
///
/// let itinerary = planner
///     .plan(&PlanRequest::new("Buddhism", 600.0, 1.0, "X"))
///     .expect("planning succeeds");
/// assert_eq!(itinerary.total_cost, 500.0);
/// assert_eq!(planner.find_plan(&itinerary.id).expect("stored"), itinerary);
/// ```
#[derive(Debug)]
pub struct Planner<S, P, G = UuidGenerator, L = GreedySelector> {
    sites: S,
    plans: P,
    ids: G,
    selector: L,
}

impl<S, P> Planner<S, P>
where
    S: SiteStore,
    P: PlanStore,
{
    /// Construct a planner with random ids and greedy selection.
    #[must_use]
    pub const fn new(sites: S, plans: P) -> Self {
        Self::with_parts(sites, plans, UuidGenerator, GreedySelector)
    }
}

impl<S, P, G, L> Planner<S, P, G, L>
where
    S: SiteStore,
    P: PlanStore,
    G: IdGenerator,
    L: Selector,
{
    /// Construct a planner from explicit collaborators.
    #[must_use]
    pub const fn with_parts(sites: S, plans: P, ids: G, selector: L) -> Self {
        Self {
            sites,
            plans,
            ids,
            selector,
        }
    }

    /// Replace the id generator.
    #[must_use]
    pub fn with_ids<H: IdGenerator>(self, ids: H) -> Planner<S, P, H, L> {
        Planner::with_parts(self.sites, self.plans, ids, self.selector)
    }

    /// Produce, persist, and return an itinerary for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Validation`] without touching any store when the
    /// request is invalid, and [`PlanError::Store`] when the candidate read
    /// or the itinerary write fails. An itinerary is only returned once it
    /// has been persisted.
    pub fn plan(&self, request: &PlanRequest) -> Result<Itinerary, PlanError> {
        let valid = request.validate()?;
        let candidates = self.sites.sites_matching(valid.category, &valid.region)?;
        let selection = self.selector.select(&candidates, valid.budget);
        let itinerary = selection.into_itinerary(self.ids.next_id());
        self.plans.insert_plan(&itinerary)?;
        if itinerary.is_empty() {
            log::info!(
                "plan {} has no viable sites ({} {} candidates, budget {}, {} hours)",
                itinerary.id,
                candidates.len(),
                valid.category,
                valid.budget.cost,
                valid.budget.hours,
            );
        } else {
            log::info!(
                "plan {} selected {} of {} sites (cost {}, {} hours)",
                itinerary.id,
                itinerary.sites.len(),
                candidates.len(),
                itinerary.total_cost,
                itinerary.total_duration,
            );
        }
        Ok(itinerary)
    }

    /// Return every reference site.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Store`] when the site store cannot be read.
    pub fn locations(&self) -> Result<Vec<Site>, PlanError> {
        Ok(self.sites.all_sites()?)
    }

    /// Load a persisted itinerary.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::NotFound`] for unknown ids and
    /// [`PlanError::Store`] when the plan store cannot be read.
    pub fn find_plan(&self, id: &PlanId) -> Result<Itinerary, PlanError> {
        self.plans
            .find_plan(id)?
            .ok_or_else(|| PlanError::NotFound { id: id.clone() })
    }
}
