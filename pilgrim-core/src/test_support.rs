//! Deterministic collaborators for unit and behaviour tests.
//!
//! Compiled for the crate's own tests and behind the `test-support` feature.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    Category, IdGenerator, Itinerary, PlanId, PlanStore, Site, SiteStore, StoreError,
};

/// Identifier generator yielding `plan-1`, `plan-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    issued: AtomicUsize,
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> PlanId {
        let next = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        PlanId::new(format!("plan-{next}"))
    }
}

/// Wraps a [`SiteStore`] and counts lookups made through it.
#[derive(Debug)]
pub struct TrackingSiteStore<S> {
    inner: S,
    lookups: AtomicUsize,
}

impl<S: SiteStore> TrackingSiteStore<S> {
    /// Wrap `inner` with a zeroed counter.
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            lookups: AtomicUsize::new(0),
        }
    }

    /// Number of calls made to either lookup method.
    #[must_use]
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl<S: SiteStore> SiteStore for TrackingSiteStore<S> {
    fn sites_matching(&self, category: Category, region: &str) -> Result<Vec<Site>, StoreError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.inner.sites_matching(category, region)
    }

    fn all_sites(&self) -> Result<Vec<Site>, StoreError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.inner.all_sites()
    }
}

/// Store whose every operation fails with [`StoreError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingStore;

impl FailingStore {
    fn error() -> StoreError {
        StoreError::Unavailable {
            reason: "backend offline".to_owned(),
        }
    }
}

impl SiteStore for FailingStore {
    fn sites_matching(&self, _category: Category, _region: &str) -> Result<Vec<Site>, StoreError> {
        Err(Self::error())
    }

    fn all_sites(&self) -> Result<Vec<Site>, StoreError> {
        Err(Self::error())
    }
}

impl PlanStore for FailingStore {
    fn insert_plan(&self, _itinerary: &Itinerary) -> Result<(), StoreError> {
        Err(Self::error())
    }

    fn find_plan(&self, _id: &PlanId) -> Result<Option<Itinerary>, StoreError> {
        Err(Self::error())
    }
}
