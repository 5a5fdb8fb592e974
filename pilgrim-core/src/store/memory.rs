//! In-memory store backend.

use std::{collections::HashMap, sync::RwLock};

use super::{PlanStore, SiteStore, StoreError};
use crate::{Category, Itinerary, PlanId, Site};

/// Sites held in a vector and plans in a locked map.
///
/// Site lookups perform a linear scan in insertion order, which suits the
/// small reference datasets this backend serves. Plans live only as long as
/// the store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sites: Vec<Site>,
    plans: RwLock<HashMap<PlanId, Itinerary>>,
}

impl MemoryStore {
    /// Create a store from a collection of sites.
    #[must_use]
    pub fn with_sites<I>(sites: I) -> Self
    where
        I: IntoIterator<Item = Site>,
    {
        Self {
            sites: sites.into_iter().collect(),
            plans: RwLock::default(),
        }
    }

    /// Number of persisted plans.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] when the plan lock is poisoned.
    pub fn plan_count(&self) -> Result<usize, StoreError> {
        Ok(self.plans.read().map_err(|_| StoreError::Poisoned)?.len())
    }
}

impl SiteStore for MemoryStore {
    fn sites_matching(&self, category: Category, region: &str) -> Result<Vec<Site>, StoreError> {
        Ok(self
            .sites
            .iter()
            .filter(|site| site.matches(category, region))
            .cloned()
            .collect())
    }

    fn all_sites(&self) -> Result<Vec<Site>, StoreError> {
        Ok(self.sites.clone())
    }
}

impl PlanStore for MemoryStore {
    fn insert_plan(&self, itinerary: &Itinerary) -> Result<(), StoreError> {
        let mut plans = self.plans.write().map_err(|_| StoreError::Poisoned)?;
        if plans.contains_key(&itinerary.id) {
            return Err(StoreError::DuplicatePlan {
                id: itinerary.id.clone(),
            });
        }
        plans.insert(itinerary.id.clone(), itinerary.clone());
        Ok(())
    }

    fn find_plan(&self, id: &PlanId) -> Result<Option<Itinerary>, StoreError> {
        let plans = self.plans.read().map_err(|_| StoreError::Poisoned)?;
        Ok(plans.get(id).cloned())
    }
}
