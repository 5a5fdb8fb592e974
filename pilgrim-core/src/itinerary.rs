//! Itineraries produced by a planning request.
//!
//! An itinerary is written once and only ever read back afterwards.

use serde::{Deserialize, Serialize};

use crate::{PlanId, SiteSummary};

/// Message attached to an itinerary when no site fits the budgets.
pub const NO_VIABLE_PLAN_NOTE: &str = "No viable trip plan found within the given constraints.";

/// An ordered, budget-feasible selection of sites.
///
/// # Examples
/// ```
/// use pilgrim_core::{Itinerary, PlanId, NO_VIABLE_PLAN_NOTE};
///
/// let itinerary = Itinerary::empty(PlanId::from("plan-1"));
/// assert!(itinerary.sites.is_empty());
/// assert_eq!(itinerary.note.as_deref(), Some(NO_VIABLE_PLAN_NOTE));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    /// Identifier the itinerary is stored under.
    pub id: PlanId,
    /// Selected sites in candidate order.
    pub sites: Vec<SiteSummary>,
    /// Sum of the selected sites' costs.
    pub total_cost: f64,
    /// Sum of the selected sites' durations in hours.
    pub total_duration: f64,
    /// Present only when nothing could be selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Itinerary {
    /// An itinerary with no sites, zero totals, and the explanatory note.
    #[must_use]
    pub fn empty(id: PlanId) -> Self {
        Self {
            id,
            sites: Vec::new(),
            total_cost: 0.0,
            total_duration: 0.0,
            note: Some(NO_VIABLE_PLAN_NOTE.to_owned()),
        }
    }

    /// Whether the itinerary contains no sites.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
