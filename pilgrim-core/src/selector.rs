//! Budget-constrained site selection.
//!
//! A [`Selector`] turns an ordered candidate list into a [`Selection`] whose
//! cumulative cost and duration stay within a [`Budget`]. Candidates must
//! already be filtered by category and region; selectors only apply the
//! resource limits.

use crate::{Budget, Itinerary, PlanId, Site, SiteSummary};

/// The outcome of a selection pass, prior to being assigned an identifier.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    /// Accepted sites in candidate order.
    pub sites: Vec<SiteSummary>,
    /// Sum of accepted costs.
    pub total_cost: f64,
    /// Sum of accepted durations in hours.
    pub total_duration: f64,
}

impl Selection {
    /// Whether no candidate was accepted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Attach an identifier, producing the itinerary to persist.
    ///
    /// An empty selection yields [`Itinerary::empty`], which carries zero
    /// totals and the explanatory note.
    ///
    /// # Examples
    /// ```
    /// use pilgrim_core::{PlanId, Selection};
    ///
    /// let itinerary = Selection::default().into_itinerary(PlanId::from("p"));
    /// assert!(itinerary.note.is_some());
    /// assert_eq!(itinerary.total_cost, 0.0);
    /// ```
    #[must_use]
    pub fn into_itinerary(self, id: PlanId) -> Itinerary {
        if self.is_empty() {
            return Itinerary::empty(id);
        }
        Itinerary {
            id,
            sites: self.sites,
            total_cost: self.total_cost,
            total_duration: self.total_duration,
            note: None,
        }
    }
}

/// Choose a feasible subsequence of candidate sites.
///
/// Implementations must be pure: identical inputs yield identical
/// selections. Selectors are `Send + Sync` so a single instance can serve
/// concurrent requests.
pub trait Selector: Send + Sync {
    /// Select from `candidates` without exceeding either limit in `budget`.
    fn select(&self, candidates: &[Site], budget: Budget) -> Selection;
}

/// First-fit greedy selection in candidate order.
///
/// Each candidate is accepted when adding it keeps both running totals at or
/// below their limits; otherwise it is skipped for good. Skipped candidates
/// are never revisited, so the result can leave budget unused where another
/// subset would not.
///
/// # Examples
/// ```
/// use pilgrim_core::{Budget, Category, GreedySelector, Selector, Site};
///
/// let candidates = [
///     Site::new("A", Category::Buddhism, "X", 500.0, 2.0),
///     Site::new("B", Category::Buddhism, "X", 300.0, 1.0),
/// ];
/// let selection = GreedySelector.select(&candidates, Budget { cost: 600.0, hours: 24.0 });
/// assert_eq!(selection.sites.len(), 1);
/// assert_eq!(selection.total_cost, 500.0);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedySelector;

impl Selector for GreedySelector {
    fn select(&self, candidates: &[Site], budget: Budget) -> Selection {
        let mut selection = Selection::default();
        for site in candidates {
            let cost = selection.total_cost + site.cost;
            let duration = selection.total_duration + site.duration;
            if cost <= budget.cost && duration <= budget.hours {
                selection.sites.push(SiteSummary::from(site));
                selection.total_cost = cost;
                selection.total_duration = duration;
            }
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;
    use rstest::{fixture, rstest};

    fn site(name: &str, cost: f64, duration: f64) -> Site {
        Site::new(name, Category::Buddhism, "X", cost, duration)
    }

    fn names(selection: &Selection) -> Vec<&str> {
        selection.sites.iter().map(|s| s.name.as_str()).collect()
    }

    #[fixture]
    fn day() -> Budget {
        Budget { cost: 600.0, hours: 24.0 }
    }

    #[rstest]
    fn skips_candidates_that_overflow_cost(day: Budget) {
        let selection = GreedySelector.select(&[site("A", 500.0, 2.0), site("B", 300.0, 1.0)], day);
        assert_eq!(names(&selection), ["A"]);
        assert_eq!(selection.total_cost, 500.0);
        assert_eq!(selection.total_duration, 2.0);
    }

    #[rstest]
    fn budget_boundary_is_inclusive() {
        let candidates = [site("A", 300.0, 5.0), site("B", 50.0, 1.0), site("C", 50.0, 1.0)];
        let selection = GreedySelector.select(&candidates, Budget { cost: 350.0, hours: 24.0 });
        assert_eq!(names(&selection), ["A", "B"]);
        assert_eq!(selection.total_cost, 350.0);
        assert_eq!(selection.total_duration, 6.0);
    }

    #[rstest]
    fn time_boundary_is_inclusive() {
        let candidates = [site("A", 1.0, 20.0), site("B", 1.0, 4.0), site("C", 1.0, 0.5)];
        let selection = GreedySelector.select(&candidates, Budget { cost: 100.0, hours: 24.0 });
        assert_eq!(names(&selection), ["A", "B"]);
        assert_eq!(selection.total_duration, 24.0);
    }

    #[rstest]
    fn later_cheaper_candidates_still_fit_after_a_skip(day: Budget) {
        let candidates = [site("A", 400.0, 1.0), site("B", 300.0, 1.0), site("C", 200.0, 1.0)];
        let selection = GreedySelector.select(&candidates, day);
        assert_eq!(names(&selection), ["A", "C"]);
    }

    #[rstest]
    fn greedy_order_can_leave_budget_unused() {
        // B + C would use the whole budget; the first-fit pass takes A instead.
        let candidates = [site("A", 60.0, 1.0), site("B", 50.0, 1.0), site("C", 50.0, 1.0)];
        let selection = GreedySelector.select(&candidates, Budget { cost: 100.0, hours: 24.0 });
        assert_eq!(names(&selection), ["A"]);
        assert_eq!(selection.total_cost, 60.0);
    }

    #[rstest]
    #[case(site("Expensive", 601.0, 1.0))]
    #[case(site("Long", 1.0, 25.0))]
    fn individually_infeasible_candidates_yield_empty(day: Budget, #[case] candidate: Site) {
        let selection = GreedySelector.select(&[candidate], day);
        assert!(selection.is_empty());
        let itinerary = selection.into_itinerary(PlanId::from("plan-1"));
        assert_eq!(itinerary.total_cost, 0.0);
        assert_eq!(itinerary.total_duration, 0.0);
        assert!(itinerary.note.is_some());
    }

    #[rstest]
    fn no_candidates_yield_empty(day: Budget) {
        assert!(GreedySelector.select(&[], day).is_empty());
    }

    #[rstest]
    fn zero_cost_sites_are_always_admitted(day: Budget) {
        let candidates = [site("Free", 0.0, 0.0), site("A", 600.0, 24.0), site("Free2", 0.0, 0.0)];
        let selection = GreedySelector.select(&candidates, day);
        assert_eq!(names(&selection), ["Free", "A", "Free2"]);
    }

    #[rstest]
    fn non_empty_selection_has_no_note(day: Budget) {
        let itinerary = GreedySelector
            .select(&[site("A", 1.0, 1.0)], day)
            .into_itinerary(PlanId::from("plan-1"));
        assert!(itinerary.note.is_none());
        assert_eq!(itinerary.id, PlanId::from("plan-1"));
    }
}
