//! Property-based tests for `GreedySelector`.
//!
//! # Invariants tested
//!
//! - **Budget compliance:** totals never exceed either limit.
//! - **Subsequence:** selected sites keep candidate order without repeats.
//! - **Totals:** reported totals equal the sums over selected sites.
//! - **Determinism:** repeated runs produce identical selections.
//! - **First fit:** every skipped candidate would have broken a limit at the
//!   moment it was considered.

use pilgrim_core::{Budget, Category, GreedySelector, Selection, Selector, Site};
use proptest::prelude::*;

fn candidates_strategy() -> impl Strategy<Value = Vec<Site>> {
    prop::collection::vec((0_u32..=800, 0_u32..=30), 0..12).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(index, (cost, hours))| {
                Site::new(
                    format!("site-{index}"),
                    Category::Buddhism,
                    "X",
                    f64::from(cost),
                    f64::from(hours),
                )
            })
            .collect()
    })
}

fn budget_strategy() -> impl Strategy<Value = Budget> {
    (1_u32..=2_000, 1_u32..=5).prop_map(|(cost, days)| Budget::from_days(f64::from(cost), f64::from(days)))
}

fn selected_indices(candidates: &[Site], selection: &Selection) -> Vec<usize> {
    selection
        .sites
        .iter()
        .map(|chosen| {
            candidates
                .iter()
                .position(|candidate| candidate.name == chosen.name)
                .expect("selected site comes from the candidates")
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn totals_stay_within_budget(candidates in candidates_strategy(), budget in budget_strategy()) {
        let selection = GreedySelector.select(&candidates, budget);
        prop_assert!(selection.total_cost <= budget.cost);
        prop_assert!(selection.total_duration <= budget.hours);
    }

    #[test]
    fn selection_is_an_ordered_subsequence(
        candidates in candidates_strategy(),
        budget in budget_strategy(),
    ) {
        let selection = GreedySelector.select(&candidates, budget);
        let indices = selected_indices(&candidates, &selection);
        prop_assert!(
            indices.windows(2).all(|pair| pair[0] < pair[1]),
            "indices {:?} are not strictly increasing",
            indices
        );
    }

    #[test]
    fn totals_match_selected_sites(candidates in candidates_strategy(), budget in budget_strategy()) {
        let selection = GreedySelector.select(&candidates, budget);
        let cost: f64 = selection.sites.iter().map(|site| site.cost).sum();
        let hours: f64 = selection.sites.iter().map(|site| site.duration).sum();
        prop_assert_eq!(selection.total_cost, cost);
        prop_assert_eq!(selection.total_duration, hours);
    }

    #[test]
    fn selection_is_deterministic(candidates in candidates_strategy(), budget in budget_strategy()) {
        let first = GreedySelector.select(&candidates, budget);
        let second = GreedySelector.select(&candidates, budget);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn skipped_candidates_did_not_fit(candidates in candidates_strategy(), budget in budget_strategy()) {
        let selection = GreedySelector.select(&candidates, budget);
        let chosen = selected_indices(&candidates, &selection);
        let (mut cost, mut hours) = (0.0_f64, 0.0_f64);
        for (index, candidate) in candidates.iter().enumerate() {
            let fits = cost + candidate.cost <= budget.cost && hours + candidate.duration <= budget.hours;
            prop_assert_eq!(fits, chosen.contains(&index), "candidate {} misclassified", index);
            if fits {
                cost += candidate.cost;
                hours += candidate.duration;
            }
        }
    }
}
