//! Planning requests and their validation.
//!
//! [`PlanRequest`] mirrors the wire payload, so every field is optional and
//! absence is reported by [`PlanRequest::validate`] rather than by the
//! decoder. A [`ValidPlanRequest`] upholds the selector's preconditions:
//! a known category, a non-empty region, and strictly positive budgets.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Category;

const FIELD_BUDGET: &str = "budget";
const FIELD_DAYS: &str = "days";
const FIELD_REGION: &str = "region";

/// Hours in one trip day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Parameters supplied by a traveller.
///
/// # Examples
/// ```
/// use pilgrim_core::{Category, PlanRequest};
///
/// let request = PlanRequest::new("Buddhism", 600.0, 1.0, "Anuradhapura");
/// let valid = request.validate().expect("request is valid");
/// assert_eq!(valid.category, Category::Buddhism);
/// assert_eq!(valid.budget.hours, 24.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Requested category name.
    #[serde(default)]
    pub religion: Option<String>,
    /// Spending limit in currency units.
    #[serde(default)]
    pub budget: Option<f64>,
    /// Trip length in days.
    #[serde(default)]
    pub days: Option<f64>,
    /// Region to visit.
    #[serde(default)]
    pub region: Option<String>,
}

/// Resource limits handed to a selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Budget {
    /// Maximum cumulative cost.
    pub cost: f64,
    /// Maximum cumulative duration in hours.
    pub hours: f64,
}

impl Budget {
    /// Derive the time budget from a trip length in days.
    ///
    /// # Examples
    /// ```
    /// use pilgrim_core::Budget;
    ///
    /// assert_eq!(Budget::from_days(350.0, 2.0).hours, 48.0);
    /// ```
    #[must_use]
    pub const fn from_days(cost: f64, days: f64) -> Self {
        Self {
            cost,
            hours: days * HOURS_PER_DAY,
        }
    }
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidPlanRequest {
    /// Category to filter candidate sites by.
    pub category: Category,
    /// Region to filter candidate sites by.
    pub region: String,
    /// Cost and time limits.
    pub budget: Budget,
}

/// Reasons a [`PlanRequest`] is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanRequestError {
    /// The religion is absent or outside the fixed category set.
    #[error("invalid religion specified: '{religion}'")]
    InvalidReligion {
        /// The rejected value, empty when absent.
        religion: String,
    },
    /// A required field is absent, zero, or empty.
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A numeric field is negative or not finite.
    #[error("{field} must be a positive number")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
    },
}

impl PlanRequest {
    /// Build a fully populated request.
    #[must_use]
    pub fn new(religion: &str, budget: f64, days: f64, region: &str) -> Self {
        Self {
            religion: Some(religion.to_owned()),
            budget: Some(budget),
            days: Some(days),
            region: Some(region.to_owned()),
        }
    }

    /// Check the request and resolve its category and budgets.
    ///
    /// The religion is checked first, then `budget`, `days`, and `region`
    /// in that order.
    ///
    /// # Errors
    ///
    /// Returns [`PlanRequestError`] describing the first failed check.
    pub fn validate(&self) -> Result<ValidPlanRequest, PlanRequestError> {
        let raw_religion = self.religion.as_deref().unwrap_or_default();
        let category = raw_religion
            .parse::<Category>()
            .map_err(|_| PlanRequestError::InvalidReligion {
                religion: raw_religion.to_owned(),
            })?;
        let cost = require_positive(self.budget, FIELD_BUDGET)?;
        let days = require_positive(self.days, FIELD_DAYS)?;
        let region = match self.region.as_deref() {
            Some(region) if !region.is_empty() => region.to_owned(),
            _ => return Err(PlanRequestError::MissingField { field: FIELD_REGION }),
        };
        Ok(ValidPlanRequest {
            category,
            region,
            budget: Budget::from_days(cost, days),
        })
    }
}

const fn require_positive(
    value: Option<f64>,
    field: &'static str,
) -> Result<f64, PlanRequestError> {
    match value {
        None => Err(PlanRequestError::MissingField { field }),
        Some(v) if v == 0.0 || v.is_nan() => Err(PlanRequestError::MissingField { field }),
        Some(v) if v < 0.0 || v.is_infinite() => Err(PlanRequestError::NonPositive { field }),
        Some(v) => Ok(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn resolves_time_budget_from_days() {
        let valid = PlanRequest::new("Hinduism", 1000.0, 2.5, "Jaffna")
            .validate()
            .expect("valid request");
        assert_eq!(valid.budget, Budget { cost: 1000.0, hours: 60.0 });
        assert_eq!(valid.region, "Jaffna");
    }

    #[rstest]
    #[case(Some("Atheism"), "Atheism")]
    #[case(Some("islam"), "islam")]
    #[case(None, "")]
    fn rejects_unknown_religion(#[case] religion: Option<&str>, #[case] reported: &str) {
        let request = PlanRequest {
            religion: religion.map(str::to_owned),
            ..PlanRequest::new("Islam", 100.0, 1.0, "Colombo")
        };
        assert_eq!(
            request.validate(),
            Err(PlanRequestError::InvalidReligion {
                religion: reported.to_owned()
            })
        );
    }

    #[rstest]
    fn religion_is_checked_before_missing_fields() {
        let request = PlanRequest {
            religion: Some("Atheism".into()),
            ..PlanRequest::default()
        };
        assert!(matches!(
            request.validate(),
            Err(PlanRequestError::InvalidReligion { .. })
        ));
    }

    #[rstest]
    #[case(None, Some(1.0), Some("X"), "budget")]
    #[case(Some(0.0), Some(1.0), Some("X"), "budget")]
    #[case(Some(100.0), None, Some("X"), "days")]
    #[case(Some(100.0), Some(0.0), Some("X"), "days")]
    #[case(Some(100.0), Some(1.0), None, "region")]
    #[case(Some(100.0), Some(1.0), Some(""), "region")]
    fn reports_missing_fields(
        #[case] budget: Option<f64>,
        #[case] days: Option<f64>,
        #[case] region: Option<&str>,
        #[case] expected: &'static str,
    ) {
        let request = PlanRequest {
            religion: Some("Buddhism".into()),
            budget,
            days,
            region: region.map(str::to_owned),
        };
        assert_eq!(
            request.validate(),
            Err(PlanRequestError::MissingField { field: expected })
        );
    }

    #[rstest]
    #[case(-5.0, 1.0, "budget")]
    #[case(100.0, -1.0, "days")]
    #[case(f64::INFINITY, 1.0, "budget")]
    fn rejects_negative_or_infinite_numbers(
        #[case] budget: f64,
        #[case] days: f64,
        #[case] expected: &'static str,
    ) {
        let request = PlanRequest::new("Buddhism", budget, days, "X");
        assert_eq!(
            request.validate(),
            Err(PlanRequestError::NonPositive { field: expected })
        );
    }

    #[rstest]
    fn decodes_partial_payloads() {
        let request: PlanRequest =
            serde_json::from_str(r#"{"religion":"Islam","budget":300}"#).expect("decodes");
        assert_eq!(request.days, None);
        assert_eq!(request.budget, Some(300.0));
    }
}
