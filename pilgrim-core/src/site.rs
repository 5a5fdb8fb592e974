//! Candidate pilgrimage sites.
//!
//! A [`Site`] is long-lived reference data. The field names accepted on input
//! include the seed format's `religion`, `costEstimate`, and `travelTime`
//! spellings so existing datasets load unchanged.

use serde::{Deserialize, Serialize};

use crate::Category;

/// A visitable location with a monetary cost and a time cost in hours.
///
/// # Examples
/// ```
/// use pilgrim_core::{Category, Site};
///
/// let site = Site::new("Jaya Sri Maha Bodhi", Category::Buddhism, "Anuradhapura", 500.0, 2.0);
/// assert_eq!(site.region, "Anuradhapura");
/// assert!(site.description.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    /// Human-readable name; not guaranteed unique.
    pub name: String,
    /// Belief-system tag used for filtering.
    #[serde(alias = "religion")]
    pub category: Category,
    /// Region identifier used for filtering.
    pub region: String,
    /// Cost in currency units.
    #[serde(alias = "costEstimate")]
    pub cost: f64,
    /// Time cost in hours.
    #[serde(alias = "travelTime")]
    pub duration: f64,
    /// Free-form display text.
    #[serde(default)]
    pub description: String,
    /// Display image location.
    #[serde(default)]
    pub image_url: String,
}

impl Site {
    /// Construct a site with empty display strings.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: Category,
        region: impl Into<String>,
        cost: f64,
        duration: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            region: region.into(),
            cost,
            duration,
            description: String::new(),
            image_url: String::new(),
        }
    }

    /// Attach display text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach an image location.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Whether the site carries the requested category and region.
    #[must_use]
    pub fn matches(&self, category: Category, region: &str) -> bool {
        self.category == category && self.region == region
    }
}

/// The display subset of a [`Site`] recorded in an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSummary {
    /// Site name.
    pub name: String,
    /// Belief-system tag.
    pub category: Category,
    /// Cost in currency units.
    pub cost: f64,
    /// Time cost in hours.
    pub duration: f64,
    /// Display text.
    pub description: String,
    /// Display image location.
    pub image_url: String,
}

impl From<&Site> for SiteSummary {
    fn from(site: &Site) -> Self {
        Self {
            name: site.name.clone(),
            category: site.category,
            cost: site.cost,
            duration: site.duration,
            description: site.description.clone(),
            image_url: site.image_url.clone(),
        }
    }
}
