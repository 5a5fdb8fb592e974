//! Built-in site catalogue.

use pilgrim_core::{Category, Site};

/// The reference pilgrimage sites shipped with the planner.
///
/// # Examples
/// ```
/// use pilgrim_core::Category;
/// use pilgrim_data::reference_sites;
///
/// let sites = reference_sites();
/// assert!(sites.iter().any(|site| site.category == Category::Hinduism));
/// ```
#[must_use]
pub fn reference_sites() -> Vec<Site> {
    vec![
        Site::new(
            "Jaya Sri Maha Bodhi",
            Category::Buddhism,
            "Anuradhapura",
            500.0,
            2.0,
        )
        .with_description("A sacred fig tree believed to be a sapling from the Bodhi tree.")
        .with_image_url("path/to/jaya-sri-maha-bodhi.jpg"),
        Site::new("Jami Ul-Alfar Mosque", Category::Islam, "Colombo", 300.0, 1.0)
            .with_description("A historic mosque known for its red and white color scheme.")
            .with_image_url("path/to/jami-ul-alfar.jpg"),
        Site::new("Nallur Kandaswamy Kovil", Category::Hinduism, "Jaffna", 400.0, 2.0)
            .with_description("A significant Hindu temple dedicated to Lord Murugan.")
            .with_image_url("path/to/nallur-kovil.jpg"),
        Site::new(
            "St. Anthony\u{2019}s Shrine",
            Category::Christianity,
            "Colombo",
            200.0,
            1.0,
        )
        .with_description("A popular Catholic church and pilgrimage site.")
        .with_image_url("path/to/st-anthonys.jpg"),
    ]
}
