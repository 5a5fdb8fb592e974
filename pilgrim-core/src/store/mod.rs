//! Data access traits for reference sites and persisted itineraries.
//!
//! [`SiteStore`] answers candidate lookups by category and region;
//! [`PlanStore`] writes itineraries once and reads them back by id. Both
//! traits are implemented by [`MemoryStore`] and, with the `store-sqlite`
//! feature, by [`SqliteStore`]. Callers pick a backend through
//! configuration; planning logic is shared.

use std::sync::Arc;

use thiserror::Error;

use crate::{Category, Itinerary, PlanId, Site};

mod memory;
#[cfg(feature = "store-sqlite")]
mod sqlite;

pub use memory::MemoryStore;
#[cfg(feature = "store-sqlite")]
pub use sqlite::SqliteStore;

/// Failures raised by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An itinerary with the same id was already written.
    #[error("plan {id} already exists")]
    DuplicatePlan {
        /// Identifier that collided.
        id: PlanId,
    },
    /// A lock guarding store state was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
    /// The backend cannot serve requests.
    #[error("store unavailable: {reason}")]
    Unavailable {
        /// Human-readable cause.
        reason: String,
    },
    /// Encoding an itinerary for storage failed.
    #[error("failed to encode plan {id}: {source}")]
    EncodePlan {
        /// Identifier of the itinerary being written.
        id: PlanId,
        /// JSON encoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// A stored itinerary could not be decoded.
    #[error("failed to decode plan {id}: {source}")]
    DecodePlan {
        /// Identifier of the stored itinerary.
        id: PlanId,
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// A stored site carries a category outside the fixed set.
    #[error("site '{name}' has unknown category '{category}'")]
    InvalidCategory {
        /// Name of the stored site.
        name: String,
        /// Stored category text.
        category: String,
    },
    /// Opening the SQLite database failed.
    #[cfg(feature = "store-sqlite")]
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the database on disk.
        path: std::path::PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Generic SQLite error.
    #[cfg(feature = "store-sqlite")]
    #[error("database error: {source}")]
    Database {
        /// Source error raised by the SQLite driver.
        #[from]
        source: rusqlite::Error,
    },
}

/// Read-only access to candidate sites.
///
/// Results are returned in the store's retrieval order, which the selector
/// preserves. Implementations must be `Send + Sync`.
///
/// # Examples
///
/// ```rust
/// use pilgrim_core::{Category, MemoryStore, Site, SiteStore};
///
/// let store = MemoryStore::with_sites([
///     Site::new("A", Category::Buddhism, "X", 500.0, 2.0),
///     Site::new("B", Category::Islam, "X", 300.0, 1.0),
/// ]);
/// let found = store.sites_matching(Category::Buddhism, "X").expect("lookup succeeds");
/// assert_eq!(found.len(), 1);
/// ```
pub trait SiteStore: Send + Sync {
    /// Return sites with the given category and region.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot be read.
    fn sites_matching(&self, category: Category, region: &str) -> Result<Vec<Site>, StoreError>;

    /// Return every stored site.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot be read.
    fn all_sites(&self) -> Result<Vec<Site>, StoreError>;
}

/// Write-once storage for itineraries.
pub trait PlanStore: Send + Sync {
    /// Persist a new itinerary under its id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicatePlan`] when the id is taken, or a
    /// backend error when the write fails. A failed write leaves no trace.
    fn insert_plan(&self, itinerary: &Itinerary) -> Result<(), StoreError>;

    /// Load an itinerary by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot be read.
    fn find_plan(&self, id: &PlanId) -> Result<Option<Itinerary>, StoreError>;
}

impl<T: SiteStore + ?Sized> SiteStore for Arc<T> {
    fn sites_matching(&self, category: Category, region: &str) -> Result<Vec<Site>, StoreError> {
        (**self).sites_matching(category, region)
    }

    fn all_sites(&self) -> Result<Vec<Site>, StoreError> {
        (**self).all_sites()
    }
}

impl<T: PlanStore + ?Sized> PlanStore for Arc<T> {
    fn insert_plan(&self, itinerary: &Itinerary) -> Result<(), StoreError> {
        (**self).insert_plan(itinerary)
    }

    fn find_plan(&self, id: &PlanId) -> Result<Option<Itinerary>, StoreError> {
        (**self).find_plan(id)
    }
}
