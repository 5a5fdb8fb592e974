//! SQLite-backed document store for sites and plans.

use std::{
    fmt,
    path::Path,
    sync::{Mutex, MutexGuard},
};

use rusqlite::{Connection, ErrorCode, OptionalExtension, params};

use super::{PlanStore, SiteStore, StoreError};
use crate::{Category, Itinerary, PlanId, Site};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS sites (
        position INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        category TEXT NOT NULL,
        region TEXT NOT NULL,
        cost REAL NOT NULL,
        duration REAL NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        image_url TEXT NOT NULL DEFAULT ''
    );
    CREATE INDEX IF NOT EXISTS sites_by_category_region ON sites (category, region);
    CREATE TABLE IF NOT EXISTS plans (
        id TEXT PRIMARY KEY,
        body TEXT NOT NULL
    );
";

const SELECT_SITES: &str = "SELECT name, category, region, cost, duration, description, image_url \
     FROM sites";

/// Sites and plans persisted in one SQLite database.
///
/// Sites are returned in insertion order. Plans are stored as JSON documents
/// keyed by id; a second write to the same id is rejected.
pub struct SqliteStore {
    connection: Mutex<Connection>,
}

impl fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteStore").finish_non_exhaustive()
    }
}

/// Raw site columns before the category is validated.
struct SiteRow {
    name: String,
    category: String,
    region: String,
    cost: f64,
    duration: f64,
    description: String,
    image_url: String,
}

impl TryFrom<SiteRow> for Site {
    type Error = StoreError;

    fn try_from(row: SiteRow) -> Result<Self, Self::Error> {
        let category = row
            .category
            .parse::<Category>()
            .map_err(|_| StoreError::InvalidCategory {
                name: row.name.clone(),
                category: row.category.clone(),
            })?;
        Ok(Self {
            name: row.name,
            category,
            region: row.region,
            cost: row.cost,
            duration: row.duration,
            description: row.description,
            image_url: row.image_url,
        })
    }
}

impl SqliteStore {
    /// Open (creating if needed) the database at `path` and ensure the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::OpenDatabase`] when the file cannot be opened and
    /// [`StoreError::Database`] when the schema cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let connection = Connection::open(path).map_err(|source| StoreError::OpenDatabase {
            path: path.to_path_buf(),
            source,
        })?;
        Self::with_connection(connection)
    }

    /// Open a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] when SQLite cannot initialise.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(connection: Connection) -> Result<Self, StoreError> {
        connection.execute_batch(SCHEMA)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.connection.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Replace all reference sites in a single transaction.
    ///
    /// Returns the number of sites written. Plans are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] when any statement fails; the
    /// previous site table is then kept intact.
    pub fn replace_sites(&self, sites: &[Site]) -> Result<usize, StoreError> {
        let mut connection = self.lock()?;
        let transaction = connection.transaction()?;
        transaction.execute("DELETE FROM sites", [])?;
        {
            let mut insert = transaction.prepare(
                "INSERT INTO sites (name, category, region, cost, duration, description, image_url) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for site in sites {
                insert.execute(params![
                    site.name,
                    site.category.as_str(),
                    site.region,
                    site.cost,
                    site.duration,
                    site.description,
                    site.image_url,
                ])?;
            }
        }
        transaction.commit()?;
        log::debug!("replaced reference data with {} sites", sites.len());
        Ok(sites.len())
    }

    fn query_sites(
        connection: &Connection,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<Site>, StoreError> {
        let mut statement = connection.prepare(sql)?;
        let rows = statement.query_map(params, |row| {
            Ok(SiteRow {
                name: row.get(0)?,
                category: row.get(1)?,
                region: row.get(2)?,
                cost: row.get(3)?,
                duration: row.get(4)?,
                description: row.get(5)?,
                image_url: row.get(6)?,
            })
        })?;
        rows.map(|row| Site::try_from(row?)).collect()
    }
}

impl SiteStore for SqliteStore {
    fn sites_matching(&self, category: Category, region: &str) -> Result<Vec<Site>, StoreError> {
        let connection = self.lock()?;
        let sql = format!("{SELECT_SITES} WHERE category = ?1 AND region = ?2 ORDER BY position");
        Self::query_sites(&connection, &sql, params![category.as_str(), region])
    }

    fn all_sites(&self) -> Result<Vec<Site>, StoreError> {
        let connection = self.lock()?;
        let sql = format!("{SELECT_SITES} ORDER BY position");
        Self::query_sites(&connection, &sql, params![])
    }
}

impl PlanStore for SqliteStore {
    fn insert_plan(&self, itinerary: &Itinerary) -> Result<(), StoreError> {
        let body = serde_json::to_string(itinerary).map_err(|source| StoreError::EncodePlan {
            id: itinerary.id.clone(),
            source,
        })?;
        let connection = self.lock()?;
        match connection.execute(
            "INSERT INTO plans (id, body) VALUES (?1, ?2)",
            params![itinerary.id.as_str(), body],
        ) {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(failure, _))
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                Err(StoreError::DuplicatePlan {
                    id: itinerary.id.clone(),
                })
            }
            Err(source) => Err(source.into()),
        }
    }

    fn find_plan(&self, id: &PlanId) -> Result<Option<Itinerary>, StoreError> {
        let connection = self.lock()?;
        let body: Option<String> = connection
            .query_row(
                "SELECT body FROM plans WHERE id = ?1",
                params![id.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        body.map(|body| {
            serde_json::from_str(&body).map_err(|source| StoreError::DecodePlan {
                id: id.clone(),
                source,
            })
        })
        .transpose()
    }
}
