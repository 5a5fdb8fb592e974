//! Loading site catalogues and seeding persistent stores.

use std::io::{self, BufReader};

use camino::{Utf8Path, Utf8PathBuf};
use pilgrim_core::{Site, SqliteStore, StoreError};
use thiserror::Error;

use crate::fs::{ensure_parent_dir, open_utf8_file};

/// Errors raised while loading or seeding reference sites.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The site catalogue could not be opened.
    #[error("failed to open site catalogue {path}: {source}")]
    OpenSites {
        /// Location of the catalogue.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The site catalogue is not a JSON array of sites.
    #[error("failed to parse site catalogue {path}: {source}")]
    ParseSites {
        /// Location of the catalogue.
        path: Utf8PathBuf,
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// The database directory could not be created.
    #[error("failed to create directory for {path}: {source}")]
    CreateDirectory {
        /// Database path whose parent was being created.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A site carries a negative or non-finite cost or duration.
    #[error("site '{name}' has a negative or non-finite {field}")]
    InvalidSite {
        /// Name of the offending site.
        name: String,
        /// Field holding the invalid figure.
        field: &'static str,
    },
    /// Writing to the store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Read a JSON array of sites from `path`.
///
/// Entries accept both the field names used by the planner and the legacy
/// `religion`, `costEstimate`, and `travelTime` keys.
///
/// # Errors
///
/// Returns [`SeedError::OpenSites`] when the file cannot be opened,
/// [`SeedError::ParseSites`] when its contents do not decode, and
/// [`SeedError::InvalidSite`] when a cost or duration is negative or not
/// finite.
pub fn load_sites(path: &Utf8Path) -> Result<Vec<Site>, SeedError> {
    let file = open_utf8_file(path).map_err(|source| SeedError::OpenSites {
        path: path.to_path_buf(),
        source,
    })?;
    let sites: Vec<Site> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| SeedError::ParseSites {
            path: path.to_path_buf(),
            source,
        })?;
    check_sites(&sites)?;
    log::debug!("loaded {} sites from {path}", sites.len());
    Ok(sites)
}

/// Replace the site table of the SQLite database at `database` with `sites`.
///
/// Missing parent directories are created. Persisted plans are kept.
///
/// # Errors
///
/// Returns [`SeedError::InvalidSite`] before touching the filesystem when a
/// site has a negative or non-finite figure, [`SeedError::CreateDirectory`]
/// when the database directory cannot be created, and [`SeedError::Store`]
/// when SQLite rejects the write.
pub fn seed_sqlite(database: &Utf8Path, sites: &[Site]) -> Result<usize, SeedError> {
    check_sites(sites)?;
    ensure_parent_dir(database).map_err(|source| SeedError::CreateDirectory {
        path: database.to_path_buf(),
        source,
    })?;
    let store = SqliteStore::open(database.as_std_path())?;
    let written = store.replace_sites(sites)?;
    log::info!("seeded {written} sites into {database}");
    Ok(written)
}

/// Reject sites whose cost or duration is negative, NaN, or infinite.
fn check_sites(sites: &[Site]) -> Result<(), SeedError> {
    for site in sites {
        for (field, value) in [("cost", site.cost), ("duration", site.duration)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SeedError::InvalidSite {
                    name: site.name.clone(),
                    field,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference_sites;
    use pilgrim_core::{Category, SiteStore};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        TempDir::new().expect("tempdir")
    }

    fn utf8(dir: &TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join(name)).expect("utf-8 path")
    }

    #[rstest]
    fn loads_legacy_field_names(temp_dir: TempDir) {
        let path = utf8(&temp_dir, "sites.json");
        std::fs::write(
            &path,
            r#"[{"name":"Kataragama","religion":"Hinduism","region":"Uva",
                 "costEstimate":250,"travelTime":3,"imageUrl":"k.jpg"}]"#,
        )
        .expect("write catalogue");

        let sites = load_sites(&path).expect("load sites");

        assert_eq!(sites.len(), 1);
        let site = &sites[0];
        assert_eq!(site.category, Category::Hinduism);
        assert_eq!(site.cost, 250.0);
        assert_eq!(site.duration, 3.0);
        assert_eq!(site.image_url, "k.jpg");
        assert!(site.description.is_empty());
    }

    #[rstest]
    fn rejects_unknown_categories(temp_dir: TempDir) {
        let path = utf8(&temp_dir, "sites.json");
        std::fs::write(
            &path,
            r#"[{"name":"X","category":"Atheism","region":"R","cost":1,"duration":1}]"#,
        )
        .expect("write catalogue");

        let err = load_sites(&path).expect_err("unknown category");
        assert!(matches!(err, SeedError::ParseSites { .. }));
    }

    #[rstest]
    #[case(r#"[{"name":"X","category":"Islam","region":"R","cost":-1000,"duration":-50}]"#, "cost")]
    #[case(r#"[{"name":"X","category":"Islam","region":"R","cost":10,"duration":-50}]"#, "duration")]
    fn rejects_negative_figures(temp_dir: TempDir, #[case] catalogue: &str, #[case] field: &str) {
        let path = utf8(&temp_dir, "sites.json");
        std::fs::write(&path, catalogue).expect("write catalogue");

        let err = load_sites(&path).expect_err("negative figure");

        match err {
            SeedError::InvalidSite { name, field: found } => {
                assert_eq!(name, "X");
                assert_eq!(found, field);
            }
            other => panic!("expected InvalidSite, found {other:?}"),
        }
    }

    #[rstest]
    #[case(f64::NAN, 1.0)]
    #[case(1.0, f64::INFINITY)]
    #[case(1.0, -0.5)]
    fn seeding_invalid_sites_writes_nothing(
        temp_dir: TempDir,
        #[case] cost: f64,
        #[case] duration: f64,
    ) {
        let database = utf8(&temp_dir, "nested/pilgrim.db");
        let mut sites = reference_sites();
        sites[1].cost = cost;
        sites[1].duration = duration;

        let err = seed_sqlite(&database, &sites).expect_err("invalid site");

        assert!(matches!(err, SeedError::InvalidSite { .. }));
        assert!(!temp_dir.path().join("nested").exists());
    }

    #[rstest]
    fn accepts_free_sites(temp_dir: TempDir) {
        let database = utf8(&temp_dir, "pilgrim.db");
        let mut sites = reference_sites();
        sites[0].cost = 0.0;
        sites[0].duration = 0.0;

        assert_eq!(seed_sqlite(&database, &sites).expect("seed"), sites.len());
    }

    #[rstest]
    fn reports_missing_catalogue(temp_dir: TempDir) {
        let err = load_sites(&utf8(&temp_dir, "absent.json")).expect_err("missing file");
        assert!(matches!(err, SeedError::OpenSites { .. }));
    }

    #[rstest]
    fn seeding_twice_replaces_sites(temp_dir: TempDir) {
        let database = utf8(&temp_dir, "nested/pilgrim.db");
        let sites = reference_sites();

        assert_eq!(seed_sqlite(&database, &sites).expect("first seed"), sites.len());
        assert_eq!(seed_sqlite(&database, &sites[..1]).expect("second seed"), 1);

        let store = SqliteStore::open(database.as_std_path()).expect("reopen");
        let stored = store.all_sites().expect("read sites");
        assert_eq!(stored, sites[..1].to_vec());
    }
}
