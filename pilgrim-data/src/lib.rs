//! Reference data for the pilgrimage planner.
//!
//! Provides the built-in site catalogue, loading of site catalogues from JSON
//! files, and seeding of a SQLite store.
#![forbid(unsafe_code)]

pub mod fs;
mod reference;
mod seed;

pub use reference::reference_sites;
pub use seed::{SeedError, load_sites, seed_sqlite};
