// crates/population-core/src/loader/mod.rs

//! # Data Loader
//!
//! Parses the bundled dataset once per process and keeps both the raw
//! records and the derived [`PopulationDb`] for the rest of its lifetime.
//! There is no eviction and no re-load path.

use crate::error::Result;
use crate::model::PopulationDb;
use crate::raw::{CountriesRaw, CountryRaw};
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

#[cfg(feature = "json")]
use std::path::Path;

#[cfg(feature = "json")]
mod common_io;

/// The dataset shipped with the crate, embedded at compile time.
static BUNDLED_JSON: &str = include_str!("../../data/countries.json");

// Single in-process caches so we only deserialize and build once.
static RECORDS_CACHE: OnceCell<CountriesRaw> = OnceCell::new();
static DB_CACHE: OnceCell<PopulationDb> = OnceCell::new();

/// Directory holding the bundled dataset inside the crate sources.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn default_dataset_filename() -> &'static str {
    "countries.json"
}

/// Raw JSON text of the bundled dataset.
pub fn bundled_json() -> &'static str {
    BUNDLED_JSON
}

/// Load the bundled records.
///
/// The first call parses the embedded JSON; every later call returns the
/// same slice. A parse failure is returned to the caller and means no
/// lookups can be served.
pub fn load() -> Result<&'static [CountryRaw]> {
    RECORDS_CACHE
        .get_or_try_init(|| parse_records(BUNDLED_JSON.as_bytes()))
        .map(Vec::as_slice)
}

/// Parse a dataset in the `[{ "Alpha_2", "Alpha_3", "Population" }, ...]` layout.
pub fn parse_records<R: Read>(reader: R) -> Result<CountriesRaw> {
    let records: CountriesRaw = serde_json::from_reader(reader)?;
    debug!(records = records.len(), "parsed population dataset");
    Ok(records)
}

impl PopulationDb {
    /// The process-wide instance built from the bundled dataset.
    ///
    /// Built on first use; the maps are never rebuilt afterwards.
    pub fn load() -> Result<&'static Self> {
        DB_CACHE.get_or_try_init(|| load().map(Self::from_records))
    }

    /// Build a fresh instance from a dataset file on disk.
    ///
    /// Unlike [`PopulationDb::load`] the result is not cached. Files ending
    /// in `.gz` need the `compact` feature.
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading population dataset from file");
        let reader = common_io::open_stream(path)?;
        let records = parse_records(reader)?;
        Ok(Self::from_records(&records))
    }
}
