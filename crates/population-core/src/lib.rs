// crates/population-core/src/lib.rs

//! Population lookup for ISO 3166 alpha-2 and alpha-3 country codes.
//!
//! The bundled dataset is parsed once per process. Lookups are
//! case-insensitive and return `None` for unknown codes.
//!
//! ```rust
//! use population_core::{get_population, get_population_a2, get_population_a3};
//!
//! assert_eq!(get_population_a2("de"), get_population_a3("DEU"));
//! assert_eq!(get_population("deu"), get_population_a2("DE"));
//! assert_eq!(get_population_a2("deu"), None);
//! ```
//!
//! Consumers that prefer an explicit handle can hold a
//! [`PopulationDb`] and use the [`PopulationSearch`] trait:
//!
//! ```rust
//! use population_core::{PopulationDb, PopulationSearch};
//!
//! let db = PopulationDb::load()?;
//! assert!(db.get_population("US").is_some());
//! # Ok::<(), population_core::PopulationError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod search;
pub mod text;
// Shared raw input
#[doc(hidden)]
pub mod raw;

pub use crate::common::DbStats;
pub use crate::error::{PopulationError, Result};
pub use crate::model::{PopulationDb, PopulationMap};
pub use crate::raw::CountryRaw;
pub use crate::search::PopulationSearch;
pub use crate::text::normalize;

/// The process-wide instance backing the free functions.
///
/// # Panics
///
/// Panics if the bundled dataset cannot be parsed. The dataset is compiled
/// into the crate, so this only happens with a corrupt build, and no lookup
/// could be served anyway.
fn bundled() -> &'static PopulationDb {
    match PopulationDb::load() {
        Ok(db) => db,
        Err(e) => panic!("bundled population dataset is unusable: {e}"),
    }
}

/// Population for an alpha-2 or alpha-3 code, case-insensitive.
///
/// See [`PopulationSearch::get_population`] for the fallback order.
pub fn get_population(code: &str) -> Option<u64> {
    bundled().get_population(code)
}

/// Population for an alpha-2 code, case-insensitive.
pub fn get_population_a2(code: &str) -> Option<u64> {
    bundled().get_population_a2(code)
}

/// Population for an alpha-3 code, case-insensitive.
pub fn get_population_a3(code: &str) -> Option<u64> {
    bundled().get_population_a3(code)
}

pub mod prelude {
    pub use crate::error::{PopulationError, Result};
    pub use crate::search::PopulationSearch;
    pub use crate::{get_population, get_population_a2, get_population_a3};
    pub use crate::{DbStats, PopulationDb, PopulationMap};
}
