// crates/population-core/src/search.rs

use crate::model::PopulationDb;
use crate::text::normalize;

/// The lookup operations available on a population source.
///
/// Implementors provide the per-map lookups; [`PopulationSearch::get_population`]
/// combines them. All lookups are case-insensitive and report a miss as
/// `None`, never as an error.
pub trait PopulationSearch {
    /// Population for an alpha-2 code such as `"de"`.
    fn get_population_a2(&self, code: &str) -> Option<u64>;

    /// Population for an alpha-3 code such as `"DEU"`.
    fn get_population_a3(&self, code: &str) -> Option<u64>;

    /// Population for either an alpha-2 or an alpha-3 code.
    ///
    /// The alpha-2 map is asked first and the alpha-3 map only on a miss.
    /// A stored population of `0` counts as a hit: `Some(0)` is returned and
    /// the alpha-3 map is not consulted.
    fn get_population(&self, code: &str) -> Option<u64> {
        self.get_population_a2(code)
            .or_else(|| self.get_population_a3(code))
    }
}

impl PopulationSearch for PopulationDb {
    fn get_population_a2(&self, code: &str) -> Option<u64> {
        self.alpha_2_map().get(&normalize(code)).copied()
    }

    fn get_population_a3(&self, code: &str) -> Option<u64> {
        self.alpha_3_map().get(&normalize(code)).copied()
    }
}
