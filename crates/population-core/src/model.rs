// crates/population-core/src/model.rs
use crate::common::DbStats;
use crate::raw::CountryRaw;
use crate::text::normalize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Upper-case country code -> population.
pub type PopulationMap = HashMap<String, u64>;

/// The lookup service.
///
/// Owns one map per code kind. Both are filled once at construction and
/// never mutated afterwards, so a shared `&PopulationDb` can be read from
/// any number of threads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PopulationDb {
    alpha_2: PopulationMap,
    alpha_3: PopulationMap,
}

impl PopulationDb {
    /// Build both maps from raw records in a single pass.
    ///
    /// Codes are normalized before insertion. Duplicate codes are not
    /// rejected: the last record for a given code wins.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CountryRaw>,
    {
        let records = records.into_iter();
        let (lower, _) = records.size_hint();
        let mut alpha_2 = PopulationMap::with_capacity(lower);
        let mut alpha_3 = PopulationMap::with_capacity(lower);

        for country in records {
            insert(&mut alpha_2, &country.alpha_2, country.population);
            insert(&mut alpha_3, &country.alpha_3, country.population);
        }

        debug!(
            alpha_2 = alpha_2.len(),
            alpha_3 = alpha_3.len(),
            "built population maps"
        );

        Self { alpha_2, alpha_3 }
    }

    /// Build a service from ready-made maps. Keys are normalized on the way
    /// in, with the same last-write-wins rule as [`Self::from_records`].
    pub fn from_maps(alpha_2: PopulationMap, alpha_3: PopulationMap) -> Self {
        Self {
            alpha_2: renormalize(alpha_2),
            alpha_3: renormalize(alpha_3),
        }
    }

    pub fn alpha_2_map(&self) -> &PopulationMap {
        &self.alpha_2
    }

    pub fn alpha_3_map(&self) -> &PopulationMap {
        &self.alpha_3
    }

    /// All alpha-2 codes, sorted.
    pub fn alpha_2_codes(&self) -> Vec<&str> {
        sorted_keys(&self.alpha_2)
    }

    /// All alpha-3 codes, sorted.
    pub fn alpha_3_codes(&self) -> Vec<&str> {
        sorted_keys(&self.alpha_3)
    }

    pub fn stats(&self) -> DbStats {
        DbStats {
            alpha_2: self.alpha_2.len(),
            alpha_3: self.alpha_3.len(),
        }
    }
}

fn insert(map: &mut PopulationMap, code: &str, population: u64) {
    let key = normalize(code);
    if let Some(previous) = map.insert(key, population) {
        warn!(code, previous, population, "duplicate country code, keeping last");
    }
}

fn renormalize(map: PopulationMap) -> PopulationMap {
    let mut out = PopulationMap::with_capacity(map.len());
    for (code, population) in map {
        insert(&mut out, &code, population);
    }
    out
}

fn sorted_keys(map: &PopulationMap) -> Vec<&str> {
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(a2: &str, a3: &str, population: u64) -> CountryRaw {
        CountryRaw {
            alpha_2: a2.to_string(),
            alpha_3: a3.to_string(),
            population,
        }
    }

    #[test]
    fn builds_upper_case_maps() {
        let records = vec![rec("de", "deu", 83_000_000), rec("Ch", "cHe", 8_500_000)];
        let db = PopulationDb::from_records(&records);

        assert_eq!(db.alpha_2_map().get("DE"), Some(&83_000_000));
        assert_eq!(db.alpha_3_map().get("CHE"), Some(&8_500_000));
        assert!(db.alpha_2_map().keys().all(|k| k.len() == 2 && *k == k.to_uppercase()));
        assert!(db.alpha_3_map().keys().all(|k| k.len() == 3 && *k == k.to_uppercase()));
    }

    #[test]
    fn last_duplicate_wins() {
        let records = vec![rec("AA", "AAA", 1), rec("aa", "BBB", 2)];
        let db = PopulationDb::from_records(&records);

        assert_eq!(db.alpha_2_map().get("AA"), Some(&2));
        assert_eq!(db.alpha_3_map().get("AAA"), Some(&1));
        assert_eq!(db.alpha_3_map().get("BBB"), Some(&2));
        assert_eq!(db.stats(), DbStats { alpha_2: 1, alpha_3: 2 });
    }

    #[test]
    fn construction_is_deterministic() {
        let records = vec![rec("DE", "DEU", 3), rec("FR", "FRA", 2), rec("IT", "ITA", 1)];
        let a = PopulationDb::from_records(&records);
        let b = PopulationDb::from_records(&records);
        assert_eq!(a, b);
        assert_eq!(a.alpha_2_codes(), vec!["DE", "FR", "IT"]);
        assert_eq!(a.alpha_3_codes(), vec!["DEU", "FRA", "ITA"]);
    }

    #[test]
    fn empty_input_builds_empty_maps() {
        let db = PopulationDb::from_records(&Vec::<CountryRaw>::new());
        assert_eq!(db.stats(), DbStats { alpha_2: 0, alpha_3: 0 });
    }

    #[test]
    fn from_maps_normalizes_keys() {
        let db = PopulationDb::from_maps(
            PopulationMap::from([("aa".to_string(), 1)]),
            PopulationMap::from([("bbB".to_string(), 2)]),
        );
        assert_eq!(db.alpha_2_codes(), vec!["AA"]);
        assert_eq!(db.alpha_3_codes(), vec!["BBB"]);
    }
}
