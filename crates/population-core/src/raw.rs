// crates/population-core/src/raw.rs
use serde::{Deserialize, Serialize};

/// Raw country record as it comes from the dataset JSON:
/// `{ "Alpha_2": "DE", "Alpha_3": "DEU", "Population": 83132799 }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRaw {
    #[serde(rename = "Alpha_2")]
    pub alpha_2: String,
    #[serde(rename = "Alpha_3")]
    pub alpha_3: String,
    #[serde(rename = "Population")]
    pub population: u64,
}

pub type CountriesRaw = Vec<CountryRaw>;
