use std::collections::HashMap;

use serde::Deserialize;
use tracing::warn;

use crate::engine::country::Country;
use crate::manager::managererror::ManagerError;

const BUNDLED_COUNTRY_REFERENCE: &str = include_str!("../../data/countries.json");

#[derive(Deserialize)]
struct CountryReferenceJsonProp {
    alpha_2: String,
    name: String
}

/// ISO 3166-1 reference data: alpha-2 code to display name.
pub struct CountryReference {
    names: HashMap<String, String>
}

impl CountryReference {
    pub fn from_json(json_str: &str) -> Result<CountryReference, ManagerError> {
        let entries: Vec<CountryReferenceJsonProp> = serde_json::from_str(json_str)?;
        Ok(CountryReference {
            names: entries.into_iter().map(|e| (e.alpha_2, e.name)).collect()
        })
    }

    pub fn bundled() -> Result<CountryReference, ManagerError> {
        CountryReference::from_json(BUNDLED_COUNTRY_REFERENCE)
    }

    pub fn name(&self, alpha_2: &str) -> Option<&str> {
        self.names.get(alpha_2).map(String::as_str)
    }
}

/// The countries holidays can be queried for. Immutable once built.
pub struct CountryCatalog {
    countries: Vec<Country>
}

impl CountryCatalog {
    /// Keeps the oracle's order. Codes unknown to the reference data are
    /// dropped with a warning.
    pub fn new(supported_codes: &[String], reference: &CountryReference) -> CountryCatalog {
        let mut countries: Vec<Country> = Vec::with_capacity(supported_codes.len());
        for code in supported_codes {
            if countries.iter().any(|c| c.abbreviation() == code) {
                continue;
            }
            match reference.name(code) {
                Some(name) => countries.push(Country::new(code.clone(), name.to_owned())),
                None => warn!(
                    country = %code,
                    "oracle supports a country missing from the reference data; skipped"
                ),
            }
        }
        CountryCatalog { countries }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn contains(&self, abbreviation: &str) -> bool {
        self.countries.iter().any(|c| c.abbreviation() == abbreviation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_oracle_order_and_drops_unknown_codes() {
        let reference = CountryReference::bundled().unwrap();
        let codes = vec!["US".to_owned(), "XX".to_owned(), "GB".to_owned(), "US".to_owned()];
        let catalog = CountryCatalog::new(&codes, &reference);

        let abbreviations: Vec<&str> = catalog.countries().iter().map(Country::abbreviation).collect();
        assert_eq!(abbreviations, vec!["US", "GB"]);
        assert!(catalog.contains("GB"));
        assert!(!catalog.contains("XX"));
        assert_eq!(catalog.countries().len(), 2);
    }

    #[test]
    fn reference_knows_more_than_the_oracle() {
        let reference = CountryReference::bundled().unwrap();
        assert_eq!(reference.name("GG"), Some("Guernsey"));
        assert_eq!(reference.name("US"), Some("United States"));
    }
}
