//! Country and city filters.

use super::StoreFilter;
use crate::dataset::models::{normalize_city, normalize_country};
use crate::dataset::Store;

/// Passes stores in the given country (case-insensitive exact match).
pub struct CountryFilter {
    country: String,
}

impl CountryFilter {
    pub fn new(country: &str) -> Self {
        Self { country: normalize_country(country) }
    }
}

impl StoreFilter for CountryFilter {
    fn matches(&self, store: &Store) -> bool {
        normalize_country(&store.country) == self.country
    }

    fn description(&self) -> String {
        format!("Country: {}", self.country)
    }
}

/// Passes stores in the given city (case-insensitive exact match).
pub struct CityFilter {
    city: String,
}

impl CityFilter {
    pub fn new(city: &str) -> Self {
        Self { city: normalize_city(city) }
    }
}

impl StoreFilter for CityFilter {
    fn matches(&self, store: &Store) -> bool {
        normalize_city(&store.city) == self.city
    }

    fn description(&self) -> String {
        format!("City: {}", self.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_store(city: &str, country: &str) -> Store {
        Store::new("Test Store", city, country, "Beauty")
    }

    #[test]
    fn test_country_case_insensitive() {
        let filter = CountryFilter::new("uk");
        assert!(filter.matches(&make_store("London", "UK")));
        assert!(filter.matches(&make_store("London", "Uk")));
        assert!(!filter.matches(&make_store("Paris", "FR")));
    }

    #[test]
    fn test_country_exact_not_prefix() {
        let filter = CountryFilter::new("U");
        assert!(!filter.matches(&make_store("London", "UK")));
    }

    #[test]
    fn test_city_case_insensitive() {
        let filter = CityFilter::new("LONDON");
        assert!(filter.matches(&make_store("London", "UK")));
        assert!(filter.matches(&make_store(" london ", "UK")));
        assert!(!filter.matches(&make_store("Londonderry", "UK")));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(CountryFilter::new("de").description(), "Country: DE");
        assert_eq!(CityFilter::new("Berlin").description(), "City: berlin");
    }
}
