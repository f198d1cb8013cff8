//! Store filtering system with composable filters.

pub mod category;
pub mod location;

use crate::dataset::Store;
use crate::distinct::Distinct;
use crate::error::{ResolveError, Result};
use tracing::debug;

pub use category::{default_category_keywords, CategoryFilter, DEFAULT_CATEGORY_KEYWORDS};
pub use location::{CityFilter, CountryFilter};

/// Trait for filtering stores.
pub trait StoreFilter: Send + Sync {
    /// Returns true if the store passes the filter.
    fn matches(&self, store: &Store) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;
}

/// A chain of filters that must all pass.
pub struct FilterChain {
    filters: Vec<Box<dyn StoreFilter>>,
}

impl FilterChain {
    /// Creates an empty filter chain.
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Adds a filter to the chain.
    pub fn add(&mut self, filter: impl StoreFilter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Checks if a store passes all filters.
    pub fn matches(&self, store: &Store) -> bool {
        self.filters.iter().all(|f| f.matches(store))
    }

    /// Returns the distinct names of passing stores, in first-seen order.
    pub fn store_names<'a>(&self, stores: impl IntoIterator<Item = &'a Store>) -> Distinct<String> {
        stores
            .into_iter()
            .filter(|s| !s.name.is_empty() && self.matches(s))
            .map(|s| s.name.clone())
            .collect()
    }

    /// Returns true if no filters are configured.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns the number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns descriptions of all filters.
    pub fn descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for the nearby-store filter chain.
pub struct FilterChainBuilder {
    chain: FilterChain,
}

impl FilterChainBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self { chain: FilterChain::new() }
    }

    /// Adds the mandatory country filter.
    pub fn country(mut self, country: &str) -> Result<Self> {
        if country.trim().is_empty() {
            return Err(ResolveError::MissingParameter { name: "country" });
        }
        self.chain.add(CountryFilter::new(country));
        Ok(self)
    }

    /// Adds a city filter when a non-blank city is given.
    pub fn city(mut self, city: Option<&str>) -> Self {
        if let Some(city) = city.filter(|c| !c.trim().is_empty()) {
            self.chain.add(CityFilter::new(city));
        }
        self
    }

    /// Adds the category-relevance filter: any keyword, or the product's own category.
    pub fn category(mut self, keywords: Vec<String>, product_category: Option<&str>) -> Self {
        self.chain.add(CategoryFilter::with_product_category(keywords, product_category));
        self
    }

    /// Builds the filter chain.
    pub fn build(self) -> FilterChain {
        self.chain
    }
}

impl Default for FilterChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds distinct names of cosmetics-relevant stores in `country` (and `city`, if given).
pub fn filter_stores(
    stores: &[Store],
    country: &str,
    city: Option<&str>,
    product_category: Option<&str>,
    keywords: &[String],
) -> Result<Distinct<String>> {
    let chain = FilterChainBuilder::new()
        .country(country)?
        .city(city)
        .category(keywords.to_vec(), product_category)
        .build();

    debug!("Store filters: {}", chain.descriptions().join("; "));
    Ok(chain.store_names(stores))
}
