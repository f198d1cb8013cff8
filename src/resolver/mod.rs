//! Barcode resolution pipeline: product lookup, website aggregation,
//! store filtering and confidence classification.

pub mod confidence;
pub mod lookup;

pub use confidence::Confidence;
pub use lookup::{aggregate_websites, find_product};

use crate::dataset::{Datasets, Product};
use crate::distinct::Distinct;
use crate::error::{ResolveError, Result};
use crate::filters::{default_category_keywords, filter_stores};
use serde::Serialize;
use tracing::{info, warn};

/// One resolution request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub barcode: String,
    pub country: String,
    pub city: Option<String>,
}

impl Query {
    /// Builds a query, rejecting a blank barcode or country. A blank city counts as absent.
    pub fn new(
        barcode: impl Into<String>,
        country: impl Into<String>,
        city: Option<String>,
    ) -> Result<Self> {
        let barcode = barcode.into().trim().to_string();
        let country = country.into().trim().to_string();

        if barcode.is_empty() {
            return Err(ResolveError::MissingParameter { name: "barcode" });
        }
        if country.is_empty() {
            return Err(ResolveError::MissingParameter { name: "country" });
        }

        let city = city.map(|c| c.trim().to_string()).filter(|c| !c.is_empty());

        Ok(Self { barcode, country, city })
    }

    /// Human-readable location, e.g. "UK" or "UK (London)".
    pub fn location(&self) -> String {
        match &self.city {
            Some(city) => format!("{} ({})", self.country, city),
            None => self.country.clone(),
        }
    }
}

/// Outcome of resolving one barcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    pub barcode: String,
    pub country: String,
    pub product: Option<Product>,
    pub websites: Distinct<String>,
    pub stores: Distinct<String>,
    pub confidence: Confidence,
}

impl ResolutionResult {
    pub fn is_found(&self) -> bool {
        self.product.is_some()
    }
}

/// Resolves barcodes against in-memory datasets.
pub struct Resolver {
    datasets: Datasets,
    category_keywords: Vec<String>,
}

impl Resolver {
    /// Creates a resolver using the default category keywords.
    pub fn new(datasets: Datasets) -> Self {
        Self { datasets, category_keywords: default_category_keywords() }
    }

    /// Replaces the category keyword set used for store relevance.
    pub fn with_category_keywords(mut self, keywords: Vec<String>) -> Self {
        self.category_keywords = keywords;
        self
    }

    pub fn datasets(&self) -> &Datasets {
        &self.datasets
    }

    pub fn category_keywords(&self) -> &[String] {
        &self.category_keywords
    }

    /// Runs the full pipeline for one query.
    ///
    /// An unknown barcode is not an error: the result carries no product, no
    /// websites, no stores and Low confidence.
    pub fn resolve(&self, query: &Query) -> Result<ResolutionResult> {
        info!("Resolving barcode: {}", query.barcode);

        let Some(product) = find_product(&self.datasets.products, &query.barcode) else {
            warn!("  Product not found in database");
            return Ok(ResolutionResult {
                barcode: query.barcode.clone(),
                country: query.country.clone(),
                product: None,
                websites: Distinct::new(),
                stores: Distinct::new(),
                confidence: Confidence::Low,
            });
        };

        info!("  Found product: {} by {}", product.name, product.brand);

        let websites = aggregate_websites(&self.datasets.websites, &query.barcode);
        info!("  Found {} website(s) selling this product", websites.len());

        let category = Some(product.category.as_str()).filter(|c| !c.is_empty());
        let stores = filter_stores(
            &self.datasets.stores,
            &query.country,
            query.city.as_deref(),
            category,
            &self.category_keywords,
        )?;
        info!("  Found {} nearby store(s) in {}", stores.len(), query.location());

        let confidence = Confidence::classify(true, websites.len(), stores.len());
        info!("  Confidence level: {}", confidence);

        Ok(ResolutionResult {
            barcode: query.barcode.clone(),
            country: query.country.clone(),
            product: Some(product.clone()),
            websites,
            stores,
            confidence,
        })
    }
}
