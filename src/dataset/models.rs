//! Record types for the product, website and store datasets.

use super::table::Row;
use serde::{Deserialize, Serialize};

/// A record type that can be built from a named-column row.
pub trait FromRow: Sized {
    /// Dataset label used in error messages and logs.
    const DATASET: &'static str;

    /// Columns that must be present in the header.
    const COLUMNS: &'static [&'static str];

    /// Builds the record; every column in `COLUMNS` is guaranteed present.
    fn from_row(row: &Row<'_>) -> Self;
}

/// Normalizes a barcode: surrounding whitespace is stripped, digits are kept as
/// text so leading zeros survive.
pub fn normalize_barcode(raw: &str) -> String {
    raw.trim().to_string()
}

/// Normalizes a country code or name to an uppercase opaque key.
pub fn normalize_country(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Normalizes a city name for case-insensitive comparison.
pub fn normalize_city(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A product row from the products dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Normalized barcode
    pub barcode: String,
    /// Product name (`product_name` column)
    pub name: String,
    /// Brand name
    pub brand: String,
    /// Free-form category, e.g. "skincare"
    pub category: String,
}

impl Product {
    pub fn new(
        barcode: impl AsRef<str>,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            barcode: normalize_barcode(barcode.as_ref()),
            name: name.into().trim().to_string(),
            brand: brand.into().trim().to_string(),
            category: category.into().trim().to_string(),
        }
    }
}

impl FromRow for Product {
    const DATASET: &'static str = "products";
    const COLUMNS: &'static [&'static str] = &["barcode", "product_name", "brand", "category"];

    fn from_row(row: &Row<'_>) -> Self {
        Self::new(row.get("barcode"), row.get("product_name"), row.get("brand"), row.get("category"))
    }
}

/// A website known to sell the product with the given barcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteListing {
    pub barcode: String,
    pub website: String,
}

impl WebsiteListing {
    pub fn new(barcode: impl AsRef<str>, website: impl AsRef<str>) -> Self {
        Self {
            barcode: normalize_barcode(barcode.as_ref()),
            website: website.as_ref().trim().to_string(),
        }
    }
}

impl FromRow for WebsiteListing {
    const DATASET: &'static str = "websites";
    const COLUMNS: &'static [&'static str] = &["barcode", "website"];

    fn from_row(row: &Row<'_>) -> Self {
        Self::new(row.get("barcode"), row.get("website"))
    }
}

/// A physical store. Not tied to any barcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Store name (`store_name` column)
    pub name: String,
    pub city: String,
    /// Uppercased country code or name
    pub country: String,
    /// Category description (`store_category` column), e.g. "Beauty & Cosmetics"
    pub category: String,
}

impl Store {
    pub fn new(
        name: impl AsRef<str>,
        city: impl AsRef<str>,
        country: impl AsRef<str>,
        category: impl AsRef<str>,
    ) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            city: city.as_ref().trim().to_string(),
            country: normalize_country(country.as_ref()),
            category: category.as_ref().trim().to_string(),
        }
    }
}

impl FromRow for Store {
    const DATASET: &'static str = "stores";
    const COLUMNS: &'static [&'static str] = &["store_name", "city", "country", "store_category"];

    fn from_row(row: &Row<'_>) -> Self {
        Self::new(row.get("store_name"), row.get("city"), row.get("country"), row.get("store_category"))
    }
}
