//! Flat output record and the artifact it is written to.

pub mod artifact;

pub use artifact::{write_artifact, ArtifactFormat};

use crate::resolver::{Confidence, ResolutionResult};
use serde::{Deserialize, Serialize};

/// Placeholder for an unresolved product name.
pub const NOT_FOUND: &str = "Not found";

/// Placeholder for an unknown brand.
pub const UNKNOWN_BRAND: &str = "Unknown";

/// Placeholder for an empty website or store list.
pub const NONE_FOUND: &str = "None found";

/// Separator for joined website and store lists.
pub const LIST_SEPARATOR: &str = "; ";

/// Column names of the output artifact, in order.
pub const COLUMNS: &[&str] =
    &["barcode", "product", "brand", "country", "websites", "nearby_stores", "confidence"];

/// One output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionRecord {
    pub barcode: String,
    pub product: String,
    pub brand: String,
    pub country: String,
    pub websites: String,
    pub nearby_stores: String,
    pub confidence: Confidence,
}

impl ResolutionRecord {
    /// Returns the fields in column order as display strings.
    pub fn fields(&self) -> [(&'static str, String); 7] {
        [
            ("barcode", self.barcode.clone()),
            ("product", self.product.clone()),
            ("brand", self.brand.clone()),
            ("country", self.country.clone()),
            ("websites", self.websites.clone()),
            ("nearby_stores", self.nearby_stores.clone()),
            ("confidence", self.confidence.to_string()),
        ]
    }
}

impl From<&ResolutionResult> for ResolutionRecord {
    fn from(result: &ResolutionResult) -> Self {
        let (product, brand) = match &result.product {
            Some(p) => (
                non_blank_or(&p.name, NOT_FOUND),
                non_blank_or(&p.brand, UNKNOWN_BRAND),
            ),
            None => (NOT_FOUND.to_string(), UNKNOWN_BRAND.to_string()),
        };

        Self {
            barcode: result.barcode.clone(),
            product,
            brand,
            country: result.country.clone(),
            websites: join_or_none(result.websites.as_slice()),
            nearby_stores: join_or_none(result.stores.as_slice()),
            confidence: result.confidence,
        }
    }
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        NONE_FOUND.to_string()
    } else {
        items.join(LIST_SEPARATOR)
    }
}
