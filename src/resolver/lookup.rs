//! Exact-match product lookup and website aggregation.

use crate::dataset::models::normalize_barcode;
use crate::dataset::{Product, WebsiteListing};
use crate::distinct::Distinct;

/// Returns the first product whose barcode equals `barcode` after normalization.
pub fn find_product<'a>(products: &'a [Product], barcode: &str) -> Option<&'a Product> {
    let barcode = normalize_barcode(barcode);
    products.iter().find(|p| normalize_barcode(&p.barcode) == barcode)
}

/// Collects the distinct websites listing `barcode`, in first-seen order.
pub fn aggregate_websites(listings: &[WebsiteListing], barcode: &str) -> Distinct<String> {
    let barcode = normalize_barcode(barcode);
    listings
        .iter()
        .filter(|l| normalize_barcode(&l.barcode) == barcode)
        .map(|l| l.website.trim())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
