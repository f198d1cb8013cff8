//! barcode-resolver - Resolve a product barcode against flat datasets
//!
//! Looks a barcode up in a products table, collects the websites that list it
//! and the cosmetics-relevant stores in a given country or city, and grades
//! the result with a three-tier confidence.

pub mod commands;
pub mod config;
pub mod dataset;
pub mod distinct;
pub mod error;
pub mod filters;
pub mod format;
pub mod report;
pub mod resolver;

pub use config::Config;
pub use dataset::{Datasets, Product, Store, WebsiteListing};
pub use error::ResolveError;
pub use report::ResolutionRecord;
pub use resolver::{Confidence, Query, ResolutionResult, Resolver};
