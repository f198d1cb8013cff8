//! Loading of the product, website and store datasets.

pub mod models;
pub mod table;

pub use models::{FromRow, Product, Store, WebsiteListing};
pub use table::RowTable;

use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Locations of the three input datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub products: PathBuf,
    pub websites: PathBuf,
    pub stores: PathBuf,
}

impl DatasetPaths {
    pub fn new(
        products: impl Into<PathBuf>,
        websites: impl Into<PathBuf>,
        stores: impl Into<PathBuf>,
    ) -> Self {
        Self { products: products.into(), websites: websites.into(), stores: stores.into() }
    }
}

/// All three datasets, resident in memory.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub products: Vec<Product>,
    pub websites: Vec<WebsiteListing>,
    pub stores: Vec<Store>,
}

impl Datasets {
    /// Builds datasets from already-parsed rows.
    pub fn from_parts(
        products: Vec<Product>,
        websites: Vec<WebsiteListing>,
        stores: Vec<Store>,
    ) -> Self {
        Self { products, websites, stores }
    }

    /// Loads and validates all three datasets. Fails before returning
    /// anything if any file is missing or lacks a required column.
    pub fn load(paths: &DatasetPaths) -> Result<Self> {
        let products = load_one::<Product>(&paths.products)?;
        let websites = load_one::<WebsiteListing>(&paths.websites)?;
        let stores = load_one::<Store>(&paths.stores)?;

        Ok(Self { products, websites, stores })
    }
}

fn load_one<T: FromRow>(path: &Path) -> Result<Vec<T>> {
    info!("Loading {} from {}...", T::DATASET, path.display());
    let rows: Vec<T> = RowTable::read(path)?.parse()?;
    info!("  Loaded {} {} row(s)", rows.len(), T::DATASET);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;
    use std::fs;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir) -> DatasetPaths {
        let products = dir.path().join("products.csv");
        let websites = dir.path().join("websites.csv");
        let stores = dir.path().join("stores.csv");

        fs::write(&products, "barcode,product_name,brand,category\n111,Cream,Brand,skincare\n")
            .unwrap();
        fs::write(&websites, "barcode,website\n111,a.example\n111,b.example\n").unwrap();
        fs::write(
            &stores,
            "store_name,city,country,store_category\nBoots,London,uk,Beauty\nSpar,Leeds,UK,Grocery\n",
        )
        .unwrap();

        DatasetPaths::new(products, websites, stores)
    }

    #[test]
    fn test_load_all() {
        let dir = TempDir::new().unwrap();
        let paths = write_fixture(&dir);

        let data = Datasets::load(&paths).unwrap();
        assert_eq!(data.products.len(), 1);
        assert_eq!(data.websites.len(), 2);
        assert_eq!(data.stores.len(), 2);
        assert_eq!(data.stores[0].country, "UK");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let mut paths = write_fixture(&dir);
        paths.stores = dir.path().join("missing.csv");

        let err = Datasets::load(&paths).unwrap_err();
        assert!(matches!(err, ResolveError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_bad_columns_fails() {
        let dir = TempDir::new().unwrap();
        let paths = write_fixture(&dir);
        fs::write(&paths.websites, "code,url\n111,a.example\n").unwrap();

        let err = Datasets::load(&paths).unwrap_err();
        assert!(err.to_string().contains("websites dataset"));
        assert!(err.to_string().contains("barcode, website"));
    }
}
