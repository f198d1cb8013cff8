//! Category-relevance filtering on the store category field.

use super::StoreFilter;
use crate::dataset::Store;

/// Category keywords that mark a store as cosmetics-relevant.
pub const DEFAULT_CATEGORY_KEYWORDS: &[&str] = &["cosmetics", "skincare", "beauty", "makeup"];

/// Returns the default keyword set as owned strings.
pub fn default_category_keywords() -> Vec<String> {
    DEFAULT_CATEGORY_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

/// Passes stores whose category contains any of the keywords.
pub struct CategoryFilter {
    keywords: Vec<String>,
}

impl CategoryFilter {
    /// Creates a filter from a keyword set. Keywords are lowercased and blanks dropped.
    pub fn new(keywords: Vec<String>) -> Self {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.trim().to_lowercase();
            if !keyword.is_empty() && !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }
        Self { keywords: normalized }
    }

    /// Widens `keywords` with the resolved product's own category, if any.
    pub fn with_product_category(keywords: Vec<String>, category: Option<&str>) -> Self {
        let mut keywords = keywords;
        if let Some(category) = category {
            keywords.push(category.to_string());
        }
        Self::new(keywords)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl StoreFilter for CategoryFilter {
    fn matches(&self, store: &Store) -> bool {
        let category = store.category.to_lowercase();
        self.keywords.iter().any(|keyword| category.contains(keyword))
    }

    fn description(&self) -> String {
        format!("Category contains any of: {}", self.keywords.join(", "))
    }
}
