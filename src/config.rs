//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::dataset::DatasetPaths;
use crate::filters::default_category_keywords;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Products dataset (CSV or spreadsheet)
    #[serde(default = "default_products")]
    pub products: PathBuf,

    /// Websites dataset (CSV or spreadsheet)
    #[serde(default = "default_websites")]
    pub websites: PathBuf,

    /// Stores dataset (CSV or spreadsheet)
    #[serde(default = "default_stores")]
    pub stores: PathBuf,

    /// Output artifact; `.xlsx` writes a workbook, anything else CSV
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Terminal summary format
    #[serde(default)]
    pub format: OutputFormat,

    /// Store categories treated as cosmetics-relevant
    #[serde(default = "default_category_keywords")]
    pub category_keywords: Vec<String>,
}

fn default_products() -> PathBuf {
    PathBuf::from("products.csv")
}

fn default_websites() -> PathBuf {
    PathBuf::from("websites.csv")
}

fn default_stores() -> PathBuf {
    PathBuf::from("stores.csv")
}

fn default_output() -> PathBuf {
    PathBuf::from("output.csv")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            products: default_products(),
            websites: default_websites(),
            stores: default_stores(),
            output: default_output(),
            format: OutputFormat::Table,
            category_keywords: default_category_keywords(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("barcode-resolver.toml");
        if local_config.exists() {
            debug!("Found barcode-resolver.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("barcode-resolver").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(path) = std::env::var("BARCODE_PRODUCTS") {
            self.products = PathBuf::from(path);
        }

        if let Ok(path) = std::env::var("BARCODE_WEBSITES") {
            self.websites = PathBuf::from(path);
        }

        if let Ok(path) = std::env::var("BARCODE_STORES") {
            self.stores = PathBuf::from(path);
        }

        if let Ok(path) = std::env::var("BARCODE_OUTPUT") {
            self.output = PathBuf::from(path);
        }

        self
    }

    /// Returns the three dataset locations.
    pub fn dataset_paths(&self) -> DatasetPaths {
        DatasetPaths::new(&self.products, &self.websites, &self.stores)
    }
}

/// Output format for the terminal summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
