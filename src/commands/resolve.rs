//! Resolve command implementation.

use crate::config::Config;
use crate::dataset::Datasets;
use crate::format::Formatter;
use crate::report::{write_artifact, ArtifactFormat, ResolutionRecord};
use crate::resolver::{Query, Resolver};
use anyhow::{Context, Result};
use tracing::info;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub record: ResolutionRecord,
    pub artifact: ArtifactFormat,
    /// Rendered terminal summary
    pub summary: String,
}

/// Resolves one barcode and writes the output artifact.
pub struct ResolveCommand {
    config: Config,
}

impl ResolveCommand {
    /// Creates a new resolve command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Loads the configured datasets, resolves the query and writes the artifact.
    pub fn execute(&self, query: &Query) -> Result<Outcome> {
        let datasets =
            Datasets::load(&self.config.dataset_paths()).context("Failed to load datasets")?;

        self.execute_with(datasets, query)
    }

    /// Resolves against already-loaded datasets (for testing).
    pub fn execute_with(&self, datasets: Datasets, query: &Query) -> Result<Outcome> {
        let resolver =
            Resolver::new(datasets).with_category_keywords(self.config.category_keywords.clone());
        let result = resolver.resolve(query)?;
        let record = ResolutionRecord::from(&result);

        info!("Saving results...");
        let artifact = write_artifact(&record, &self.config.output)
            .with_context(|| format!("Failed to write {}", self.config.output.display()))?;

        let summary = Formatter::new(self.config.format).format_record(&record);
        Ok(Outcome { record, artifact, summary })
    }
}
