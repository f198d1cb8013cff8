//! Error types for dataset loading, resolution and artifact output.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors. Not-found and empty results are not errors.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("missing required parameter: {name}")]
    MissingParameter { name: &'static str },

    #[error("{dataset} dataset {} is missing required column(s): {}", .path.display(), .columns.join(", "))]
    MissingColumns {
        dataset: &'static str,
        path: PathBuf,
        columns: Vec<String>,
    },

    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read spreadsheet {}: {reason}", .path.display())]
    Spreadsheet { path: PathBuf, reason: String },

    #[error("failed to render output {}: {reason}", .path.display())]
    Output { path: PathBuf, reason: String },
}

pub type Result<T, E = ResolveError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_lists_columns() {
        let err = ResolveError::MissingColumns {
            dataset: "stores",
            path: PathBuf::from("stores.csv"),
            columns: vec!["city".to_string(), "country".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("stores dataset stores.csv"));
        assert!(msg.contains("city, country"));
    }

    #[test]
    fn test_missing_parameter_message() {
        let err = ResolveError::MissingParameter { name: "country" };
        assert_eq!(err.to_string(), "missing required parameter: country");
    }

    #[test]
    fn test_file_not_found_message() {
        let err = ResolveError::FileNotFound { path: PathBuf::from("/tmp/none.csv") };
        assert_eq!(err.to_string(), "file not found: /tmp/none.csv");
    }
}
