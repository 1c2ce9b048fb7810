//! Error types for leadsync-core file and config operations.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from tabular (CSV) operations.
#[derive(Debug, Error)]
pub enum TableError {
    /// The input file did not exist at the expected path.
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// Underlying I/O failure (permission denied, disk full, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse/serialize error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column was absent from a table's header row.
    #[error("column '{column}' not found in table header")]
    MissingColumn { column: String },
}

/// All errors that can arise from loading the workspace configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config file at the given path (or any default location).
    #[error("config not found at {path}; create it or pass --config")]
    NotFound { path: PathBuf },

    /// Underlying I/O failure reading the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error on load — includes file path and line context.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The named workspace is not declared in the config file.
    #[error("workspace '{name}' not found in config")]
    UnknownWorkspace { name: String },
}
