// ABOUTME: Application-wide error types for cloudimage.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::adapter::AdapterError;
use crate::normalize::TableError;
use crate::types::ProviderName;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("configuration file not found in {0}")]
    ConfigNotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    #[error("invalid status table for provider {provider}: {source}")]
    Table {
        provider: ProviderName,
        #[source]
        source: TableError,
    },

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
