// ABOUTME: Adapter-level errors with SNAFU pattern.
// ABOUTME: Raised when raw image data cannot be read, before any Image exists.

use snafu::Snafu;
use std::path::PathBuf;

/// Failure to obtain raw image data.
///
/// Status normalization itself never fails; these errors only cover getting
/// a record into memory in the first place.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AdapterError {
    #[snafu(display("failed to read image record {}: {source}", path.display()))]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("invalid YAML image record: {source}"))]
    DecodeYaml { source: serde_yaml::Error },

    #[snafu(display("invalid JSON image record: {source}"))]
    DecodeJson { source: serde_json::Error },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterErrorKind {
    /// The record could not be read from its source.
    Unreadable,
    /// The record was read but is not a valid image document.
    Malformed,
}

impl AdapterError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> AdapterErrorKind {
        match self {
            AdapterError::Read { .. } => AdapterErrorKind::Unreadable,
            AdapterError::DecodeYaml { .. } | AdapterError::DecodeJson { .. } => {
                AdapterErrorKind::Malformed
            }
        }
    }
}
