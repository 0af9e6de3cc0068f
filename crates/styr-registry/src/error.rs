//! Registry Error Types

use std::path::PathBuf;

/// Failures while reading or writing the backing file.
///
/// These stay inside the crate boundary: `initialize` absorbs load errors and
/// `add`/`remove` flatten persist errors into a `success` flag. They exist so
/// the failure can be logged with its cause.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path:?} as a JSON array of strings: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode entries: {0}")]
    Encode(#[from] serde_json::Error),
}

impl RegistryError {
    /// True when the backing file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Registry result type
pub type RegistryResult<T> = Result<T, RegistryError>;
