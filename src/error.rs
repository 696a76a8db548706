//! Error types for the vault-fusion library.

use thiserror::Error;

/// Errors that can occur at the export-file boundary.
///
/// The merge engine itself is total over well-formed record collections;
/// these variants only surface when reading, parsing, or writing files.
#[derive(Error, Debug)]
pub enum VaultError {
    /// Error serializing/deserializing JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error reading or writing an export file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for vault operations.
pub type VaultResult<T> = Result<T, VaultError>;
