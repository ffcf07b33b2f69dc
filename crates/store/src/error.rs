use thiserror::Error;

/// Errors that can occur when persisting or loading the registry.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The snapshot was written by an unknown schema version.
    #[error("Unsupported schema version: {version}")]
    UnsupportedVersion { version: u32 },

    /// Registry files must use the `.dat` extension.
    #[error("Not a .dat file: {path}")]
    NotADatFile { path: String },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
