//! Error types for the icon generator

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating icons
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to allocate a raster surface
    #[error("cannot allocate a {0}x{0} surface")]
    Allocation(u32),

    /// Failed to serialize a surface to PNG
    #[error("PNG encoding failed: {0}")]
    Encoding(String),

    /// Failed to persist encoded bytes to disk
    #[error("failed to write {}: {}", path.display(), source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
