//! Crate error type.

/// Errors raised at the fallible edges of the crate: configuration, JSON
/// loading, file I/O, and out-of-range collection updates.
#[derive(Debug, thiserror::Error)]
pub enum GeoEditError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
    /// A feature index does not exist in the collection.
    #[error("feature index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
    /// A JSON document could not be (de)serialized.
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// Reading an input file failed.
    #[error("i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
