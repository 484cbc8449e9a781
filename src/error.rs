use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the pad configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Errors that can occur while exporting the drawing
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Could not allocate a {width}x{height} export surface")]
    Surface { width: u32, height: u32 },

    #[error("No usable glyph font: {0}")]
    Font(String),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Browser download failed: {0}")]
    Download(String),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
