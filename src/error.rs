//! Error types for coordinate extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting coordinates from an SVG file.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Reading the input or writing the output failed.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The usvg object model rejected the document.
    #[error("failed to parse SVG: {0}")]
    Svg(String),

    /// The raw XML scan failed.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// A path `d` attribute could not be parsed.
    #[error("invalid path data \"{data}\": {message}")]
    PathData { data: String, message: String },

    /// A `transform` attribute could not be parsed.
    #[error("invalid transform \"{value}\": {message}")]
    Transform { value: String, message: String },

    /// An extraction option is out of range.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// Neither path source produced a single coordinate.
    #[error("no coordinates could be extracted from '{}'", .path.display())]
    NoCoordinates { path: PathBuf },

    /// The coordinate array could not be serialized.
    #[error("failed to serialize coordinates: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ExtractError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            source,
        }
    }
}
