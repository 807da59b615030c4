//! Path sources
//!
//! A [`PathSource`] turns an SVG document into an ordered list of
//! [`GlyphPath`]s. Two sources exist: [`UsvgSource`] goes through the usvg
//! object model, [`RawPathSource`] scans the XML for `<path>` elements and
//! parses their `d` strings directly. Extraction uses the first and falls back
//! to the second only when the first yields nothing.

mod raw;
mod usvg_tree;

use crate::error::ExtractError;
use crate::path::GlyphPath;
use std::path::{Path, PathBuf};

pub use raw::RawPathSource;
pub use usvg_tree::UsvgSource;

/// An SVG document loaded into memory
#[derive(Debug, Clone)]
pub struct SvgDocument {
    pub path: PathBuf,
    pub text: String,
}

impl SvgDocument {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ExtractError> {
        let path_ref = path.as_ref();
        let text =
            std::fs::read_to_string(path_ref).map_err(|e| ExtractError::io(path_ref, e))?;

        Ok(Self {
            path: path_ref.to_path_buf(),
            text,
        })
    }

    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

/// Something that can extract paths from an SVG document
pub trait PathSource {
    /// Short name used in log messages
    fn name(&self) -> &'static str;

    /// Extract paths in document order
    fn extract_paths(&self, document: &SvgDocument) -> Result<Vec<GlyphPath>, ExtractError>;
}
