//! # svg-coords
//!
//! Sample the path outlines of an SVG file into one flat, ordered array of
//! `{x, y}` coordinates, written out as a JavaScript data module for
//! plotting or Fourier-series animation.
//!
//! ## Pipeline
//!
//! 1. Extract paths through the usvg object model, or scan the raw XML for
//!    `<path>` elements when that yields nothing
//! 2. Order the paths left to right by their leftmost x
//! 3. Sample each path at evenly spaced arc positions, density set by
//!    points per unit of length
//! 4. Drop consecutive near-duplicate points
//! 5. Write `<output_dir>/<name>_coordinates.js`
//!
//! ## Example
//!
//! ```rust,ignore
//! use svg_coords::{ExtractOptions, convert_file};
//!
//! let options = ExtractOptions {
//!     points_per_unit: 2.0,
//!     ..Default::default()
//! };
//! let written = convert_file("assets/logo.svg".as_ref(), &options).unwrap();
//! println!("saved {}", written.display());
//! ```

pub mod analyze;
pub mod config;
pub mod error;
pub mod extract;
pub mod order;
pub mod output;
pub mod parser;
pub mod path;
pub mod sample;
pub mod source;
pub mod types;

// Re-export commonly used items
pub use analyze::{AnalysisReport, PathStats, analyze};
pub use config::ExtractOptions;
pub use error::ExtractError;
pub use extract::{
    Extraction, SourceKind, convert_file, extract_coordinates, extract_with_fallback, run,
    sample_paths,
};
pub use order::{left_to_right_order, leftmost_x, sort_left_to_right};
pub use path::{Curve, GlyphPath};
pub use sample::{remove_duplicate_points, sample_by_length, sample_count, sample_raw};
pub use source::{PathSource, RawPathSource, SvgDocument, UsvgSource};
pub use types::{Bounds, Coordinate};
