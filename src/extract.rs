//! Extraction pipeline: paths → ordered, sampled, combined coordinates → file

use crate::config::ExtractOptions;
use crate::error::ExtractError;
use crate::order::sort_left_to_right;
use crate::output::{output_path, render_coordinates_js, write_atomic};
use crate::path::Curve;
use crate::sample::sample_by_length;
use crate::source::{PathSource, RawPathSource, SvgDocument, UsvgSource};
use crate::types::Coordinate;
use std::path::{Path, PathBuf};

/// Which path source produced an extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Primary,
    Fallback,
}

/// Combined coordinates of all paths in a document
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub coordinates: Vec<Coordinate>,
    /// Number of paths the coordinates were sampled from
    pub path_count: usize,
    pub source: SourceKind,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

/// Order (if requested), sample and concatenate paths.
pub fn sample_paths<C: Curve>(paths: Vec<C>, options: &ExtractOptions) -> Vec<Coordinate> {
    let paths = if options.sort_paths && paths.len() > 1 {
        sort_left_to_right(paths)
    } else {
        paths
    };

    let total = paths.len();
    let mut all_coordinates = Vec::new();
    for (i, path) in paths.iter().enumerate() {
        let coords = sample_by_length(path, options.points_per_unit, options.tolerance);
        if coords.is_empty() {
            log::debug!("Path {}/{}: no points extracted", i + 1, total);
        } else {
            all_coordinates.extend_from_slice(&coords);
            log::debug!(
                "Path {}/{}: added {} points (total: {})",
                i + 1,
                total,
                coords.len(),
                all_coordinates.len()
            );
        }
    }

    all_coordinates
}

fn extract_from(
    source: &dyn PathSource,
    document: &SvgDocument,
    options: &ExtractOptions,
) -> Result<(Vec<Coordinate>, usize), ExtractError> {
    let paths = source.extract_paths(document)?;
    let path_count = paths.len();
    log::info!(
        "Processing {} paths from {} ({} source)",
        path_count,
        document.path.display(),
        source.name()
    );
    Ok((sample_paths(paths, options), path_count))
}

/// Extract with `primary`; use `fallback` only if the primary yields no points.
///
/// A failing primary counts as yielding nothing. The fallback result replaces
/// the primary one rather than being merged with it.
pub fn extract_with_fallback(
    primary: &dyn PathSource,
    fallback: &dyn PathSource,
    document: &SvgDocument,
    options: &ExtractOptions,
) -> Result<Extraction, ExtractError> {
    match extract_from(primary, document, options) {
        Ok((coordinates, path_count)) if !coordinates.is_empty() => {
            return Ok(Extraction {
                coordinates,
                path_count,
                source: SourceKind::Primary,
            });
        }
        Ok(_) => log::info!(
            "No coordinates extracted with {} source, trying {}",
            primary.name(),
            fallback.name()
        ),
        Err(e) => log::warn!(
            "{} source failed ({}), trying {}",
            primary.name(),
            e,
            fallback.name()
        ),
    }

    let (coordinates, path_count) = extract_from(fallback, document, options)?;
    Ok(Extraction {
        coordinates,
        path_count,
        source: SourceKind::Fallback,
    })
}

/// Extract coordinates from a loaded document with the default sources.
pub fn extract_coordinates(
    document: &SvgDocument,
    options: &ExtractOptions,
) -> Result<Extraction, ExtractError> {
    extract_with_fallback(&UsvgSource, &RawPathSource, document, options)
}

/// Convert an SVG file to a coordinate module, returning the written path.
///
/// Nothing is written when no coordinates could be extracted.
pub fn convert_file(input: &Path, options: &ExtractOptions) -> Result<PathBuf, ExtractError> {
    options.validate()?;

    let document = SvgDocument::load(input)?;
    let extraction = extract_coordinates(&document, options)?;
    if extraction.is_empty() {
        return Err(ExtractError::NoCoordinates {
            path: input.to_path_buf(),
        });
    }

    let js = render_coordinates_js(&extraction.coordinates, extraction.path_count)?;
    let target = output_path(input, &options.output_dir);
    write_atomic(&target, &js)?;

    log::info!(
        "Extracted {} points from {} paths, saved to {}",
        extraction.coordinates.len(),
        extraction.path_count,
        target.display()
    );
    Ok(target)
}

/// Top-level entry point: convert `input`, logging any failure.
pub fn run(input: &Path, options: &ExtractOptions) -> bool {
    match convert_file(input, options) {
        Ok(_) => true,
        Err(e) => {
            log::error!("Extraction failed: {}", e);
            false
        }
    }
}
