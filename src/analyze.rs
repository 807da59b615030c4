//! Structural analysis of an SVG document
//!
//! Reports what extraction would work with: per-path segment counts, arc
//! lengths and estimated sample counts, plus the declared document size.
//! Purely informational; nothing is written.

use crate::config::ExtractOptions;
use crate::error::ExtractError;
use crate::parser::parse_root_info;
use crate::path::{Curve, GlyphPath};
use crate::sample::sample_count;
use crate::source::{PathSource, RawPathSource, SvgDocument, UsvgSource};
use std::fmt;

/// Statistics for one path
#[derive(Debug, Clone, PartialEq)]
pub struct PathStats {
    /// 1-based position in document order
    pub index: usize,
    pub id: Option<String>,
    pub segments: usize,
    pub length: f64,
    pub estimated_points: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub source: String,
    pub paths: Vec<PathStats>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub view_box: Option<String>,
}

impl AnalysisReport {
    pub fn estimated_total(&self) -> usize {
        self.paths.iter().map(|p| p.estimated_points).sum()
    }
}

fn estimate(length: f64, points_per_unit: f64) -> usize {
    if length > 0.0 && length.is_finite() {
        sample_count(length, points_per_unit)
    } else {
        0
    }
}

fn path_stats(index: usize, path: &GlyphPath, points_per_unit: f64) -> PathStats {
    let length = path.length();
    PathStats {
        index,
        id: path.id().map(str::to_string),
        segments: path.segment_count(),
        length,
        estimated_points: estimate(length, points_per_unit),
    }
}

/// Analyze a document with the primary source, falling back to the raw scan
/// when the primary finds no paths.
pub fn analyze(
    document: &SvgDocument,
    options: &ExtractOptions,
) -> Result<AnalysisReport, ExtractError> {
    let paths = match UsvgSource.extract_paths(document) {
        Ok(paths) if !paths.is_empty() => paths,
        Ok(_) => RawPathSource.extract_paths(document)?,
        Err(e) => {
            log::warn!("usvg analysis failed ({}), scanning raw paths", e);
            RawPathSource.extract_paths(document)?
        }
    };

    let root = parse_root_info(&document.text)?;

    Ok(AnalysisReport {
        source: document.path.display().to_string(),
        paths: paths
            .iter()
            .enumerate()
            .map(|(i, p)| path_stats(i + 1, p, options.points_per_unit))
            .collect(),
        width: root.width,
        height: root.height,
        view_box: root.view_box,
    })
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn opt(v: &Option<String>) -> &str {
            v.as_deref().unwrap_or("none")
        }

        writeln!(f, "=== SVG STRUCTURE ANALYSIS: {} ===", self.source)?;
        for p in &self.paths {
            write!(
                f,
                "Path {}: {} segments, length={:.1}, est. points={}",
                p.index, p.segments, p.length, p.estimated_points
            )?;
            if let Some(id) = &p.id {
                write!(f, " (id={})", id)?;
            }
            writeln!(f)?;
        }
        writeln!(
            f,
            "Estimated total points when combined: {}",
            self.estimated_total()
        )?;
        writeln!(f, "  Width: {}", opt(&self.width))?;
        writeln!(f, "  Height: {}", opt(&self.height))?;
        write!(f, "  ViewBox: {}", opt(&self.view_box))
    }
}
