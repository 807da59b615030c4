use crate::types::{Bounds, Coordinate};
use kurbo::{BezPath, ParamCurve, ParamCurveArclen, ParamCurveExtrema, PathSeg};

/// Accuracy used for arc length and inverse arc length computations
const ARCLEN_ACCURACY: f64 = 1e-6;

/// A parametric curve addressable by normalized arc position.
pub trait Curve {
    /// Total arc length.
    fn length(&self) -> f64;

    /// Point at arc position `t` in `[0, 1]`, or `None` if it cannot be evaluated.
    fn point_at(&self, t: f64) -> Option<Coordinate>;

    /// Axis-aligned bounding box, if the curve has one.
    fn bounding_box(&self) -> Option<Bounds>;
}

/// A path outline extracted from an SVG document
#[derive(Debug, Clone)]
pub struct GlyphPath {
    id: Option<String>,
    segments: Vec<PathSeg>,
    /// Arc length of each entry in `segments`
    lengths: Vec<f64>,
    total_length: f64,
}

impl GlyphPath {
    pub fn new(path: &BezPath) -> Self {
        let segments: Vec<PathSeg> = path.segments().collect();
        let lengths: Vec<f64> = segments
            .iter()
            .map(|seg| seg.arclen(ARCLEN_ACCURACY))
            .collect();
        let total_length = lengths.iter().sum();

        Self {
            id: None,
            segments,
            lengths,
            total_length,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.id = if id.is_empty() { None } else { Some(id) };
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Number of drawable segments (move-to commands don't count)
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[PathSeg] {
        &self.segments
    }
}

impl Curve for GlyphPath {
    fn length(&self) -> f64 {
        self.total_length
    }

    fn point_at(&self, t: f64) -> Option<Coordinate> {
        let (first, last) = (self.segments.first()?, self.segments.last()?);
        if !t.is_finite() {
            return None;
        }
        let t = t.clamp(0.0, 1.0);

        if self.total_length <= 0.0 || !self.total_length.is_finite() {
            return Some(first.eval(0.0).into());
        }
        if t >= 1.0 {
            return Some(last.eval(1.0).into());
        }

        let target = t * self.total_length;
        let mut walked = 0.0;
        for (i, (seg, &len)) in self.segments.iter().zip(&self.lengths).enumerate() {
            let is_last = i + 1 == self.segments.len();
            if target <= walked + len || is_last {
                let local = (target - walked).clamp(0.0, len);
                let u = if len > 0.0 {
                    seg.inv_arclen(local, ARCLEN_ACCURACY)
                } else {
                    0.0
                };
                return Some(seg.eval(u).into());
            }
            walked += len;
        }

        None
    }

    fn bounding_box(&self) -> Option<Bounds> {
        let mut segments = self.segments.iter();
        let mut bounds: Bounds = segments.next()?.bounding_box().into();
        for seg in segments {
            bounds.expand(&seg.bounding_box().into());
        }
        Some(bounds)
    }
}
