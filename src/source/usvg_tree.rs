use super::{PathSource, SvgDocument};
use crate::error::ExtractError;
use crate::parser::parse_root_info;
use crate::path::GlyphPath;
use kurbo::{Affine, BezPath, PathEl, Point};
use std::str::FromStr;
use svgtypes::{Align, AspectRatio, ViewBox};
use usvg::tiny_skia_path::PathSegment;

/// Extracts paths through the usvg object model.
///
/// Coordinates are reported in the root user space: group and element
/// transforms are applied, the viewBox-to-viewport scaling of the root
/// `<svg>` is not.
#[derive(Debug, Default, Clone, Copy)]
pub struct UsvgSource;

impl PathSource for UsvgSource {
    fn name(&self) -> &'static str {
        "usvg"
    }

    fn extract_paths(&self, document: &SvgDocument) -> Result<Vec<GlyphPath>, ExtractError> {
        let opt = usvg::Options::default();
        let tree = usvg::Tree::from_str(&document.text, &opt)
            .map_err(|e| ExtractError::Svg(e.to_string()))?;

        let viewport = viewport_transform(document, tree.size());
        let mut paths = Vec::new();
        collect_group(user_space_root(tree.root(), viewport), Affine::IDENTITY, &mut paths);
        Ok(paths)
    }
}

/// Transform that maps the root `viewBox` onto the viewport of `size`.
///
/// Mirrors the mapping usvg applies; identity when there is no usable viewBox.
fn viewport_transform(document: &SvgDocument, size: usvg::Size) -> Affine {
    let Ok(root) = parse_root_info(&document.text) else {
        return Affine::IDENTITY;
    };
    let Some(vb) = root
        .view_box
        .as_deref()
        .and_then(|v| ViewBox::from_str(v).ok())
        .filter(|vb| vb.w > 0.0 && vb.h > 0.0)
    else {
        return Affine::IDENTITY;
    };
    let aspect = root
        .preserve_aspect_ratio
        .as_deref()
        .and_then(|v| AspectRatio::from_str(v).ok())
        .unwrap_or_default();

    let (width, height) = (size.width() as f64, size.height() as f64);
    let sx = width / vb.w;
    let sy = height / vb.h;
    let (sx, sy) = match aspect.align {
        Align::None => (sx, sy),
        _ if aspect.slice => (sx.max(sy), sx.max(sy)),
        _ => (sx.min(sy), sx.min(sy)),
    };

    let x = -vb.x * sx;
    let y = -vb.y * sy;
    let w = width - vb.w * sx;
    let h = height - vb.h * sy;
    let (tx, ty) = match aspect.align {
        Align::None | Align::XMinYMin => (x, y),
        Align::XMidYMin => (x + w / 2.0, y),
        Align::XMaxYMin => (x + w, y),
        Align::XMinYMid => (x, y + h / 2.0),
        Align::XMidYMid => (x + w / 2.0, y + h / 2.0),
        Align::XMaxYMid => (x + w, y + h / 2.0),
        Align::XMinYMax => (x, y + h),
        Align::XMidYMax => (x + w / 2.0, y + h),
        Align::XMaxYMax => (x + w, y + h),
    };

    Affine::new([sx, 0.0, 0.0, sy, tx, ty])
}

fn to_affine(ts: usvg::Transform) -> Affine {
    Affine::new([
        ts.sx as f64,
        ts.ky as f64,
        ts.kx as f64,
        ts.sy as f64,
        ts.tx as f64,
        ts.ty as f64,
    ])
}

fn nearly_equal(a: Affine, b: Affine) -> bool {
    a.as_coeffs()
        .iter()
        .zip(b.as_coeffs())
        .all(|(x, y)| (x - y).abs() <= 1e-4 * x.abs().max(y.abs()).max(1.0))
}

/// The group whose children are in root user space.
///
/// A non-identity viewport mapping is held by a single wrapper group under
/// the tree root; that group is stepped over so its scaling is not applied.
fn user_space_root(root: &usvg::Group, viewport: Affine) -> &usvg::Group {
    if viewport == Affine::IDENTITY {
        return root;
    }
    match root.children() {
        [usvg::Node::Group(wrapper)] if nearly_equal(to_affine(wrapper.transform()), viewport) => {
            &**wrapper
        }
        _ => {
            log::warn!("No viewport group found in usvg tree, coordinates may be scaled");
            root
        }
    }
}

fn collect_group(group: &usvg::Group, transform: Affine, paths: &mut Vec<GlyphPath>) {
    for child in group.children() {
        match child {
            usvg::Node::Group(g) => collect_group(g, transform * to_affine(g.transform()), paths),
            usvg::Node::Path(path) => paths.push(convert_path(path, transform)),
            usvg::Node::Image(_) => {}
            usvg::Node::Text(_) => {}
        }
    }
}

fn convert_path(path: &usvg::Path, transform: Affine) -> GlyphPath {
    let bez = transform * to_bez_path(path.data().segments());
    GlyphPath::new(&bez).with_id(path.id())
}

fn pt(p: usvg::tiny_skia_path::Point) -> Point {
    Point::new(p.x as f64, p.y as f64)
}

/// Convert tiny-skia path segments into a kurbo path
pub(crate) fn to_bez_path(segments: impl Iterator<Item = PathSegment>) -> BezPath {
    segments
        .map(|seg| match seg {
            PathSegment::MoveTo(p) => PathEl::MoveTo(pt(p)),
            PathSegment::LineTo(p) => PathEl::LineTo(pt(p)),
            PathSegment::QuadTo(p0, p1) => PathEl::QuadTo(pt(p0), pt(p1)),
            PathSegment::CubicTo(p0, p1, p2) => PathEl::CurveTo(pt(p0), pt(p1), pt(p2)),
            PathSegment::Close => PathEl::ClosePath,
        })
        .collect()
}
