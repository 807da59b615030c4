use crate::error::ExtractError;
use kurbo::{Affine, BezPath};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::str::FromStr;
use svgtypes::{SimplePathSegment, SimplifyingPathParser};

/// Parse an SVG transform list ("translate(10,0) rotate(45)") into an affine matrix
pub fn parse_transform(value: &str) -> Result<Affine, ExtractError> {
    let ts = svgtypes::Transform::from_str(value).map_err(|e| ExtractError::Transform {
        value: value.to_string(),
        message: e.to_string(),
    })?;

    Ok(Affine::new([ts.a, ts.b, ts.c, ts.d, ts.e, ts.f]))
}

/// Parse a path `d` attribute into absolute Bezier path elements.
///
/// Relative, shorthand and arc commands are normalized to move/line/quad/cubic.
pub fn parse_path_data(data: &str) -> Result<BezPath, ExtractError> {
    let mut path = BezPath::new();

    for segment in SimplifyingPathParser::from(data) {
        let segment = segment.map_err(|e| ExtractError::PathData {
            data: data.to_string(),
            message: e.to_string(),
        })?;

        match segment {
            SimplePathSegment::MoveTo { x, y } => path.move_to((x, y)),
            SimplePathSegment::LineTo { x, y } => path.line_to((x, y)),
            SimplePathSegment::Quadratic { x1, y1, x, y } => path.quad_to((x1, y1), (x, y)),
            SimplePathSegment::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => path.curve_to((x1, y1), (x2, y2), (x, y)),
            SimplePathSegment::ClosePath => path.close_path(),
        }
    }

    Ok(path)
}

/// Look up an attribute by local name, ignoring any namespace prefix
pub(crate) fn attribute(e: &BytesStart, name: &str) -> Option<String> {
    e.attributes().flatten().find_map(|attr| {
        if attr.key.local_name().as_ref() == name.as_bytes() {
            std::str::from_utf8(&attr.value).ok().map(str::to_string)
        } else {
            None
        }
    })
}

/// Size attributes declared on the root `<svg>` element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgRootInfo {
    pub width: Option<String>,
    pub height: Option<String>,
    pub view_box: Option<String>,
    pub preserve_aspect_ratio: Option<String>,
}

/// Read the size attributes from the first `<svg>` element
pub fn parse_root_info(xml: &str) -> Result<SvgRootInfo, ExtractError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e) => {
                if e.local_name().as_ref() == b"svg" {
                    return Ok(SvgRootInfo {
                        width: attribute(e, "width"),
                        height: attribute(e, "height"),
                        view_box: attribute(e, "viewBox"),
                        preserve_aspect_ratio: attribute(e, "preserveAspectRatio"),
                    });
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(SvgRootInfo::default())
}
