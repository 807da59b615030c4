use super::{PathSource, SvgDocument};
use crate::error::ExtractError;
use crate::parser::{attribute, parse_path_data, parse_transform};
use crate::path::GlyphPath;
use kurbo::Affine;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Elements whose content is never rendered directly
const NON_RENDERED: &[&[u8]] = &[
    b"defs",
    b"clipPath",
    b"mask",
    b"symbol",
    b"pattern",
    b"marker",
];

/// Extracts paths by scanning the raw XML for `<path>` elements.
///
/// Matches elements by local name so documents without the SVG namespace
/// are handled too. Transforms on the path and on its ancestors are applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawPathSource;

impl PathSource for RawPathSource {
    fn name(&self) -> &'static str {
        "raw"
    }

    fn extract_paths(&self, document: &SvgDocument) -> Result<Vec<GlyphPath>, ExtractError> {
        let mut reader = Reader::from_str(&document.text);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut paths = Vec::new();
        // Transform in effect for the children of each open element
        let mut stack: Vec<Affine> = Vec::new();
        // Depth inside a non-rendered element, 0 when outside
        let mut hidden_depth: usize = 0;
        let mut element_count = 0;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    let parent = stack.last().copied().unwrap_or(Affine::IDENTITY);
                    let own = element_transform(e, parent);

                    if hidden_depth > 0 || NON_RENDERED.contains(&e.local_name().as_ref()) {
                        hidden_depth += 1;
                    } else if e.local_name().as_ref() == b"path" {
                        element_count += 1;
                        if let Some(path) = build_path(e, own, element_count) {
                            paths.push(path);
                        }
                    }
                    stack.push(own);
                }
                Event::Empty(ref e) => {
                    if hidden_depth == 0 && e.local_name().as_ref() == b"path" {
                        element_count += 1;
                        let parent = stack.last().copied().unwrap_or(Affine::IDENTITY);
                        let own = element_transform(e, parent);
                        if let Some(path) = build_path(e, own, element_count) {
                            paths.push(path);
                        }
                    }
                }
                Event::End(_) => {
                    stack.pop();
                    hidden_depth = hidden_depth.saturating_sub(1);
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        log::debug!("Found {} path elements in SVG", element_count);
        Ok(paths)
    }
}

/// Compose an element's own `transform` attribute onto its parent's transform.
///
/// A malformed transform is ignored and the parent transform is kept.
fn element_transform(e: &BytesStart, parent: Affine) -> Affine {
    let Some(value) = attribute(e, "transform") else {
        return parent;
    };

    match parse_transform(&value) {
        Ok(own) => parent * own,
        Err(err) => {
            log::warn!("Ignoring transform: {}", err);
            parent
        }
    }
}

fn build_path(e: &BytesStart, transform: Affine, index: usize) -> Option<GlyphPath> {
    let data = attribute(e, "d")?;
    if data.trim().is_empty() {
        return None;
    }

    let mut bez = match parse_path_data(&data) {
        Ok(bez) => bez,
        Err(err) => {
            log::warn!("Error parsing path {}: {}", index, err);
            return None;
        }
    };
    bez.apply_affine(transform);

    let path = GlyphPath::new(&bez);
    Some(match attribute(e, "id") {
        Some(id) => path.with_id(id),
        None => path,
    })
}
