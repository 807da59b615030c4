use crate::error::ExtractError;
use crate::types::Coordinate;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to the input file stem
pub const OUTPUT_SUFFIX: &str = "_coordinates";
/// Extension of the generated data module
pub const OUTPUT_EXTENSION: &str = "js";

/// Output location for an input file: `<output_dir>/<stem>_coordinates.js`
pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "svg".to_string());

    output_dir.join(format!("{}{}.{}", stem, OUTPUT_SUFFIX, OUTPUT_EXTENSION))
}

/// Render the coordinate array as a self-describing JavaScript module
pub fn render_coordinates_js(
    coordinates: &[Coordinate],
    total_paths: usize,
) -> Result<String, ExtractError> {
    let array = serde_json::to_string_pretty(coordinates)?;
    let total = coordinates.len();

    Ok(format!(
        r#"// Generated coordinates from SVG - All paths combined
// Total points: {total}
// Original paths combined: {total_paths}

const coordinates = {array};

// Export for use in other modules
export default coordinates;

// Alternative export for direct usage
window.svgCoordinates = coordinates;

// Helper functions
window.getTotalPoints = function() {{
    return coordinates.length;
}};

window.getCoordinatesSubset = function(startIndex, count) {{
    return coordinates.slice(startIndex, startIndex + count);
}};

// Log summary
console.log(`SVG coordinates loaded: ${{coordinates.length}} total points from {total_paths} combined paths`);
"#
    ))
}

/// Write `contents` to `target` in one step.
///
/// The data goes to a temporary sibling first and is renamed into place, so
/// an interrupted write never leaves a truncated file at `target`.
pub fn write_atomic(target: &Path, contents: &str) -> Result<(), ExtractError> {
    if let Some(dir) = target.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).map_err(|e| ExtractError::io(dir, e))?;
    }

    let mut tmp_name = target.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    fs::write(&tmp, contents).map_err(|e| ExtractError::io(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, target) {
        let _ = fs::remove_file(&tmp);
        return Err(ExtractError::io(target, e));
    }

    Ok(())
}
