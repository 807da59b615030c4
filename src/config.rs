use crate::error::ExtractError;
use std::path::PathBuf;

/// Default output directory for generated coordinate files
pub const DEFAULT_OUTPUT_DIR: &str = "svg_output";
/// Default sampling density (samples per unit of arc length)
pub const DEFAULT_POINTS_PER_UNIT: f64 = 1.5;
/// Default per-axis tolerance for consecutive duplicate removal
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// Options for coordinate extraction
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Directory the coordinate file is written to (default: `svg_output`)
    pub output_dir: PathBuf,
    /// Samples per unit of arc length (default: 1.5)
    pub points_per_unit: f64,
    /// Points closer than this on both axes to the previous kept point are dropped
    pub tolerance: f64,
    /// Order paths left to right before combining (default: true)
    pub sort_paths: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            points_per_unit: DEFAULT_POINTS_PER_UNIT,
            tolerance: DEFAULT_TOLERANCE,
            sort_paths: true,
        }
    }
}

impl ExtractOptions {
    /// Reject densities and tolerances the sampler cannot work with.
    pub fn validate(&self) -> Result<(), ExtractError> {
        if !self.points_per_unit.is_finite() || self.points_per_unit <= 0.0 {
            return Err(ExtractError::InvalidOption(format!(
                "points per unit must be a positive number, got {}",
                self.points_per_unit
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ExtractError::InvalidOption(format!(
                "tolerance must be a non-negative number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = ExtractOptions::default();
        assert_eq!(opts.output_dir, PathBuf::from("svg_output"));
        assert_eq!(opts.points_per_unit, 1.5);
        assert_eq!(opts.tolerance, 0.1);
        assert!(opts.sort_paths);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_density() {
        for density in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let opts = ExtractOptions {
                points_per_unit: density,
                ..Default::default()
            };
            assert!(matches!(
                opts.validate(),
                Err(ExtractError::InvalidOption(_))
            ));
        }
    }

    #[test]
    fn test_rejects_negative_tolerance() {
        let opts = ExtractOptions {
            tolerance: -0.5,
            ..Default::default()
        };
        assert!(opts.validate().is_err());

        let zero = ExtractOptions {
            tolerance: 0.0,
            ..Default::default()
        };
        assert!(zero.validate().is_ok());
    }
}
