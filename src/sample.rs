//! Length-based path sampling
//!
//! A path is sampled at evenly spaced arc positions, with the number of
//! samples proportional to its length. Consecutive samples that land on
//! (nearly) the same spot are then collapsed.

use crate::path::Curve;
use crate::types::Coordinate;

/// Every path with positive length gets at least this many intervals
pub const MIN_SAMPLES: usize = 10;

/// No path gets more than this many intervals
pub const MAX_SAMPLES: usize = 1_000_000;

/// Number of sampling intervals for a path of the given length.
///
/// `max(10, floor(length * points_per_unit))`, clamped to [`MAX_SAMPLES`];
/// the sampler takes one more sample than this so both endpoints are included.
pub fn sample_count(length: f64, points_per_unit: f64) -> usize {
    let wanted = (length * points_per_unit).floor();
    if wanted.is_nan() || wanted < MIN_SAMPLES as f64 {
        MIN_SAMPLES
    } else if wanted > MAX_SAMPLES as f64 {
        MAX_SAMPLES
    } else {
        wanted as usize
    }
}

/// Sample a curve at evenly spaced arc positions, without deduplication.
///
/// Samples that cannot be evaluated or that are not finite are skipped.
pub fn sample_raw<C: Curve + ?Sized>(curve: &C, points_per_unit: f64) -> Vec<Coordinate> {
    let total_length = curve.length();
    if total_length <= 0.0 {
        return Vec::new();
    }
    if !total_length.is_finite() {
        log::warn!("Path length is not finite ({}), skipping", total_length);
        return Vec::new();
    }

    let num_samples = sample_count(total_length, points_per_unit);
    if num_samples == MAX_SAMPLES {
        log::warn!(
            "Path length {:.2} at {} points per unit hits the limit of {} samples",
            total_length,
            points_per_unit,
            MAX_SAMPLES
        );
    }
    log::debug!(
        "Path length {:.2}, sampling {} intervals",
        total_length,
        num_samples
    );

    let mut coordinates = Vec::with_capacity(num_samples + 1);
    for i in 0..=num_samples {
        let t = i as f64 / num_samples as f64;
        match curve.point_at(t) {
            Some(p) if p.is_finite() => coordinates.push(p),
            Some(p) => log::trace!("Skipping non-finite sample at t={}: {:?}", t, p),
            None => log::trace!("Point sampling failed at t={}", t),
        }
    }

    coordinates
}

/// Drop points that are within `tolerance` of the previously kept point on both axes.
pub fn remove_duplicate_points(coordinates: &[Coordinate], tolerance: f64) -> Vec<Coordinate> {
    let mut filtered: Vec<Coordinate> = Vec::with_capacity(coordinates.len());

    for &coord in coordinates {
        match filtered.last() {
            Some(last) => {
                let dx = (coord.x - last.x).abs();
                let dy = (coord.y - last.y).abs();
                if dx > tolerance || dy > tolerance {
                    filtered.push(coord);
                }
            }
            None => filtered.push(coord),
        }
    }

    filtered
}

/// Sample a curve by length and collapse consecutive near-duplicates.
pub fn sample_by_length<C: Curve + ?Sized>(
    curve: &C,
    points_per_unit: f64,
    tolerance: f64,
) -> Vec<Coordinate> {
    let raw = sample_raw(curve, points_per_unit);
    let raw_len = raw.len();
    let coordinates = remove_duplicate_points(&raw, tolerance);
    if coordinates.len() < raw_len {
        log::trace!(
            "Removed {} duplicate points ({} -> {})",
            raw_len - coordinates.len(),
            raw_len,
            coordinates.len()
        );
    }
    coordinates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Bounds;

    /// Horizontal segment from (x0, y) to (x0 + length, y)
    struct Segment {
        x0: f64,
        y: f64,
        length: f64,
    }

    impl Curve for Segment {
        fn length(&self) -> f64 {
            self.length
        }
        fn point_at(&self, t: f64) -> Option<Coordinate> {
            Some(Coordinate::new(self.x0 + t * self.length, self.y))
        }
        fn bounding_box(&self) -> Option<Bounds> {
            Some(Bounds::new(self.x0, self.y, self.x0 + self.length, self.y))
        }
    }

    /// Reports a length but always evaluates to the same point
    struct Stuck {
        length: f64,
    }

    impl Curve for Stuck {
        fn length(&self) -> f64 {
            self.length
        }
        fn point_at(&self, _t: f64) -> Option<Coordinate> {
            Some(Coordinate::new(3.0, 4.0))
        }
        fn bounding_box(&self) -> Option<Bounds> {
            None
        }
    }

    /// Parameterization with a pole at t = 0 and a failure at t = 1
    struct Pole;

    impl Curve for Pole {
        fn length(&self) -> f64 {
            10.0
        }
        fn point_at(&self, t: f64) -> Option<Coordinate> {
            if t >= 1.0 {
                return None;
            }
            Some(Coordinate::new(1.0 / t, t * 100.0))
        }
        fn bounding_box(&self) -> Option<Bounds> {
            None
        }
    }

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn test_sample_count_has_floor_of_ten() {
        assert_eq!(sample_count(1.0, 0.5), 10);
        assert_eq!(sample_count(5.0, 2.0), 10);
        assert_eq!(sample_count(20.0, 1.0), 20);
        assert_eq!(sample_count(33.3, 1.5), 49);
    }

    #[test]
    fn test_sample_count_is_bounded() {
        assert_eq!(sample_count(1e300, 1.5), MAX_SAMPLES);
        assert_eq!(sample_count(f64::MAX, f64::MAX), MAX_SAMPLES);
        assert_eq!(sample_count(MAX_SAMPLES as f64, 1.0), MAX_SAMPLES);
    }

    #[test]
    fn test_huge_path_is_clamped_not_fatal() {
        let seg = Segment {
            x0: 0.0,
            y: 0.0,
            length: 1e300,
        };
        let points = sample_raw(&seg, 1.5);
        assert_eq!(points.len(), MAX_SAMPLES + 1);
        assert_eq!(points.last(), Some(&c(1e300, 0.0)));
    }

    #[test]
    fn test_raw_sample_count() {
        for (length, density) in [(20.0, 1.0), (10.0, 1.0), (0.5, 0.1), (123.4, 2.5)] {
            let seg = Segment {
                x0: 0.0,
                y: 0.0,
                length,
            };
            let expected = MIN_SAMPLES.max((length * density).floor() as usize) + 1;
            assert_eq!(sample_raw(&seg, density).len(), expected);
        }
    }

    #[test]
    fn test_samples_include_both_endpoints() {
        let seg = Segment {
            x0: 5.0,
            y: 1.0,
            length: 20.0,
        };
        let points = sample_raw(&seg, 1.0);
        assert_eq!(points.first(), Some(&c(5.0, 1.0)));
        assert_eq!(points.last(), Some(&c(25.0, 1.0)));
    }

    #[test]
    fn test_zero_length_path_is_empty() {
        let seg = Segment {
            x0: 0.0,
            y: 0.0,
            length: 0.0,
        };
        assert!(sample_raw(&seg, 2.0).is_empty());
        assert!(sample_by_length(&seg, 2.0, 0.1).is_empty());
    }

    #[test]
    fn test_non_finite_length_is_empty() {
        let stuck = Stuck {
            length: f64::INFINITY,
        };
        assert!(sample_raw(&stuck, 1.0).is_empty());
        let nan = Stuck { length: f64::NAN };
        assert!(sample_raw(&nan, 1.0).is_empty());
    }

    #[test]
    fn test_degenerate_curve_collapses_to_one_point() {
        let stuck = Stuck { length: 5.0 };
        assert_eq!(sample_raw(&stuck, 2.0).len(), 11);
        assert_eq!(sample_by_length(&stuck, 2.0, 0.1), vec![c(3.0, 4.0)]);
    }

    #[test]
    fn test_bad_samples_are_skipped() {
        let points = sample_raw(&Pole, 1.0);
        // t = 0 is a pole, t = 1 fails; the 9 samples in between survive
        assert_eq!(points.len(), 9);
        assert!(points.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_dedup_compares_against_last_kept_point() {
        let points = vec![c(0.0, 0.0), c(0.06, 0.0), c(0.12, 0.0), c(0.18, 0.0)];
        // Each step is 0.06, but 0.12 and 0.18 are measured from 0.0
        assert_eq!(
            remove_duplicate_points(&points, 0.1),
            vec![c(0.0, 0.0), c(0.12, 0.0)]
        );
    }

    #[test]
    fn test_dedup_uses_independent_axes() {
        // Euclidean distance is ~0.127 but neither axis exceeds 0.1
        let points = vec![c(0.0, 0.0), c(0.09, 0.09)];
        assert_eq!(remove_duplicate_points(&points, 0.1), vec![c(0.0, 0.0)]);

        let points = vec![c(0.0, 0.0), c(0.0, 0.11)];
        assert_eq!(remove_duplicate_points(&points, 0.1).len(), 2);
    }

    #[test]
    fn test_dedup_idempotent_and_order_preserving() {
        let points = vec![
            c(0.0, 0.0),
            c(0.05, 0.0),
            c(1.0, 1.0),
            c(1.0, 1.05),
            c(2.0, 0.0),
            c(2.0, 0.0),
            c(-1.0, 3.0),
        ];
        let once = remove_duplicate_points(&points, 0.1);
        let twice = remove_duplicate_points(&once, 0.1);
        assert_eq!(once, twice);
        assert!(once.len() <= points.len());
        assert_eq!(
            once,
            vec![c(0.0, 0.0), c(1.0, 1.0), c(2.0, 0.0), c(-1.0, 3.0)]
        );
    }

    #[test]
    fn test_dedup_of_empty_input() {
        assert!(remove_duplicate_points(&[], 0.1).is_empty());
    }
}
