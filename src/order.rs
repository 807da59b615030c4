use crate::path::Curve;

/// Leftmost x coordinate of a curve.
///
/// Uses the bounding box when available, otherwise the start point.
/// Returns `None` when neither gives a finite position.
pub fn leftmost_x<C: Curve + ?Sized>(curve: &C) -> Option<f64> {
    if let Some(bbox) = curve.bounding_box()
        && bbox.min_x.is_finite()
    {
        return Some(bbox.min_x);
    }

    curve
        .point_at(0.0)
        .map(|p| p.x)
        .filter(|x| x.is_finite())
}

/// Indices of `curves` ordered by ascending leftmost x.
///
/// Curves without a determinable position go last; ties keep input order.
pub fn left_to_right_order<C: Curve>(curves: &[C]) -> Vec<usize> {
    let mut keyed: Vec<(f64, usize)> = curves
        .iter()
        .enumerate()
        .map(|(i, curve)| match leftmost_x(curve) {
            Some(x) => {
                log::debug!("Path {}: left edge at x={:.1}", i + 1, x);
                (x, i)
            }
            None => {
                log::debug!("Path {}: position unknown, placing at end", i + 1);
                (f64::INFINITY, i)
            }
        })
        .collect();

    // sort_by is stable, so equal keys keep their original order
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    for (pos, (x, original)) in keyed.iter().enumerate() {
        log::debug!(
            "  Position {}: original path {} (x={:.1})",
            pos + 1,
            original + 1,
            x
        );
    }

    keyed.into_iter().map(|(_, i)| i).collect()
}

/// Reorder curves left to right without touching the curves themselves.
pub fn sort_left_to_right<C: Curve>(curves: Vec<C>) -> Vec<C> {
    let order = left_to_right_order(&curves);
    let mut slots: Vec<Option<C>> = curves.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|i| slots.get_mut(i).and_then(Option::take))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bounds, Coordinate};

    /// Test curve with an optional bounding box and optional start point
    #[derive(Debug, Clone, PartialEq)]
    struct Outline {
        name: &'static str,
        bbox_min_x: Option<f64>,
        start_x: Option<f64>,
    }

    impl Outline {
        fn boxed(name: &'static str, min_x: f64) -> Self {
            Self {
                name,
                bbox_min_x: Some(min_x),
                start_x: Some(min_x + 1.0),
            }
        }

        fn unknown(name: &'static str) -> Self {
            Self {
                name,
                bbox_min_x: None,
                start_x: None,
            }
        }
    }

    impl Curve for Outline {
        fn length(&self) -> f64 {
            1.0
        }
        fn point_at(&self, _t: f64) -> Option<Coordinate> {
            self.start_x.map(|x| Coordinate::new(x, 0.0))
        }
        fn bounding_box(&self) -> Option<Bounds> {
            self.bbox_min_x.map(|x| Bounds::new(x, 0.0, x + 1.0, 1.0))
        }
    }

    fn names(curves: &[Outline]) -> Vec<&'static str> {
        curves.iter().map(|c| c.name).collect()
    }

    #[test]
    fn test_leftmost_prefers_bounding_box() {
        assert_eq!(leftmost_x(&Outline::boxed("a", 7.0)), Some(7.0));
    }

    #[test]
    fn test_leftmost_falls_back_to_start_point() {
        let outline = Outline {
            name: "a",
            bbox_min_x: None,
            start_x: Some(3.5),
        };
        assert_eq!(leftmost_x(&outline), Some(3.5));

        let nan_box = Outline {
            name: "b",
            bbox_min_x: Some(f64::NAN),
            start_x: Some(-2.0),
        };
        assert_eq!(leftmost_x(&nan_box), Some(-2.0));
    }

    #[test]
    fn test_leftmost_unknown() {
        assert_eq!(leftmost_x(&Outline::unknown("a")), None);
        let infinite_start = Outline {
            name: "b",
            bbox_min_x: None,
            start_x: Some(f64::INFINITY),
        };
        assert_eq!(leftmost_x(&infinite_start), None);
    }

    #[test]
    fn test_sorts_left_to_right() {
        let curves = vec![
            Outline::boxed("R", 50.0),
            Outline::boxed("K", 20.0),
            Outline::boxed("A", 0.0),
        ];
        assert_eq!(left_to_right_order(&curves), vec![2, 1, 0]);
        assert_eq!(names(&sort_left_to_right(curves)), vec!["A", "K", "R"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let curves = vec![
            Outline::boxed("first", 10.0),
            Outline::boxed("left", 0.0),
            Outline::boxed("second", 10.0),
            Outline::boxed("third", 10.0),
        ];
        assert_eq!(
            names(&sort_left_to_right(curves)),
            vec!["left", "first", "second", "third"]
        );
    }

    #[test]
    fn test_unknown_positions_sort_last() {
        let curves = vec![
            Outline::unknown("u1"),
            Outline::boxed("far", 1e9),
            Outline::unknown("u2"),
            Outline::boxed("near", -5.0),
        ];
        assert_eq!(
            names(&sort_left_to_right(curves)),
            vec!["near", "far", "u1", "u2"]
        );
    }

    #[test]
    fn test_sorting_preserves_paths() {
        let curves = vec![Outline::boxed("b", 2.0), Outline::boxed("a", 1.0)];
        let sorted = sort_left_to_right(curves.clone());
        assert_eq!(sorted.len(), curves.len());
        assert_eq!(sorted[0], curves[1]);
        assert_eq!(sorted[1], curves[0]);
    }

    #[test]
    fn test_empty_input() {
        let curves: Vec<Outline> = Vec::new();
        assert!(sort_left_to_right(curves).is_empty());
    }
}
