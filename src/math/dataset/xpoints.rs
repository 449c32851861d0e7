use crate::math::dataset::dataset::{bin_width_of, DataSetError};
use crate::math::ulp::approx_equals;

/// Smallest grid accepted for each end convention.
///
/// Half-width grids lose one sample on each side to the end bins and still
/// need two samples for the interior.
pub fn minimum_points(half_width_ends: bool) -> usize {
    if half_width_ends { 4 } else { 2 }
}

/// Generates `num_points` uniformly spaced x values from `lower_bound` to
/// `upper_bound`, both inclusive.
///
/// With `half_width_ends` the interior samples sit at bin centres, so the first
/// and last bins are half the regular width:
///
/// ```text
/// lb  lb+h/2  lb+3h/2  ...  ub-h/2  ub
/// ```
pub fn generate_x_points(
    lower_bound: f64,
    upper_bound: f64,
    num_points: usize,
    half_width_ends: bool,
) -> Result<Vec<f64>, DataSetError> {
    if !(lower_bound < upper_bound) {
        return Err(DataSetError::InvalidBounds {
            lower: lower_bound,
            upper: upper_bound,
        });
    }
    let required = minimum_points(half_width_ends);
    if num_points < required {
        return Err(DataSetError::TooFewPoints {
            required,
            actual: num_points,
        });
    }

    let sep = bin_width_of(lower_bound, upper_bound, num_points, half_width_ends);
    let points = if half_width_ends {
        let mut points = Vec::with_capacity(num_points);
        points.push(lower_bound);
        points.extend((1..num_points - 1).map(|i| lower_bound + i as f64 * sep - 0.5 * sep));
        points.push(upper_bound);
        points
    } else {
        (0..num_points)
            .map(|i| lower_bound + i as f64 * sep)
            .collect()
    };
    Ok(points)
}

/// Checks that `x` is a valid grid for the given end convention.
///
/// Every sample must sit within 10 ulp of its ideal position; the bounds are
/// taken as `x[0]` and `x[N-1]`.
pub fn check_x_integrity(x: &[f64], half_width_ends: bool) -> Result<(), DataSetError> {
    let n = x.len();
    let required = minimum_points(half_width_ends);
    if n < required {
        return Err(DataSetError::TooFewPoints {
            required,
            actual: n,
        });
    }

    let lb = x[0];
    let ub = x[n - 1];
    if !(lb < ub) {
        return Err(DataSetError::InvalidBounds {
            lower: lb,
            upper: ub,
        });
    }

    let sep = bin_width_of(lb, ub, n, half_width_ends);
    let on_grid = |index: usize, expected: f64| {
        if approx_equals(x[index], expected) {
            Ok(())
        } else {
            Err(DataSetError::UnevenSpacing {
                index,
                expected,
                actual: x[index],
            })
        }
    };

    if half_width_ends {
        on_grid(1, lb + 0.5 * sep)?;
        on_grid(n - 2, ub - 0.5 * sep)?;
        for i in 2..(n - 2) {
            on_grid(i, lb + 0.5 * sep + (i - 1) as f64 * sep)?;
        }
    } else {
        for i in 0..n {
            on_grid(i, lb + i as f64 * sep)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn full_width_grid_has_uniform_spacing() {
        let x = generate_x_points(0.0, 1.0, 9, false).unwrap();
        assert_eq!(x.len(), 9);
        assert_eq!(x[0], 0.0);
        assert_eq!(x[8], 1.0);
        assert_eq!(x[1], 0.125);
        assert!(check_x_integrity(&x, false).is_ok());
    }

    #[test]
    fn half_width_grid_places_interior_points_at_bin_centres() {
        let x = generate_x_points(0.0, 1.0, 6, true).unwrap();
        // four regular bins of 0.25, two of them split across the ends
        assert_eq!(x[0], 0.0);
        assert_relative_eq!(x[1], 0.125);
        assert_relative_eq!(x[2], 0.375);
        assert_relative_eq!(x[4], 0.875);
        assert_eq!(x[5], 1.0);
        assert!(check_x_integrity(&x, true).is_ok());
    }

    #[test]
    fn rejects_inverted_bounds() {
        assert_eq!(
            generate_x_points(1.0, 1.0, 5, false),
            Err(DataSetError::InvalidBounds { lower: 1.0, upper: 1.0 })
        );
        assert!(check_x_integrity(&[2.0, 1.0, 0.0], false).is_err());
    }

    #[test]
    fn rejects_too_few_points() {
        assert_eq!(
            generate_x_points(0.0, 1.0, 3, true),
            Err(DataSetError::TooFewPoints { required: 4, actual: 3 })
        );
        assert!(matches!(
            check_x_integrity(&[0.0], false),
            Err(DataSetError::TooFewPoints { .. })
        ));
    }

    #[test]
    fn rejects_uneven_spacing() {
        let x = [0.0, 0.25, 0.6, 0.75, 1.0];
        assert!(matches!(
            check_x_integrity(&x, false),
            Err(DataSetError::UnevenSpacing { index: 2, .. })
        ));
    }

    #[test]
    fn full_width_grid_is_not_a_half_width_grid() {
        let x = generate_x_points(0.0, 1.0, 9, false).unwrap();
        assert!(check_x_integrity(&x, true).is_err());
    }
}
