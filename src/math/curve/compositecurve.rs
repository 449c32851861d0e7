use std::fmt;
use std::sync::Arc;

use crate::math::curve::curve::{
    check_finite,
    AnalyticCurve,
    CurveSamples
};
use crate::math::dataset::dataset::{
    DataSet,
    DataSetError
};

/// Weighted sum of analytic curves sampled on one shared grid.
///
/// Components are shared, not copied: the same `Arc` can sit in several
/// composites or in a curve catalogue at the same time.
pub struct CompositeCurve {
    samples: CurveSamples,
    curves: Vec<Arc<dyn AnalyticCurve>>,
    coefs: Vec<f64>,
}

impl CompositeCurve {
    /// Builds Σ c_k·f_k. Without `coefficients` every weight is 1.0.
    ///
    /// All components must agree exactly on bounds, bin width, point count
    /// and the half-width flag.
    pub fn new(
        curves: Vec<Arc<dyn AnalyticCurve>>,
        coefficients: Option<Vec<f64>>,
    ) -> Result<CompositeCurve, DataSetError> {
        let n_curves = curves.len();
        let curve0 = curves.first().ok_or(DataSetError::EmptyComposite)?;

        let coefs = match coefficients {
            Some(coefs) if coefs.len() != n_curves => {
                return Err(DataSetError::CoefficientCountMismatch {
                    expected: n_curves,
                    actual: coefs.len()
                });
            }
            Some(coefs) => coefs,
            None => vec![1.0; n_curves],
        };
        for &c in &coefs {
            check_finite("coefficient", c)?;
        }

        let lb = curve0.lower_bound();
        let ub = curve0.upper_bound();
        let half_width_ends = curve0.half_width_ends();
        let sep = curve0.bin_width();
        let n_points = curve0.num_points();
        let mismatch = curves.iter().position(|c| {
            c.lower_bound() != lb
                || c.upper_bound() != ub
                || c.half_width_ends() != half_width_ends
                || c.num_points() != n_points
                || c.bin_width() != sep
        });
        if let Some(index) = mismatch {
            return Err(DataSetError::MismatchedComponents { index });
        }

        let points = (0..n_points)
            .map(|i| {
                curves
                    .iter()
                    .zip(coefs.iter())
                    .fold(0.0, |total, (curve, &c)| total + c * curve.points()[i])
            })
            .collect();
        let samples = CurveSamples::from_parts(curve0.x().to_vec(), points, half_width_ends);

        Ok(CompositeCurve {
            samples,
            curves,
            coefs
        })
    }

    pub fn sub_curves(&self) -> &[Arc<dyn AnalyticCurve>] {
        &self.curves
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefs
    }

    fn weighted_sum<F>(&self, f: F) -> f64
    where
        F: Fn(&dyn AnalyticCurve) -> f64,
    {
        self.curves
            .iter()
            .zip(self.coefs.iter())
            .fold(0.0, |total, (curve, &c)| total + c * f(curve.as_ref()))
    }
}

impl DataSet for CompositeCurve {
    fn x(&self) -> &[f64] {
        self.samples.x()
    }

    fn points(&self) -> &[f64] {
        self.samples.points()
    }

    fn half_width_ends(&self) -> bool {
        self.samples.half_width_ends()
    }
}

impl AnalyticCurve for CompositeCurve {
    fn value_at(&self, x: f64) -> f64 {
        self.weighted_sum(|curve| curve.value_at(x))
    }

    fn integral_at(&self, x: f64) -> f64 {
        self.weighted_sum(|curve| curve.integral_at(x))
    }
}

impl fmt::Display for CompositeCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Composite curve of {} components{}", self.curves.len(), self.samples.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::math::curve::cosinewave::CosineWave;
    use crate::math::curve::polynomialcurve::PolynomialCurve;
    use crate::math::curve::sinewave::SineWave;
    use crate::math::dataset::xpoints::generate_x_points;

    fn standard_components(x: &[f64]) -> Vec<Arc<dyn AnalyticCurve>> {
        vec![
            Arc::new(SineWave::new(x, false, 10.0, 6.0).unwrap()),
            Arc::new(CosineWave::new(x, false, 7.0, 5.0).unwrap()),
            Arc::new(SineWave::new(x, false, 11.0, 8.0).unwrap()),
        ]
    }

    #[test]
    fn unit_weights_sum_components() {
        let x = generate_x_points(0.0, 1.0, 201, false).unwrap();
        let components = standard_components(&x);
        let composite = CompositeCurve::new(components.clone(), None).unwrap();

        assert_eq!(composite.coefficients(), &[1.0, 1.0, 1.0]);
        let expected: f64 = components.iter().map(|c| c.analytical_integral()).sum();
        assert_relative_eq!(composite.analytical_integral(), expected, max_relative = 1e-14);

        let xi = x[37];
        let value: f64 = components.iter().map(|c| c.value_at(xi)).sum();
        assert_relative_eq!(composite.value_at(xi), value, max_relative = 1e-14);
        assert_relative_eq!(composite.points()[37], value, max_relative = 1e-14);
    }

    #[test]
    fn explicit_weights_scale_components() {
        let x = generate_x_points(0.0, 1.0, 9, false).unwrap();
        let constant: Arc<dyn AnalyticCurve> = Arc::new(PolynomialCurve::new(&x, false, &[1.0]).unwrap());
        let linear: Arc<dyn AnalyticCurve> = Arc::new(PolynomialCurve::new(&x, false, &[0.0, 2.0]).unwrap());
        let composite = CompositeCurve::new(vec![constant, linear], Some(vec![3.0, -0.5])).unwrap();
        // 3 - x over [0, 1]
        assert_eq!(composite.analytical_integral(), 2.5);
        assert_eq!(composite.point(8), Some(2.0));
    }

    #[test]
    fn components_are_shared() {
        let x = generate_x_points(0.0, 1.0, 9, false).unwrap();
        let wave: Arc<dyn AnalyticCurve> = Arc::new(SineWave::new(&x, false, 1.0, 1.0).unwrap());
        let first = CompositeCurve::new(vec![wave.clone()], None).unwrap();
        let second = CompositeCurve::new(vec![wave.clone(), wave.clone()], None).unwrap();
        assert_eq!(Arc::strong_count(&wave), 4);
        assert_eq!(first.sub_curves().len(), 1);
        assert_eq!(second.points()[4], 2.0 * first.points()[4]);
    }

    #[test]
    fn mismatched_bounds_are_rejected() {
        let unit = generate_x_points(0.0, 1.0, 9, false).unwrap();
        let wide = generate_x_points(0.0, 2.0, 9, false).unwrap();
        let curves: Vec<Arc<dyn AnalyticCurve>> = vec![
            Arc::new(SineWave::new(&unit, false, 1.0, 1.0).unwrap()),
            Arc::new(SineWave::new(&wide, false, 1.0, 1.0).unwrap()),
        ];
        assert!(matches!(
            CompositeCurve::new(curves, None),
            Err(DataSetError::MismatchedComponents { index: 1 })
        ));
    }

    #[test]
    fn mismatched_half_width_flag_is_rejected() {
        let full = generate_x_points(0.0, 1.0, 10, false).unwrap();
        let half = generate_x_points(0.0, 1.0, 10, true).unwrap();
        let curves: Vec<Arc<dyn AnalyticCurve>> = vec![
            Arc::new(CosineWave::new(&full, false, 1.0, 1.0).unwrap()),
            Arc::new(CosineWave::new(&half, true, 1.0, 1.0).unwrap()),
        ];
        assert!(matches!(
            CompositeCurve::new(curves, None),
            Err(DataSetError::MismatchedComponents { index: 1 })
        ));
    }

    #[test]
    fn empty_and_miscounted_inputs_are_rejected() {
        assert!(matches!(
            CompositeCurve::new(Vec::new(), None),
            Err(DataSetError::EmptyComposite)
        ));
        let x = generate_x_points(0.0, 1.0, 9, false).unwrap();
        assert!(matches!(
            CompositeCurve::new(standard_components(&x), Some(vec![1.0])),
            Err(DataSetError::CoefficientCountMismatch { expected: 3, actual: 1 })
        ));
    }
}
