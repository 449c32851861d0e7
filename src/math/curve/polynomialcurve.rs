use std::fmt;

use crate::math::curve::curve::{
    check_finite,
    AnalyticCurve,
    CurveSamples
};
use crate::math::dataset::dataset::{
    DataSet,
    DataSetError
};

/// f(x) = Σ c_i·x^i, sampled on a uniform grid.
///
/// Coefficients are given in ascending order of power, so `[1.5, -4.0, 1.0]`
/// is x² - 4x + 1.5.
pub struct PolynomialCurve {
    samples: CurveSamples,
    coefs: Vec<f64>,
    /// c_i / (i + 1): antiderivative coefficients, one power shifted.
    integral_coefs: Vec<f64>,
}

impl PolynomialCurve {
    pub fn new(x: &[f64], half_width_ends: bool, coefficients: &[f64]) -> Result<PolynomialCurve, DataSetError> {
        for &c in coefficients {
            check_finite("coefficient", c)?;
        }
        let coefs = coefficients.to_vec();
        let integral_coefs = Self::compute_integral_coefs(&coefs);
        let samples = CurveSamples::sample(x, half_width_ends, |xi| Self::evaluate(&coefs, xi))?;
        Ok(PolynomialCurve {
            samples,
            coefs,
            integral_coefs
        })
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefs
    }

    /// Highest power with a coefficient, 0 for constants and the empty polynomial.
    pub fn degree(&self) -> usize {
        self.coefs.len().saturating_sub(1)
    }

    fn compute_integral_coefs(coefs: &[f64]) -> Vec<f64> {
        coefs
            .iter()
            .enumerate()
            .map(|(i, &c)| c / (i + 1) as f64)
            .collect()
    }

    /// Horner evaluation, highest power first.
    fn evaluate(coefs: &[f64], x: f64) -> f64 {
        coefs
            .iter()
            .rev()
            .fold(0.0, |result, &c| f64::mul_add(result, x, c))
    }
}

impl DataSet for PolynomialCurve {
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

impl AnalyticCurve for PolynomialCurve {
    fn value_at(&self, x: f64) -> f64 {
        Self::evaluate(&self.coefs, x)
    }

    fn integral_at(&self, x: f64) -> f64 {
        x * Self::evaluate(&self.integral_coefs, x)
    }
}

impl fmt::Display for PolynomialCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polynomial curve of degree {}{}", self.degree(), self.samples.describe())?;
        let coefs: Vec<String> = self.coefs.iter().map(|c| c.to_string()).collect();
        write!(f, ".\nCoefficients: {}", coefs.join(","))
    }
}
