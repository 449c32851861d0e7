use std::fmt;

use crate::math::curve::curve::{
    check_finite,
    check_non_zero,
    AnalyticCurve,
    CurveSamples
};
use crate::math::dataset::dataset::{
    DataSet,
    DataSetError
};

/// f(x) = a·sin(j·x).
pub struct SineWave {
    samples: CurveSamples,
    a: f64,
    j: f64,
    jinv: f64,
}

impl SineWave {
    pub fn new(x: &[f64], half_width_ends: bool, a: f64, j: f64) -> Result<SineWave, DataSetError> {
        let a = check_finite("amplitude", a)?;
        let j = check_non_zero("frequency", j)?;
        let samples = CurveSamples::sample(x, half_width_ends, |xi| a * (j * xi).sin())?;
        Ok(SineWave {
            samples,
            a,
            j,
            jinv: 1.0 / j
        })
    }

    pub fn amplitude(&self) -> f64 {
        self.a
    }

    pub fn frequency(&self) -> f64 {
        self.j
    }
}

impl DataSet for SineWave {
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

impl AnalyticCurve for SineWave {
    fn value_at(&self, x: f64) -> f64 {
        self.a * (self.j * x).sin()
    }

    // ∫a·sin(jx) = -a/j·cos(jx)
    fn integral_at(&self, x: f64) -> f64 {
        -self.a * self.jinv * (self.j * x).cos()
    }
}

impl fmt::Display for SineWave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sine wave f(x) = {}*sin({}x){}", self.a, self.j, self.samples.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::math::dataset::xpoints::generate_x_points;

    #[test]
    fn integral_over_unit_interval() {
        let x = generate_x_points(0.0, 1.0, 201, false).unwrap();
        let wave = SineWave::new(&x, false, 10.0, 6.0).unwrap();
        let exact = 10.0 / 6.0 * (1.0 - 6.0_f64.cos());
        assert_relative_eq!(wave.analytical_integral(), exact, max_relative = 1e-14);
    }

    #[test]
    fn samples_are_a_sin_jx() {
        let x = generate_x_points(0.0, 1.0, 11, true).unwrap();
        let wave = SineWave::new(&x, true, 2.0, 3.0).unwrap();
        for (i, &xi) in x.iter().enumerate() {
            assert_eq!(wave.point(i), Some(2.0 * (3.0 * xi).sin()));
        }
        assert_eq!(wave.bin_width(), 1.0 / 9.0);
    }

    #[test]
    fn zero_frequency_is_rejected() {
        let x = generate_x_points(0.0, 1.0, 5, false).unwrap();
        assert!(matches!(
            SineWave::new(&x, false, 1.0, 0.0),
            Err(DataSetError::InvalidParameter { name: "frequency", .. })
        ));
    }

    #[test]
    fn display() {
        let x = generate_x_points(0.0, 1.0, 5, false).unwrap();
        let wave = SineWave::new(&x, false, 10.0, 6.0).unwrap();
        assert!(wave.to_string().starts_with("Sine wave f(x) = 10*sin(6x) with 5 points"));
    }
}
