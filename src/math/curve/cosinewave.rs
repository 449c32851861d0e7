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

/// f(x) = a·cos(j·x).
pub struct CosineWave {
    samples: CurveSamples,
    a: f64,
    j: f64,
    jinv: f64,
}

impl CosineWave {
    pub fn new(x: &[f64], half_width_ends: bool, a: f64, j: f64) -> Result<CosineWave, DataSetError> {
        let a = check_finite("amplitude", a)?;
        let j = check_non_zero("frequency", j)?;
        let samples = CurveSamples::sample(x, half_width_ends, |xi| a * (j * xi).cos())?;
        Ok(CosineWave {
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

impl DataSet for CosineWave {
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

impl AnalyticCurve for CosineWave {
    fn value_at(&self, x: f64) -> f64 {
        self.a * (self.j * x).cos()
    }

    // ∫a·cos(jx) = a/j·sin(jx)
    fn integral_at(&self, x: f64) -> f64 {
        self.a * self.jinv * (self.j * x).sin()
    }
}

impl fmt::Display for CosineWave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cosine wave f(x) = {}*cos({}x){}", self.a, self.j, self.samples.describe())
    }
}
