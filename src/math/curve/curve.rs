use std::fmt;

use crate::math::dataset::dataset::{
    DataSet,
    DataSetError
};
use crate::math::dataset::doublesdataset::DoublesDataSet;
use crate::math::dataset::xpoints::check_x_integrity;

/// A data set sampled from a closed-form function whose antiderivative is
/// known, used to check numerical integration against an exact answer.
pub trait AnalyticCurve: DataSet + fmt::Display {
    /// f(x).
    fn value_at(&self, x: f64) -> f64;

    /// Antiderivative F(x), up to an arbitrary constant.
    fn integral_at(&self, x: f64) -> f64;

    /// Exact integral of f over `[lb, ub]`.
    fn analytical_integral_between(&self, lb: f64, ub: f64) -> f64 {
        self.integral_at(ub) - self.integral_at(lb)
    }

    /// Exact integral of f over the sampled range.
    fn analytical_integral(&self) -> f64 {
        self.analytical_integral_between(self.lower_bound(), self.upper_bound())
    }

    /// Copies the samples into a plain data set that no longer knows f.
    fn to_data_set(&self) -> Result<DoublesDataSet, DataSetError> {
        DoublesDataSet::from_slices(self.x(), self.points(), self.half_width_ends())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CurveSamples
// ─────────────────────────────────────────────────────────────────────────────

/// x grid plus the f(x) values a curve evaluated on it at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveSamples {
    x: Vec<f64>,
    points: Vec<f64>,
    half_width_ends: bool
}

impl CurveSamples {
    /// Validates the grid, then evaluates `f` once per x.
    pub fn sample<F>(x: &[f64], half_width_ends: bool, f: F) -> Result<CurveSamples, DataSetError>
    where
        F: Fn(f64) -> f64,
    {
        check_x_integrity(x, half_width_ends)?;
        let points = x.iter().map(|&xi| f(xi)).collect();
        Ok(CurveSamples {
            x: x.to_vec(),
            points,
            half_width_ends
        })
    }

    /// Wraps values that were already computed on an already validated grid.
    pub(crate) fn from_parts(x: Vec<f64>, points: Vec<f64>, half_width_ends: bool) -> CurveSamples {
        CurveSamples { x, points, half_width_ends }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn half_width_ends(&self) -> bool {
        self.half_width_ends
    }

    /// Trailing part of every curve's `Display` output.
    pub(crate) fn describe(&self) -> String {
        let mut result = format!(
            " with {} points from lower bound {:.3} and upper bound {:.3}",
            self.points.len(),
            self.x[0],
            self.x[self.x.len() - 1]
        );
        if self.half_width_ends {
            result.push_str(" and half-width start/end bins");
        }
        result
    }
}

pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64, DataSetError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DataSetError::InvalidParameter { name, value })
    }
}

pub(crate) fn check_non_zero(name: &'static str, value: f64) -> Result<f64, DataSetError> {
    if value.is_finite() && value != 0.0 {
        Ok(value)
    } else {
        Err(DataSetError::InvalidParameter { name, value })
    }
}
