use std::fmt;
use std::ops::RangeInclusive;

use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

use crate::math::curve::cosinewave::CosineWave;
use crate::math::curve::curve::AnalyticCurve;
use crate::math::curve::sinewave::SineWave;
use crate::math::dataset::dataset::DataSetError;
use crate::math::integration::integrationerror::IntegrationError;
use crate::math::integration::integrationrule::IntegrationRule;
use crate::math::integration::integrationside::IntegrationSide;
use crate::math::integration::integrator::integrate;
use crate::math::integration::parallelintegrator::{
    integrate_parallel,
    ParallelConfig
};
use crate::math::ulp::{
    approx_equals_ulps,
    ulps_from
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DirectorError {
    #[error(transparent)]
    DataSet(#[from] DataSetError),

    #[error(transparent)]
    Integration(#[from] IntegrationError),
}

// ─────────────────────────────────────────────────────────────────────────────
// IntegrationReport
// ─────────────────────────────────────────────────────────────────────────────

/// One numerical estimate next to the exact integral it should approach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationReport {
    rule: IntegrationRule,
    side: IntegrationSide,
    numerical: f64,
    analytical: f64,
}

impl IntegrationReport {
    pub fn new(rule: IntegrationRule, side: IntegrationSide, numerical: f64, analytical: f64) -> IntegrationReport {
        IntegrationReport {
            rule,
            side,
            numerical,
            analytical
        }
    }

    pub fn rule(&self) -> IntegrationRule {
        self.rule
    }

    pub fn side(&self) -> IntegrationSide {
        self.side
    }

    pub fn numerical(&self) -> f64 {
        self.numerical
    }

    pub fn analytical(&self) -> f64 {
        self.analytical
    }

    /// Signed error, numerical minus analytical.
    pub fn error(&self) -> f64 {
        self.numerical - self.analytical
    }

    /// Error measured in ulps of the analytical value.
    pub fn ulps(&self) -> f64 {
        ulps_from(self.analytical, self.numerical)
    }

    pub fn within_ulps(&self, ulp_mult: f64) -> bool {
        approx_equals_ulps(self.analytical, self.numerical, ulp_mult)
    }

    pub fn exceeds(&self, max_delta: f64) -> bool {
        self.error().abs() > max_delta
    }
}

impl fmt::Display for IntegrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: numerical {:.9e}, analytical {:.9e}, error {:.3e} ({:.1} ulps)",
            self.side,
            self.rule,
            self.numerical,
            self.analytical,
            self.error(),
            self.ulps()
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Frequency scans
// ─────────────────────────────────────────────────────────────────────────────

/// Family of test waves j·sin(j·x) or j·cos(j·x), indexed by j.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveFamily {
    Sine,
    Cosine
}

impl WaveFamily {
    /// Member `j` of the family sampled on `x`; amplitude and frequency are
    /// both `j`.
    pub fn member(&self, x: &[f64], half_width_ends: bool, j: u32) -> Result<Box<dyn AnalyticCurve>, DataSetError> {
        let j = j as f64;
        let curve: Box<dyn AnalyticCurve> = match self {
            WaveFamily::Sine => Box::new(SineWave::new(x, half_width_ends, j, j)?),
            WaveFamily::Cosine => Box::new(CosineWave::new(x, half_width_ends, j, j)?)
        };
        Ok(curve)
    }
}

/// First member of a wave family whose error under (`rule`, `side`) went
/// past the bound, if any did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyScan {
    pub rule: IntegrationRule,
    pub side: IntegrationSide,
    pub first_exceeding: Option<u32>,
}

// ─────────────────────────────────────────────────────────────────────────────
// IntegrationDirector
// ─────────────────────────────────────────────────────────────────────────────

/// Runs a fixed set of (rule, side) combinations against analytic curves and
/// compares each estimate with the exact integral.
#[derive(Debug, Clone)]
pub struct IntegrationDirector {
    rules: Vec<IntegrationRule>,
    sides: Vec<IntegrationSide>,
    parallel: Option<ParallelConfig>,
}

impl IntegrationDirector {
    pub fn new(rules: Vec<IntegrationRule>, sides: Vec<IntegrationSide>) -> IntegrationDirector {
        IntegrationDirector {
            rules,
            sides,
            parallel: None
        }
    }

    /// Every rule from both sides.
    pub fn all() -> IntegrationDirector {
        IntegrationDirector::new(IntegrationRule::ALL.to_vec(), IntegrationSide::ALL.to_vec())
    }

    /// Routes every estimate through the parallel integrator.
    pub fn with_parallel(mut self, config: ParallelConfig) -> IntegrationDirector {
        self.parallel = Some(config);
        self
    }

    pub fn combinations(&self) -> Vec<(IntegrationRule, IntegrationSide)> {
        self.rules
            .iter()
            .flat_map(|&rule| self.sides.iter().map(move |&side| (rule, side)))
            .collect()
    }

    fn estimate<C>(&self, rule: IntegrationRule, curve: &C, side: IntegrationSide) -> Result<f64, IntegrationError>
    where
        C: AnalyticCurve + ?Sized,
    {
        match &self.parallel {
            Some(config) => integrate_parallel(rule, curve, side, config),
            None => integrate(rule, curve, side)
        }
    }

    /// One report per combination, in [`IntegrationDirector::combinations`]
    /// order.
    pub fn evaluate<C>(&self, curve: &C) -> Result<Vec<IntegrationReport>, IntegrationError>
    where
        C: AnalyticCurve + ?Sized,
    {
        let analytical = curve.analytical_integral();
        self.combinations()
            .into_iter()
            .map(|(rule, side)| -> Result<IntegrationReport, IntegrationError> {
                let numerical = self.estimate(rule, curve, side)?;
                Ok(IntegrationReport::new(rule, side, numerical, analytical))
            })
            .collect()
    }

    /// Reports whose estimate is not within `ulp_mult` ulps of the exact
    /// integral.
    pub fn failures<C>(&self, curve: &C, ulp_mult: f64) -> Result<Vec<IntegrationReport>, IntegrationError>
    where
        C: AnalyticCurve + ?Sized,
    {
        let reports = self.evaluate(curve)?;
        Ok(reports
            .into_iter()
            .filter(|report| !report.within_ulps(ulp_mult))
            .collect())
    }

    /// Walks `frequencies` in order and records, per combination, the first
    /// member of `family` whose absolute error exceeds `max_delta`.
    ///
    /// Stops early once every combination has been recorded.
    pub fn first_exceeding_frequency(
        &self,
        family: WaveFamily,
        x: &[f64],
        half_width_ends: bool,
        frequencies: RangeInclusive<u32>,
        max_delta: f64,
    ) -> Result<Vec<FrequencyScan>, DirectorError> {
        let mut scans: Vec<FrequencyScan> = self
            .combinations()
            .into_iter()
            .map(|(rule, side)| FrequencyScan { rule, side, first_exceeding: None })
            .collect();

        for j in frequencies {
            if scans.iter().all(|scan| scan.first_exceeding.is_some()) {
                break;
            }
            let wave = family.member(x, half_width_ends, j)?;
            let reports = self.evaluate(wave.as_ref())?;
            for (scan, report) in scans.iter_mut().zip(reports.iter()) {
                if scan.first_exceeding.is_none() && report.exceeds(max_delta) {
                    scan.first_exceeding = Some(j);
                }
            }
        }
        Ok(scans)
    }
}
