use serde::{
    Deserialize,
    Serialize
};

use crate::math::dataset::dataset::DataSet;
use crate::math::integration::integrationerror::IntegrationError;
use crate::math::integration::integrationrule::IntegrationRule;
use crate::math::integration::integrationside::IntegrationSide;
use crate::math::integration::integrator::{
    check_range,
    usable_range,
    Quadrature,
    Reduction
};

fn default_parallel_threshold() -> usize {
    ParallelConfig::DEFAULT_THRESHOLD
}

/// Tuning for the data-parallel integrator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelConfig {
    /// Smallest number of summed terms worth splitting across threads;
    /// shorter sums run sequentially.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl ParallelConfig {
    pub const DEFAULT_THRESHOLD: usize = 4096;

    pub fn new(parallel_threshold: usize) -> ParallelConfig {
        ParallelConfig { parallel_threshold }
    }

    fn reduction(&self) -> Reduction {
        Reduction::Parallel {
            threshold: self.parallel_threshold
        }
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        ParallelConfig::new(ParallelConfig::DEFAULT_THRESHOLD)
    }
}

/// Same result as [`integrate`](crate::math::integration::integrator::integrate),
/// with the block sums reduced on the rayon pool.
///
/// Partial sums are combined in a different order than the sequential pass,
/// so the two do not agree bit for bit. On data of one sign the results stay
/// within about 80 ulps of each other. When the samples change sign the
/// partial sums cancel, and the gap measured in ulps of the (small) result can
/// reach several hundred; it stays bounded relative to the integral of `|f|`.
pub fn integrate_parallel<D>(
    rule: IntegrationRule,
    data: &D,
    side: IntegrationSide,
    config: &ParallelConfig,
) -> Result<f64, IntegrationError>
where
    D: DataSet + ?Sized,
{
    let (lb, ub) = usable_range(rule, data)?;
    let quadrature = Quadrature::new(data, config.reduction());
    Ok(quadrature.total(rule, side, lb, ub))
}

/// Parallel counterpart of
/// [`integrate_range`](crate::math::integration::integrator::integrate_range).
pub fn integrate_range_parallel<D>(
    rule: IntegrationRule,
    data: &D,
    side: IntegrationSide,
    lower: usize,
    upper: usize,
    config: &ParallelConfig,
) -> Result<f64, IntegrationError>
where
    D: DataSet + ?Sized,
{
    check_range(rule, data, lower, upper)?;
    let quadrature = Quadrature::new(data, config.reduction());
    Ok(quadrature.range(rule, side, lower, upper))
}
