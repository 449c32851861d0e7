use rayon::prelude::*;

use crate::math::dataset::dataset::DataSet;
use crate::math::integration::integrationerror::IntegrationError;
use crate::math::integration::integrationrule::IntegrationRule;
use crate::math::integration::integrationside::IntegrationSide;

// ─────────────────────────────────────────────────────────────────────────────
// 對外介面
// ─────────────────────────────────────────────────────────────────────────────
//
// 每個 rule 從 side 指定的一端開始，以固定大小的 block 消耗樣本點；
// 無法整除的剩餘點一定留在另一端，再以較低階的 rule 遞迴補完：
//
//   remainder 0 → 無
//   remainder 1 → trapezoidal（2 點）
//   remainder 2 → Simpson's（3 點，一個 block 剛好用完）
//   remainder 3 → Simpson's（4 點，一個 block + remainder 1 的 trapezoidal）
//
// 有 half-width ends 時，先以半步長 trapezoidal 積兩端的半寬 bin，
// 再把工作範圍左右各縮一點。

/// Integrates the whole data set with `rule`, consuming blocks from `side`.
///
/// Half-width end bins, if present, are integrated first with a half-step
/// trapezoidal estimate and the remaining interior goes through the rule.
pub fn integrate<D>(rule: IntegrationRule, data: &D, side: IntegrationSide) -> Result<f64, IntegrationError>
where
    D: DataSet + ?Sized,
{
    let (lb, ub) = usable_range(rule, data)?;
    let quadrature = Quadrature::new(data, Reduction::Sequential);
    Ok(quadrature.total(rule, side, lb, ub))
}

/// Integrates samples `lower..=upper` with `rule`, consuming blocks from
/// `side`.
///
/// The range is taken as is: no half-width end correction is applied.
pub fn integrate_range<D>(
    rule: IntegrationRule,
    data: &D,
    side: IntegrationSide,
    lower: usize,
    upper: usize,
) -> Result<f64, IntegrationError>
where
    D: DataSet + ?Sized,
{
    check_range(rule, data, lower, upper)?;
    let quadrature = Quadrature::new(data, Reduction::Sequential);
    Ok(quadrature.range(rule, side, lower, upper))
}

/// Interior index range left for `rule` after any half-width end trimming.
pub(crate) fn usable_range<D>(rule: IntegrationRule, data: &D) -> Result<(usize, usize), IntegrationError>
where
    D: DataSet + ?Sized,
{
    let n = data.num_points();
    let trimmed = if data.half_width_ends() { 2 } else { 0 };
    let available = n.saturating_sub(trimmed);
    if available < rule.min_points() {
        return Err(IntegrationError::InsufficientPoints {
            rule,
            required: rule.min_points(),
            available
        });
    }
    if data.half_width_ends() {
        Ok((1, n - 2))
    } else {
        Ok((0, n - 1))
    }
}

pub(crate) fn check_range<D>(rule: IntegrationRule, data: &D, lower: usize, upper: usize) -> Result<(), IntegrationError>
where
    D: DataSet + ?Sized,
{
    if upper <= lower {
        return Err(IntegrationError::InvalidRange { lower, upper });
    }
    let num_points = data.num_points();
    if upper >= num_points {
        return Err(IntegrationError::IndexOutOfBounds { upper, num_points });
    }
    let available = upper - lower + 1;
    if available < rule.min_points() {
        return Err(IntegrationError::InsufficientPoints {
            rule,
            required: rule.min_points(),
            available
        });
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// QuadratureResult
// ─────────────────────────────────────────────────────────────────────────────

/// Area of the whole blocks one rule pass managed to place, and the inclusive
/// index range those blocks cover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct QuadratureResult {
    area: f64,
    lower: usize,
    upper: usize,
}

impl QuadratureResult {
    pub(crate) fn area(&self) -> f64 {
        self.area
    }

    pub(crate) fn lower(&self) -> usize {
        self.lower
    }

    pub(crate) fn upper(&self) -> usize {
        self.upper
    }

    /// Samples at the far end of `lower..=upper` this pass did not reach; the
    /// shared hinge sample is included.
    pub(crate) fn gap(&self, side: IntegrationSide, lower: usize, upper: usize) -> (usize, usize) {
        match side {
            IntegrationSide::Left => (self.upper(), upper),
            IntegrationSide::Right => (lower, self.lower())
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quadrature
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub(crate) enum Reduction {
    Sequential,
    /// Sums of at least `threshold` terms are split across the rayon pool.
    Parallel { threshold: usize }
}

/// Stateless evaluation of the composite rules over one borrowed sample array.
pub(crate) struct Quadrature<'a> {
    points: &'a [f64],
    width: f64,
    half_width_ends: bool,
    reduction: Reduction,
}

impl<'a> Quadrature<'a> {
    pub(crate) fn new<D>(data: &'a D, reduction: Reduction) -> Quadrature<'a>
    where
        D: DataSet + ?Sized,
    {
        Quadrature {
            points: data.points(),
            width: data.bin_width(),
            half_width_ends: data.half_width_ends(),
            reduction
        }
    }

    /// Half-width end correction plus `rule` over `lb..=ub`.
    pub(crate) fn total(&self, rule: IntegrationRule, side: IntegrationSide, lb: usize, ub: usize) -> f64 {
        let ends = if self.half_width_ends {
            self.trapezoidal_ends()
        } else {
            0.0
        };
        ends + self.range(rule, side, lb, ub)
    }

    pub(crate) fn range(&self, rule: IntegrationRule, side: IntegrationSide, lb: usize, ub: usize) -> f64 {
        match rule {
            IntegrationRule::Trapezoidal => self.trapezoidal(lb, ub),
            IntegrationRule::Rectangular => self.blocks(rule, side, lb, ub).area(),
            IntegrationRule::Simpsons | IntegrationRule::Booles => self.newton_cotes(rule, side, lb, ub),
        }
    }

    /// The two half-width bins at either end of the data.
    fn trapezoidal_ends(&self) -> f64 {
        let n = self.points.len();
        let half_width = 0.5 * self.width;
        let sum = self.points[0] + self.points[1] + self.points[n - 2] + self.points[n - 1];
        sum * (0.5 * half_width)
    }

    fn trapezoidal(&self, lb: usize, ub: usize) -> f64 {
        let points = self.points;
        let ends = 0.5 * points[lb] + 0.5 * points[ub];
        let interior = self.reduce(ub - lb - 1, |k| points[lb + 1 + k]);
        (ends + interior) * self.width
    }

    /// Full blocks of `rule` starting from `side`, then the unaligned far end.
    fn newton_cotes(&self, rule: IntegrationRule, side: IntegrationSide, lb: usize, ub: usize) -> f64 {
        let covered = self.blocks(rule, side, lb, ub);
        let (gap_lb, gap_ub) = covered.gap(side, lb, ub);
        covered.area() + self.finish(side, gap_lb, gap_ub)
    }

    /// Weighted sum over every whole block that fits in `lb..=ub`.
    pub(crate) fn blocks(&self, rule: IntegrationRule, side: IntegrationSide, lb: usize, ub: usize) -> QuadratureResult {
        let weights = match rule.block_weights() {
            Some(weights) => weights,
            None => {
                return QuadratureResult {
                    area: self.trapezoidal(lb, ub),
                    lower: lb,
                    upper: ub
                };
            }
        };
        let size = weights.len();
        let increment = rule.increment();
        let n_blocks = (ub - lb) / increment;
        let span = increment * n_blocks;

        let points = self.points;
        let block_sum = |start: usize| -> f64 {
            weights
                .iter()
                .zip(&points[start..start + size])
                .map(|(w, p)| w * p)
                .sum::<f64>()
        };
        let sum = match side {
            IntegrationSide::Left => self.reduce(n_blocks, |k| block_sum(lb + k * increment)),
            IntegrationSide::Right => self.reduce(n_blocks, |k| block_sum(ub - k * increment - (size - 1)))
        };
        let area = sum * rule.factor() * self.width;

        match side {
            IntegrationSide::Left => QuadratureResult { area, lower: lb, upper: lb + span },
            IntegrationSide::Right => QuadratureResult { area, lower: ub - span, upper: ub }
        }
    }

    /// Covers the samples a higher-order pass left over.
    ///
    /// The gap is always narrower than a Boole's block, so only remainders
    /// 0 to 3 can reach here. Remainder 3 goes back through Simpson's rule,
    /// which places one block and hands its own remainder of 1 to the
    /// trapezoidal rule, instead of using a dedicated 3/8 rule.
    fn finish(&self, side: IntegrationSide, lb: usize, ub: usize) -> f64 {
        match ub - lb {
            0 => 0.0,
            1 => self.trapezoidal(lb, ub),
            2 | 3 => self.newton_cotes(IntegrationRule::Simpsons, side, lb, ub),
            remainder => panic!(
                "integration left {} unfinished intervals between indices {} and {}",
                remainder, lb, ub
            ),
        }
    }

    fn reduce<F>(&self, n: usize, term: F) -> f64
    where
        F: Fn(usize) -> f64 + Send + Sync,
    {
        match self.reduction {
            Reduction::Parallel { threshold } if n >= threshold => {
                (0..n).into_par_iter().map(term).sum()
            }
            _ => (0..n).map(term).sum(),
        }
    }
}
