use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// DataSetError
// ─────────────────────────────────────────────────────────────────────────────

/// Construction-time failures for data sets and analytic curves.
///
/// An object is either fully constructed or one of these is returned; there is
/// no partially valid state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataSetError {
    #[error("x and f(x) must have the same length (got {x_len} and {fx_len})")]
    LengthMismatch { x_len: usize, fx_len: usize },

    #[error("need at least {required} points, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error("upper bound {upper} must be greater than lower bound {lower}")]
    InvalidBounds { lower: f64, upper: f64 },

    #[error("x[{index}] = {actual} is off the uniform grid (expected {expected})")]
    UnevenSpacing { index: usize, expected: f64, actual: f64 },

    #[error("composite curve needs at least one component")]
    EmptyComposite,

    #[error("expected {expected} coefficients, got {actual}")]
    CoefficientCountMismatch { expected: usize, actual: usize },

    #[error("component curve {index} does not share the grid of the first component")]
    MismatchedComponents { index: usize },

    #[error("invalid value {value} for parameter '{name}'")]
    InvalidParameter { name: &'static str, value: f64 },
}

// ─────────────────────────────────────────────────────────────────────────────
// DataSet
// ─────────────────────────────────────────────────────────────────────────────

/// A finite, uniformly spaced set of samples f(x) that can be numerically
/// integrated.
///
/// Implementors only expose their x grid, their samples and the half-width
/// flag; bounds and spacing are derived from those.
pub trait DataSet: Send + Sync {
    /// Sample locations along x.
    fn x(&self) -> &[f64];

    /// Sampled values f(x), same length as [`DataSet::x`].
    fn points(&self) -> &[f64];

    /// Whether the first and last bins are half the regular width.
    fn half_width_ends(&self) -> bool;

    fn lower_bound(&self) -> f64 {
        self.x()[0]
    }

    fn upper_bound(&self) -> f64 {
        self.x()[self.x().len() - 1]
    }

    fn num_points(&self) -> usize {
        self.points().len()
    }

    /// Regular spacing between samples.
    ///
    /// With half-width ends the two boundary bins together cover one regular
    /// bin, so the span is divided by `N - 2` instead of `N - 1`.
    fn bin_width(&self) -> f64 {
        bin_width_of(
            self.lower_bound(),
            self.upper_bound(),
            self.num_points(),
            self.half_width_ends(),
        )
    }

    fn point(&self, index: usize) -> Option<f64> {
        self.points().get(index).copied()
    }

    /// Owned copy of the samples.
    fn all_points(&self) -> Vec<f64> {
        self.points().to_vec()
    }
}

pub(crate) fn bin_width_of(lower: f64, upper: f64, num_points: usize, half_width_ends: bool) -> f64 {
    let divisor = if half_width_ends {
        num_points - 2
    } else {
        num_points - 1
    };
    (upper - lower) / divisor as f64
}
