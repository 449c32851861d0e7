use thiserror::Error;

use crate::math::integration::integrationrule::IntegrationRule;

/// Input shapes the integrator refuses.
///
/// These are deterministic functions of the input; the same call always fails
/// the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrationError {
    #[error("index range [{lower}, {upper}] is empty")]
    InvalidRange { lower: usize, upper: usize },

    #[error("upper index {upper} is past the last of {num_points} points")]
    IndexOutOfBounds { upper: usize, num_points: usize },

    #[error("{rule} integration needs at least {required} points, {available} available")]
    InsufficientPoints {
        rule: IntegrationRule,
        required: usize,
        available: usize
    },
}
