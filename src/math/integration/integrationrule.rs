use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

const SIMPSON_WEIGHTS: [f64; 3] = [1.0, 4.0, 1.0];
const BOOLE_WEIGHTS: [f64; 5] = [7.0, 32.0, 12.0, 32.0, 7.0];
const RECTANGULAR_WEIGHTS: [f64; 1] = [1.0];

const ONE_THIRD: f64 = 1.0 / 3.0;
const BOOLE_FACTOR: f64 = 2.0 / 45.0;

/// Closed Newton–Cotes rules available to the integrator.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum IntegrationRule {
    Rectangular,
    Trapezoidal,
    Simpsons,
    Booles
}

impl IntegrationRule {
    pub const ALL: [IntegrationRule; 4] = [
        IntegrationRule::Rectangular,
        IntegrationRule::Trapezoidal,
        IntegrationRule::Simpsons,
        IntegrationRule::Booles
    ];

    /// Samples touched by one application of the rule.
    pub fn points_per_block(&self) -> usize {
        match self {
            IntegrationRule::Rectangular => 1,
            IntegrationRule::Trapezoidal => 2,
            IntegrationRule::Simpsons => 3,
            IntegrationRule::Booles => 5
        }
    }

    /// Intervals advanced between consecutive blocks. Adjacent blocks share
    /// their boundary sample, except for the one-point rectangular block.
    pub fn increment(&self) -> usize {
        usize::max(1, self.points_per_block() - 1)
    }

    /// Fewest usable samples a top-level call accepts.
    pub fn min_points(&self) -> usize {
        usize::max(2, self.points_per_block())
    }

    /// Per-block weights for rules applied block by block; the trapezoidal
    /// rule is applied once over the whole range and has none.
    pub fn block_weights(&self) -> Option<&'static [f64]> {
        match self {
            IntegrationRule::Rectangular => Some(&RECTANGULAR_WEIGHTS),
            IntegrationRule::Trapezoidal => None,
            IntegrationRule::Simpsons => Some(&SIMPSON_WEIGHTS),
            IntegrationRule::Booles => Some(&BOOLE_WEIGHTS)
        }
    }

    /// Multiplier applied, together with the bin width, to the weighted sum.
    pub fn factor(&self) -> f64 {
        match self {
            IntegrationRule::Rectangular | IntegrationRule::Trapezoidal => 1.0,
            IntegrationRule::Simpsons => ONE_THIRD,
            IntegrationRule::Booles => BOOLE_FACTOR
        }
    }
}

impl fmt::Display for IntegrationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntegrationRule::Rectangular => "rectangular",
            IntegrationRule::Trapezoidal => "trapezoidal",
            IntegrationRule::Simpsons => "Simpson's",
            IntegrationRule::Booles => "Boole's"
        };
        write!(f, "{}", name)
    }
}
