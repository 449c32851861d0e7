use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

/// End of the sample range a rule starts consuming from.
///
/// Whatever does not divide evenly into the rule's blocks is left at the
/// opposite end and finished with lower-order rules there.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum IntegrationSide {
    /// Start at the first sample and move forward.
    Left,
    /// Start at the last sample and move backward.
    Right
}

impl IntegrationSide {
    pub const ALL: [IntegrationSide; 2] = [IntegrationSide::Left, IntegrationSide::Right];
}

impl fmt::Display for IntegrationSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrationSide::Left => write!(f, "left"),
            IntegrationSide::Right => write!(f, "right")
        }
    }
}
