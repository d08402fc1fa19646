use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fraction of the remaining gap closed on each tick.
pub const DEFAULT_DAMPING: f32 = 0.15;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// Per-tick smoothing.
pub struct MotionOptions {
    /// Damping factor in (0, 1].
    #[schemars(title = "Damping", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
        }
    }
}
