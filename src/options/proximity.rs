use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Hard cutoff: items at or beyond this distance never flip.
pub const DEFAULT_SENSITIVITY: f32 = 500.0;
/// Distance over which the flip factor falls from 1 to 0.
pub const DEFAULT_FALLOFF: f32 = 250.0;
/// Radial push applied at full flip.
pub const DEFAULT_MOVE_AMOUNT: f32 = 50.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Proximity", inline)]
#[serde(default)]
/// Pointer proximity response.
///
/// `sensitivity` and `falloff` are independent radii: the first gates the
/// effect, the second scales it.
pub struct ProximityOptions {
    /// Cutoff radius.
    #[schemars(title = "Sensitivity", range(min = 0.0, max = 2000.0), extend("step" = 10.0))]
    pub sensitivity: f32,
    /// Falloff radius.
    #[schemars(title = "Falloff", range(min = 1.0, max = 2000.0), extend("step" = 10.0))]
    pub falloff: f32,
    /// Outward push at full flip.
    #[schemars(title = "Move Amount", range(min = 0.0, max = 300.0), extend("step" = 1.0))]
    pub move_amount: f32,
}

impl Default for ProximityOptions {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            falloff: DEFAULT_FALLOFF,
            move_amount: DEFAULT_MOVE_AMOUNT,
        }
    }
}
