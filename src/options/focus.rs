use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::util::easing::EasingFunction;

/// Duration of the click-to-focus group tween.
pub const DEFAULT_FOCUS_SECS: f32 = 2.0;
/// Duration of the click-to-reset group tween.
pub const DEFAULT_RESET_SECS: f32 = 2.5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Focus", inline)]
#[serde(default)]
/// Timing of the whole-ring focus and reset transitions.
pub struct FocusOptions {
    /// Focus tween duration in seconds.
    #[schemars(title = "Focus Duration", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub focus_secs: f32,
    /// Focus tween easing.
    #[schemars(skip)]
    pub focus_easing: EasingFunction,
    /// Reset tween duration in seconds.
    #[schemars(title = "Reset Duration", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub reset_secs: f32,
    /// Reset tween easing.
    #[schemars(skip)]
    pub reset_easing: EasingFunction,
}

impl FocusOptions {
    /// Focus tween duration.
    #[must_use]
    pub fn focus_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.focus_secs).unwrap_or(Duration::ZERO)
    }

    /// Reset tween duration.
    #[must_use]
    pub fn reset_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.reset_secs).unwrap_or(Duration::ZERO)
    }
}

impl Default for FocusOptions {
    fn default() -> Self {
        Self {
            focus_secs: DEFAULT_FOCUS_SECS,
            focus_easing: EasingFunction::QuinticInOut,
            reset_secs: DEFAULT_RESET_SECS,
            reset_easing: EasingFunction::QuinticInOut,
        }
    }
}
