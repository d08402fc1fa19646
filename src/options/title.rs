use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::util::easing::EasingFunction;

/// Delay between the focus tween start and the title reveal.
pub const DEFAULT_REVEAL_DELAY_SECS: f32 = 1.25;
/// Delay between the reset tween start and the title hide.
pub const DEFAULT_HIDE_DELAY_SECS: f32 = 0.5;
/// Duration of a single word's slide.
pub const DEFAULT_UNIT_SECS: f32 = 0.75;
/// Extra start offset per successive word.
pub const DEFAULT_STAGGER_SECS: f32 = 0.1;
/// Vertical travel of a word, as a percentage of its own height.
pub const DEFAULT_OFFSET_PERCENT: f32 = 125.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Title", inline)]
#[serde(default)]
/// Timing handed to the title reveal collaborator.
pub struct TitleOptions {
    /// Reveal start delay in seconds.
    #[schemars(title = "Reveal Delay", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub reveal_delay_secs: f32,
    /// Hide start delay in seconds.
    #[schemars(title = "Hide Delay", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub hide_delay_secs: f32,
    /// Per-word slide duration in seconds.
    #[schemars(title = "Word Duration", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub unit_secs: f32,
    /// Per-word stagger in seconds.
    #[schemars(title = "Stagger", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub stagger_secs: f32,
    /// Slide distance in percent of word height.
    #[schemars(skip)]
    pub offset_percent: f32,
    /// Per-word easing.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl TitleOptions {
    /// Reveal start delay.
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::try_from_secs_f32(self.reveal_delay_secs).unwrap_or(Duration::ZERO)
    }

    /// Hide start delay.
    #[must_use]
    pub fn hide_delay(&self) -> Duration {
        Duration::try_from_secs_f32(self.hide_delay_secs).unwrap_or(Duration::ZERO)
    }
}

impl Default for TitleOptions {
    fn default() -> Self {
        Self {
            reveal_delay_secs: DEFAULT_REVEAL_DELAY_SECS,
            hide_delay_secs: DEFAULT_HIDE_DELAY_SECS,
            unit_secs: DEFAULT_UNIT_SECS,
            stagger_secs: DEFAULT_STAGGER_SECS,
            offset_percent: DEFAULT_OFFSET_PERCENT,
            easing: EasingFunction::QuinticOut,
        }
    }
}
