//! Centralized gallery parameters with TOML preset support.
//!
//! Every named parameter of the engine (ring geometry, proximity radii,
//! damping, transition timings, title reveal timings) lives here. The
//! `DEFAULT_*` constants in each section are the canonical values; options
//! serialize to/from TOML so alternative presets can be kept on disk.

mod focus;
mod motion;
mod proximity;
mod ring;
mod title;

use std::path::Path;

pub use focus::{FocusOptions, DEFAULT_FOCUS_SECS, DEFAULT_RESET_SECS};
pub use motion::{MotionOptions, DEFAULT_DAMPING};
pub use proximity::{
    ProximityOptions, DEFAULT_FALLOFF, DEFAULT_MOVE_AMOUNT, DEFAULT_SENSITIVITY,
};
pub use ring::{
    RingOptions, DEFAULT_CONTENT_COUNT, DEFAULT_INITIAL_PERSPECTIVE,
    DEFAULT_ITEM_COUNT, DEFAULT_PERSPECTIVE, DEFAULT_RADIUS,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use title::{
    TitleOptions, DEFAULT_HIDE_DELAY_SECS, DEFAULT_OFFSET_PERCENT,
    DEFAULT_REVEAL_DELAY_SECS, DEFAULT_STAGGER_SECS, DEFAULT_UNIT_SECS,
};

use crate::error::RondoError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[proximity]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Ring geometry.
    pub ring: RingOptions,
    /// Pointer proximity response.
    pub proximity: ProximityOptions,
    /// Per-tick smoothing.
    pub motion: MotionOptions,
    /// Focus/reset transition timing.
    pub focus: FocusOptions,
    /// Title reveal timing.
    pub title: TitleOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RondoError> {
        let content = std::fs::read_to_string(path).map_err(RondoError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, RondoError> {
        toml::from_str(content)
            .map_err(|e| RondoError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RondoError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RondoError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RondoError::Io)?;
        }
        std::fs::write(path, content).map_err(RondoError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Check every value the engine divides by, iterates over, or turns
    /// into a duration.
    pub fn validate(&self) -> Result<(), RondoError> {
        let ring = &self.ring;
        if ring.item_count == 0 {
            return Err(invalid("ring.item_count must be at least 1"));
        }
        if ring.content_count == 0 {
            return Err(invalid("ring.content_count must be at least 1"));
        }
        require_finite("ring.radius", ring.radius)?;
        require_positive("ring.perspective", ring.perspective)?;
        require_positive("ring.initial_perspective", ring.initial_perspective)?;
        for (name, value) in [
            ("ring.container_size[0]", ring.container_size[0]),
            ("ring.container_size[1]", ring.container_size[1]),
            ("ring.item_size[0]", ring.item_size[0]),
            ("ring.item_size[1]", ring.item_size[1]),
        ] {
            require_positive(name, value)?;
        }

        let prox = &self.proximity;
        require_non_negative("proximity.sensitivity", prox.sensitivity)?;
        require_positive("proximity.falloff", prox.falloff)?;
        require_finite("proximity.move_amount", prox.move_amount)?;

        let damping = self.motion.damping;
        if !(damping > 0.0 && damping <= 1.0) {
            return Err(invalid(format!(
                "motion.damping must be in (0, 1], got {damping}"
            )));
        }

        // Same ceilings the schema advertises
        for (name, value, max) in [
            ("focus.focus_secs", self.focus.focus_secs, MAX_TRANSITION_SECS),
            ("focus.reset_secs", self.focus.reset_secs, MAX_TRANSITION_SECS),
            ("title.reveal_delay_secs", self.title.reveal_delay_secs, MAX_DELAY_SECS),
            ("title.hide_delay_secs", self.title.hide_delay_secs, MAX_DELAY_SECS),
            ("title.unit_secs", self.title.unit_secs, MAX_UNIT_SECS),
            ("title.stagger_secs", self.title.stagger_secs, MAX_STAGGER_SECS),
        ] {
            require_non_negative(name, value)?;
            require_at_most(name, value, max)?;
        }
        require_finite("title.offset_percent", self.title.offset_percent)
    }
}

/// Longest accepted focus or reset transition, in seconds.
const MAX_TRANSITION_SECS: f32 = 10.0;
/// Longest accepted title reveal or hide delay, in seconds.
const MAX_DELAY_SECS: f32 = 5.0;
/// Longest accepted per-word reveal, in seconds.
const MAX_UNIT_SECS: f32 = 3.0;
/// Longest accepted stagger between words, in seconds.
const MAX_STAGGER_SECS: f32 = 1.0;

fn invalid(msg: impl Into<String>) -> RondoError {
    RondoError::InvalidOptions(msg.into())
}

fn require_finite(name: &str, value: f32) -> Result<(), RondoError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be finite, got {value}")))
    }
}

fn require_positive(name: &str, value: f32) -> Result<(), RondoError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be positive, got {value}")))
    }
}

fn require_at_most(name: &str, value: f32, max: f32) -> Result<(), RondoError> {
    if value <= max {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be at most {max}, got {value}")))
    }
}

fn require_non_negative(name: &str, value: f32) -> Result<(), RondoError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be non-negative, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn defaults_match_named_constants() {
        let opts = Options::default();
        assert_eq!(opts.ring.item_count, DEFAULT_ITEM_COUNT);
        assert_eq!(opts.ring.content_count, DEFAULT_CONTENT_COUNT);
        assert_eq!(opts.ring.radius, 275.0);
        assert_eq!(opts.proximity.sensitivity, 500.0);
        assert_eq!(opts.proximity.falloff, 250.0);
        assert_eq!(opts.proximity.move_amount, 50.0);
        assert_eq!(opts.motion.damping, 0.15);
        assert_eq!(opts.focus.focus_easing, EasingFunction::QuinticInOut);
        assert_eq!(opts.title.easing, EasingFunction::QuinticOut);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[proximity]
falloff = 120.0
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.proximity.falloff, 120.0);
        assert_eq!(opts.proximity.sensitivity, DEFAULT_SENSITIVITY);
        assert_eq!(opts.ring.item_count, DEFAULT_ITEM_COUNT);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[ring\nitem_count = 3").unwrap_err();
        assert!(matches!(err, RondoError::OptionsParse(_)));
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let mut opts = Options::default();
        opts.motion.damping = 0.0;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.motion.damping = 1.0;
        assert!(opts.validate().is_ok());

        let mut opts = Options::default();
        opts.ring.item_count = 0;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.proximity.falloff = 0.0;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.focus.reset_secs = -1.0;
        assert!(opts.validate().is_err());

        let mut opts = Options::default();
        opts.ring.radius = f32::NAN;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn validate_rejects_durations_past_schema_ceiling() {
        let mut opts = Options::default();
        opts.focus.focus_secs = 1.0e19;
        assert!(matches!(opts.validate(), Err(RondoError::InvalidOptions(_))));

        let mut opts = Options::default();
        opts.title.stagger_secs = 1.5;
        assert!(matches!(opts.validate(), Err(RondoError::InvalidOptions(_))));

        let mut opts = Options::default();
        opts.focus.reset_secs = 10.0;
        opts.title.unit_secs = 3.0;
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn falloff_larger_than_sensitivity_is_allowed() {
        let mut opts = Options::default();
        opts.proximity.falloff = 800.0;
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn durations_follow_seconds() {
        let opts = Options::default();
        assert_eq!(opts.focus.focus_duration().as_millis(), 2000);
        assert_eq!(opts.focus.reset_duration().as_millis(), 2500);
        assert_eq!(opts.title.reveal_delay().as_millis(), 1250);
        assert_eq!(opts.title.hide_delay().as_millis(), 500);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("rondo-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.ring.item_count = 12;
        opts.save(&dir.join("twelve.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let loaded = Options::load(&dir.join("twelve.toml")).unwrap();
        assert_eq!(loaded.ring.item_count, 12);
        assert_eq!(Options::list_presets(&dir), vec!["twelve".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        for section in ["ring", "proximity", "motion", "focus", "title"] {
            assert!(props.contains_key(section), "missing {section}");
        }

        let ring = &props["ring"]["properties"];
        assert!(ring.get("radius").is_some());
        assert!(ring.get("container_size").is_none());
    }
}
