//! Easing functions for tween interpolation.
//!
//! Provides the easing curves used by group transitions and title reveals.
//! All functions are designed for <100ns evaluation time.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Quintic ease-out: 1 - (1-t)⁵. Sharp start, long settle.
    QuinticOut,
    /// Quintic ease-in-out: symmetric, very slow at both ends.
    QuinticInOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control value.
        c1: f32,
        /// Second control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing for whole-ring transitions.
    pub const DEFAULT: EasingFunction = EasingFunction::QuinticInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::QuinticOut => 1.0 - (1.0 - t).powi(5),
            EasingFunction::QuinticInOut => {
                if t < 0.5 {
                    (2.0 * t).powi(5) / 2.0
                } else {
                    1.0 - (2.0 * (1.0 - t)).powi(5) / 2.0
                }
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }

    /// Nearest CSS `transition-timing-function` for hosts that let the
    /// browser run the curve.
    #[must_use]
    pub fn css_timing(&self) -> String {
        match self {
            EasingFunction::Linear => "linear".to_owned(),
            EasingFunction::QuadraticIn => "cubic-bezier(0.11, 0, 0.5, 0)".to_owned(),
            EasingFunction::QuadraticOut => "cubic-bezier(0.5, 1, 0.89, 1)".to_owned(),
            EasingFunction::QuinticOut => "cubic-bezier(0.22, 1, 0.36, 1)".to_owned(),
            EasingFunction::QuinticInOut => "cubic-bezier(0.83, 0, 0.17, 1)".to_owned(),
            // Hermite with these control values is a 1D Bézier at x = 1/3, 2/3
            EasingFunction::CubicHermite { c1, c2 } => {
                format!("cubic-bezier(0.333, {c1}, 0.667, {c2})")
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_quintic_in_out_is_symmetric() {
        let ease = EasingFunction::QuinticInOut;
        assert_eq!(ease.evaluate(0.0), 0.0);
        assert_eq!(ease.evaluate(1.0), 1.0);
        assert!((ease.evaluate(0.5) - 0.5).abs() < 1e-6);
        for i in 1..10 {
            let t = i as f32 / 10.0;
            let mirrored = 1.0 - ease.evaluate(1.0 - t);
            assert!((ease.evaluate(t) - mirrored).abs() < 1e-5);
        }
        // Slow start: barely moved after a fifth of the duration
        assert!(ease.evaluate(0.2) < 0.01);
    }

    #[test]
    fn test_quintic_out_shape() {
        let ease = EasingFunction::QuinticOut;
        assert_eq!(ease.evaluate(0.0), 0.0);
        assert_eq!(ease.evaluate(1.0), 1.0);
        // 1 - 0.5^5
        assert!((ease.evaluate(0.5) - 0.968_75).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_hermite_endpoints() {
        let hermite = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(0.0), 0.0);
        assert!((hermite.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let quint = EasingFunction::QuinticInOut;
        assert_eq!(quint.evaluate(-0.5), 0.0);
        assert_eq!(quint.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_quadratic_curves() {
        assert_eq!(EasingFunction::QuadraticIn.evaluate(0.5), 0.25);
        assert_eq!(EasingFunction::QuadraticOut.evaluate(0.5), 0.75);
    }

    #[test]
    fn test_default_is_quintic_in_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::QuinticInOut);
    }

    #[test]
    fn test_serde_names_are_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            easing: EasingFunction,
        }
        let parsed: Wrapper = toml::from_str("easing = \"quintic_out\"").unwrap();
        assert_eq!(parsed.easing, EasingFunction::QuinticOut);
    }

    #[test]
    fn test_css_timing() {
        assert_eq!(EasingFunction::Linear.css_timing(), "linear");
        assert!(EasingFunction::QuinticOut.css_timing().starts_with("cubic-bezier("));
        let hermite = EasingFunction::CubicHermite { c1: 0.5, c2: 1.0 };
        assert_eq!(hermite.css_timing(), "cubic-bezier(0.333, 0.5, 0.667, 1)");
    }
}
