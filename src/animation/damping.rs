//! Per-item transform state and first-order exponential smoothing.
//!
//! Each tick closes a fixed fraction of the gap between the current and
//! target value of every channel:
//!
//! ```text
//! current += (target - current) * damping
//! ```
//!
//! With a constant target the gap shrinks by `(1 - damping)` per tick. There
//! is no snap: the current value approaches the target but only equals it
//! when it started equal (or when `damping == 1`).

use glam::Vec2;

/// Target values written by the proximity engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformTarget {
    /// Y flip in degrees.
    pub rotation: f32,
    /// Uniform scale (≥ 1).
    pub scale: f32,
    /// Offset from the base position.
    pub offset: Vec2,
}

impl TransformTarget {
    /// No flip, unit scale, no offset.
    pub const NEUTRAL: Self = Self {
        rotation: 0.0,
        scale: 1.0,
        offset: Vec2::ZERO,
    };
}

impl Default for TransformTarget {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// One smoothing step for a single channel.
#[inline]
#[must_use]
pub fn damp(current: f32, target: f32, damping: f32) -> f32 {
    current + (target - current) * damping
}

/// Smoothed transform of a single ring item.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformState {
    angle: f32,
    current: TransformTarget,
    target: TransformTarget,
}

impl TransformState {
    /// Neutral state for an item fixed at `angle`.
    #[must_use]
    pub fn new(angle: f32) -> Self {
        Self {
            angle,
            current: TransformTarget::NEUTRAL,
            target: TransformTarget::NEUTRAL,
        }
    }

    /// The item's ring angle (never changes).
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Current smoothed values.
    #[must_use]
    pub fn current(&self) -> TransformTarget {
        self.current
    }

    /// Values the item is converging toward.
    #[must_use]
    pub fn target(&self) -> TransformTarget {
        self.target
    }

    /// Replace the target. Current values are left untouched.
    pub fn set_target(&mut self, target: TransformTarget) {
        self.target = target;
    }

    /// Overwrite current values (mount-time seeding and tests).
    pub fn set_current(&mut self, current: TransformTarget) {
        self.current = current;
    }

    /// Advance every channel by one tick.
    pub fn step(&mut self, damping: f32) {
        let (c, t) = (&mut self.current, &self.target);
        c.rotation = damp(c.rotation, t.rotation, damping);
        c.scale = damp(c.scale, t.scale, damping);
        c.offset.x = damp(c.offset.x, t.offset.x, damping);
        c.offset.y = damp(c.offset.y, t.offset.y, damping);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-3 * b.abs().max(1.0)
    }

    #[test]
    fn recurrence_matches_closed_form() {
        let mut state = TransformState::new(0.0);
        state.set_target(TransformTarget {
            rotation: 180.0,
            scale: 1.3,
            offset: Vec2::new(50.0, -20.0),
        });

        for k in 1..=60 {
            state.step(0.15);
            let decay = 0.85_f32.powi(k);
            let c = state.current();
            assert!(close(c.rotation, 180.0 + (0.0 - 180.0) * decay), "k={k}");
            assert!(close(c.scale, 1.3 + (1.0 - 1.3) * decay), "k={k}");
            assert!(close(c.offset.x, 50.0 - 50.0 * decay), "k={k}");
            assert!(close(c.offset.y, -20.0 + 20.0 * decay), "k={k}");
        }
    }

    #[test]
    fn never_snaps_to_target() {
        let mut state = TransformState::new(0.0);
        state.set_target(TransformTarget {
            rotation: 180.0,
            ..TransformTarget::NEUTRAL
        });
        for _ in 0..30 {
            state.step(0.15);
            assert!(state.current().rotation < 180.0);
        }
    }

    #[test]
    fn equal_start_stays_put() {
        let mut state = TransformState::new(1.0);
        state.step(0.15);
        assert_eq!(state.current(), TransformTarget::NEUTRAL);
    }

    #[test]
    fn channels_are_independent() {
        let mut state = TransformState::new(0.0);
        state.set_target(TransformTarget {
            rotation: 90.0,
            ..TransformTarget::NEUTRAL
        });
        state.step(0.5);
        let c = state.current();
        assert_eq!(c.rotation, 45.0);
        assert_eq!(c.scale, 1.0);
        assert_eq!(c.offset, Vec2::ZERO);
    }

    #[test]
    fn set_target_leaves_current_and_angle() {
        let mut state = TransformState::new(2.5);
        state.set_target(TransformTarget {
            rotation: 10.0,
            scale: 1.1,
            offset: Vec2::ONE,
        });
        assert_eq!(state.current(), TransformTarget::NEUTRAL);
        assert_eq!(state.angle(), 2.5);
    }
}
