//! Whole-ring transform and its tween.

use glam::Vec2;
use web_time::Instant;

use super::tween::Tween;

/// Transform applied to the entire ring as one rigid body.
///
/// Composition order about the container centre: scale, then rotate, then
/// translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupTransform {
    /// Uniform scale.
    pub scale: f32,
    /// Horizontal translation.
    pub translate_x: f32,
    /// Vertical translation.
    pub translate_y: f32,
    /// Rotation in degrees.
    pub rotation: f32,
}

impl GroupTransform {
    /// Unit scale, no translation, no rotation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        rotation: 0.0,
    };

    /// Component-wise interpolation; `t = 0` is `self`, `t = 1` is `other`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            scale: mix(self.scale, other.scale),
            translate_x: mix(self.translate_x, other.translate_x),
            translate_y: mix(self.translate_y, other.translate_y),
            rotation: mix(self.rotation, other.rotation),
        }
    }

    /// Map a point given relative to the ring centre into the same frame
    /// after this transform.
    #[must_use]
    pub fn apply(&self, point: Vec2) -> Vec2 {
        let rotated = Vec2::from_angle(self.rotation.to_radians()).rotate(point * self.scale);
        rotated + Vec2::new(self.translate_x, self.translate_y)
    }

    /// Whether this is exactly the identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for GroupTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A tween between two group transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupTween {
    timing: Tween,
    from: GroupTransform,
    to: GroupTransform,
}

impl GroupTween {
    /// Tween from `from` to `to` with the given timing.
    #[must_use]
    pub fn new(timing: Tween, from: GroupTransform, to: GroupTransform) -> Self {
        Self { timing, from, to }
    }

    /// Interpolated transform at `now`. Returns `to` exactly once complete.
    #[must_use]
    pub fn sample(&self, now: Instant) -> GroupTransform {
        if self.timing.is_complete(now) {
            return self.to;
        }
        self.from.lerp(&self.to, self.timing.eased(now))
    }

    /// Whether the tween has finished.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.timing.is_complete(now)
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;
    use crate::util::easing::EasingFunction;

    fn focused() -> GroupTransform {
        GroupTransform {
            scale: 5.0,
            translate_x: 0.0,
            translate_y: 1300.0,
            rotation: 198.0,
        }
    }

    #[test]
    fn lerp_endpoints() {
        let a = GroupTransform::IDENTITY;
        let b = focused();
        assert_eq!(a.lerp(&b, 0.0), a);
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.scale, 3.0);
        assert_eq!(mid.translate_y, 650.0);
    }

    #[test]
    fn sample_lands_exactly_on_target() {
        let start = Instant::now();
        let timing = Tween::new(start, Duration::from_millis(2500), EasingFunction::QuinticInOut);
        let tween = GroupTween::new(timing, focused(), GroupTransform::IDENTITY);

        let partway = tween.sample(start + Duration::from_millis(1000));
        assert!(!partway.is_identity());
        let done = tween.sample(start + Duration::from_millis(2500));
        assert!(done.is_identity());
    }

    #[test]
    fn apply_scales_rotates_translates() {
        let g = GroupTransform {
            scale: 2.0,
            translate_x: 10.0,
            translate_y: 0.0,
            rotation: 90.0,
        };
        let p = g.apply(Vec2::new(1.0, 0.0));
        assert!((p.x - 10.0).abs() < 1e-5);
        assert!((p.y - 2.0).abs() < 1e-5);
        assert_eq!(GroupTransform::IDENTITY.apply(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
    }
}
