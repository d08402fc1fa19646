//! Pointer proximity → per-item target transforms.
//!
//! The closer the pointer is to an item's rendered centre, the further the
//! item flips around its Y axis, grows, and slides outward along its own
//! ring angle. Only targets are written here; the tick loop owns the
//! current values.

use glam::Vec2;

use crate::animation::damping::{TransformState, TransformTarget};
use crate::options::ProximityOptions;
use crate::render::Bounds;

/// Y flip at full proximity, in degrees.
pub const MAX_FLIP_DEGREES: f32 = 180.0;
/// Extra scale at full proximity.
pub const SCALE_BOOST: f32 = 0.3;

/// Proximity response curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityField {
    sensitivity: f32,
    falloff: f32,
    move_amount: f32,
}

impl ProximityField {
    /// Field with explicit radii and push distance.
    #[must_use]
    pub fn new(sensitivity: f32, falloff: f32, move_amount: f32) -> Self {
        Self {
            sensitivity,
            falloff,
            move_amount,
        }
    }

    /// Field described by the proximity options.
    #[must_use]
    pub fn from_options(options: &ProximityOptions) -> Self {
        Self::new(options.sensitivity, options.falloff, options.move_amount)
    }

    /// Flip intensity in `[0, 1]` for a pointer `distance` away.
    ///
    /// Zero at or beyond `sensitivity`; inside it, `1 - distance/falloff`
    /// clamped at zero. The two radii are independent.
    #[must_use]
    pub fn flip_factor(&self, distance: f32) -> f32 {
        if distance < self.sensitivity {
            (1.0 - distance / self.falloff).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Target for an item at `angle` whose rendered centre is `center`.
    ///
    /// The outward push follows the item's ring angle, so a pointer sitting
    /// exactly on the centre is well defined.
    #[must_use]
    pub fn target(&self, pointer: Vec2, center: Vec2, angle: f32) -> TransformTarget {
        let flip = self.flip_factor(pointer.distance(center));
        TransformTarget {
            rotation: MAX_FLIP_DEGREES * flip,
            scale: 1.0 + SCALE_BOOST * flip,
            offset: Vec2::new(angle.cos(), angle.sin()) * (self.move_amount * flip),
        }
    }

    /// Retarget every item from the pointer position.
    ///
    /// `bounds` yields each item's current rendered bounds in the same
    /// coordinate space as `pointer`; items it cannot measure keep their
    /// previous targets. Returns how many items were retargeted.
    pub fn update_targets<F>(
        &self,
        states: &mut [TransformState],
        pointer: Vec2,
        mut bounds: F,
    ) -> usize
    where
        F: FnMut(usize) -> Option<Bounds>,
    {
        let mut updated = 0;
        for (index, state) in states.iter_mut().enumerate() {
            let Some(rect) = bounds(index) else {
                continue;
            };
            state.set_target(self.target(pointer, rect.center(), state.angle()));
            updated += 1;
        }
        updated
    }
}

/// Return every item to the neutral target.
pub fn reset_targets(states: &mut [TransformState]) {
    for state in states {
        state.set_target(TransformTarget::NEUTRAL);
    }
}
