//! Ring geometry: where each item sits and which content it shows.
//!
//! Everything here is a pure function of the item index and the
//! [`RingOptions`]; nothing is cached or mutated at runtime.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::options::RingOptions;

/// Fixed placement of one item on the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSlot {
    /// Item index in `0..N`.
    pub index: usize,
    /// Angle on the ring in radians, in `[0, 2π)`.
    pub angle: f32,
    /// Position relative to the ring centre.
    pub base_position: Vec2,
    /// Tangential orientation in degrees.
    pub base_rotation: f32,
}

/// Maps item indices to ring slots and content indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    item_count: usize,
    radius: f32,
    content_count: usize,
}

impl RingLayout {
    /// Layout for `item_count` items on a ring of `radius`, cycling through
    /// `content_count` contents.
    #[must_use]
    pub fn new(item_count: usize, radius: f32, content_count: usize) -> Self {
        Self {
            item_count,
            radius,
            content_count,
        }
    }

    /// Layout described by the ring options.
    #[must_use]
    pub fn from_options(ring: &RingOptions) -> Self {
        Self::new(ring.item_count, ring.radius, ring.content_count)
    }

    /// Number of items on the ring.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Ring radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Angle of item `index`: `2π·i/N`.
    #[must_use]
    pub fn angle(&self, index: usize) -> f32 {
        if self.item_count == 0 {
            return 0.0;
        }
        index as f32 / self.item_count as f32 * TAU
    }

    /// Placement of item `index`, or `None` when it is not on the ring.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<RingSlot> {
        (index < self.item_count).then(|| {
            let angle = self.angle(index);
            RingSlot {
                index,
                angle,
                base_position: base_position(angle, self.radius),
                base_rotation: base_rotation(angle),
            }
        })
    }

    /// Every slot in index order.
    pub fn slots(&self) -> impl Iterator<Item = RingSlot> + '_ {
        (0..self.item_count).filter_map(|i| self.slot(i))
    }

    /// Content shown by item `index`: `index mod C`.
    #[must_use]
    pub fn content_index(&self, index: usize) -> usize {
        if self.content_count == 0 {
            return 0;
        }
        index % self.content_count
    }
}

/// Position on a circle of `radius` at `angle`.
#[inline]
#[must_use]
pub fn base_position(angle: f32, radius: f32) -> Vec2 {
    Vec2::new(radius * angle.cos(), radius * angle.sin())
}

/// Degrees that orient an item tangentially at `angle`.
#[inline]
#[must_use]
pub fn base_rotation(angle: f32) -> f32 {
    angle.to_degrees() + 90.0
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    #[test]
    fn angles_are_evenly_spaced() {
        let layout = RingLayout::new(25, 275.0, 20);
        assert_eq!(layout.angle(0), 0.0);
        assert!((layout.angle(5) - 0.4 * PI).abs() < 1e-6);
        let step = TAU / 25.0;
        for i in 1..25 {
            let gap = layout.angle(i) - layout.angle(i - 1);
            assert!((gap - step).abs() < 1e-5);
        }
        assert!(layout.angle(24) < TAU);
    }

    #[test]
    fn slot_geometry() {
        let layout = RingLayout::new(4, 100.0, 4);
        let first = layout.slot(0).unwrap();
        assert_eq!(first.base_position, Vec2::new(100.0, 0.0));
        assert_eq!(first.base_rotation, 90.0);

        let quarter = layout.slot(1).unwrap();
        assert!(quarter.base_position.x.abs() < 1e-4);
        assert!((quarter.base_position.y - 100.0).abs() < 1e-4);
        assert!((quarter.base_rotation - 180.0).abs() < 1e-4);
    }

    #[test]
    fn out_of_range_slot_is_none() {
        let layout = RingLayout::new(25, 275.0, 20);
        assert!(layout.slot(25).is_none());
        assert_eq!(layout.slots().count(), 25);
    }

    #[test]
    fn content_mapping_wraps() {
        let layout = RingLayout::new(25, 275.0, 20);
        assert_eq!(layout.content_index(17), 17);
        assert_eq!(layout.content_index(22), 2);
        assert_eq!(layout.content_index(20), 0);
    }
}
