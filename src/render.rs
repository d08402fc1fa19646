//! Render commands and the surface they are applied to.
//!
//! The engine never touches a concrete scene graph. It asks a
//! [`RenderSurface`] where each item currently is on screen and hands it one
//! [`ItemTransform`] per item per tick plus a [`GroupTransform`] for the
//! whole ring. Surface handles are index-addressable: item `i` is always
//! handle `i`.

use glam::Vec2;

use crate::animation::GroupTransform;

/// Axis-aligned rectangle in container-relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Top-left corner.
    pub min: Vec2,
    /// Bottom-right corner.
    pub max: Vec2,
}

impl Bounds {
    /// Rectangle of `size` centred on `center`.
    #[must_use]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Rectangle from its left/top corner and size.
    #[must_use]
    pub fn from_origin(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(left, top),
            max: Vec2::new(left + width, top + height),
        }
    }

    /// Midpoint.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Width and height.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Per-item render command emitted every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTransform {
    /// Item index (surface handle).
    pub index: usize,
    /// Position relative to the ring centre: base position plus offset.
    pub position: Vec2,
    /// Y-axis flip in degrees.
    pub rotation_y: f32,
    /// Uniform scale.
    pub scale: f32,
    /// Fixed tangential orientation in degrees.
    pub rotation_z: f32,
    /// Perspective depth.
    pub perspective: f32,
}

/// A host capable of drawing 2.5D transforms for each ring item.
pub trait RenderSurface {
    /// Whether item `index` is mounted and can receive transforms.
    fn has_item(&self, index: usize) -> bool;

    /// Current rendered bounds of item `index` (after every transform,
    /// including the group transform), or `None` if it is not mounted.
    fn item_bounds(&self, index: usize) -> Option<Bounds>;

    /// Apply an item transform.
    fn apply_item(&mut self, transform: &ItemTransform);

    /// Apply the whole-ring transform.
    fn apply_group(&mut self, transform: &GroupTransform);
}

/// In-memory surface for headless hosts and tests.
///
/// Keeps the last transform applied to each item and computes rendered
/// bounds the way a browser would report them: the group transform is
/// applied about the container centre, and the item's extent accounts for
/// its scale, Y flip and Z rotation.
#[derive(Debug, Clone)]
pub struct SceneSurface {
    container_size: Vec2,
    item_size: Vec2,
    items: Vec<Option<ItemTransform>>,
    ready: Vec<bool>,
    group: GroupTransform,
    item_commands: u64,
    group_commands: u64,
}

impl SceneSurface {
    /// Surface with `item_count` mounted items.
    #[must_use]
    pub fn new(item_count: usize, container_size: Vec2, item_size: Vec2) -> Self {
        Self {
            container_size,
            item_size,
            items: vec![None; item_count],
            ready: vec![true; item_count],
            group: GroupTransform::IDENTITY,
            item_commands: 0,
            group_commands: 0,
        }
    }

    /// Mark item `index` as mounted or not.
    pub fn set_ready(&mut self, index: usize, ready: bool) {
        if let Some(slot) = self.ready.get_mut(index) {
            *slot = ready;
        }
    }

    /// Last transform applied to item `index`.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&ItemTransform> {
        self.items.get(index).and_then(Option::as_ref)
    }

    /// Last group transform applied.
    #[must_use]
    pub fn group(&self) -> GroupTransform {
        self.group
    }

    /// Centre of the container, where the ring is anchored.
    #[must_use]
    pub fn container_center(&self) -> Vec2 {
        self.container_size * 0.5
    }

    /// Total item commands received.
    #[must_use]
    pub fn item_commands(&self) -> u64 {
        self.item_commands
    }

    /// Total group commands received.
    #[must_use]
    pub fn group_commands(&self) -> u64 {
        self.group_commands
    }
}

impl RenderSurface for SceneSurface {
    fn has_item(&self, index: usize) -> bool {
        self.ready.get(index).copied().unwrap_or(false)
    }

    fn item_bounds(&self, index: usize) -> Option<Bounds> {
        if !self.has_item(index) {
            return None;
        }
        let item = self.item(index)?;
        let center = self.container_center() + self.group.apply(item.position);

        let scale = item.scale * self.group.scale;
        let half_w = 0.5 * self.item_size.x * scale * item.rotation_y.to_radians().cos().abs();
        let half_h = 0.5 * self.item_size.y * scale;
        let (sin, cos) = (item.rotation_z + self.group.rotation).to_radians().sin_cos();
        let extent = Vec2::new(
            half_w * cos.abs() + half_h * sin.abs(),
            half_w * sin.abs() + half_h * cos.abs(),
        );
        Some(Bounds::from_center(center, extent * 2.0))
    }

    fn apply_item(&mut self, transform: &ItemTransform) {
        if let Some(slot) = self.items.get_mut(transform.index) {
            *slot = Some(*transform);
            self.item_commands += 1;
        }
    }

    fn apply_group(&mut self, transform: &GroupTransform) {
        self.group = *transform;
        self.group_commands += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_at(index: usize, position: Vec2) -> ItemTransform {
        ItemTransform {
            index,
            position,
            rotation_y: 0.0,
            scale: 1.0,
            rotation_z: 0.0,
            perspective: 1000.0,
        }
    }

    #[test]
    fn bounds_centre_and_size() {
        let b = Bounds::from_origin(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.center(), Vec2::new(25.0, 40.0));
        assert_eq!(b.size(), Vec2::new(30.0, 40.0));
        assert_eq!(Bounds::from_center(b.center(), b.size()), b);
    }

    #[test]
    fn unplaced_or_unready_items_have_no_bounds() {
        let mut surface = SceneSurface::new(2, Vec2::splat(600.0), Vec2::new(45.0, 60.0));
        assert!(surface.item_bounds(0).is_none());

        surface.apply_item(&item_at(0, Vec2::new(100.0, 0.0)));
        assert!(surface.item_bounds(0).is_some());

        surface.set_ready(0, false);
        assert!(surface.item_bounds(0).is_none());
        assert!(surface.item_bounds(5).is_none());
    }

    #[test]
    fn bounds_follow_group_transform() {
        let mut surface = SceneSurface::new(1, Vec2::splat(600.0), Vec2::new(45.0, 60.0));
        surface.apply_item(&item_at(0, Vec2::new(100.0, 0.0)));
        assert_eq!(surface.item_bounds(0).unwrap().center(), Vec2::new(400.0, 300.0));

        surface.apply_group(&GroupTransform {
            scale: 2.0,
            translate_x: 0.0,
            translate_y: 50.0,
            rotation: 0.0,
        });
        let b = surface.item_bounds(0).unwrap();
        assert_eq!(b.center(), Vec2::new(500.0, 350.0));
        assert!((b.size().x - 90.0).abs() < 1e-3);
        assert!((b.size().y - 120.0).abs() < 1e-3);
    }

    #[test]
    fn quarter_turn_swaps_extents() {
        let mut surface = SceneSurface::new(1, Vec2::splat(600.0), Vec2::new(45.0, 60.0));
        let mut item = item_at(0, Vec2::ZERO);
        item.rotation_z = 90.0;
        surface.apply_item(&item);
        let size = surface.item_bounds(0).unwrap().size();
        assert!((size.x - 60.0).abs() < 1e-3);
        assert!((size.y - 45.0).abs() < 1e-3);
    }

    #[test]
    fn commands_are_counted() {
        let mut surface = SceneSurface::new(1, Vec2::splat(600.0), Vec2::ONE);
        surface.apply_item(&item_at(0, Vec2::ZERO));
        surface.apply_item(&item_at(3, Vec2::ZERO));
        surface.apply_group(&GroupTransform::IDENTITY);
        assert_eq!(surface.item_commands(), 1);
        assert_eq!(surface.group_commands(), 1);
    }
}
