//! Render surface over DOM elements.

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::animation::GroupTransform;
use crate::render::{Bounds, ItemTransform, RenderSurface};

/// [`RenderSurface`] over the ring container's element children.
///
/// Item `i` is the container's `i`-th element child. Bounds come from
/// `getBoundingClientRect`, relative to the container's own rect, so they
/// share the pointer's coordinate space.
#[derive(Debug, Clone)]
pub struct DomSurface {
    container: HtmlElement,
}

impl DomSurface {
    /// Surface over `container`.
    #[must_use]
    pub fn new(container: HtmlElement) -> Self {
        Self { container }
    }

    fn item(&self, index: usize) -> Option<HtmlElement> {
        let index = u32::try_from(index).ok()?;
        self.container.children().item(index)?.dyn_into().ok()
    }

    fn set_transform(element: &HtmlElement, transform: &str) {
        if let Err(e) = element.style().set_property("transform", transform) {
            log::warn!("failed to set transform: {e:?}");
        }
    }
}

/// CSS transform for an item, in the order the browser composes it.
pub(crate) fn item_css(t: &ItemTransform) -> String {
    format!(
        "perspective({}px) translate({}px, {}px) rotate({}deg) rotateY({}deg) scale({})",
        t.perspective, t.position.x, t.position.y, t.rotation_z, t.rotation_y, t.scale
    )
}

/// CSS transform for the whole ring.
pub(crate) fn group_css(t: &GroupTransform) -> String {
    format!(
        "translate({}px, {}px) rotate({}deg) scale({})",
        t.translate_x, t.translate_y, t.rotation, t.scale
    )
}

impl RenderSurface for DomSurface {
    fn has_item(&self, index: usize) -> bool {
        self.item(index).is_some()
    }

    fn item_bounds(&self, index: usize) -> Option<Bounds> {
        let item = self.item(index)?.get_bounding_client_rect();
        let origin = self.container.get_bounding_client_rect();
        let bounds = Bounds::from_origin(
            (item.left() - origin.left()) as f32,
            (item.top() - origin.top()) as f32,
            item.width() as f32,
            item.height() as f32,
        );
        (bounds.size() != Vec2::ZERO).then_some(bounds)
    }

    fn apply_item(&mut self, transform: &ItemTransform) {
        if let Some(element) = self.item(transform.index) {
            Self::set_transform(&element, &item_css(transform));
        }
    }

    fn apply_group(&mut self, transform: &GroupTransform) {
        Self::set_transform(&self.container, &group_css(transform));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_css_composes_in_render_order() {
        let css = item_css(&ItemTransform {
            index: 0,
            position: Vec2::new(275.0, -10.5),
            rotation_y: 45.0,
            scale: 1.25,
            rotation_z: 90.0,
            perspective: 1000.0,
        });
        assert_eq!(
            css,
            "perspective(1000px) translate(275px, -10.5px) rotate(90deg) rotateY(45deg) scale(1.25)"
        );
    }

    #[test]
    fn identity_group_css() {
        assert_eq!(
            group_css(&GroupTransform::IDENTITY),
            "translate(0px, 0px) rotate(0deg) scale(1)"
        );
    }
}
