//! The gallery engine.
//!
//! [`Gallery`] ties the ring layout, the proximity field, per-item damping
//! and the focus state machine to a host's render surface and title
//! effect. Its methods are split by concern:
//!
//! - `accessors` - read-only queries
//! - `input` - [`Gallery::handle_event`]
//! - `animation` - [`Gallery::tick`]
//! - `runtime` - [`start_loop`], driving a shared gallery from a
//!   [`FrameDriver`](crate::scheduler::FrameDriver)

mod accessors;
mod animation;
mod input;
mod runtime;

use glam::Vec2;

pub use self::animation::TickReport;
pub use self::input::EventOutcome;
pub use self::runtime::start_loop;
use crate::animation::TransformState;
use crate::error::RondoError;
use crate::focus::FocusMachine;
use crate::layout::{base_position, base_rotation, RingLayout};
use crate::options::Options;
use crate::proximity::ProximityField;
use crate::render::{ItemTransform, RenderSurface, SceneSurface};
use crate::title::{LogTitles, TitleCatalog, TitleRevealer};
use crate::util::frame_timing::FrameTiming;

/// The ring gallery engine.
///
/// Owns the per-item transform states, the focus state machine, the render
/// surface and the title collaborator. Hosts feed it [`InputEvent`]s via
/// [`handle_event`](Self::handle_event) and call [`tick`](Self::tick) once
/// per display frame; everything runs on the caller's thread.
///
/// [`InputEvent`]: crate::InputEvent
pub struct Gallery<S, T: TitleRevealer> {
    /// Parameters the gallery was built with.
    options: Options,
    /// Ring geometry.
    layout: RingLayout,
    /// Pointer proximity response.
    field: ProximityField,
    /// One state per ring item, in index order.
    states: Vec<TransformState>,
    /// Focus/reset transitions and the revealed title.
    focus: FocusMachine<T::Handle>,
    /// Content titles.
    catalog: TitleCatalog,
    /// Where render commands go.
    surface: S,
    /// Title reveal collaborator.
    titles: T,
    /// Smoothed frame rate.
    timing: FrameTiming,
    /// Summary of the most recent tick.
    last_tick: TickReport,
}

impl<S: RenderSurface, T: TitleRevealer> Gallery<S, T> {
    /// Build a gallery and place every mounted item at its base position.
    ///
    /// Fails if the options are out of range or the catalogue has fewer
    /// titles than `ring.content_count`.
    pub fn new(
        options: Options,
        catalog: TitleCatalog,
        surface: S,
        titles: T,
    ) -> Result<Self, RondoError> {
        options.validate()?;
        catalog.ensure_covers(options.ring.content_count)?;

        let layout = RingLayout::from_options(&options.ring);
        let states = layout
            .slots()
            .map(|slot| TransformState::new(slot.angle))
            .collect();

        let mut gallery = Self {
            layout,
            field: ProximityField::from_options(&options.proximity),
            states,
            focus: FocusMachine::new(options.focus.clone(), options.title.clone()),
            catalog,
            surface,
            titles,
            timing: FrameTiming::new(),
            last_tick: TickReport::default(),
            options,
        };
        gallery.place_items();
        log::info!(
            "gallery mounted: {} items, radius {}, {} contents",
            gallery.layout.item_count(),
            gallery.layout.radius(),
            gallery.options.ring.content_count
        );
        Ok(gallery)
    }

    /// Mount-time placement: base position and orientation, no flip.
    fn place_items(&mut self) {
        let perspective = self.options.ring.initial_perspective;
        for slot in self.layout.slots() {
            if !self.surface.has_item(slot.index) {
                log::debug!("item {} not mounted yet, placed on first tick", slot.index);
                continue;
            }
            self.surface.apply_item(&ItemTransform {
                index: slot.index,
                position: slot.base_position,
                rotation_y: 0.0,
                scale: 1.0,
                rotation_z: slot.base_rotation,
                perspective,
            });
        }
    }

    /// Render command for item `index` from its current state.
    fn item_transform(&self, index: usize, state: &TransformState) -> ItemTransform {
        let angle = state.angle();
        let current = state.current();
        ItemTransform {
            index,
            position: base_position(angle, self.layout.radius()) + current.offset,
            rotation_y: current.rotation,
            scale: current.scale,
            rotation_z: base_rotation(angle),
            perspective: self.options.ring.perspective,
        }
    }

    /// Release the title, abandon in-flight tweens and return to idle.
    ///
    /// The tick task is owned by whoever scheduled it (see
    /// [`start_loop`]); drop its guard to stop ticking.
    pub fn teardown(&mut self) {
        self.focus.teardown(&mut self.titles);
        log::info!("gallery torn down after {} frames", self.timing.frames());
    }
}

impl Gallery<SceneSurface, LogTitles> {
    /// Gallery over an in-memory surface with a logging title revealer.
    pub fn headless(options: Options, catalog: TitleCatalog) -> Result<Self, RondoError> {
        let ring = &options.ring;
        let surface = SceneSurface::new(
            ring.item_count,
            Vec2::from(ring.container_size),
            Vec2::from(ring.item_size),
        );
        Self::new(options, catalog, surface, LogTitles::new())
    }
}

impl<S, T: TitleRevealer> std::fmt::Debug for Gallery<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gallery")
            .field("items", &self.states.len())
            .field("phase", &self.focus.phase())
            .field("group", &self.focus.group())
            .field("frames", &self.timing.frames())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(super) fn catalog() -> TitleCatalog {
        (0..20).map(|i| format!("Study in grey {i}")).collect()
    }

    #[test]
    fn mount_places_items_with_initial_perspective() {
        let gallery = Gallery::headless(Options::default(), catalog()).unwrap();
        assert_eq!(gallery.states().len(), 25);
        let first = gallery.surface().item(0).unwrap();
        assert_eq!(first.perspective, 800.0);
        assert_eq!(first.position, Vec2::new(275.0, 0.0));
        assert_eq!(first.rotation_z, 90.0);
        assert_eq!(gallery.surface().item_commands(), 25);
    }

    #[test]
    fn short_catalog_is_rejected() {
        let short: TitleCatalog = ["only one"].into_iter().collect();
        let err = Gallery::headless(Options::default(), short).unwrap_err();
        assert!(matches!(err, RondoError::Catalog(_)));
    }

    #[test]
    fn invalid_options_are_rejected() {
        let mut opts = Options::default();
        opts.motion.damping = 1.5;
        let err = Gallery::headless(opts, catalog()).unwrap_err();
        assert!(matches!(err, RondoError::InvalidOptions(_)));
    }

    #[test]
    fn state_count_matches_item_count() {
        let mut opts = Options::default();
        opts.ring.item_count = 7;
        opts.ring.content_count = 3;
        let gallery = Gallery::headless(opts, catalog()).unwrap();
        assert_eq!(gallery.states().len(), 7);
        for (i, state) in gallery.states().iter().enumerate() {
            assert_eq!(state.angle(), gallery.layout().angle(i));
        }
    }

    #[test]
    fn mount_rejects_unbounded_focus_duration() {
        let mut opts = Options::default();
        opts.focus.focus_secs = 1.0e19;
        let err = Gallery::headless(opts, catalog()).unwrap_err();
        assert!(matches!(err, RondoError::InvalidOptions(_)));
    }
}
