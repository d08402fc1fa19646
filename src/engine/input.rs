//! Input methods for [`Gallery`].

use web_time::Instant;

use super::Gallery;
use crate::focus::ClickOutcome;
use crate::input::InputEvent;
use crate::proximity;
use crate::render::RenderSurface;
use crate::title::TitleRevealer;

/// What an input event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Targets recomputed for this many items.
    Retargeted(usize),
    /// Every target returned to neutral.
    TargetsReset,
    /// Pointer movement ignored while a transition owns the ring.
    ProximityDisabled,
    /// A click went through the focus state machine.
    Click(ClickOutcome),
}

impl<S: RenderSurface, T: TitleRevealer> Gallery<S, T> {
    /// Process a platform-agnostic input event.
    ///
    /// Pointer movement writes new targets immediately, so the next
    /// [`tick`](Self::tick) already damps toward them. `now` is the event
    /// time; accepted clicks start their group tween from it.
    ///
    /// # Example
    ///
    /// ```
    /// use glam::Vec2;
    /// use rondo::{EventOutcome, Gallery, InputEvent, Options, TitleCatalog};
    /// use web_time::Instant;
    ///
    /// let catalog: TitleCatalog = (0..20).map(|i| format!("Plate {i}")).collect();
    /// let mut gallery = Gallery::headless(Options::default(), catalog)?;
    /// let outcome = gallery.handle_event(
    ///     InputEvent::PointerMoved { position: Vec2::new(575.0, 300.0) },
    ///     Instant::now(),
    /// );
    /// assert_eq!(outcome, EventOutcome::Retargeted(25));
    /// # Ok::<(), rondo::RondoError>(())
    /// ```
    pub fn handle_event(&mut self, event: InputEvent, now: Instant) -> EventOutcome {
        match event {
            InputEvent::PointerMoved { position } => {
                if !self.focus.proximity_enabled() {
                    return EventOutcome::ProximityDisabled;
                }
                let surface = &self.surface;
                let updated = self
                    .field
                    .update_targets(&mut self.states, position, |i| surface.item_bounds(i));
                if updated < self.states.len() {
                    log::debug!(
                        "{} of {} items not measurable, targets kept",
                        self.states.len() - updated,
                        self.states.len()
                    );
                }
                EventOutcome::Retargeted(updated)
            }
            InputEvent::PointerLeft => {
                proximity::reset_targets(&mut self.states);
                EventOutcome::TargetsReset
            }
            InputEvent::Click { item } => {
                let outcome = self.focus.click(
                    item,
                    &self.layout,
                    &self.catalog,
                    &mut self.titles,
                    now,
                );
                match outcome {
                    ClickOutcome::FocusStarted(_) => {
                        proximity::reset_targets(&mut self.states);
                    }
                    ClickOutcome::IgnoredBusy => {
                        log::debug!("click ignored: transition in flight");
                    }
                    _ => {}
                }
                EventOutcome::Click(outcome)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use web_time::Duration;

    use super::super::tests::catalog;
    use super::*;
    use crate::animation::TransformTarget;
    use crate::focus::GalleryPhase;
    use crate::options::Options;
    use crate::render::SceneSurface;
    use crate::title::LogTitles;

    fn gallery() -> Gallery<SceneSurface, LogTitles> {
        Gallery::headless(Options::default(), catalog()).unwrap()
    }

    /// Container-relative centre of item `index` at rest.
    fn rest_center(g: &Gallery<SceneSurface, LogTitles>, index: usize) -> Vec2 {
        g.surface().item_bounds(index).unwrap().center()
    }

    #[test]
    fn pointer_on_item_flips_it_fully() {
        let mut g = gallery();
        let center = rest_center(&g, 0);
        let now = Instant::now();
        let outcome = g.handle_event(InputEvent::PointerMoved { position: center }, now);
        assert_eq!(outcome, EventOutcome::Retargeted(25));

        let target = g.states()[0].target();
        assert!((target.rotation - 180.0).abs() < 1e-3);
        assert!((target.scale - 1.3).abs() < 1e-4);
        // Item 0 sits at angle 0: pushed along +x
        assert!((target.offset.x - 50.0).abs() < 1e-3);
        assert!(target.offset.y.abs() < 1e-3);
        // Current values untouched until the next tick
        assert_eq!(g.states()[0].current(), TransformTarget::NEUTRAL);
    }

    #[test]
    fn far_pointer_leaves_targets_neutral() {
        let mut g = gallery();
        let _ = g.handle_event(
            InputEvent::PointerMoved {
                position: Vec2::new(5000.0, 5000.0),
            },
            Instant::now(),
        );
        for state in g.states() {
            assert_eq!(state.target(), TransformTarget::NEUTRAL);
        }
    }

    #[test]
    fn pointer_leave_resets_targets() {
        let mut g = gallery();
        let center = rest_center(&g, 3);
        let now = Instant::now();
        let _ = g.handle_event(InputEvent::PointerMoved { position: center }, now);
        assert_ne!(g.states()[3].target(), TransformTarget::NEUTRAL);
        assert_eq!(g.handle_event(InputEvent::PointerLeft, now), EventOutcome::TargetsReset);
        assert_eq!(g.states()[3].target(), TransformTarget::NEUTRAL);
    }

    #[test]
    fn unmounted_items_keep_their_targets() {
        let mut g = gallery();
        g.surface_mut().set_ready(4, false);
        let center = rest_center(&g, 3);
        let outcome = g.handle_event(InputEvent::PointerMoved { position: center }, Instant::now());
        assert_eq!(outcome, EventOutcome::Retargeted(24));
        assert_eq!(g.states()[4].target(), TransformTarget::NEUTRAL);
    }

    #[test]
    fn focus_click_neutralises_and_disables_proximity() {
        let mut g = gallery();
        let now = Instant::now();
        let center = rest_center(&g, 2);
        let _ = g.handle_event(InputEvent::PointerMoved { position: center }, now);

        let outcome = g.handle_event(InputEvent::Click { item: Some(2) }, now);
        assert_eq!(outcome, EventOutcome::Click(ClickOutcome::FocusStarted(2)));
        assert_eq!(g.phase(), GalleryPhase::Focusing);
        for state in g.states() {
            assert_eq!(state.target(), TransformTarget::NEUTRAL);
        }

        let later = now + Duration::from_millis(100);
        assert_eq!(
            g.handle_event(InputEvent::PointerMoved { position: center }, later),
            EventOutcome::ProximityDisabled
        );
        assert_eq!(g.states()[2].target(), TransformTarget::NEUTRAL);
    }

    #[test]
    fn click_during_focusing_changes_nothing() {
        let mut g = gallery();
        let now = Instant::now();
        let _ = g.handle_event(InputEvent::Click { item: Some(10) }, now);
        let group = g.group();
        let outcome = g.handle_event(
            InputEvent::Click { item: Some(11) },
            now + Duration::from_millis(300),
        );
        assert_eq!(outcome, EventOutcome::Click(ClickOutcome::IgnoredBusy));
        assert_eq!(g.phase(), GalleryPhase::Focusing);
        assert_eq!(g.group(), group);
    }
}
