//! Read-only query methods for [`Gallery`].

use super::{Gallery, TickReport};
use crate::animation::{GroupTransform, TransformState};
use crate::focus::{FocusedTitle, GalleryPhase};
use crate::layout::RingLayout;
use crate::options::Options;
use crate::title::{TitleCatalog, TitleRevealer};

// ── Configuration ──

impl<S, T: TitleRevealer> Gallery<S, T> {
    /// Parameters the gallery was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Ring geometry.
    #[must_use]
    pub fn layout(&self) -> &RingLayout {
        &self.layout
    }

    /// Content titles.
    #[must_use]
    pub fn catalog(&self) -> &TitleCatalog {
        &self.catalog
    }
}

// ── State ──

impl<S, T: TitleRevealer> Gallery<S, T> {
    /// Per-item transform states in index order.
    #[must_use]
    pub fn states(&self) -> &[TransformState] {
        &self.states
    }

    /// Current transition phase.
    #[must_use]
    pub fn phase(&self) -> GalleryPhase {
        self.focus.phase()
    }

    /// Current whole-ring transform.
    #[must_use]
    pub fn group(&self) -> GroupTransform {
        self.focus.group()
    }

    /// Whether a group transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.focus.is_transitioning()
    }

    /// Whether pointer movement currently drives item targets.
    #[must_use]
    pub fn proximity_enabled(&self) -> bool {
        self.focus.proximity_enabled()
    }

    /// Title revealed for the focused item, until it has been hidden.
    #[must_use]
    pub fn focused_title(&self) -> Option<&FocusedTitle<T::Handle>> {
        self.focus.title()
    }
}

// ── Host access ──

impl<S, T: TitleRevealer> Gallery<S, T> {
    /// The render surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the render surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The title collaborator.
    #[must_use]
    pub fn titles(&self) -> &T {
        &self.titles
    }
}

// ── Frame statistics ──

impl<S, T: TitleRevealer> Gallery<S, T> {
    /// Smoothed ticks per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// Ticks run so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.timing.frames()
    }

    /// Summary of the most recent tick.
    #[must_use]
    pub fn last_tick(&self) -> &TickReport {
        &self.last_tick
    }
}
