//! Click-driven focus/reset state machine.
//!
//! ```text
//! Idle ──click item──▶ Focusing ──tween done──▶ Focused
//!   ▲                                              │
//!   └──tween done── Resetting ◀──── any click ─────┘
//! ```
//!
//! A click on an item while `Idle` rotates the ring the short way round so
//! the item lands at the front (angle 3π/2), adds one extra full turn, and
//! zooms in; its title is mounted and revealed after a delay. Any click
//! while `Focused` tweens the ring back to identity and hides the title.
//! Clicks during either tween are ignored. The in-flight group tween is
//! the only lock: it is installed synchronously when a click is accepted
//! and removed only when the tween completes.

use std::f32::consts::{PI, TAU};

use web_time::Instant;

use crate::animation::{GroupTransform, GroupTween, Tween};
use crate::layout::RingLayout;
use crate::options::{FocusOptions, TitleOptions};
use crate::title::{RevealDirection, RevealTiming, TitleCatalog, TitleRevealer};

/// Ring angle that counts as "front".
pub const FRONT_ANGLE: f32 = 3.0 * PI / 2.0;
/// Group scale once focused.
pub const FOCUS_SCALE: f32 = 5.0;
/// Group vertical translation once focused.
pub const FOCUS_TRANSLATE_Y: f32 = 1300.0;
/// Extra full turn layered onto the shortest-path rotation, in degrees.
pub const EXTRA_TURN_DEGREES: f32 = 360.0;

/// Gallery transition phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryPhase {
    /// Resting; pointer proximity is live.
    #[default]
    Idle,
    /// Zooming in on an item.
    Focusing,
    /// Zoomed in, waiting for a click to reset.
    Focused,
    /// Zooming back out.
    Resetting,
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Focus transition started on this item.
    FocusStarted(usize),
    /// Reset transition started.
    ResetStarted,
    /// A group tween is in flight.
    IgnoredBusy,
    /// Background click while idle.
    IgnoredIdle,
    /// Clicked item index is not on the ring.
    IgnoredOutOfRange(usize),
}

impl ClickOutcome {
    /// Whether a new group tween was started.
    #[must_use]
    pub fn started(&self) -> bool {
        matches!(self, Self::FocusStarted(_) | Self::ResetStarted)
    }
}

/// Changes produced by one [`FocusMachine::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Advance {
    /// Group transform to render this tick, if a tween is running or just
    /// finished.
    pub group: Option<GroupTransform>,
    /// Phase entered because the group tween completed.
    pub entered: Option<GalleryPhase>,
    /// The hidden title was released.
    pub title_released: bool,
}

/// Revealed title content and its unit count.
#[derive(Debug)]
pub struct FocusedTitle<H> {
    handle: H,
    units: usize,
    hide: Option<Tween>,
}

impl<H> FocusedTitle<H> {
    /// Collaborator handle.
    #[must_use]
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Whether the backward reveal has been started.
    #[must_use]
    pub fn is_hiding(&self) -> bool {
        self.hide.is_some()
    }
}

/// Rotation in radians that brings an item at `angle` to the front along
/// the shorter way round. Always in `[-π, π]`.
#[must_use]
pub fn shortest_rotation(angle: f32) -> f32 {
    let delta = FRONT_ANGLE - angle;
    if delta > PI {
        delta - TAU
    } else if delta < -PI {
        delta + TAU
    } else {
        delta
    }
}

/// Group transform that focuses the item at `angle`.
#[must_use]
pub fn focus_transform(angle: f32) -> GroupTransform {
    GroupTransform {
        scale: FOCUS_SCALE,
        translate_x: 0.0,
        translate_y: FOCUS_TRANSLATE_Y,
        rotation: shortest_rotation(angle).to_degrees() + EXTRA_TURN_DEGREES,
    }
}

/// The focus/reset state machine.
///
/// Owns the phase, the group transform and the revealed title. It does not
/// own the title collaborator; callers pass it in.
#[derive(Debug)]
pub struct FocusMachine<H> {
    phase: GalleryPhase,
    group: GroupTransform,
    in_flight: Option<GroupTween>,
    title: Option<FocusedTitle<H>>,
    focus: FocusOptions,
    reveal: TitleOptions,
}

impl<H> FocusMachine<H> {
    /// Idle machine with identity group transform.
    #[must_use]
    pub fn new(focus: FocusOptions, reveal: TitleOptions) -> Self {
        Self {
            phase: GalleryPhase::Idle,
            group: GroupTransform::IDENTITY,
            in_flight: None,
            title: None,
            focus,
            reveal,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GalleryPhase {
        self.phase
    }

    /// Current group transform.
    #[must_use]
    pub fn group(&self) -> GroupTransform {
        self.group
    }

    /// Whether a group tween is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether pointer proximity may drive item targets.
    #[must_use]
    pub fn proximity_enabled(&self) -> bool {
        self.phase == GalleryPhase::Idle
    }

    /// The mounted title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&FocusedTitle<H>> {
        self.title.as_ref()
    }

    /// Handle a click on `item` (or on the background when `None`).
    pub fn click<T>(
        &mut self,
        item: Option<usize>,
        layout: &RingLayout,
        catalog: &TitleCatalog,
        titles: &mut T,
        now: Instant,
    ) -> ClickOutcome
    where
        T: TitleRevealer<Handle = H>,
    {
        if self.in_flight.is_some() {
            return ClickOutcome::IgnoredBusy;
        }
        match (self.phase, item) {
            (GalleryPhase::Idle, Some(index)) => {
                self.start_focus(index, layout, catalog, titles, now)
            }
            (GalleryPhase::Idle, None) => ClickOutcome::IgnoredIdle,
            (GalleryPhase::Focused, _) => self.start_reset(titles, now),
            (GalleryPhase::Focusing | GalleryPhase::Resetting, _) => {
                ClickOutcome::IgnoredBusy
            }
        }
    }

    fn start_focus<T>(
        &mut self,
        index: usize,
        layout: &RingLayout,
        catalog: &TitleCatalog,
        titles: &mut T,
        now: Instant,
    ) -> ClickOutcome
    where
        T: TitleRevealer<Handle = H>,
    {
        let Some(slot) = layout.slot(index) else {
            log::warn!("click on item {index} outside the ring ignored");
            return ClickOutcome::IgnoredOutOfRange(index);
        };

        let target = focus_transform(slot.angle);
        let timing = Tween::new(now, self.focus.focus_duration(), self.focus.focus_easing);
        self.in_flight = Some(GroupTween::new(timing, self.group, target));
        self.phase = GalleryPhase::Focusing;
        log::info!(
            "focusing item {index}: rotation {:.1}°, scale {FOCUS_SCALE}",
            target.rotation
        );

        // A title still hiding from the previous cycle goes first.
        if let Some(old) = self.title.take() {
            titles.release(old.handle);
        }
        let content = layout.content_index(index);
        let Some(text) = catalog.title(content) else {
            log::warn!("no title for content {content}");
            return ClickOutcome::FocusStarted(index);
        };
        match titles.mount(text) {
            Ok(handle) => {
                let timing = RevealTiming::from_options(&self.reveal, RevealDirection::Forward);
                titles.reveal(&handle, RevealDirection::Forward, &timing);
                let units = titles.unit_count(&handle);
                self.title = Some(FocusedTitle {
                    handle,
                    units,
                    hide: None,
                });
            }
            Err(e) => log::error!("failed to mount title {text:?}: {e}"),
        }
        ClickOutcome::FocusStarted(index)
    }

    fn start_reset<T>(&mut self, titles: &mut T, now: Instant) -> ClickOutcome
    where
        T: TitleRevealer<Handle = H>,
    {
        let timing = Tween::new(now, self.focus.reset_duration(), self.focus.reset_easing);
        self.in_flight = Some(GroupTween::new(timing, self.group, GroupTransform::IDENTITY));
        self.phase = GalleryPhase::Resetting;
        log::info!("resetting gallery");

        if let Some(title) = self.title.as_mut() {
            let timing = RevealTiming::from_options(&self.reveal, RevealDirection::Backward);
            titles.reveal(&title.handle, RevealDirection::Backward, &timing);
            let total = timing.total(title.units);
            title.hide = Some(
                Tween::new(now, total.saturating_sub(timing.delay), timing.easing)
                    .with_delay(timing.delay),
            );
        }
        ClickOutcome::ResetStarted
    }

    /// Advance the group tween and the title hide to `now`.
    ///
    /// The phase moves only when the group tween completes; the title is
    /// released independently when its backward reveal has finished.
    pub fn advance<T>(&mut self, titles: &mut T, now: Instant) -> Advance
    where
        T: TitleRevealer<Handle = H>,
    {
        let mut out = Advance::default();

        if let Some(tween) = self.in_flight {
            self.group = tween.sample(now);
            out.group = Some(self.group);
            if tween.is_complete(now) {
                self.in_flight = None;
                self.phase = match self.phase {
                    GalleryPhase::Focusing => GalleryPhase::Focused,
                    GalleryPhase::Resetting => GalleryPhase::Idle,
                    other => other,
                };
                log::info!("group transition complete, now {:?}", self.phase);
                out.entered = Some(self.phase);
            }
        }

        let hidden = self
            .title
            .as_ref()
            .and_then(|t| t.hide)
            .is_some_and(|hide| hide.is_complete(now));
        if hidden {
            if let Some(title) = self.title.take() {
                titles.release(title.handle);
                out.title_released = true;
            }
        }

        out
    }

    /// Release the title, abandon any tween and return to
    /// [`GalleryPhase::Idle`]. The group keeps its last sampled transform.
    pub fn teardown<T>(&mut self, titles: &mut T)
    where
        T: TitleRevealer<Handle = H>,
    {
        self.in_flight = None;
        self.phase = GalleryPhase::Idle;
        if let Some(title) = self.title.take() {
            titles.release(title.handle);
        }
    }
}
