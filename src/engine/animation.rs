//! Per-frame tick for [`Gallery`].

use web_time::Instant;

use super::Gallery;
use crate::focus::{Advance, GalleryPhase};
use crate::render::RenderSurface;
use crate::title::TitleRevealer;

/// Summary of one [`Gallery::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickReport {
    /// Item transforms handed to the surface.
    pub rendered: usize,
    /// Items skipped because the surface has not mounted them.
    pub skipped: usize,
    /// Focus machine changes made this tick.
    pub advance: Advance,
}

impl<S: RenderSurface, T: TitleRevealer> Gallery<S, T> {
    /// Run one frame at `now`.
    ///
    /// Advances the group tween, damps every item one step toward its
    /// target and emits one transform per mounted item. Damping runs in
    /// every phase, so items keep settling while proximity is disabled.
    pub fn tick(&mut self, now: Instant) {
        self.timing.record(now);

        let advance = self.focus.advance(&mut self.titles, now);
        if let Some(group) = advance.group {
            self.surface.apply_group(&group);
        }
        if advance.entered == Some(GalleryPhase::Idle) {
            log::debug!("proximity re-enabled");
        }

        let damping = self.options.motion.damping;
        for state in &mut self.states {
            state.step(damping);
        }

        let mut report = TickReport {
            advance,
            ..TickReport::default()
        };
        for (index, state) in self.states.iter().enumerate() {
            if !self.surface.has_item(index) {
                report.skipped += 1;
                continue;
            }
            let transform = self.item_transform(index, state);
            self.surface.apply_item(&transform);
            report.rendered += 1;
        }
        if report.skipped > 0 {
            log::trace!("{} items not mounted this frame", report.skipped);
        }
        self.last_tick = report;
    }
}
