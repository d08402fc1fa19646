//! Duration-based tween timing against a wall clock.

use web_time::{Duration, Instant};

use crate::util::easing::EasingFunction;

/// Timing of a single tween: when it starts, how long it runs, and how
/// progress is eased.
///
/// A tween is sampled with an explicit `now`; it never schedules anything
/// itself. Completion is reported once by the owner when
/// [`is_complete`](Self::is_complete) first returns true.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// When the tween was started (before any delay).
    start_time: Instant,
    /// Wait before progress begins.
    delay: Duration,
    /// Running time after the delay.
    duration: Duration,
    /// Easing curve.
    easing: EasingFunction,
}

impl Tween {
    /// Tween started at `start_time` that runs for `duration`.
    #[must_use]
    pub fn new(start_time: Instant, duration: Duration, easing: EasingFunction) -> Self {
        Self {
            start_time,
            delay: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// Hold progress at zero for `delay` after the start.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Delay plus duration.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.delay.saturating_add(self.duration)
    }

    /// Instant at which the tween completes, or `None` if that lies beyond
    /// what the clock can represent.
    #[must_use]
    pub fn end_time(&self) -> Option<Instant> {
        self.start_time.checked_add(self.total())
    }

    /// Calculate normalized progress (0.0 to 1.0).
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start_time);
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };

        if self.duration.is_zero() {
            1.0
        } else {
            (running.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Eased progress at `now`.
    #[must_use]
    pub fn eased(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        if t >= 1.0 {
            return 1.0;
        }
        self.easing.evaluate(t)
    }

    /// Whether the tween has reached completion.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.end_time().is_some_and(|end| now >= end)
    }
}
