//! Cancellable recurring tick tasks.
//!
//! A [`FrameDriver`] invokes scheduled callbacks once per display frame
//! with that frame's timestamp. Scheduling returns a [`TickHandle`];
//! cancelling it guarantees the callback is never invoked again. A
//! callback is either run for a frame or not at all, so cancellation never
//! leaves a tick half applied.
//!
//! Everything here is single-threaded (`Rc`/`Cell`), matching the
//! cooperative model of a browser event loop.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use web_time::{Duration, Instant};

use crate::error::RondoError;

/// Per-frame callback.
pub type TickCallback = Box<dyn FnMut(Instant)>;

struct TickState {
    active: Cell<bool>,
    on_cancel: RefCell<Option<Box<dyn FnOnce()>>>,
}

/// Shared handle to a scheduled tick task.
#[derive(Clone)]
pub struct TickHandle {
    state: Rc<TickState>,
}

impl TickHandle {
    /// Fresh, active handle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Rc::new(TickState {
                active: Cell::new(true),
                on_cancel: RefCell::new(None),
            }),
        }
    }

    /// Whether the task will run on the next frame.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.active.get()
    }

    /// Stop the task. Idempotent; the cancel hook runs at most once.
    pub fn cancel(&self) {
        if !self.state.active.replace(false) {
            return;
        }
        let hook = self.state.on_cancel.borrow_mut().take();
        if let Some(hook) = hook {
            hook();
        }
    }

    /// Run `hook` when the handle is cancelled (drivers use this to release
    /// the platform's pending frame request).
    pub fn set_cancel_hook(&self, hook: impl FnOnce() + 'static) {
        *self.state.on_cancel.borrow_mut() = Some(Box::new(hook));
    }
}

impl Default for TickHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TickHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickHandle")
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

/// Cancels its tick when dropped.
#[derive(Debug)]
#[must_use = "dropping the guard cancels the tick"]
pub struct TickGuard(TickHandle);

impl TickGuard {
    /// Guard `handle`.
    pub fn new(handle: TickHandle) -> Self {
        Self(handle)
    }
}

impl Drop for TickGuard {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

/// Source of display-refresh ticks.
pub trait FrameDriver {
    /// Invoke `callback` on every frame until the returned handle is
    /// cancelled.
    fn schedule(&mut self, callback: TickCallback) -> Result<TickHandle, RondoError>;
}

/// Deterministic driver that advances a synthetic clock by a fixed step.
pub struct FixedStepDriver {
    now: Instant,
    step: Duration,
    tasks: Vec<(TickHandle, TickCallback)>,
}

impl FixedStepDriver {
    /// Driver starting at `start`, stepping at `fps` frames per second.
    #[must_use]
    pub fn new(start: Instant, fps: u32) -> Self {
        Self {
            now: start,
            step: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
            tasks: Vec::new(),
        }
    }

    /// Current synthetic time.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Time between frames.
    #[must_use]
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Number of tasks still scheduled.
    #[must_use]
    pub fn active_tasks(&self) -> usize {
        self.tasks.iter().filter(|(h, _)| h.is_active()).count()
    }

    /// Run `frames` frames.
    pub fn advance(&mut self, frames: u32) {
        for _ in 0..frames {
            self.now += self.step;
            let now = self.now;
            for (handle, callback) in &mut self.tasks {
                if handle.is_active() {
                    callback(now);
                }
            }
            self.tasks.retain(|(h, _)| h.is_active());
        }
    }
}

impl FrameDriver for FixedStepDriver {
    fn schedule(&mut self, callback: TickCallback) -> Result<TickHandle, RondoError> {
        let handle = TickHandle::new();
        self.tasks.push((handle.clone(), callback));
        Ok(handle)
    }
}

impl fmt::Debug for FixedStepDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedStepDriver")
            .field("step", &self.step)
            .field("tasks", &self.tasks.len())
            .finish_non_exhaustive()
    }
}
