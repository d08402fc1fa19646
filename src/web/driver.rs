//! `requestAnimationFrame` tick driver.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use web_time::Instant;

use super::host_error;
use crate::error::RondoError;
use crate::scheduler::{FrameDriver, TickCallback, TickHandle};

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// [`FrameDriver`] backed by `requestAnimationFrame`.
///
/// Each frame re-requests the next one while the handle is active.
/// Cancelling the handle cancels the pending request and drops the frame
/// closure.
#[derive(Debug, Clone)]
pub struct AnimationFrameDriver {
    window: Window,
}

impl AnimationFrameDriver {
    /// Driver for `window`.
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

fn request(window: &Window, slot: &FrameSlot) -> Result<Option<i32>, RondoError> {
    let frame = slot.borrow();
    let Some(closure) = frame.as_ref() else {
        return Ok(None);
    };
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map(Some)
        .map_err(host_error)
}

impl FrameDriver for AnimationFrameDriver {
    fn schedule(&mut self, mut callback: TickCallback) -> Result<TickHandle, RondoError> {
        let handle = TickHandle::new();
        let pending = Rc::new(Cell::new(None::<i32>));
        let slot: FrameSlot = Rc::new(RefCell::new(None));

        let frame = {
            let (handle, pending, slot) = (handle.clone(), Rc::clone(&pending), Rc::clone(&slot));
            let window = self.window.clone();
            Closure::<dyn FnMut()>::new(move || {
                pending.set(None);
                if !handle.is_active() {
                    return;
                }
                callback(Instant::now());
                if !handle.is_active() {
                    return;
                }
                match request(&window, &slot) {
                    Ok(id) => pending.set(id),
                    Err(e) => log::error!("requestAnimationFrame failed: {e}"),
                }
            })
        };
        *slot.borrow_mut() = Some(frame);
        pending.set(request(&self.window, &slot)?);

        let window = self.window.clone();
        handle.set_cancel_hook(move || {
            if let Some(id) = pending.take() {
                if let Err(e) = window.cancel_animation_frame(id) {
                    log::warn!("cancelAnimationFrame failed: {e:?}");
                }
            }
            // Breaks the closure's reference to its own slot
            drop(slot.borrow_mut().take());
        });
        Ok(handle)
    }
}
