//! Driving a shared [`Gallery`] from a [`FrameDriver`].

use std::cell::RefCell;
use std::rc::Rc;

use super::Gallery;
use crate::error::RondoError;
use crate::render::RenderSurface;
use crate::scheduler::{FrameDriver, TickGuard};
use crate::title::TitleRevealer;

/// Schedule `gallery.tick` on every frame of `driver`.
///
/// The gallery is shared with event handlers, so a frame that finds it
/// already borrowed is skipped rather than queued. Dropping the returned
/// guard cancels the task; no tick runs after that.
pub fn start_loop<D, S, T>(
    driver: &mut D,
    gallery: &Rc<RefCell<Gallery<S, T>>>,
) -> Result<TickGuard, RondoError>
where
    D: FrameDriver + ?Sized,
    S: RenderSurface + 'static,
    T: TitleRevealer + 'static,
{
    let shared = Rc::clone(gallery);
    let handle = driver.schedule(Box::new(move |now| match shared.try_borrow_mut() {
        Ok(mut gallery) => gallery.tick(now),
        Err(_) => log::warn!("gallery busy, frame skipped"),
    }))?;
    log::debug!("tick loop started");
    Ok(TickGuard::new(handle))
}
