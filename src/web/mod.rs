//! Browser host: binds a [`Gallery`] to DOM elements.
//!
//! The ring container's element children are the items, in index order,
//! each carrying a `data-index` attribute. A click anywhere in the window
//! is routed to the focus state machine with the item under the pointer
//! (resolved through `closest("[data-index]")`); pointer movement and
//! leave on the container drive proximity. Frames come from
//! `requestAnimationFrame`.

mod driver;
mod listener;
mod surface;
mod title;

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlElement, MouseEvent, Window};
use web_time::Instant;

pub use self::driver::AnimationFrameDriver;
pub use self::listener::ListenerGuard;
pub use self::surface::DomSurface;
pub use self::title::{DomTitleHandle, DomTitles};
use crate::engine::{start_loop, Gallery};
use crate::error::RondoError;
use crate::input::InputEvent;
use crate::options::Options;
use crate::scheduler::TickGuard;
use crate::title::TitleCatalog;

/// Gallery running against the DOM.
pub type DomGallery = Gallery<DomSurface, DomTitles>;

/// Attribute carrying an item's ring index.
pub const INDEX_ATTRIBUTE: &str = "data-index";

pub(crate) fn host_error(e: JsValue) -> RondoError {
    RondoError::Host(format!("{e:?}"))
}

fn window() -> Result<Window, RondoError> {
    web_sys::window().ok_or_else(|| RondoError::Host("no global window".to_owned()))
}

/// Route browser logs to the console and panics to `console.error`.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    // Already initialised is fine
    let _ = console_log::init_with_level(level);
}

/// A mounted gallery.
///
/// Owns the engine, the frame task and every listener. Dropping it removes
/// the listeners, cancels the frame task and releases the title.
#[must_use = "dropping the handle unmounts the gallery"]
pub struct WebGallery {
    gallery: Rc<RefCell<DomGallery>>,
    listeners: Vec<ListenerGuard>,
    tick: Option<TickGuard>,
}

impl WebGallery {
    /// Shared engine, for inspection.
    #[must_use]
    pub fn gallery(&self) -> &Rc<RefCell<DomGallery>> {
        &self.gallery
    }
}

impl Drop for WebGallery {
    fn drop(&mut self) {
        self.listeners.clear();
        self.tick = None;
        match self.gallery.try_borrow_mut() {
            Ok(mut gallery) => gallery.teardown(),
            Err(_) => log::warn!("gallery busy during unmount, title left mounted"),
        }
    }
}

/// Mount a gallery over `container` (items) and `title_container`.
pub fn mount(
    container: HtmlElement,
    title_container: HtmlElement,
    catalog: TitleCatalog,
    options: Options,
) -> Result<WebGallery, RondoError> {
    let window = window()?;
    let document = window
        .document()
        .ok_or_else(|| RondoError::Host("no document".to_owned()))?;

    let surface = DomSurface::new(container.clone());
    let titles = DomTitles::new(document, title_container);
    let gallery = Rc::new(RefCell::new(Gallery::new(options, catalog, surface, titles)?));

    let mut listeners = Vec::with_capacity(3);
    listeners.push(ListenerGuard::new(&window, "click", {
        let gallery = Rc::clone(&gallery);
        move |event: Event| {
            let item = clicked_item(&event);
            dispatch(&gallery, InputEvent::Click { item });
        }
    })?);
    listeners.push(ListenerGuard::new(&container, "mousemove", {
        let gallery = Rc::clone(&gallery);
        let container = container.clone();
        move |event: Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = container.get_bounding_client_rect();
            let position = Vec2::new(
                (f64::from(mouse.client_x()) - rect.left()) as f32,
                (f64::from(mouse.client_y()) - rect.top()) as f32,
            );
            dispatch(&gallery, InputEvent::PointerMoved { position });
        }
    })?);
    listeners.push(ListenerGuard::new(&container, "mouseleave", {
        let gallery = Rc::clone(&gallery);
        move |_: Event| dispatch(&gallery, InputEvent::PointerLeft)
    })?);

    let mut driver = AnimationFrameDriver::new(window);
    let tick = start_loop(&mut driver, &gallery)?;
    log::info!("web gallery mounted");

    Ok(WebGallery {
        gallery,
        listeners,
        tick: Some(tick),
    })
}

fn dispatch(gallery: &Rc<RefCell<DomGallery>>, event: InputEvent) {
    match gallery.try_borrow_mut() {
        Ok(mut gallery) => {
            let outcome = gallery.handle_event(event, Instant::now());
            log::trace!("{event:?} -> {outcome:?}");
        }
        Err(_) => log::warn!("gallery busy, {event:?} dropped"),
    }
}

/// Ring index of the item under a click, if any.
fn clicked_item(event: &Event) -> Option<usize> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let item = target
        .closest(&format!("[{INDEX_ATTRIBUTE}]"))
        .ok()
        .flatten()?;
    item.get_attribute(INDEX_ATTRIBUTE)?.parse().ok()
}
