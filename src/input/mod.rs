//! Input handling: the events a host feeds into the gallery.

/// Platform-agnostic input events.
pub mod event;

pub use event::InputEvent;
