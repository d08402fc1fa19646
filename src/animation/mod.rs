//! Animation primitives: per-item damping and timed group tweens.
//!
//! Two independent temporal processes share the gallery's thread:
//! [`damping`] closes a fixed fraction of each item's remaining gap on every
//! tick, while [`tween`] timings drive the whole-ring [`group`] transform
//! and the title reveal against wall-clock instants.

pub mod damping;
pub mod group;
pub mod tween;

pub use damping::{TransformState, TransformTarget};
pub use group::{GroupTransform, GroupTween};
pub use tween::Tween;
