// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Real-time ring gallery animation engine.
//!
//! Rondo lays a fixed number of items out on a circle and animates them in
//! two ways: a continuous per-item response to pointer proximity (flip,
//! grow, push outward), smoothed by exponential damping on every frame, and
//! discrete click-driven transitions that rotate and zoom the whole ring so
//! one item lands at the front, then back again.
//!
//! # Key entry points
//!
//! - [`Gallery`] - the engine: feed it [`InputEvent`]s and call
//!   [`Gallery::tick`] once per display frame
//! - [`options::Options`] - every tunable parameter, with TOML presets
//! - [`render::RenderSurface`] - the host-side scene the engine drives
//! - [`title::TitleRevealer`] - the host-side staggered title reveal
//! - [`scheduler::FrameDriver`] - display-refresh ticks with cancellation
//!
//! # Architecture
//!
//! Everything runs cooperatively on one thread. Pointer events write item
//! targets; the tick loop owns the current values and closes a fixed
//! fraction of each gap per frame. The focus state machine holds the only
//! lock on transitions: the in-flight group tween. Hosts that share the
//! gallery between event handlers and the frame callback wrap it in
//! `Rc<RefCell<_>>` and start the loop with [`engine::start_loop`].
//!
//! With the `web` feature, `web::mount` binds the engine to DOM elements
//! and `requestAnimationFrame`.

pub mod animation;
pub mod engine;
pub mod error;
pub mod focus;
pub mod input;
pub mod layout;
pub mod options;
pub mod proximity;
pub mod render;
pub mod scheduler;
pub mod title;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use engine::{EventOutcome, Gallery, TickReport};
pub use error::RondoError;
pub use input::InputEvent;
pub use options::Options;
pub use title::TitleCatalog;
