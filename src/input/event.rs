/// Platform-agnostic gallery input.
///
/// Hosts translate their native events into these and pass them to
/// [`Gallery::handle_event`](crate::Gallery::handle_event).
///
/// # Example
///
/// ```
/// use glam::Vec2;
/// use rondo::InputEvent;
///
/// let moved = InputEvent::PointerMoved { position: Vec2::new(320.0, 40.0) };
/// let background = InputEvent::Click { item: None };
/// assert_ne!(moved, background);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved inside the ring container.
    PointerMoved {
        /// Position relative to the container's top-left corner.
        position: glam::Vec2,
    },
    /// Pointer left the ring container.
    PointerLeft,
    /// Click anywhere on the gallery surface.
    Click {
        /// Item under the pointer, or `None` for the background.
        item: Option<usize>,
    },
}
