use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of items arranged on the ring.
pub const DEFAULT_ITEM_COUNT: usize = 25;
/// Ring radius in surface pixels.
pub const DEFAULT_RADIUS: f32 = 275.0;
/// Number of distinct contents; item `i` shows content `i % C`.
pub const DEFAULT_CONTENT_COUNT: usize = 20;
/// Perspective depth applied to every item on each tick.
pub const DEFAULT_PERSPECTIVE: f32 = 1000.0;
/// Perspective depth used for the initial placement before the first tick.
pub const DEFAULT_INITIAL_PERSPECTIVE: f32 = 800.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Ring", inline)]
#[serde(default)]
/// Ring geometry and item sizing.
pub struct RingOptions {
    /// Number of items on the ring (`N`).
    #[schemars(title = "Items", range(min = 1, max = 200))]
    pub item_count: usize,
    /// Ring radius (`R`).
    #[schemars(title = "Radius", range(min = 10.0, max = 2000.0), extend("step" = 5.0))]
    pub radius: f32,
    /// Number of distinct contents (`C`).
    #[schemars(title = "Contents", range(min = 1, max = 200))]
    pub content_count: usize,
    /// Width and height of the ring container.
    #[schemars(skip)]
    pub container_size: [f32; 2],
    /// Width and height of a single item before scaling.
    #[schemars(skip)]
    pub item_size: [f32; 2],
    /// Per-item perspective depth.
    #[schemars(title = "Perspective", range(min = 100.0, max = 5000.0), extend("step" = 50.0))]
    pub perspective: f32,
    /// Perspective depth for the mount-time placement.
    #[schemars(skip)]
    pub initial_perspective: f32,
}

impl Default for RingOptions {
    fn default() -> Self {
        Self {
            item_count: DEFAULT_ITEM_COUNT,
            radius: DEFAULT_RADIUS,
            content_count: DEFAULT_CONTENT_COUNT,
            container_size: [600.0, 600.0],
            item_size: [45.0, 60.0],
            perspective: DEFAULT_PERSPECTIVE,
            initial_perspective: DEFAULT_INITIAL_PERSPECTIVE,
        }
    }
}
