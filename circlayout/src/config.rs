use serde::{Deserialize, Serialize};

/// Radius of the items, in pixels, when none is configured.
pub const DEFAULT_RADIUS: i64 = 10;

/// Configuration of a single layout run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Radius shared by all items of the run
    pub item_radius: i64,
    /// Seed for the PRNG of the random layout. If undefined, the layout is seeded from OS entropy
    pub prng_seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            item_radius: DEFAULT_RADIUS,
            prng_seed: Some(0),
        }
    }
}
