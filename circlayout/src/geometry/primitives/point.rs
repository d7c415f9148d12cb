use serde::{Deserialize, Serialize};

/// A pixel position. Both coordinates are integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Point(pub i64, pub i64);

impl Point {
    pub const ORIGIN: Point = Point(0, 0);
}
