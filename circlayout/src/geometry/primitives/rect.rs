use crate::geometry::geo_traits::CollidesWith;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in pixel coordinates.
/// Both the minimum and the maximum edges belong to the rectangle.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: i64,
    pub y_min: i64,
    pub x_max: i64,
    pub y_max: i64,
}

impl Rect {
    pub fn new(x_min: i64, y_min: i64, x_max: i64, y_max: i64) -> Self {
        debug_assert!(
            x_min <= x_max && y_min <= y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Returns the corners as `(x0, y0, x1, y1)`
    pub fn coordinates(&self) -> (i64, i64, i64, i64) {
        (self.x_min, self.y_min, self.x_max, self.y_max)
    }

    pub fn width(&self) -> i64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> i64 {
        self.y_max - self.y_min
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x_min = i64::max(a.x_min, b.x_min);
        let y_min = i64::max(a.y_min, b.y_min);
        let x_max = i64::min(a.x_max, b.x_max);
        let y_max = i64::min(a.y_max, b.y_max);
        if x_min <= x_max && y_min <= y_max {
            Some(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            })
        } else {
            None
        }
    }
}

impl CollidesWith<Rect> for Rect {
    /// Touching edges count as a collision.
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        self.x_min <= other.x_max
            && self.x_max >= other.x_min
            && self.y_min <= other.y_max
            && self.y_max >= other.y_min
    }
}

