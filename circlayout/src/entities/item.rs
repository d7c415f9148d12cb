use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::Point;

/// Side of the smallest square box that fits the smallest possible circle with a 1px margin.
/// Used as a coarse, radius-independent cell size for capacity checks.
pub const MIN_SIDE_SIZE: i64 = 3;

/// A shape that can be positioned inside a [`Container`](crate::entities::Container).
pub trait Item: Shape {
    /// Current position of the item, the origin until a layout places it.
    fn position(&self) -> Point;

    fn set_position(&mut self, position: Point);

    /// True if the bounding boxes of both items overlap, touching edges included.
    ///
    /// This is deliberately an axis-aligned bounding box test and not an exact shape test:
    /// diagonally offset circles whose boxes overlap are reported as intersecting.
    fn intersects_with(&self, other: &impl Item) -> bool
    where
        Self: Sized,
    {
        self.bbox().collides_with(&other.bbox())
    }
}
