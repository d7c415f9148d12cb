use crate::geometry::primitives::Rect;

/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for shared properties of geometric primitives.
pub trait Shape {
    /// Bounding box of the shape
    fn bbox(&self) -> Rect;
}
