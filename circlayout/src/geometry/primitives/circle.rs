use crate::entities::Item;
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Point, Rect};

/// A circle as it is placed in a layout: `(x, y, radius)`
pub type ItemTuple = (i64, i64, i64);

/// Geometric primitive representing a circle with an integer center and radius.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    radius: i64,
}

impl Circle {
    /// Creates a circle centered at the origin.
    pub fn try_new(radius: i64) -> LayoutResult<Self> {
        Circle::try_new_at(Point::ORIGIN, radius)
    }

    pub fn try_new_at(center: Point, radius: i64) -> LayoutResult<Self> {
        if radius <= 0 {
            return Err(LayoutError::InvalidDimension {
                name: "radius",
                value: radius,
            });
        }
        Ok(Self { center, radius })
    }

    pub fn radius(&self) -> i64 {
        self.radius
    }

    pub fn as_tuple(&self) -> ItemTuple {
        let Point(x, y) = self.center;
        (x, y, self.radius)
    }
}

impl Shape for Circle {
    fn bbox(&self) -> Rect {
        let Point(x, y) = self.center;
        let r = self.radius;
        Rect::new(x - r, y - r, x + r, y + r)
    }
}

impl Item for Circle {
    fn position(&self) -> Point {
        self.center
    }

    fn set_position(&mut self, position: Point) {
        self.center = position;
    }
}
