use crate::entities::Item;
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::primitives::Rect;

/// Rectangular region, in pixels, in which items are placed.
/// The dimensions are fixed after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Container {
    width: i64,
    height: i64,
}

impl Container {
    pub fn try_new(width: i64, height: i64) -> LayoutResult<Self> {
        if width <= 0 {
            return Err(LayoutError::InvalidDimension {
                name: "width",
                value: width,
            });
        }
        if height <= 0 {
            return Err(LayoutError::InvalidDimension {
                name: "height",
                value: height,
            });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    /// Number of `size` x `size` boxes which fit in the container without overlap.
    /// Saturates at `i64::MAX` for containers with more boxes than that.
    pub fn capacity(&self, size: i64) -> i64 {
        debug_assert!(size > 0, "invalid box size: {size}");
        (self.width / size).saturating_mul(self.height / size)
    }

    /// True if the bounding box of `item` lies within `[0, width) x [0, height)`.
    pub fn within_bounds(&self, item: &impl Item) -> bool {
        self.contains_rect(&item.bbox())
    }

    pub fn contains_rect(&self, rect: &Rect) -> bool {
        rect.x_min >= 0 && rect.y_min >= 0 && rect.x_max < self.width && rect.y_max < self.height
    }

    /// The rectangle covered by the container, `(0, 0)` to `(width - 1, height - 1)`.
    pub fn bbox(&self) -> Rect {
        Rect::new(0, 0, self.width - 1, self.height - 1)
    }
}
