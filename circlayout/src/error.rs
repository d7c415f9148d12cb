use thiserror::Error;

pub type LayoutResult<T> = Result<T, LayoutError>;

/// Reasons for which an item cannot be created or added to a layout.
/// A failed addition leaves the layout as it was before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("{name} has to be greater than 0, got {value}")]
    InvalidDimension { name: &'static str, value: i64 },
    #[error("item radius {item_radius} does not match the layout radius {layout_radius}")]
    PreconditionViolation {
        item_radius: i64,
        layout_radius: i64,
    },
    #[error("container too small to fit all items (capacity: {capacity}, items: {n_items})")]
    CapacityExceeded { capacity: i64, n_items: usize },
    #[error("item doesn't fit in the container (item #{index})")]
    OutOfBounds { index: usize },
    #[error("overlapping items (#{first} and #{second})")]
    Overlap { first: usize, second: usize },
    #[error("couldn't place all items in the container ({placed}/{requested} placed)")]
    PlacementExhausted { placed: usize, requested: usize },
    #[error("container of {width}x{height} pixels is too large to rasterize")]
    RasterTooLarge { width: i64, height: i64 },
}
