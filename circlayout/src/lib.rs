//! Arranges circles inside a rectangular container without overlap.
//!
//! Items are added one at a time to a [`Layout`](layouts::Layout) strategy, which recomputes the
//! position of every item and validates the result against the container bounds and the
//! other items.

/// Geometric primitives and the traits they share
pub mod geometry;

/// The container and the items placed inside it
pub mod entities;

/// Arrangement strategies
pub mod layouts;

/// Exporting arrangements to external representations (JSON, SVG, bitmap)
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod arrange;
mod config;
mod error;

#[doc(inline)]
pub use arrange::{
    Arrangement, arrange_items_in_layout, circle_layout, grid_layout, horizontal_line_layout,
    random_layout,
};
#[doc(inline)]
pub use config::{DEFAULT_RADIUS, LayoutConfig};
#[doc(inline)]
pub use error::{LayoutError, LayoutResult};
