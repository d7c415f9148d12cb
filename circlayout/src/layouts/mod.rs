mod base;
mod circle;
mod grid;
mod horizontal_line;
mod random;

#[doc(inline)]
pub use base::{ItemSeq, ItemSeqSnapshot};
#[doc(inline)]
pub use circle::CircleLayout;
#[doc(inline)]
pub use grid::GridLayout;
#[doc(inline)]
pub use horizontal_line::HorizontalLineLayout;
#[doc(inline)]
pub use random::{CandidateSet, RandomLayout};

use crate::entities::Container;
use crate::error::LayoutResult;
use crate::geometry::primitives::{Circle, ItemTuple};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// An arrangement strategy together with the items it has placed in its container.
///
/// Every call to [`Layout::add`] recomputes the position of all items.
/// After a successful call, no two items overlap and all items lie within the container.
pub trait Layout {
    /// The items and container managed by this layout
    fn seq(&self) -> &ItemSeq;

    /// Appends `item` and rearranges all items.
    /// On failure, the layout is left as it was before the call.
    fn add(&mut self, item: Circle) -> LayoutResult<()>;

    fn container(&self) -> &Container {
        self.seq().container()
    }

    /// Items in insertion order
    fn items(&self) -> &[Circle] {
        self.seq().items()
    }

    fn as_tuples(&self) -> Vec<ItemTuple> {
        self.seq().as_tuples()
    }

    /// True if any two items intersect
    fn items_intersect(&self) -> bool {
        self.seq().items_intersect()
    }
}

/// The supported arrangement strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutType {
    /// All items on one horizontal line, centered vertically
    HorizontalLine,
    /// Items on the intersections of a square grid
    Grid,
    /// Items evenly spaced on a circle centered in the container
    Circle,
    /// Items at random non-overlapping positions
    Random,
}

impl LayoutType {
    pub const ALL: [LayoutType; 4] = [
        LayoutType::HorizontalLine,
        LayoutType::Grid,
        LayoutType::Circle,
        LayoutType::Random,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LayoutType::HorizontalLine => "horizontal_line",
            LayoutType::Grid => "grid",
            LayoutType::Circle => "circle",
            LayoutType::Random => "random",
        }
    }
}

impl Display for LayoutType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
