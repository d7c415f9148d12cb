use crate::config::LayoutConfig;
use crate::entities::Container;
use crate::error::LayoutResult;
use crate::geometry::primitives::{Circle, ItemTuple};
use crate::layouts::{CircleLayout, GridLayout, HorizontalLineLayout, Layout, LayoutType, RandomLayout};
use log::{debug, info};

/// Final result of a layout run: the container and the items placed in it.
#[derive(Clone, Debug, PartialEq)]
pub struct Arrangement {
    pub layout_type: LayoutType,
    pub container: Container,
    /// Placed items, in insertion order
    pub items: Vec<Circle>,
}

impl Arrangement {
    pub fn from_layout(layout_type: LayoutType, layout: &impl Layout) -> Self {
        Self {
            layout_type,
            container: *layout.container(),
            items: layout.items().to_vec(),
        }
    }

    pub fn as_tuples(&self) -> Vec<ItemTuple> {
        self.items.iter().map(Circle::as_tuple).collect()
    }
}

impl LayoutType {
    /// Creates the layout for this strategy and adds `n_items` items of the configured radius, one by one.
    pub fn arrange(
        self,
        container: Container,
        n_items: usize,
        config: &LayoutConfig,
    ) -> LayoutResult<Arrangement> {
        debug!(
            "[ARR] arranging {n_items} items of radius {} in {}x{} ({self})",
            config.item_radius,
            container.width(),
            container.height()
        );
        let arrangement = match self {
            LayoutType::HorizontalLine => {
                let mut layout = HorizontalLineLayout::new(container);
                arrange_items_in_layout(&mut layout, n_items, config.item_radius)?;
                Arrangement::from_layout(self, &layout)
            }
            LayoutType::Grid => {
                let mut layout = GridLayout::new(container);
                arrange_items_in_layout(&mut layout, n_items, config.item_radius)?;
                Arrangement::from_layout(self, &layout)
            }
            LayoutType::Circle => {
                let mut layout = CircleLayout::new(container);
                arrange_items_in_layout(&mut layout, n_items, config.item_radius)?;
                Arrangement::from_layout(self, &layout)
            }
            LayoutType::Random => {
                let mut layout = RandomLayout::from_config(container, config)?;
                arrange_items_in_layout(&mut layout, n_items, config.item_radius)?;
                Arrangement::from_layout(self, &layout)
            }
        };
        info!(
            "[ARR] {self} layout placed {} items in {}x{}",
            arrangement.items.len(),
            container.width(),
            container.height()
        );
        Ok(arrangement)
    }
}

/// Adds `n_items` freshly created circles of `radius` to `layout`, one at a time.
/// Stops at the first item that cannot be added.
pub fn arrange_items_in_layout(
    layout: &mut impl Layout,
    n_items: usize,
    radius: i64,
) -> LayoutResult<()> {
    for _ in 0..n_items {
        let item = Circle::try_new(radius)?;
        layout.add(item)?;
    }
    Ok(())
}

pub fn horizontal_line_layout(
    width: i64,
    height: i64,
    n_items: usize,
    config: &LayoutConfig,
) -> LayoutResult<Vec<ItemTuple>> {
    run(LayoutType::HorizontalLine, width, height, n_items, config)
}

pub fn grid_layout(
    width: i64,
    height: i64,
    n_items: usize,
    config: &LayoutConfig,
) -> LayoutResult<Vec<ItemTuple>> {
    run(LayoutType::Grid, width, height, n_items, config)
}

pub fn circle_layout(
    width: i64,
    height: i64,
    n_items: usize,
    config: &LayoutConfig,
) -> LayoutResult<Vec<ItemTuple>> {
    run(LayoutType::Circle, width, height, n_items, config)
}

pub fn random_layout(
    width: i64,
    height: i64,
    n_items: usize,
    config: &LayoutConfig,
) -> LayoutResult<Vec<ItemTuple>> {
    run(LayoutType::Random, width, height, n_items, config)
}

fn run(
    layout_type: LayoutType,
    width: i64,
    height: i64,
    n_items: usize,
    config: &LayoutConfig,
) -> LayoutResult<Vec<ItemTuple>> {
    let container = Container::try_new(width, height)?;
    let arrangement = layout_type.arrange(container, n_items, config)?;
    Ok(arrangement.as_tuples())
}
