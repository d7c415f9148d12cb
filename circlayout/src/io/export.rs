use crate::Arrangement;
use crate::entities::Container;
use crate::geometry::primitives::Circle;
use crate::io::ext_repr::{ExtArrangement, ExtContainer, ExtItem};
use itertools::Itertools;

/// Exports an [`Arrangement`] by composing an [`ExtArrangement`] from it.
pub fn export_arrangement(arrangement: &Arrangement) -> ExtArrangement {
    ExtArrangement {
        layout_type: arrangement.layout_type,
        container: export_container(&arrangement.container),
        items: arrangement.items.iter().map(export_item).collect_vec(),
    }
}

pub fn export_container(container: &Container) -> ExtContainer {
    ExtContainer {
        width: container.width(),
        height: container.height(),
    }
}

pub fn export_item(circle: &Circle) -> ExtItem {
    let (x, y, radius) = circle.as_tuple();
    ExtItem { x, y, radius }
}
