use crate::entities::Container;
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::Circle;
use crate::layouts::ItemSeq;
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Checks the invariant every layout upholds after a successful addition.
pub fn seq_is_valid(seq: &ItemSeq) -> bool {
    items_within_container(seq.container(), seq.items()) && items_disjoint(seq.items())
}

pub fn items_within_container(container: &Container, items: &[Circle]) -> bool {
    for (i, item) in items.iter().enumerate() {
        if !container.within_bounds(item) {
            error!(
                "item #{i} {:?} exceeds the {}x{} container",
                item.bbox(),
                container.width(),
                container.height()
            );
            return false;
        }
    }
    true
}

pub fn items_disjoint(items: &[Circle]) -> bool {
    for ((i, a), (j, b)) in items.iter().enumerate().tuple_combinations() {
        if a.bbox().collides_with(&b.bbox()) {
            error!("items #{i} {:?} and #{j} {:?} overlap", a.bbox(), b.bbox());
            return false;
        }
    }
    true
}
