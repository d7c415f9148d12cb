use crate::entities::{Container, Item};
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::primitives::{Circle, ItemTuple, Point};
use crate::util::assertions;
use itertools::Itertools;
use log::{debug, trace, warn};

/// Ordered sequence of items placed in a single container, shared by all layout strategies.
/// Insertion order is arrangement order.
#[derive(Clone, Debug)]
pub struct ItemSeq {
    container: Container,
    items: Vec<Circle>,
}

impl ItemSeq {
    pub fn new(container: Container) -> Self {
        Self {
            container,
            items: vec![],
        }
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn items(&self) -> &[Circle] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_tuples(&self) -> Vec<ItemTuple> {
        self.items.iter().map(Circle::as_tuple).collect_vec()
    }

    /// Saves the current items to be potentially restored to later.
    pub fn save(&self) -> ItemSeqSnapshot {
        ItemSeqSnapshot {
            items: self.items.clone(),
        }
    }

    /// Restores the items to a previous state.
    pub fn restore(&mut self, snapshot: ItemSeqSnapshot) {
        self.items = snapshot.items;
    }

    /// Appends `item` and lets `arrange` reposition and validate all items.
    /// If `arrange` fails, the sequence is restored to its state before the call.
    pub fn add_with<F>(&mut self, item: Circle, arrange: F) -> LayoutResult<()>
    where
        F: FnOnce(&mut ItemSeq) -> LayoutResult<()>,
    {
        let snapshot = self.save();
        self.items.push(item);

        match arrange(self) {
            Ok(()) => {
                debug!("[SEQ] arranged {} items", self.items.len());
                debug_assert!(assertions::seq_is_valid(self));
                Ok(())
            }
            Err(err) => {
                warn!("[SEQ] rejected item #{}: {err}", self.items.len() - 1);
                self.restore(snapshot);
                Err(err)
            }
        }
    }

    /// Moves the items, in insertion order, to the first `self.len()` points.
    pub fn assign(&mut self, points: &[Point]) -> LayoutResult<()> {
        if points.len() < self.items.len() {
            return Err(LayoutError::PlacementExhausted {
                placed: points.len(),
                requested: self.items.len(),
            });
        }
        for (item, &p) in self.items.iter_mut().zip(points) {
            item.set_position(p);
        }
        trace!("[SEQ] assigned positions: {:?}", &points[..self.items.len()]);
        Ok(())
    }

    /// Ensures all items lie within the container bounds.
    pub fn check_bounds(&self) -> LayoutResult<()> {
        match self
            .items
            .iter()
            .position(|item| !self.container.within_bounds(item))
        {
            Some(index) => Err(LayoutError::OutOfBounds { index }),
            None => Ok(()),
        }
    }

    /// Ensures no two items intersect.
    pub fn check_overlap(&self) -> LayoutResult<()> {
        match self.first_intersection() {
            Some((first, second)) => Err(LayoutError::Overlap { first, second }),
            None => Ok(()),
        }
    }

    /// Bounds first, then overlap
    pub fn validate(&self) -> LayoutResult<()> {
        self.check_bounds()?;
        self.check_overlap()
    }

    /// Indices of the first pair of intersecting items
    pub fn first_intersection(&self) -> Option<(usize, usize)> {
        self.items
            .iter()
            .enumerate()
            .tuple_combinations()
            .find(|((_, a), (_, b))| a.intersects_with(*b))
            .map(|((i, _), (j, _))| (i, j))
    }

    pub fn items_intersect(&self) -> bool {
        self.first_intersection().is_some()
    }
}

/// Immutable copy of the items of an [`ItemSeq`].
#[derive(Clone, Debug)]
pub struct ItemSeqSnapshot {
    items: Vec<Circle>,
}
