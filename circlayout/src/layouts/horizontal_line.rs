use crate::entities::Container;
use crate::error::LayoutResult;
use crate::geometry::primitives::{Circle, Point};
use crate::layouts::{ItemSeq, Layout};
use itertools::Itertools;

/// All items are aligned on a horizontal line, centered in the container.
/// The container width is split in equal parts, one item at the center of each part.
#[derive(Clone, Debug)]
pub struct HorizontalLineLayout {
    seq: ItemSeq,
    baseline: i64,
}

impl HorizontalLineLayout {
    pub fn new(container: Container) -> Self {
        let baseline = (container.height() - 1) / 2;
        Self {
            seq: ItemSeq::new(container),
            baseline,
        }
    }

    /// The y coordinate shared by all items
    pub fn baseline(&self) -> i64 {
        self.baseline
    }

    /// Positions of `n_items` items spread over the width of the container.
    pub fn item_coordinates(&self, n_items: usize) -> Vec<Point> {
        line_coordinates(self.seq.container(), self.baseline, n_items)
    }
}

impl Layout for HorizontalLineLayout {
    fn seq(&self) -> &ItemSeq {
        &self.seq
    }

    fn add(&mut self, item: Circle) -> LayoutResult<()> {
        let baseline = self.baseline;
        self.seq.add_with(item, |seq| {
            let points = line_coordinates(seq.container(), baseline, seq.len());
            seq.assign(&points)?;
            seq.validate()
        })
    }
}

fn line_coordinates(container: &Container, baseline: i64, n_items: usize) -> Vec<Point> {
    if n_items == 0 {
        return vec![];
    }
    let part_width = container.width() / n_items as i64;
    (0..n_items as i64)
        .map(|i| Point(i * part_width + part_width / 2, baseline))
        .collect_vec()
}
