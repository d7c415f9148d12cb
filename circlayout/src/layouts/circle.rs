use crate::entities::Container;
use crate::error::LayoutResult;
use crate::geometry::primitives::{Circle, Point};
use crate::layouts::{ItemSeq, Layout};
use itertools::Itertools;
use std::f64::consts::PI;

/// Items are evenly spaced on a circle centered in the container.
#[derive(Clone, Debug)]
pub struct CircleLayout {
    seq: ItemSeq,
}

impl CircleLayout {
    pub fn new(container: Container) -> Self {
        Self {
            seq: ItemSeq::new(container),
        }
    }

    /// Radius of the circle on which the items are placed
    pub fn circle_radius(&self) -> i64 {
        circle_radius(self.seq.container())
    }

    pub fn circle_center(&self) -> Point {
        circle_center(self.seq.container())
    }

    /// Positions of `n_items` items on the circle.
    /// The first item sits one angular step away from the positive x-axis, the last one on it.
    pub fn item_coordinates(&self, n_items: usize) -> Vec<Point> {
        item_coordinates(self.seq.container(), n_items)
    }
}

impl Layout for CircleLayout {
    fn seq(&self) -> &ItemSeq {
        &self.seq
    }

    fn add(&mut self, item: Circle) -> LayoutResult<()> {
        self.seq.add_with(item, |seq| {
            let points = item_coordinates(seq.container(), seq.len());
            seq.assign(&points)?;
            seq.validate()
        })
    }
}

fn circle_radius(container: &Container) -> i64 {
    i64::min(container.width(), container.height()) / 4
}

fn circle_center(container: &Container) -> Point {
    Point(container.width() / 2, container.height() / 2)
}

fn item_coordinates(container: &Container, n_items: usize) -> Vec<Point> {
    if n_items == 0 {
        return vec![];
    }
    let radius = circle_radius(container) as f64;
    let Point(cx, cy) = circle_center(container);
    let angle = 2.0 * PI / n_items as f64;

    (1..=n_items)
        .map(|i| {
            let theta = angle * i as f64;
            let x = (cx as f64 + radius * theta.cos()).ceil() as i64;
            let y = (cy as f64 + radius * theta.sin()).ceil() as i64;
            Point(x, y)
        })
        .collect_vec()
}
