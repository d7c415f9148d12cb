use crate::entities::{Container, MIN_SIDE_SIZE};
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::primitives::{Circle, Point};
use crate::layouts::{ItemSeq, Layout};

/// All items are organized in a grid, aligned vertically and horizontally.
#[derive(Clone, Debug)]
pub struct GridLayout {
    seq: ItemSeq,
}

impl GridLayout {
    pub fn new(container: Container) -> Self {
        Self {
            seq: ItemSeq::new(container),
        }
    }

    /// Points where the grid lines intersect, in row-major order of `(x, y)`.
    ///
    /// The grid always has as many vertical as horizontal lines.
    /// Points without a 1px margin to the container border are skipped,
    /// so fewer than `n_items` points may be returned.
    pub fn grid_intersections(&self, n_items: usize) -> Vec<Point> {
        grid_intersections(self.seq.container(), n_items)
    }
}

impl Layout for GridLayout {
    fn seq(&self) -> &ItemSeq {
        &self.seq
    }

    fn add(&mut self, item: Circle) -> LayoutResult<()> {
        self.seq.add_with(item, |seq| {
            let capacity = seq.container().capacity(MIN_SIDE_SIZE);
            if capacity < seq.len() as i64 {
                return Err(LayoutError::CapacityExceeded {
                    capacity,
                    n_items: seq.len(),
                });
            }
            let points = grid_intersections(seq.container(), seq.len());
            seq.assign(&points)?;
            seq.validate()
        })
    }
}

fn grid_intersections(container: &Container, n_items: usize) -> Vec<Point> {
    let (width, height) = (container.width(), container.height());
    let n = n_items as i64;
    let n_columns = i64::min(n + 1, MIN_SIDE_SIZE);
    let col_width = width / n_columns;
    let col_height = height / n_columns;

    let mut points = vec![];
    for x in 0..n {
        let px = x * (col_width + 1) + col_width;
        if px + 1 >= width {
            // px only grows with x
            break;
        }
        for y in 0..n {
            let py = y * (col_height + 1) + col_height;
            if py + 1 >= height {
                break;
            }
            if px - 1 < 0 || py - 1 < 0 {
                continue;
            }
            points.push(Point(px, py));
        }
    }
    points
}
