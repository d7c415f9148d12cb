use crate::config::LayoutConfig;
use crate::entities::{Container, MIN_SIDE_SIZE};
use crate::error::{LayoutError, LayoutResult};
use crate::geometry::primitives::{Circle, Point};
use crate::layouts::{ItemSeq, Layout};
use indexmap::IndexSet;
use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Circles of a single radius are placed at random, non-overlapping positions.
///
/// Positions are drawn from the set of valid circle centers. After every draw, all centers that
/// would host a circle intersecting the one just placed are removed from the set.
/// All positions are redrawn on every addition, only the state of the PRNG carries over.
#[derive(Clone, Debug)]
pub struct RandomLayout<R: Rng = SmallRng> {
    seq: ItemSeq,
    radius: i64,
    center_coords: CandidateSet,
    rng: R,
}

impl<R: Rng> RandomLayout<R> {
    pub fn new(container: Container, radius: i64, rng: R) -> LayoutResult<Self> {
        if radius <= 0 {
            return Err(LayoutError::InvalidDimension {
                name: "radius",
                value: radius,
            });
        }
        let center_coords = CandidateSet::center_coords(&container, radius);
        debug!(
            "[RND] {} candidate centers for radius {radius} in {}x{}",
            center_coords.len(),
            container.width(),
            container.height()
        );
        Ok(Self {
            seq: ItemSeq::new(container),
            radius,
            center_coords,
            rng,
        })
    }

    /// Radius shared by all items of this layout
    pub fn radius(&self) -> i64 {
        self.radius
    }

    /// All valid circle centers in an empty container
    pub fn center_coords(&self) -> &CandidateSet {
        &self.center_coords
    }

    /// Draws up to `n_items` mutually non-conflicting centers, in the order they were chosen.
    /// Returns fewer points if the candidates run out.
    pub fn choose_coordinates(&mut self, n_items: usize) -> Vec<Point> {
        choose_coordinates(&self.center_coords, self.radius, &mut self.rng, n_items)
    }
}

impl RandomLayout<SmallRng> {
    /// Uses the item radius and PRNG seed of `config`.
    pub fn from_config(container: Container, config: &LayoutConfig) -> LayoutResult<Self> {
        let rng = match config.prng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        RandomLayout::new(container, config.item_radius, rng)
    }
}

impl<R: Rng> Layout for RandomLayout<R> {
    fn seq(&self) -> &ItemSeq {
        &self.seq
    }

    fn add(&mut self, item: Circle) -> LayoutResult<()> {
        if item.radius() != self.radius {
            return Err(LayoutError::PreconditionViolation {
                item_radius: item.radius(),
                layout_radius: self.radius,
            });
        }

        let capacity = self.seq.container().capacity(MIN_SIDE_SIZE);
        let n_items = self.seq.len() + 1;
        if capacity < n_items as i64 {
            return Err(LayoutError::CapacityExceeded { capacity, n_items });
        }

        let RandomLayout {
            seq,
            radius,
            center_coords,
            rng,
        } = self;

        seq.add_with(item, |seq| {
            let points = choose_coordinates(center_coords, *radius, rng, seq.len());
            seq.assign(&points)?;
            seq.validate()
        })
    }
}

fn choose_coordinates(
    center_coords: &CandidateSet,
    radius: i64,
    rng: &mut impl Rng,
    n_items: usize,
) -> Vec<Point> {
    let mut candidates = center_coords.clone();
    let mut chosen = Vec::with_capacity(n_items);

    for _ in 0..n_items {
        let Some(point) = candidates.choose(rng) else {
            trace!("[RND] candidates exhausted after {} points", chosen.len());
            break;
        };
        chosen.push(point);
        candidates.remove_square(point, exclusion_reach(radius));
    }
    chosen
}

/// Circles of radius `r` centered further apart than `2r` (on either axis) have disjoint bounding boxes.
fn exclusion_reach(radius: i64) -> i64 {
    2 * radius
}

/// Set of integer points still eligible to host the center of a circle.
/// Supports O(1) membership, removal and uniform sampling.
#[derive(Clone, Debug, Default)]
pub struct CandidateSet {
    points: IndexSet<Point>,
}

impl CandidateSet {
    /// All centers `(x, y)` with `radius <= x < width - radius` and `radius <= y < height - radius`,
    /// i.e. every center of a circle with `radius` fully inside `container`.
    pub fn center_coords(container: &Container, radius: i64) -> Self {
        let xs = radius..container.width() - radius;
        let points = xs
            .flat_map(|x| (radius..container.height() - radius).map(move |y| Point(x, y)))
            .collect::<IndexSet<Point>>();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Picks a point uniformly at random, `None` if the set is empty.
    pub fn choose(&self, rng: &mut impl Rng) -> Option<Point> {
        match self.points.is_empty() {
            true => None,
            false => {
                let idx = rng.random_range(0..self.points.len());
                self.points.get_index(idx).copied()
            }
        }
    }

    /// Removes every point in the square of side `2 * reach + 1` centered on `center`, borders included.
    pub fn remove_square(&mut self, center: Point, reach: i64) {
        let Point(cx, cy) = center;
        for x in cx - reach..=cx + reach {
            for y in cy - reach..=cy + reach {
                self.points.swap_remove(&Point(x, y));
            }
        }
    }
}
