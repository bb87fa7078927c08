pub mod cycle;
pub mod transform;

use super::prelude::*;

use itertools::Itertools;
pub use cycle::RotationCycle;

/// An immutable set of unique cells; order is irrelevant and duplicates collapse.
///
/// The backing set is ordered so that equality, hashing and ordering of shapes are structural,
/// which is what the catalog relies on when it compares orientations.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Shape(BTreeSet<Coord>);

impl FromIterator<Coord> for Shape {
    fn from_iter<T: IntoIterator<Item = Coord>>(iter: T) -> Self {
        Shape(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a Coord> for Shape {
    fn from_iter<T: IntoIterator<Item = &'a Coord>>(iter: T) -> Self {
        Shape(iter.into_iter().copied().collect())
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.0.iter().map(|c| format!("({}, {})", c.x, c.y)).join(", "))
    }
}

impl Shape {
    /// Builds a shape from (x, y) pairs.
    pub fn from_pairs(pairs: &[(isize, isize)]) -> Shape {
        pairs.iter().map(|&(x, y)| Coord::new(x, y)).collect()
    }

    /// Whether the cell belongs to this shape.
    pub fn contains(&self, coord: &Coord) -> bool {
        self.0.contains(coord)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of cells in the shape.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates the cells in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = &Coord> {
        self.0.iter()
    }

    /// Produces a copy of this shape with one extra cell.
    pub fn with(&self, coord: Coord) -> Shape {
        let mut cells = self.0.clone();
        cells.insert(coord);
        Shape(cells)
    }

    /// The smallest (x, y) corner of the bounding box; `None` for the empty shape.
    pub fn min_corner(&self) -> Option<Coord> {
        let min_x = self.0.iter().map(|c| c.x).min()?;
        let min_y = self.0.iter().map(|c| c.y).min()?;
        Some(Coord::new(min_x, min_y))
    }

    /// Width of the bounding box, in cells.
    pub fn width(&self) -> usize {
        match self.0.iter().map(|c| c.x).minmax().into_option() {
            Some((lo, hi)) => (hi - lo + 1) as usize,
            None => 0,
        }
    }

    /// Height of the bounding box, in cells.
    pub fn height(&self) -> usize {
        match self.0.iter().map(|c| c.y).minmax().into_option() {
            Some((lo, hi)) => (hi - lo + 1) as usize,
            None => 0,
        }
    }

    /// The shape shifted by the given offset.
    pub fn translated(&self, dx: isize, dy: isize) -> Shape {
        self.0.iter().map(|c| c.shifted(dx, dy)).collect()
    }

    /// Whether every cell can reach every other through shared edges. The empty shape is not connected.
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.0.iter().next() else {
            return false;
        };
        let mut seen: HashSet<Coord> = HashSet::from([*start]);
        let mut frontier = vec![*start];
        while let Some(cell) = frontier.pop() {
            for next in cell.neighbours() {
                if self.0.contains(&next) && seen.insert(next) {
                    frontier.push(next);
                }
            }
        }
        seen.len() == self.0.len()
    }
}
