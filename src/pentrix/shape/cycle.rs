use std::sync::Arc;

use crate::pentrix::prelude::*;

/// The closed sequence of distinct normalized orientations of one polyomino.
///
/// Cycles are built once by the catalog and then shared read-only by every piece drawn from it,
/// so cloning one only bumps a reference count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RotationCycle(Arc<[Shape]>);

impl RotationCycle {
    /// Wraps orientations produced by [`Shape::rotation_cycle`]. Callers must hand over 1, 2 or 4 entries.
    pub(super) fn from_orientations(orientations: Vec<Shape>) -> RotationCycle {
        debug_assert!(matches!(orientations.len(), 1 | 2 | 4));
        RotationCycle(orientations.into())
    }

    /// The orientation at the given index, wrapping around the cycle.
    pub fn get(&self, index: usize) -> &Shape {
        &self.0[index % self.0.len()]
    }

    /// The number of distinct orientations (1, 2 or 4).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The number of cells in every orientation.
    pub fn cell_count(&self) -> usize {
        self.0[0].len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.0.iter()
    }

    /// Whether one of the orientations equals the given normalized shape.
    pub fn contains(&self, shape: &Shape) -> bool {
        self.0.iter().any(|s| s == shape)
    }

    /// Whether the two cycles describe the same polyomino up to rotation.
    pub fn shares_orientation_with(&self, other: &RotationCycle) -> bool {
        self.0.iter().any(|s| other.contains(s))
    }

    /// A representative that is identical for every member of a rotation class: the least orientation.
    pub fn key(&self) -> &Shape {
        self.0.iter().min().expect("rotation cycles always hold at least one orientation")
    }
}
