use crate::pentrix::prelude::*;

/// Orientations are tracked as quarter turns, so no cycle can be longer than this.
pub const MAX_ROTATIONS: usize = 4;

/// Applies a quarter turn clockwise to an offset point.
pub fn rotate_one(coord: &Coord) -> Coord {
    Coord::new(coord.y, -coord.x)
}

impl Shape {
    /// Translates the shape so that its bounding box starts at (0, 0).
    ///
    /// Total on every input; the empty shape normalizes to itself.
    pub fn normalize(&self) -> Shape {
        let Some(corner) = self.min_corner() else {
            return Shape::default();
        };
        self.iter().map(|c| c - corner).collect()
    }

    /// Whether the bounding box already starts at (0, 0).
    pub fn is_normalized(&self) -> bool {
        self.min_corner().is_none_or(|c| c == Coord::origin())
    }

    /// Rotates every cell a quarter turn clockwise about the origin, (x, y) -> (y, -x).
    ///
    /// The result is generally not normalized; compare only after calling [`Shape::normalize`].
    pub fn rotate_clockwise(&self) -> Shape {
        self.iter().map(rotate_one).collect()
    }

    /// Collects the distinct normalized orientations of this shape, starting with its normalized form and
    /// following clockwise quarter turns until the start reappears.
    pub fn rotation_cycle(&self) -> RotationCycle {
        let start = self.normalize();
        let mut orientations = vec![start.clone()];
        loop {
            let next = orientations[orientations.len() - 1].rotate_clockwise().normalize();
            if next == start {
                break;
            }
            orientations.push(next);
            assert!(
                orientations.len() <= MAX_ROTATIONS,
                "rotation cycle of {start} did not close within {MAX_ROTATIONS} quarter turns"
            );
        }
        RotationCycle::from_orientations(orientations)
    }
}
