use super::prelude::*;

/// A runtime figure: a shared rotation cycle plus the orientation it currently shows.
#[derive(Clone, Debug)]
pub struct Piece {
    cycle: RotationCycle,
    rotation: usize,
}

impl Piece {
    /// Builds a piece from any representative of its rotation class.
    pub fn new(shape: &Shape) -> Result<Piece> {
        if shape.is_empty() {
            return Err(anyhow!("a piece needs at least one cell"));
        }
        Ok(Piece::from_cycle(shape.rotation_cycle()))
    }

    /// Builds a piece from a catalog entry, showing the entry's first orientation.
    pub fn from_cycle(cycle: RotationCycle) -> Piece {
        Piece { cycle, rotation: 0 }
    }

    /// The single-cell piece used by erasers and time bombs.
    pub fn monomino() -> Piece {
        Piece::from_cycle(Shape::from_iter([Coord::origin()]).rotation_cycle())
    }

    /// The orientation currently shown, normalized.
    pub fn current_points(&self) -> &Shape {
        self.cycle.get(self.rotation)
    }

    /// The current orientation placed at the given anchor.
    pub fn points_at(&self, dx: isize, dy: isize) -> Shape {
        self.current_points().translated(dx, dy)
    }

    /// The orientation one clockwise step ahead placed at the given anchor; does not change the piece.
    pub fn points_after_rotation_at(&self, dx: isize, dy: isize) -> Shape {
        self.cycle.get(self.rotation + 1).translated(dx, dy)
    }

    /// Commits one clockwise step. Only call once the rotated placement has been validated.
    pub fn advance_rotation(&mut self) {
        self.rotation = (self.rotation + 1) % self.cycle.len();
    }

    /// Index of the current orientation within the cycle.
    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// The full rotation cycle.
    pub fn cycle(&self) -> &RotationCycle {
        &self.cycle
    }

    /// Number of cells in the piece.
    pub fn size(&self) -> usize {
        self.cycle.cell_count()
    }

    /// Whether two pieces are the same figure up to rotation, whatever orientation each currently shows.
    pub fn is_equivalent_to(&self, other: &Piece) -> bool {
        self.cycle.shares_orientation_with(&other.cycle)
    }

    /// A bare shape is a different kind of value, never the same figure as a piece.
    pub fn is_equivalent_to_shape(&self, _shape: &Shape) -> bool {
        false
    }
}
