pub(crate) mod cell;
pub(crate) mod indexing;
pub(crate) mod pretty;
pub(crate) mod rows;

use super::prelude::*;

use itertools::Itertools;
pub use cell::{CellTag, Color};

/// A fixed-size grid of cell tags, plus the cells a falling piece occupies above row 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Width of the board, in cells.
    width: usize,

    /// Height of the board, in cells.
    height: usize,

    /// Every visible cell, row-major from the top row.
    cells: Vec<CellTag>,

    /// Occupied cells with negative `y`. Only the active piece ever lives here, while it enters play.
    overhang: BTreeMap<Coord, CellTag>,
}

impl Board {
    /// Constructs an empty board. Both dimensions must be positive.
    pub fn new(width: usize, height: usize) -> Result<Board> {
        if width == 0 {
            return Err(anyhow!("board width must be positive"));
        }
        if height == 0 {
            return Err(anyhow!("board height must be positive"));
        }
        if isize::try_from(width.saturating_mul(height)).is_err() {
            return Err(anyhow!("board of {width}x{height} cells is too large"));
        }
        Ok(Board {
            width,
            height,
            cells: vec![CellTag::Empty; width * height],
            overhang: BTreeMap::new(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Empties every cell, including anything above the board.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = CellTag::Empty);
        self.overhang.clear();
    }

    /// Whether anything is occupied above row 0.
    pub fn has_overhang(&self) -> bool {
        !self.overhang.is_empty()
    }

    /// Iterates every visible cell with its coordinate, row by row from the top.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &CellTag)> {
        (0..self.height as isize)
            .cartesian_product(0..self.width as isize)
            .map(|(y, x)| Coord::new(x, y))
            .zip(self.cells.iter())
    }

    /// Coordinates of every visible bomb, row by row from the top.
    pub fn bombs(&self) -> Vec<Coord> {
        self.cells().filter(|(_, tag)| tag.is_bomb()).map(|(c, _)| c).collect()
    }

    /// Number of occupied visible cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }
}

#[cfg(test)]
mod tests {
    use crate::pentrix::prelude::*;

    #[test]
    fn rejects_empty_dimensions() {
        assert!(Board::new(0, 10).is_err());
        assert!(Board::new(10, 0).is_err());
        assert!(Board::new(0, 0).is_err());
        let board = Board::new(10, 20).unwrap();
        assert_eq!((board.width(), board.height()), (10, 20));
    }

    #[test]
    fn starts_empty() {
        let board = Board::new(4, 3).unwrap();
        assert_eq!(board.cells().count(), 12);
        assert!(board.cells().all(|(_, tag)| tag.is_empty()));
        assert!(!board.has_overhang());
    }

    #[test]
    fn cells_are_row_major() {
        let board = Board::new(3, 2).unwrap();
        let coords = board.cells().map(|(c, _)| c).collect::<Vec<_>>();
        assert_eq!(coords[0], Coord::new(0, 0));
        assert_eq!(coords[2], Coord::new(2, 0));
        assert_eq!(coords[3], Coord::new(0, 1));
    }

    #[test]
    fn clear_empties_everything() {
        let mut board = Board::new(10, 20).unwrap();
        for x in 0..10 {
            board.set(&Coord::new(x, 5), CellTag::Color(Color::from("white"))).unwrap();
        }
        for y in 0..20 {
            board.set(&Coord::new(5, y), CellTag::Color(Color::from("black"))).unwrap();
        }
        board.set(&Coord::new(2, -1), CellTag::Rainbow).unwrap();
        assert!(board.has_overhang());

        board.clear();
        assert_eq!(board.occupied(), 0);
        assert!(!board.has_overhang());
    }
}
