use crate::pentrix::prelude::*;

/// One level of the growth search: a partial placement and the neighbours still to try from it.
struct Frame {
    cells: Vec<Coord>,
    candidates: Vec<Coord>,
    cursor: usize,
}

impl Frame {
    /// Lists, for every placed cell in placement order, each neighbour not yet placed. A neighbour shared by
    /// two placed cells is listed twice, once per cell it grows from.
    fn new(cells: Vec<Coord>) -> Frame {
        let candidates = cells
            .iter()
            .flat_map(|cell| cell.neighbours())
            .filter(|n| !cells.contains(n))
            .collect();
        Frame { cells, candidates, cursor: 0 }
    }
}

/// A lazy stream of every connected placement of `n` cells grown from a seed at the origin.
///
/// The stream is raw: the same polyomino shows up once per construction order and once per cell it was grown
/// from, in whatever translation the growth left it. Its length grows combinatorially with `n`; consume it
/// through [`super::dedup_rotations`] or bound it with iterator adapters.
pub struct RawShapes {
    size: usize,
    stack: Vec<Frame>,
    seed_pending: bool,
}

impl RawShapes {
    pub(super) fn new(size: usize) -> RawShapes {
        RawShapes {
            size,
            stack: vec![Frame::new(vec![Coord::origin()])],
            seed_pending: size == 1,
        }
    }
}

impl Iterator for RawShapes {
    type Item = Shape;

    fn next(&mut self) -> Option<Self::Item> {
        if self.seed_pending {
            self.seed_pending = false;
            self.stack.clear();
            return Some(Shape::from_iter([Coord::origin()]));
        }

        loop {
            let frame = self.stack.last_mut()?;
            if frame.cursor == frame.candidates.len() {
                self.stack.pop();
                continue;
            }

            let grown = frame.candidates[frame.cursor];
            frame.cursor += 1;

            let mut cells = frame.cells.clone();
            cells.push(grown);
            if cells.len() == self.size {
                return Some(Shape::from_iter(cells));
            }
            self.stack.push(Frame::new(cells));
        }
    }
}

/// Enumerates the raw growth stream for polyominoes of `n` cells.
pub fn generate_all(n: usize) -> Result<RawShapes> {
    if n == 0 || n > MAX_FIGURE_SIZE {
        return Err(anyhow!("polyomino size {n} out of range; expected 1 to {MAX_FIGURE_SIZE}"));
    }
    Ok(RawShapes::new(n))
}
