use super::CellTag;
use crate::pentrix::prelude::*;

impl Board {
    /// The visible cells of one row, left to right; `None` when the row is off the board.
    fn row(&self, y: isize) -> Option<&[CellTag]> {
        if y < 0 || y >= self.height as isize {
            return None;
        }
        let start = y as usize * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Whether every cell of the row is occupied. Rows off the board are never full.
    pub fn is_row_full(&self, y: isize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|c| c.is_occupied()))
    }

    /// Whether the row is full and all of its non-rainbow cells share one colour.
    ///
    /// Rainbow cells neither break the row nor pick its colour, so a row of nothing but rainbow counts.
    pub fn is_row_monochrome(&self, y: isize) -> bool {
        if !self.is_row_full(y) {
            return false;
        }
        let Some(row) = self.row(y) else {
            return false;
        };
        let mut colors = row.iter().filter_map(|c| c.line_color());
        match colors.next() {
            Some(first) => colors.all(|c| c == first),
            None => true,
        }
    }

    /// Removes a visible row, drops every row above it by one and leaves row 0 empty.
    /// Cells above the board stay where they are.
    pub fn clear_row_and_collapse(&mut self, y: usize) -> Result<()> {
        if y >= self.height {
            return Err(anyhow!("row {y} is outside a board of height {}", self.height));
        }
        self.collapse_row(y);
        Ok(())
    }

    /// Unchecked collapse; the caller guarantees `y < height`.
    pub(crate) fn collapse_row(&mut self, y: usize) {
        let end = (y + 1) * self.width;
        self.cells[..end].rotate_right(self.width);
        self.cells[..self.width].iter_mut().for_each(|c| *c = CellTag::Empty);
    }
}
