use super::CellTag;
use crate::pentrix::prelude::*;

static EMPTY: CellTag = CellTag::Empty;

impl Board {
    /// Whether the coord is a visible cell.
    pub fn in_bounds(&self, coord: &Coord) -> bool {
        self.in_columns(coord) && 0 <= coord.y && coord.y < self.height as isize
    }

    /// Whether a falling cell may sit here: inside the columns and above the floor. There is no ceiling.
    pub fn accepts(&self, coord: &Coord) -> bool {
        self.in_columns(coord) && coord.y < self.height as isize
    }

    /// Gets the tag at a coordinate; anything above the board that nothing occupies reads as empty.
    pub fn get(&self, coord: &Coord) -> Result<&CellTag> {
        if !self.accepts(coord) {
            return Err(anyhow!("coordinate {coord} is outside a {}x{} board", self.width, self.height));
        }
        Ok(self.get_unchecked(coord))
    }

    /// Sets the tag at a coordinate. Cells above the board are tracked only while occupied.
    pub fn set(&mut self, coord: &Coord, tag: CellTag) -> Result<&mut Self> {
        if !self.accepts(coord) {
            return Err(anyhow!("coordinate {coord} is outside a {}x{} board", self.width, self.height));
        }
        self.set_unchecked(coord, tag);
        Ok(self)
    }

    /// Whether the coord holds nothing. Coordinates a falling cell could never occupy are not empty.
    pub fn is_empty_at(&self, coord: &Coord) -> bool {
        self.accepts(coord) && self.get_unchecked(coord).is_empty()
    }

    fn in_columns(&self, coord: &Coord) -> bool {
        0 <= coord.x && coord.x < self.width as isize
    }
}

impl Board {
    /// Unchecked read; the caller guarantees `accepts(coord)`.
    pub(crate) fn get_unchecked(&self, coord: &Coord) -> &CellTag {
        if coord.y < 0 {
            self.overhang.get(coord).unwrap_or(&EMPTY)
        } else {
            &self.cells[self.offset(coord)]
        }
    }

    /// Unchecked write; the caller guarantees `accepts(coord)`.
    pub(crate) fn set_unchecked(&mut self, coord: &Coord, tag: CellTag) {
        if coord.y < 0 {
            match tag {
                CellTag::Empty => { self.overhang.remove(coord); },
                tag            => { self.overhang.insert(*coord, tag); }
            }
        } else {
            let offset = self.offset(coord);
            self.cells[offset] = tag;
        }
    }

    /// Mutable access to a visible cell; the caller guarantees `in_bounds(coord)`.
    pub(crate) fn get_mut_unchecked(&mut self, coord: &Coord) -> &mut CellTag {
        let offset = self.offset(coord);
        &mut self.cells[offset]
    }

    fn offset(&self, coord: &Coord) -> usize {
        coord.y as usize * self.width + coord.x as usize
    }
}
