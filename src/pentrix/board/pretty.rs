use itertools::Itertools;

use super::CellTag;
use crate::pentrix::prelude::*;

impl CellTag {
    /// A one-character glyph for compact boards: the colour's initial, `#` for rainbow, `*` for an eraser and
    /// the countdown (capped at 9) for a bomb.
    pub fn glyph(&self) -> char {
        match self {
            CellTag::Empty              => '.',
            CellTag::Rainbow            => '#',
            CellTag::Eraser(_)          => '*',
            CellTag::Bomb { countdown, .. } => char::from_digit((*countdown).min(9), 10).unwrap_or('9'),
            CellTag::Color(c)           => c.name().chars().next().unwrap_or('?'),
        }
    }
}

impl Board {
    /// Pretty-prints the visible board, one line per row.
    pub fn pretty(&self) -> String {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|cell| cell.glyph()).collect::<String>())
            .join("\n")
    }
}
