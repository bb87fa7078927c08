use rand::Rng;

use super::Game;
use crate::pentrix::prelude::*;

impl<'a, R: Rng> Game<'a, R> {
    /// Replaces the falling piece with a fresh one, entering play from just above the board.
    ///
    /// Erasers are rolled for first, then time bombs; otherwise a catalog figure is drawn, occasionally in
    /// rainbow when colour lines are in effect.
    pub(super) fn spawn(&mut self) {
        let color = self.config.palette[self.rng.gen_range(0..self.config.palette.len())].clone();

        let (piece, tag) = if self.config.eraser && self.rng.gen_bool(self.config.eraser_probability) {
            (Piece::monomino(), CellTag::Eraser(color))
        } else if self.config.time_bomb && self.rng.gen_bool(self.config.time_bomb_probability) {
            (Piece::monomino(), CellTag::Bomb { countdown: self.config.time_bomb_fuse, color })
        } else {
            let piece = self.selector.choose(&mut self.rng);
            let rainbow = self.config.color_lines_in_effect() && self.rng.gen_bool(self.config.rainbow_probability);
            (piece, if rainbow { CellTag::Rainbow } else { CellTag::Color(color) })
        };

        let shape = piece.current_points();
        let slack = self.board.width().saturating_sub(shape.width());
        let x = self.rng.gen_range(0..=slack) as isize;
        let y = -(shape.height() as isize);

        self.piece = piece;
        self.tag = tag;
        self.anchor = Coord::new(x, y);
        self.eraser_strafe_lock = false;
        let cells = self.active_cells();
        self.paint(&cells);

        log::trace!("spawned {} ({} cells) at {}", self.tag, self.piece.size(), self.anchor);
    }
}
