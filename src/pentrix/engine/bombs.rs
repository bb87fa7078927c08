use rand::Rng;

use super::Game;
use crate::pentrix::prelude::*;

impl<'a, R: Rng> Game<'a, R> {
    /// Counts every bomb on the board down by one. Bombs whose countdown runs out explode.
    ///
    /// Returns the number of cells the explosions cleared.
    pub fn update_time_bombs(&mut self) -> usize {
        let mut cleared = 0;
        for coord in self.board.bombs() {
            // An earlier explosion in this pass may have taken it already.
            let CellTag::Bomb { countdown, .. } = self.board.get_mut_unchecked(&coord) else {
                continue;
            };
            if *countdown <= 1 {
                cleared += self.explode_at(&coord);
            } else {
                *countdown -= 1;
            }
        }
        cleared
    }

    /// Clears the 3x3 neighbourhood around `origin`. Bombs caught in the blast explode in turn, whatever their
    /// countdown; every other cell is simply cleared.
    ///
    /// Returns the number of occupied cells cleared.
    pub fn explode_at(&mut self, origin: &Coord) -> usize {
        if !self.board.in_bounds(origin) {
            return 0;
        }
        let mut cleared = 0;
        let mut pending = vec![*origin];
        if self.board.get_unchecked(origin).is_occupied() {
            self.board.set_unchecked(origin, CellTag::Empty);
            cleared += 1;
        }

        while let Some(center) = pending.pop() {
            for offset in SURROUNDING_OFFSETS.iter() {
                let coord = &center + offset;
                if !self.board.in_bounds(&coord) {
                    continue;
                }
                let tag = std::mem::take(self.board.get_mut_unchecked(&coord));
                if tag.is_occupied() {
                    cleared += 1;
                }
                if tag.is_bomb() {
                    pending.push(coord);
                }
            }
        }

        log::debug!("explosion at {origin} cleared {cleared} cells");
        cleared
    }
}
