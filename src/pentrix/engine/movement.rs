use rand::Rng;

use super::{Game, MoveOutcome};
use crate::pentrix::prelude::*;

impl<'a, R: Rng> Game<'a, R> {
    /// Attempts to shift the falling piece by `(dx, dy)`.
    ///
    /// A blocked downward move locks the piece and resolves the board; any other blocked move is rejected
    /// without effect.
    pub fn try_move(&mut self, dx: isize, dy: isize) -> MoveOutcome {
        let eraser = self.tag.is_eraser();
        if eraser && dx != 0 && self.eraser_strafe_lock {
            return MoveOutcome::Rejected;
        }

        let current = self.active_cells();
        let target = current.translated(dx, dy);
        if self.try_replace(&current, &target, eraser) {
            self.anchor = self.anchor.shifted(dx, dy);
            if eraser {
                self.eraser_strafe_lock = dx != 0;
            }
            return MoveOutcome::Moved;
        }

        if dx == 0 && dy > 0 {
            if eraser {
                self.tag = self.tag.landed();
                self.paint(&current);
            }
            return self.resolve_lock();
        }
        MoveOutcome::Rejected
    }

    pub fn try_move_left(&mut self) -> MoveOutcome {
        self.try_move(-1, 0)
    }

    pub fn try_move_right(&mut self) -> MoveOutcome {
        self.try_move(1, 0)
    }

    pub fn try_move_down(&mut self) -> MoveOutcome {
        self.try_move(0, 1)
    }

    /// One step of gravity.
    pub fn tick(&mut self) -> MoveOutcome {
        self.try_move_down()
    }

    /// Turns the falling piece one step clockwise about its anchor. Erasers are checked like any other piece.
    pub fn try_rotate(&mut self) -> MoveOutcome {
        let current = self.active_cells();
        let target = self.piece.points_after_rotation_at(self.anchor.x, self.anchor.y);
        if !self.try_replace(&current, &target, false) {
            return MoveOutcome::Rejected;
        }
        self.piece.advance_rotation();
        MoveOutcome::Moved
    }

    /// Lets the piece fall until it locks. The blocked move at the bottom does the resolving.
    pub fn drop_piece(&mut self) -> MoveOutcome {
        loop {
            let outcome = self.try_move_down();
            if !outcome.is_success() {
                return outcome;
            }
        }
    }

    /// Moves the falling piece's cells from `current` to `target` if every target cell can take them.
    fn try_replace(&mut self, current: &Shape, target: &Shape, pass_through: bool) -> bool {
        let fits = target.iter().all(|cell| {
            self.board.accepts(cell)
                && (pass_through || current.contains(cell) || self.board.is_empty_at(cell))
        });
        if !fits {
            return false;
        }
        for cell in current.iter() {
            self.board.set_unchecked(cell, CellTag::Empty);
        }
        self.paint(target);
        true
    }

    /// Writes the active tag into every given cell.
    pub(super) fn paint(&mut self, cells: &Shape) {
        for cell in cells.iter() {
            self.board.set_unchecked(cell, self.tag.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::pentrix::{engine::tests::*, prelude::*};

    fn settle(g: &mut Game<'_, rand::rngs::StdRng>) {
        while g.anchor().y < 0 {
            assert_eq!(g.tick(), MoveOutcome::Moved);
        }
    }

    #[test]
    fn left_then_right_restores_anchor() {
        let catalog = catalog();
        let mut g = game(GameConfig::plain().with_figure_sizes([1]), &catalog);
        settle(&mut g);
        if g.anchor().x == 0 {
            assert_eq!(g.try_move_right(), MoveOutcome::Moved);
        }
        let start = g.anchor();
        assert_eq!(g.try_move_left(), MoveOutcome::Moved);
        assert_eq!(g.try_move_right(), MoveOutcome::Moved);
        assert_eq!(g.anchor(), start);
        assert_eq!(g.board().occupied(), 1);
    }

    #[test]
    fn walls_reject_sideways_moves() {
        let catalog = catalog();
        let mut g = game(GameConfig::plain().with_figure_sizes([1]), &catalog);
        settle(&mut g);
        while g.try_move_left().is_success() {}
        assert_eq!(g.anchor().x, 0);
        assert_eq!(g.try_move_left(), MoveOutcome::Rejected);
        while g.try_move_right().is_success() {}
        assert_eq!(g.anchor().x, 14);
        assert_eq!(g.try_move_right(), MoveOutcome::Rejected);
        assert_eq!(g.board().occupied(), 1);
    }

    #[test]
    fn occupied_cells_block_sideways_moves() {
        let catalog = catalog();
        let mut g = game(GameConfig::plain().with_figure_sizes([1]), &catalog);
        settle(&mut g);
        let here = g.anchor();
        let side = if here.x == 0 { here.shifted(1, 0) } else { here.shifted(-1, 0) };
        g.stage(&side, red()).unwrap();
        let outcome = if here.x == 0 { g.try_move_right() } else { g.try_move_left() };
        assert_eq!(outcome, MoveOutcome::Rejected);
        assert_eq!(g.anchor(), here);
    }

    #[test]
    fn rotation_keeps_cell_count() {
        let catalog = catalog();
        let mut g = game(GameConfig::plain().with_figure_sizes([1]), &catalog);
        assert_eq!(g.try_rotate(), MoveOutcome::Moved);

        let mut g = game(GameConfig::plain(), &catalog);
        settle(&mut g);
        for _ in 0..5 {
            g.tick();
        }
        let before = g.board().occupied();
        for _ in 0..4 {
            g.try_rotate();
            assert_eq!(g.board().occupied(), before);
            assert_eq!(g.active_cells().len(), 5);
        }
    }

    /// A vertical domino on a 4x6 board, settled into view in column `x`.
    fn upright_domino(catalog: &Catalog, x: isize) -> Game<'_, rand::rngs::StdRng> {
        let mut g = game(GameConfig::plain().with_board(4, 6).with_figure_sizes([2]), catalog);
        if g.piece().current_points().width() != 1 {
            assert_eq!(g.try_rotate(), MoveOutcome::Moved);
        }
        assert_eq!(g.piece().current_points().width(), 1);
        while g.try_move_left().is_success() {}
        for _ in 0..x {
            assert_eq!(g.try_move_right(), MoveOutcome::Moved);
        }
        while g.anchor().y < 2 {
            assert_eq!(g.tick(), MoveOutcome::Moved);
        }
        assert_eq!(g.anchor(), Coord::new(x, 2));
        g
    }

    #[test]
    fn rotation_into_a_wall_is_rejected() {
        let catalog = catalog();
        let mut g = upright_domino(&catalog, 3);
        let board = g.board().clone();
        let rotation = g.piece().rotation();

        assert_eq!(g.try_rotate(), MoveOutcome::Rejected);
        assert_eq!(g.piece().rotation(), rotation);
        assert_eq!(g.board(), &board);
        assert_eq!(g.anchor(), Coord::new(3, 2));
    }

    #[test]
    fn rotation_into_a_cell_is_rejected() {
        let catalog = catalog();
        let mut g = upright_domino(&catalog, 1);
        g.stage(&Coord::new(2, 2), red()).unwrap();
        let board = g.board().clone();
        let rotation = g.piece().rotation();

        assert_eq!(g.try_rotate(), MoveOutcome::Rejected);
        assert_eq!(g.piece().rotation(), rotation);
        assert_eq!(g.board(), &board);

        g.stage(&Coord::new(2, 2), CellTag::Empty).unwrap();
        assert_eq!(g.try_rotate(), MoveOutcome::Moved);
        assert_ne!(g.piece().rotation(), rotation);
        assert_eq!(g.board().occupied(), 2);
    }

    #[test]
    fn drop_locks_once() {
        let catalog = catalog();
        let mut g = game(GameConfig::plain().with_board(20, 20).with_figure_sizes([1]), &catalog);
        let outcome = g.drop_piece();
        assert!(matches!(outcome, MoveOutcome::Locked(report) if report.rows_cleared == 0));
        assert_eq!(g.board().occupied(), 1);
        assert_eq!(g.board().cells().filter(|(c, t)| c.y == 19 && t.is_occupied()).count(), 1);
        assert_eq!(g.score(), 0);
    }

    #[test]
    fn eraser_passes_through_and_lands() {
        let catalog = catalog();
        let config = GameConfig::plain().with_board(20, 20).with_figure_sizes([1]).with_eraser(1.0);
        let mut g = game(config, &catalog);
        assert!(g.active_tag().is_eraser());
        settle(&mut g);

        let x = g.anchor().x;
        g.stage(&Coord::new(x, 10), red()).unwrap();
        while g.anchor().y < 19 {
            assert_eq!(g.tick(), MoveOutcome::Moved);
        }
        assert!(g.board().is_empty_at(&Coord::new(x, 10)), "the eraser wipes what it passes");

        let outcome = g.tick();
        assert!(matches!(outcome, MoveOutcome::Locked(_)));
        let landed = g.board().get(&Coord::new(x, 19)).unwrap();
        assert!(matches!(landed, CellTag::Color(_)));
    }

    #[test]
    fn eraser_lands_on_the_floor_as_colour() {
        let catalog = catalog();
        let config = GameConfig::plain().with_board(20, 20).with_figure_sizes([1]).with_eraser(1.0);
        let mut g = game(config, &catalog);
        let x = g.anchor().x;
        for px in 0..20 {
            if px != x {
                g.stage(&Coord::new(px, 19), red()).unwrap();
            }
        }
        g.stage(&Coord::new(x, 19), red()).unwrap();
        assert!(matches!(g.drop_piece(), MoveOutcome::Locked(report) if report.rows_cleared == 1));
        assert_eq!(g.score(), 100);
    }

    #[test]
    fn eraser_strafes_once_per_fall() {
        let catalog = catalog();
        let config = GameConfig::plain().with_board(20, 20).with_figure_sizes([1]).with_eraser(1.0);
        let mut g = game(config, &catalog);
        settle(&mut g);
        if g.anchor().x == 0 {
            assert_eq!(g.try_move_right(), MoveOutcome::Moved);
            assert_eq!(g.tick(), MoveOutcome::Moved);
        }

        assert_eq!(g.try_move_left(), MoveOutcome::Moved);
        assert_eq!(g.try_move_left(), MoveOutcome::Rejected);
        assert_eq!(g.try_move_right(), MoveOutcome::Rejected);
        assert_eq!(g.tick(), MoveOutcome::Moved);
        assert_eq!(g.try_move_right(), MoveOutcome::Moved);
    }

    #[test]
    fn eraser_walls_still_hold() {
        let catalog = catalog();
        let config = GameConfig::plain().with_board(20, 20).with_figure_sizes([1]).with_eraser(1.0);
        let mut g = game(config, &catalog);
        settle(&mut g);
        while g.anchor().x > 0 {
            assert_eq!(g.try_move_left(), MoveOutcome::Moved);
            assert_eq!(g.tick(), MoveOutcome::Moved);
        }
        assert_eq!(g.try_move_left(), MoveOutcome::Rejected);
    }
}
