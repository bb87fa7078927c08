use rand::Rng;

use super::{Game, LockReport, MoveOutcome};
use crate::pentrix::prelude::*;

/// Points for clearing `rows` rows at once: each row doubles the running total and adds [`ROW_SCORE`].
pub fn score_for_rows(rows: usize) -> u64 {
    (0..rows).fold(0u64, |acc, _| acc.saturating_mul(2).saturating_add(ROW_SCORE))
}

impl<'a, R: Rng> Game<'a, R> {
    /// Everything that happens once the falling piece can fall no further: the loss check, row clearing,
    /// scoring, the bomb tick and the next spawn.
    pub(super) fn resolve_lock(&mut self) -> MoveOutcome {
        if self.board.has_overhang() {
            log::info!("piece locked above the board with a score of {}; resetting", self.score);
            self.start_new_game();
            return MoveOutcome::Reset;
        }

        let rows_cleared = self.clear_completed_rows();
        let score_delta = self.add_score(rows_cleared);
        let cells_exploded = if self.config.time_bomb { self.update_time_bombs() } else { 0 };
        let report = LockReport { rows_cleared, score_delta, cells_exploded };
        log::debug!("lock resolved: {report:?}, score now {}", self.score);

        self.spawn();
        MoveOutcome::Locked(report)
    }

    /// Clears every full row, bottom to top, collapsing the board after each one. A row index is checked
    /// again after a collapse, since the row that dropped into it may be full as well.
    ///
    /// Returns the cleared-row credit: one per row, plus the bonus for single-colour rows when colour lines
    /// are in effect.
    pub fn clear_completed_rows(&mut self) -> usize {
        let bonus = self.config.color_lines_in_effect();
        let mut credit = 0;
        let mut y = self.board.height();
        while y > 0 {
            let row = y - 1;
            if !self.board.is_row_full(row as isize) {
                y -= 1;
                continue;
            }
            credit += 1;
            if bonus && self.board.is_row_monochrome(row as isize) {
                credit += COLOR_LINE_BONUS;
            }
            self.board.collapse_row(row);
        }
        credit
    }

    /// Adds the points for `rows` cleared rows to the score, returning the points added.
    pub fn add_score(&mut self, rows: usize) -> u64 {
        let delta = score_for_rows(rows);
        self.score = self.score.saturating_add(delta);
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::score_for_rows;
    use crate::pentrix::{engine::tests::*, prelude::*};

    fn fill_row(g: &mut Game<'_, rand::rngs::StdRng>, y: isize, name: &str) {
        for x in 0..g.board().width() as isize {
            g.stage(&Coord::new(x, y), CellTag::Color(Color::from(name))).unwrap();
        }
    }

    #[test]
    fn compounding_row_scores() {
        assert_eq!(score_for_rows(0), 0);
        assert_eq!(score_for_rows(1), 100);
        assert_eq!(score_for_rows(2), 300);
        assert_eq!(score_for_rows(3), 700);
        assert_eq!(score_for_rows(4), 1500);
    }

    #[test]
    fn single_row_scores_one_hundred() {
        let catalog = catalog();
        let mut g = game(GameConfig::plain().with_board(20, 20).with_figure_sizes([1]), &catalog);
        fill_row(&mut g, 19, "black");
        let outcome = g.drop_piece();
        assert_eq!(
            outcome,
            MoveOutcome::Locked(LockReport { rows_cleared: 1, score_delta: 100, cells_exploded: 0 })
        );
        assert_eq!(g.score(), 100);
        assert_eq!(g.board().occupied(), 1, "only the dropped cell remains, one row down");
    }

    #[test]
    fn single_colour_row_earns_the_bonus() {
        let catalog = catalog();
        let config = GameConfig::plain().with_board(20, 20).with_figure_sizes([1]).with_color_lines();
        let mut g = game(config, &catalog);
        fill_row(&mut g, 19, "black");
        assert_eq!(g.clear_completed_rows(), 3);
        assert_eq!(g.add_score(3), 700);
        assert_eq!(g.score(), 700);
    }

    #[test]
    fn bonus_needs_two_colours() {
        let catalog = catalog();
        let config = GameConfig::plain().with_board(20, 20).with_figure_sizes([1]).with_color_lines().with_palette(["red"]);
        let mut g = game(config, &catalog);
        fill_row(&mut g, 19, "black");
        assert_eq!(g.clear_completed_rows(), 1);
    }

    #[test]
    fn mixed_row_earns_no_bonus() {
        let catalog = catalog();
        let config = GameConfig::plain().with_board(4, 6).with_figure_sizes([1]).with_color_lines();
        let mut g = game(config, &catalog);
        fill_row(&mut g, 5, "black");
        g.stage(&Coord::new(2, 5), red()).unwrap();
        assert_eq!(g.clear_completed_rows(), 1);
    }

    #[test]
    fn cascade_clears_rows_shifted_into_place() {
        let catalog = catalog();
        let mut g = game(GameConfig::plain().with_board(4, 8).with_figure_sizes([1]), &catalog);
        fill_row(&mut g, 7, "a");
        fill_row(&mut g, 6, "b");
        g.stage(&Coord::new(1, 5), red()).unwrap();
        fill_row(&mut g, 4, "c");
        fill_row(&mut g, 3, "d");

        assert_eq!(g.clear_completed_rows(), 4);
        assert_eq!(g.board().occupied(), 1);
        assert_eq!(g.board().get(&Coord::new(1, 7)).unwrap(), &red());
    }

    #[test]
    fn locking_above_the_board_resets() {
        let catalog = catalog();
        let mut g = game(GameConfig::plain().with_board(4, 6).with_figure_sizes([1]), &catalog);
        fill_row(&mut g, 0, "blue");
        g.stage(&Coord::new(1, 3), red()).unwrap();
        g.add_score(2);
        assert_eq!(g.score(), 300);

        assert_eq!(g.tick(), MoveOutcome::Reset);
        assert_eq!(g.score(), 0);
        assert_eq!(g.board().occupied(), 0);
        assert!(g.board().has_overhang(), "a fresh piece waits above the board");
    }
}
