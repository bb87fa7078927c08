pub(crate) mod bombs;
pub(crate) mod config;
pub(crate) mod movement;
pub(crate) mod resolution;
pub(crate) mod spawn;

use rand::Rng;

use super::prelude::*;

pub use config::GameConfig;
pub use resolution::score_for_rows;

/// What a lock resolution did to the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockReport {
    /// Cleared-row credit, single-colour bonuses included.
    pub rows_cleared: usize,

    /// Points added to the score by this lock.
    pub score_delta: u64,

    /// Cells cleared by time bomb explosions.
    pub cells_exploded: usize,
}

/// The result of a move, rotation or drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved or turned.
    Moved,

    /// Out of bounds or blocked sideways; nothing changed.
    Rejected,

    /// The piece could not fall any further and was locked in place; a new piece has spawned.
    Locked(LockReport),

    /// The piece locked while poking out above the board; the game restarted from an empty board.
    Reset,
}

impl MoveOutcome {
    /// Whether the attempted move itself went through.
    pub fn is_success(&self) -> bool {
        matches!(self, MoveOutcome::Moved)
    }
}

/// One game session: the board, the falling piece and the score.
///
/// The session is a single mutable unit; every operation runs to completion before returning. Timing is the
/// caller's business, usually by calling [`Game::tick`] on a fixed period.
pub struct Game<'a, R: Rng> {
    config: GameConfig,

    /// The shared figure catalog; never mutated.
    catalog: &'a Catalog,

    selector: PieceSelector<'a>,

    /// The random source for spawns, positions and colours.
    rng: R,

    board: Board,

    /// The falling piece.
    piece: Piece,

    /// Where the falling piece's normalized cells are anchored.
    anchor: Coord,

    /// The tag painted into every cell of the falling piece.
    tag: CellTag,

    score: u64,

    /// Set once an eraser moves sideways; cleared by its next successful fall.
    eraser_strafe_lock: bool,
}

impl<'a, R: Rng> Game<'a, R> {
    /// Starts a session with the given configuration, drawing figures from a shared catalog.
    pub fn new(config: GameConfig, catalog: &'a Catalog, rng: R) -> Result<Game<'a, R>> {
        config.validate()?;
        let board = Board::new(config.width, config.height)?;
        let selector = PieceSelector::new(catalog, &config.figure_sizes, config.balance_sizes)?;
        let tag = CellTag::Color(config.palette[0].clone());

        let mut game = Game {
            config,
            catalog,
            selector,
            rng,
            board,
            piece: Piece::monomino(),
            anchor: Coord::origin(),
            tag,
            score: 0,
            eraser_strafe_lock: false,
        };
        game.start_new_game();
        Ok(game)
    }

    /// Clears the board and the score and spawns a fresh piece.
    pub fn start_new_game(&mut self) {
        log::info!("starting a new game on a {}x{} board", self.board.width(), self.board.height());
        self.score = 0;
        self.board.clear();
        self.spawn();
    }

    /// Writes a tag onto a visible cell outside the falling piece; used to set up positions.
    pub fn stage(&mut self, coord: &Coord, tag: CellTag) -> Result<()> {
        if !self.board.in_bounds(coord) {
            return Err(anyhow!("can only stage visible cells; {coord} is not one"));
        }
        if self.active_cells().contains(coord) {
            return Err(anyhow!("{coord} is occupied by the falling piece"));
        }
        self.board.set(coord, tag)?;
        Ok(())
    }

    // accessors

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    /// The tag painted into the falling piece's cells.
    pub fn active_tag(&self) -> &CellTag {
        &self.tag
    }

    /// The cells the falling piece occupies right now.
    pub fn active_cells(&self) -> Shape {
        self.piece.points_at(self.anchor.x, self.anchor.y)
    }

    /// The figure sizes the shared catalog was generated for.
    pub fn figure_sizes(&self) -> Vec<usize> {
        self.catalog.available_sizes()
    }
}
