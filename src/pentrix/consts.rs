/// Default board width, in cells.
pub const DEFAULT_WIDTH: usize = 15;

/// Default board height, in cells.
pub const DEFAULT_HEIGHT: usize = 30;

/// Default figure size; classic pentominoes.
pub const DEFAULT_FIGURE_SIZE: usize = 5;

/// The largest polyomino size the catalog will generate. Catalog growth is combinatorial in the size
/// (9189 rotation classes at 10 cells), so this is a hard limit rather than a tuning knob.
pub const MAX_FIGURE_SIZE: usize = 10;

/// Default palette handed to new sessions.
pub const DEFAULT_PALETTE: [&str; 4] = ["blue", "red", "green", "yellow"];

/// Chance that a catalog piece spawns rainbow-coloured, when colour lines are in effect.
pub const RAINBOW_PROBABILITY: f64 = 0.05;

/// Chance that a spawn is replaced by an eraser.
pub const ERASER_PROBABILITY: f64 = 0.05;

/// Chance that a spawn is replaced by a time bomb.
pub const TIME_BOMB_PROBABILITY: f64 = 0.05;

/// Number of locks a fresh time bomb survives before it explodes.
pub const TIME_BOMB_FUSE: u32 = 5;

/// Extra cleared-row credit for a completed row of a single colour.
pub const COLOR_LINE_BONUS: usize = 2;

/// Score contributed by the first row of a lock; every further row doubles the running value and adds this again.
pub const ROW_SCORE: u64 = 100;
