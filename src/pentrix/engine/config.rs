use crate::pentrix::prelude::*;

/// Everything a session needs to know up front. Passed by value into [`super::Game::new`]; sessions never share
/// or mutate each other's configuration.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,

    /// Polyomino sizes to draw pieces from; each must be present in the catalog.
    pub figure_sizes: BTreeSet<usize>,

    /// Pick a size uniformly before picking a figure, instead of picking among all figures at once.
    pub balance_sizes: bool,

    /// Colours handed out to spawned pieces. Opaque to the engine.
    pub palette: Vec<Color>,

    /// Award the single-colour row bonus and spawn rainbow pieces. Only takes effect with two or more colours.
    pub color_lines: bool,

    /// Occasionally spawn erasers.
    pub eraser: bool,

    /// Occasionally spawn time bombs, and tick them down after every lock.
    pub time_bomb: bool,

    pub rainbow_probability: f64,
    pub eraser_probability: f64,
    pub time_bomb_probability: f64,

    /// Countdown a fresh time bomb starts with.
    pub time_bomb_fuse: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            figure_sizes: BTreeSet::from([DEFAULT_FIGURE_SIZE]),
            balance_sizes: false,
            palette: DEFAULT_PALETTE.iter().map(|&name| Color::from(name)).collect(),
            color_lines: true,
            eraser: true,
            time_bomb: true,
            rainbow_probability: RAINBOW_PROBABILITY,
            eraser_probability: ERASER_PROBABILITY,
            time_bomb_probability: TIME_BOMB_PROBABILITY,
            time_bomb_fuse: TIME_BOMB_FUSE,
        }
    }
}

impl GameConfig {
    pub fn new() -> GameConfig {
        GameConfig::default()
    }

    /// Every special rule switched off: plain figures in plain colours.
    pub fn plain() -> GameConfig {
        GameConfig::default().without_color_lines().without_eraser().without_time_bomb()
    }

    pub fn with_board(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_figure_sizes(mut self, sizes: impl IntoIterator<Item = usize>) -> Self {
        self.figure_sizes = sizes.into_iter().collect();
        self
    }

    pub fn with_balanced_sizes(mut self) -> Self {
        self.balance_sizes = true;
        self
    }

    pub fn with_palette<S: AsRef<str>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.palette = names.into_iter().map(|name| Color::from(name.as_ref())).collect();
        self
    }

    pub fn with_color_lines(mut self) -> Self {
        self.color_lines = true;
        self
    }

    pub fn without_color_lines(mut self) -> Self {
        self.color_lines = false;
        self
    }

    /// Enables erasers with the given spawn probability.
    pub fn with_eraser(mut self, probability: f64) -> Self {
        self.eraser = true;
        self.eraser_probability = probability;
        self
    }

    pub fn without_eraser(mut self) -> Self {
        self.eraser = false;
        self
    }

    /// Enables time bombs with the given spawn probability.
    pub fn with_time_bomb(mut self, probability: f64) -> Self {
        self.time_bomb = true;
        self.time_bomb_probability = probability;
        self
    }

    pub fn without_time_bomb(mut self) -> Self {
        self.time_bomb = false;
        self
    }

    pub fn with_time_bomb_fuse(mut self, fuse: u32) -> Self {
        self.time_bomb_fuse = fuse;
        self
    }

    pub fn with_rainbow_probability(mut self, probability: f64) -> Self {
        self.rainbow_probability = probability;
        self
    }

    /// Whether single-colour rows and rainbow pieces are actually in play.
    pub fn color_lines_in_effect(&self) -> bool {
        self.color_lines && self.palette.len() > 1
    }

    /// The largest configured figure size, if any.
    pub fn largest_figure(&self) -> Option<usize> {
        self.figure_sizes.last().copied()
    }

    /// Checks the configuration for anything a session could not run with.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(anyhow!("board dimensions must be positive, got {}x{}", self.width, self.height));
        }
        let Some(largest) = self.largest_figure() else {
            return Err(anyhow!("at least one figure size is required"));
        };
        if let Some(bad) = self.figure_sizes.iter().find(|&&n| n == 0 || n > MAX_FIGURE_SIZE) {
            return Err(anyhow!("figure size {bad} out of range; expected 1 to {MAX_FIGURE_SIZE}"));
        }
        if largest > self.width {
            return Err(anyhow!("a board {} cells wide cannot fit figures of size {largest}", self.width));
        }
        if self.palette.is_empty() {
            return Err(anyhow!("the palette needs at least one colour"));
        }
        for (name, p) in [
            ("rainbow", self.rainbow_probability),
            ("eraser", self.eraser_probability),
            ("time bomb", self.time_bomb_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(anyhow!("{name} probability {p} is not within [0, 1]"));
            }
        }
        Ok(())
    }
}
