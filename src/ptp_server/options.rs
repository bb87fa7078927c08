use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use crate::prelude::*;

#[derive(Clone, Debug, Parser)]
pub struct PTPServerOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Figure sizes to play with, comma separated.
    #[arg(short, long, value_delimiter = ',', default_values_t = [DEFAULT_FIGURE_SIZE])]
    pub sizes: Vec<usize>,

    /// Pick a size evenly before picking a figure.
    #[arg(short, long, default_value_t = false)]
    pub balance: bool,

    /// Palette, comma separated.
    #[arg(short, long, value_delimiter = ',')]
    pub colors: Vec<String>,

    #[arg(long, default_value_t = false)]
    pub no_color_lines: bool,

    #[arg(long, default_value_t = false)]
    pub no_eraser: bool,

    #[arg(long, default_value_t = false)]
    pub no_time_bomb: bool,

    /// Seed for reproducible games.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PTPServerOptions {
    pub fn game_config(&self) -> GameConfig {
        let mut config = GameConfig::default()
            .with_board(self.width, self.height)
            .with_figure_sizes(self.sizes.iter().copied());

        if self.balance {
            config = config.with_balanced_sizes();
        }
        if !self.colors.is_empty() {
            config = config.with_palette(&self.colors);
        }
        if self.no_color_lines {
            config = config.without_color_lines();
        }
        if self.no_eraser {
            config = config.without_eraser();
        }
        if self.no_time_bomb {
            config = config.without_time_bomb();
        }

        config
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::PTPServerOptions;

    #[test]
    fn defaults() {
        let options = PTPServerOptions::parse_from(["pentrix"]);
        let config = options.game_config();
        config.validate().unwrap();
        assert_eq!((config.width, config.height), (15, 30));
        assert_eq!(config.figure_sizes.iter().copied().collect::<Vec<_>>(), vec![5]);
        assert!(config.color_lines && config.eraser && config.time_bomb);
        assert_eq!(config.palette.len(), 4);
    }

    #[test]
    fn flags_reach_the_config() {
        let options = PTPServerOptions::parse_from([
            "pentrix", "--width", "10", "--height", "12", "--sizes", "3,4", "--balance",
            "--colors", "red,blue", "--no-eraser", "--no-time-bomb", "--seed", "9",
        ]);
        let config = options.game_config();
        assert_eq!((config.width, config.height), (10, 12));
        assert_eq!(config.figure_sizes.iter().copied().collect::<Vec<_>>(), vec![3, 4]);
        assert!(config.balance_sizes);
        assert_eq!(config.palette.iter().map(|c| c.name()).collect::<Vec<_>>(), vec!["red", "blue"]);
        assert!(config.color_lines && !config.eraser && !config.time_bomb);
        assert_eq!(options.seed, Some(9));
    }

    #[test]
    fn dimensions_must_be_integers() {
        assert!(PTPServerOptions::try_parse_from(["pentrix", "--width", "ten"]).is_err());
        assert!(PTPServerOptions::try_parse_from(["pentrix", "--height", "-3"]).is_err());
    }
}
