use std::sync::OnceLock;

use itertools::Itertools;
use regex::Regex;

use crate::{pentrix::board::{CellTag, Color}, prelude::{Board, Coord}, utils::prelude::*};

static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tag_pattern() -> &'static Regex {
    TAG_PATTERN.get_or_init(|| {
        Regex::new(r"^(?:(?<eraser>\*)|(?<countdown>[0-9]+):)?(?<color>[A-Za-z][A-Za-z0-9_-]*)$")
            .expect("cell tag pattern is valid")
    })
}

/// Cell tags are written as `.` (empty), `rainbow`, `*<color>` (eraser), `<n>:<color>` (bomb) or `<color>`.
impl std::str::FromStr for CellTag {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "." | "_" => return Ok(CellTag::Empty),
            "rainbow" => return Ok(CellTag::Rainbow),
            _         => {}
        }

        let Some(matches) = tag_pattern().captures(s) else {
            return Err(anyhow!("could not parse cell tag {s}"));
        };
        let color = Color::from(&matches["color"]);
        if matches.name("eraser").is_some() {
            return Ok(CellTag::Eraser(color));
        }
        if let Some(countdown) = matches.name("countdown") {
            let countdown = countdown.as_str().parse::<u32>().with_context(|| format!("bad countdown in {s}"))?;
            return Ok(CellTag::Bomb { countdown, color });
        }
        Ok(CellTag::Color(color))
    }
}

impl std::fmt::Display for CellTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellTag::Empty                      => write!(f, "."),
            CellTag::Rainbow                    => write!(f, "rainbow"),
            CellTag::Eraser(color)              => write!(f, "*{color}"),
            CellTag::Bomb { countdown, color }  => write!(f, "{countdown}:{color}"),
            CellTag::Color(color)               => write!(f, "{color}"),
        }
    }
}

/// A board written out tag by tag: rows separated by `/` or newlines, cells by whitespace.
#[derive(Clone, Debug)]
pub struct SetupString {
    pub repr: String,
    pub rows: Vec<Vec<CellTag>>,
}

impl std::str::FromStr for SetupString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let rows = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .map(|row| row.split_whitespace().map(|tag| tag.parse::<CellTag>()).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;

        let Some(width) = rows.first().map(|r| r.len()) else {
            return Err(anyhow!("setup string cannot be empty"));
        };
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(anyhow!("row {y} has {} cells, expected {width}", row.len()));
        }
        Ok(SetupString { repr: s.to_owned(), rows })
    }
}

impl Board {
    /// Builds a board sized and filled from a setup string.
    pub fn from_setup(setup: &SetupString) -> Result<Board> {
        let height = setup.rows.len();
        let width = setup.rows.first().map_or(0, |r| r.len());
        let mut board = Board::new(width, height)?;
        for (y, row) in setup.rows.iter().enumerate() {
            for (x, tag) in row.iter().enumerate() {
                board.set(&Coord::new(x as isize, y as isize), tag.clone())?;
            }
        }
        Ok(board)
    }

    /// Writes the visible board as a setup string, rows separated by `/`.
    pub fn notate(&self) -> String {
        let tags = self.cells().map(|(_, tag)| tag.to_string()).collect::<Vec<_>>();
        tags.chunks(self.width()).map(|row| row.join(" ")).join(" / ")
    }
}
