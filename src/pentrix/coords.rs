use crate::pentrix::prelude::*;

/// A signed board coordinate; `x` grows rightward and `y` grows downward.
///
/// Negative `y` is meaningful: falling pieces enter play from above row 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub x: isize,
    pub y: isize,
}

impl std::str::FromStr for Coord {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let Some((x, y)) = s.split_once(',') else {
            return Err(anyhow!("expected a coord of the form x,y; received {s}"));
        };
        let x = x.trim().parse::<isize>().with_context(|| format!("bad x in coord {s}"))?;
        let y = y.trim().parse::<isize>().with_context(|| format!("bad y in coord {s}"))?;
        Ok(Coord { x, y })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Offsets that turn a coordinate into one of its orthogonal neighbours.
pub static ORTHOGONAL_OFFSETS: [Coord; 4] = [
    Coord { x: 0, y: -1 },
    Coord { x: -1, y: 0 },
    Coord { x: 1, y: 0 },
    Coord { x: 0, y: 1 },
];

/// Offsets covering the 3x3 neighbourhood of a coordinate, the coordinate itself included.
pub static SURROUNDING_OFFSETS: [Coord; 9] = [
    Coord { x: -1, y: -1 },
    Coord { x: 0, y: -1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: 0 },
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: 1 },
    Coord { x: 0, y: 1 },
    Coord { x: 1, y: 1 },
];

impl Coord {
    /// Constructs a new coord.
    pub fn new(x: isize, y: isize) -> Coord {
        Coord { x, y }
    }

    /// The origin, where every polyomino search is seeded.
    pub fn origin() -> Coord {
        Coord { x: 0, y: 0 }
    }

    /// The four orthogonal neighbours of this coord.
    pub fn neighbours(&self) -> impl Iterator<Item = Coord> + '_ {
        ORTHOGONAL_OFFSETS.iter().map(move |offset| self + offset)
    }

    /// The coord obtained by shifting this one by the given deltas.
    pub fn shifted(&self, dx: isize, dy: isize) -> Coord {
        Coord { x: self.x + dx, y: self.y + dy }
    }
}

// C + C

impl Add<&Coord> for &Coord {
    type Output = Coord;
    fn add(self, rhs: &Coord) -> Self::Output {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Add<Coord> for &Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Self::Output {
        self + &rhs
    }
}

impl Add<&Coord> for Coord {
    type Output = Coord;
    fn add(self, rhs: &Coord) -> Self::Output {
        &self + rhs
    }
}

impl Add<Coord> for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Self::Output {
        &self + &rhs
    }
}

// C - C

impl Sub<&Coord> for &Coord {
    type Output = Coord;
    fn sub(self, rhs: &Coord) -> Self::Output {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Sub<Coord> for &Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Self::Output {
        self - &rhs
    }
}

impl Sub<&Coord> for Coord {
    type Output = Coord;
    fn sub(self, rhs: &Coord) -> Self::Output {
        &self - rhs
    }
}

impl Sub<Coord> for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Self::Output {
        &self - &rhs
    }
}
