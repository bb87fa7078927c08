/// An opaque colour name. The engine never interprets it beyond comparing two names.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(String);

impl Color {
    pub fn new(name: impl Into<String>) -> Color {
        Color(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Color::new(value)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The content of one board cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellTag {
    #[default]
    Empty,
    /// A plain coloured cell.
    Color(Color),
    /// The wildcard colour; it never breaks a single-colour row.
    Rainbow,
    /// A falling eraser, which passes through occupied cells.
    Eraser(Color),
    /// A time bomb that explodes once its countdown runs out.
    Bomb { countdown: u32, color: Color },
}

impl CellTag {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellTag::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    pub fn is_bomb(&self) -> bool {
        matches!(self, CellTag::Bomb { .. })
    }

    pub fn is_eraser(&self) -> bool {
        matches!(self, CellTag::Eraser(_))
    }

    /// The colour this cell contributes to a single-colour row check; `None` for empty and rainbow cells.
    pub fn line_color(&self) -> Option<&Color> {
        match self {
            CellTag::Color(c) | CellTag::Eraser(c) | CellTag::Bomb { color: c, .. } => Some(c),
            CellTag::Empty | CellTag::Rainbow => None,
        }
    }

    /// The tag an eraser leaves behind once it lands; every other tag is returned unchanged.
    pub fn landed(&self) -> CellTag {
        match self {
            CellTag::Eraser(c) => CellTag::Color(c.clone()),
            other => other.clone(),
        }
    }
}
