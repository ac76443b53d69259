#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Obstacle,
    Food,
}

impl Cell {
    /// `S` marks the start cell, which is stored as `Empty`
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | 'S' => Some(Self::Empty),
            '#' => Some(Self::Obstacle),
            'F' => Some(Self::Food),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Obstacle => '#',
            Self::Food => 'F',
        }
    }

    pub fn is_walkable(self) -> bool {
        !matches!(self, Self::Obstacle)
    }
}
