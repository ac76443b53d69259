#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Up,
    Right,
    Down,
    Left,
}

impl MoveDirection {
    /// enumeration order used for every neighbor query; tie-breaks depend on it
    pub const CANONICAL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        }
    }
}
