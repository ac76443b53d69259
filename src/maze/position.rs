use std::fmt;

use super::direction::MoveDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn to_index(self, width: usize) -> usize {
        self.y * width + self.x
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Self::new(index % width, index / width)
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// the adjacent position in `direction`, if it stays inside a `size`x`size` square
    pub fn step(self, direction: MoveDirection, size: usize) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;

        (x < size && y < size).then_some(Self::new(x, y))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
