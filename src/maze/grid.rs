use std::fmt;

use super::{cell::Cell, direction::MoveDirection, position::Position};

pub const DEFAULT_SIZE: usize = 20;

/// square obstacle grid with a fixed start at the origin and exactly one food cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    size: usize,
    food: Position,
}

impl Grid {
    pub const START: Position = Position::new(0, 0);

    pub fn new(
        size: usize,
        obstacles: impl IntoIterator<Item = Position>,
        food: Position,
    ) -> eyre::Result<Self> {
        if size < 2 {
            eyre::bail!("grid size must be at least 2, got {}", size);
        }

        if !in_bounds(food, size) {
            eyre::bail!("food {} lies outside the {}x{} grid", food, size, size);
        }

        if food == Self::START {
            eyre::bail!("food cannot share the start cell {}", Self::START);
        }

        let mut cells = vec![Cell::Empty; size * size];

        for obstacle in obstacles {
            if !in_bounds(obstacle, size) {
                eyre::bail!("obstacle {} lies outside the {}x{} grid", obstacle, size, size);
            }
            if obstacle == Self::START || obstacle == food {
                eyre::bail!("obstacle {} overlaps the start or food cell", obstacle);
            }
            cells[obstacle.to_index(size)] = Cell::Obstacle;
        }

        cells[food.to_index(size)] = Cell::Food;

        Ok(Self { cells, size, food })
    }

    /// parses `size` rows of `size` characters (`.` empty, `#` obstacle, `F` food, `S` start)
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> eyre::Result<Self> {
        let size = rows.len();
        let mut obstacles = Vec::new();
        let mut food = None;

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let width = row.chars().count();
            if width != size {
                eyre::bail!(
                    "row {} has {} cells, expected {} for a square grid",
                    y,
                    width,
                    size
                );
            }

            for (x, c) in row.chars().enumerate() {
                let pos = Position::new(x, y);
                let cell =
                    Cell::from_char(c).ok_or_else(|| eyre::eyre!("unknown cell {:?} at {}", c, pos))?;

                if c == 'S' && pos != Self::START {
                    eyre::bail!("start marker at {}, but the start is fixed at {}", pos, Self::START);
                }

                match cell {
                    Cell::Obstacle => obstacles.push(pos),
                    Cell::Food if food.is_some() => eyre::bail!("second food cell at {}", pos),
                    Cell::Food => food = Some(pos),
                    Cell::Empty => {}
                }
            }
        }

        let food = food.ok_or_else(|| eyre::eyre!("grid has no food cell"))?;
        Self::new(size, obstacles, food)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn start(&self) -> Position {
        Self::START
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn contains(&self, pos: Position) -> bool {
        in_bounds(pos, self.size)
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.contains(pos).then(|| self.cells[pos.to_index(self.size)])
    }

    /// # Panics
    ///
    /// Panics when `pos` lies outside the grid.
    pub fn kind_at(&self, pos: Position) -> Cell {
        self.get(pos).unwrap_or_else(|| {
            panic!(
                "position {} out of bounds for {}x{} grid",
                pos, self.size, self.size
            )
        })
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Cell::is_walkable)
    }

    /// in-bounds, non-obstacle neighbors of `pos` in canonical order
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        MoveDirection::CANONICAL
            .into_iter()
            .filter_map(|dir| pos.step(dir, self.size))
            .filter(|&p| self.is_walkable(p))
            .collect()
    }

    /// every position in row-major order (y outer, x inner)
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(|idx| Position::from_index(idx, self.size))
    }

    pub fn obstacle_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Obstacle)
            .count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let pos = Position::new(x, y);
                let c = if pos == Self::START {
                    'S'
                } else {
                    self.kind_at(pos).as_char()
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn in_bounds(pos: Position, size: usize) -> bool {
    pos.x < size && pos.y < size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(&["S.#", ".#.", "..F"]).unwrap()
    }

    #[test]
    fn parses_rows() {
        let grid = sample();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.food(), Position::new(2, 2));
        assert_eq!(grid.kind_at(Position::new(2, 0)), Cell::Obstacle);
        assert_eq!(grid.kind_at(Position::new(0, 0)), Cell::Empty);
        assert_eq!(grid.obstacle_count(), 2);
        assert_eq!(grid.to_string(), "S.#\n.#.\n..F\n");
    }

    #[test]
    fn neighbors_keep_canonical_order() {
        let grid = Grid::new(3, [], Position::new(2, 2)).unwrap();
        assert_eq!(
            grid.neighbors(Position::new(1, 1)),
            vec![
                Position::new(1, 0),
                Position::new(2, 1),
                Position::new(1, 2),
                Position::new(0, 1),
            ]
        );
    }

    #[test]
    fn neighbors_skip_obstacles_and_edges() {
        let grid = sample();
        assert_eq!(
            grid.neighbors(Position::new(0, 0)),
            vec![Position::new(1, 0), Position::new(0, 1)]
        );
        // (2, 1) is walkable, (1, 1) and (2, 0) are not
        assert_eq!(grid.neighbors(Position::new(1, 0)), vec![Position::new(0, 0)]);
        assert_eq!(grid.neighbors(Position::new(2, 1)), vec![Position::new(2, 2)]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn kind_at_panics_outside_grid() {
        sample().kind_at(Position::new(3, 0));
    }

    #[test]
    fn rejects_invalid_layouts() {
        assert!(Grid::from_rows(&["S.", "."]).is_err());
        assert!(Grid::from_rows(&["S.", ".."]).is_err());
        assert!(Grid::from_rows(&["SF", ".F"]).is_err());
        assert!(Grid::from_rows(&["#F", ".."]).is_err());
        assert!(Grid::from_rows(&[".S", ".F"]).is_err());
        assert!(Grid::from_rows(&["S?", ".F"]).is_err());
        assert!(Grid::new(1, [], Position::new(0, 0)).is_err());
        assert!(Grid::new(3, [], Grid::START).is_err());
        assert!(Grid::new(3, [Position::new(3, 0)], Position::new(2, 2)).is_err());
    }

    #[test]
    fn positions_are_row_major() {
        let grid = Grid::new(2, [], Position::new(1, 1)).unwrap();
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
    }
}
