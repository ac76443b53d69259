use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{cell::Cell, grid::Grid, position::Position};

pub const DEFAULT_OBSTACLE_DENSITY: f64 = 0.2;

impl Grid {
    /// random map with `floor(size² · density)` obstacles and one food cell,
    /// neither of which ever lands on the start
    pub fn generate<R: Rng>(
        rng: &mut R,
        size: usize,
        obstacle_density: f64,
    ) -> eyre::Result<Self> {
        if size < 2 {
            eyre::bail!("grid size must be at least 2, got {}", size);
        }

        if !obstacle_density.is_finite() || !(0.0..1.0).contains(&obstacle_density) {
            eyre::bail!(
                "obstacle density must be in [0, 1), got {}",
                obstacle_density
            );
        }

        let area = size * size;
        let obstacle_count = (area as f64 * obstacle_density).floor() as usize;

        // the start and at least one food cell must stay free
        if obstacle_count > area - 2 {
            eyre::bail!(
                "{} obstacles leave no room for food on a {}x{} grid",
                obstacle_count,
                size,
                size
            );
        }

        let mut cells = vec![Cell::Empty; area];
        let mut obstacles = Vec::with_capacity(obstacle_count);

        for _ in 0..obstacle_count {
            let pos = loop {
                let candidate = random_position(rng, size);
                if candidate != Self::START && cells[candidate.to_index(size)] == Cell::Empty {
                    break candidate;
                }
            };
            cells[pos.to_index(size)] = Cell::Obstacle;
            obstacles.push(pos);
        }

        let food = loop {
            let candidate = random_position(rng, size);
            if candidate != Self::START && cells[candidate.to_index(size)] != Cell::Obstacle {
                break candidate;
            }
        };

        log::debug!(
            "generated {}x{} map: {} obstacles, food at {}",
            size,
            size,
            obstacles.len(),
            food
        );

        Self::new(size, obstacles, food)
    }

    pub fn from_seed(seed: u64, size: usize, obstacle_density: f64) -> eyre::Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(&mut rng, size, obstacle_density)
    }
}

fn random_position<R: Rng>(rng: &mut R, size: usize) -> Position {
    Position::new(rng.random_range(0..size), rng.random_range(0..size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_map() {
        let a = Grid::from_seed(42, 20, DEFAULT_OBSTACLE_DENSITY).unwrap();
        let b = Grid::from_seed(42, 20, DEFAULT_OBSTACLE_DENSITY).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generated_maps_hold_invariants() {
        for seed in 0..50 {
            let grid = Grid::from_seed(seed, 12, 0.3).unwrap();
            assert_eq!(grid.obstacle_count(), (144.0_f64 * 0.3).floor() as usize);
            assert_eq!(grid.kind_at(grid.start()), Cell::Empty);
            assert_eq!(grid.kind_at(grid.food()), Cell::Food);
            assert_ne!(grid.food(), grid.start());

            let foods = grid
                .positions()
                .filter(|&p| grid.kind_at(p) == Cell::Food)
                .count();
            assert_eq!(foods, 1);
        }
    }

    #[test]
    fn rejects_bad_density() {
        assert!(Grid::from_seed(1, 10, 1.0).is_err());
        assert!(Grid::from_seed(1, 10, -0.1).is_err());
        assert!(Grid::from_seed(1, 10, f64::NAN).is_err());
        assert!(Grid::from_seed(1, 2, 0.75).is_err());
        assert!(Grid::from_seed(1, 1, 0.0).is_err());
    }

    #[test]
    fn zero_density_is_open() {
        let grid = Grid::from_seed(7, 6, 0.0).unwrap();
        assert_eq!(grid.obstacle_count(), 0);
    }
}
