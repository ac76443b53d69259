mod cell;
mod direction;
mod generator;
mod grid;
mod position;

pub use cell::Cell;
pub use direction::MoveDirection;
pub use generator::DEFAULT_OBSTACLE_DENSITY;
pub use grid::{DEFAULT_SIZE, Grid};
pub use position::Position;
