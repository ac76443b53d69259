//! Deterministic path search on a square obstacle grid.
//!
//! Five strategies (greedy best-first, DFS, BFS, A*, Dijkstra) search from the
//! fixed start at the origin to the single food cell, each returning the path
//! it found together with every edge it examined on the way.

pub mod algorithms;
pub mod display;
pub mod maze;
pub mod solvers;

pub use algorithms::{Edge, SearchResult, SearchStrategy, Strategy};
pub use maze::{Cell, Grid, Position};
pub use solvers::{CompareDriver, StrategyOutcome};
