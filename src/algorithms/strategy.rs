use clap::ValueEnum;

use crate::maze::Grid;

use super::{AStar, BFS, DFS, Dijkstra, Greedy, SearchStrategy, trace::SearchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Strategy {
    /// Greedy best-first walk with backtracking
    Greedy,

    /// A* algorithm with Manhattan distance heuristic
    #[value(name = "astar", alias = "a-star")]
    AStar,

    /// Depth-First Search
    #[value(name = "dfs")]
    Dfs,

    /// Breadth-First Search
    #[value(name = "bfs")]
    Bfs,

    /// Dijkstra's shortest path algorithm
    Dijkstra,
}

impl Strategy {
    /// comparison order
    pub const ALL: [Self; 5] = [
        Self::Greedy,
        Self::AStar,
        Self::Dfs,
        Self::Bfs,
        Self::Dijkstra,
    ];

    pub fn all() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    pub fn name(&self) -> &'static str {
        self.algorithm().name()
    }

    pub fn run(self, grid: &Grid) -> SearchResult {
        self.algorithm().search(grid)
    }

    fn algorithm(self) -> &'static dyn SearchStrategy {
        match self {
            Self::Greedy => &Greedy,
            Self::AStar => &AStar,
            Self::Dfs => &DFS,
            Self::Bfs => &BFS,
            Self::Dijkstra => &Dijkstra,
        }
    }
}
