mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod frontier;
mod greedy;
mod reconstruct;
mod strategy;
pub mod trace;
pub mod traits;

pub use astar::AStar;
pub use bfs::BFS;
pub use dfs::DFS;
pub use dijkstra::Dijkstra;
pub use greedy::Greedy;
pub use strategy::Strategy;
pub use trace::{Edge, SearchResult, SearchTrace};
pub use traits::SearchStrategy;
