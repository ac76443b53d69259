use crate::maze::Grid;

use super::{
    frontier::{Entry, frontier_search},
    trace::SearchResult,
    traits::SearchStrategy,
};

/// depth-first search over an explicit stack; neighbors are pushed in
/// canonical order, so the last one (left) is expanded first
#[allow(clippy::upper_case_acronyms)]
pub struct DFS;

impl SearchStrategy for DFS {
    fn search(&self, grid: &Grid) -> SearchResult {
        let result = frontier_search::<Vec<Entry>>(grid);
        log::debug!(
            "dfs: {:?} steps, {} edges explored",
            result.path_len(),
            result.trace.len()
        );
        result
    }

    fn name(&self) -> &'static str {
        "DFS"
    }
}
