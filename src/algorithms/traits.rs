use crate::maze::Grid;

use super::trace::SearchResult;

/// a search from the grid's start to its food; a pure function of the grid
pub trait SearchStrategy {
    fn search(&self, grid: &Grid) -> SearchResult;

    fn name(&self) -> &'static str;
}
