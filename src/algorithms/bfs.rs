use std::collections::VecDeque;

use crate::maze::Grid;

use super::{
    frontier::{Entry, frontier_search},
    trace::SearchResult,
    traits::SearchStrategy,
};

/// breadth-first search; the first path found has the fewest edges
#[allow(clippy::upper_case_acronyms)]
pub struct BFS;

impl SearchStrategy for BFS {
    fn search(&self, grid: &Grid) -> SearchResult {
        let result = frontier_search::<VecDeque<Entry>>(grid);
        log::debug!(
            "bfs: {:?} steps, {} edges explored",
            result.path_len(),
            result.trace.len()
        );
        result
    }

    fn name(&self) -> &'static str {
        "BFS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algorithms::Edge, maze::Position};

    fn p(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn records_each_node_once_in_level_order() {
        let grid = Grid::from_rows(&["S.", ".F"]).unwrap();
        let result = BFS.search(&grid);

        assert_eq!(result.path, Some(vec![p(1, 0), p(1, 1)]));
        assert_eq!(
            result.trace,
            vec![
                Edge::new(p(0, 0), p(1, 0)),
                Edge::new(p(0, 0), p(0, 1)),
                Edge::new(p(1, 0), p(1, 1)),
            ]
        );
    }

    #[test]
    fn open_grid_prefers_right_then_down() {
        let grid = Grid::new(5, [], p(4, 4)).unwrap();
        let result = BFS.search(&grid);

        assert_eq!(
            result.path,
            Some(vec![
                p(1, 0),
                p(2, 0),
                p(3, 0),
                p(4, 0),
                p(4, 1),
                p(4, 2),
                p(4, 3),
                p(4, 4),
            ])
        );
    }
}
