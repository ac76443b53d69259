use std::collections::HashSet;

use crate::maze::Grid;

use super::{
    trace::{SearchResult, SearchTrace},
    traits::SearchStrategy,
};

/// Greedy best-first walk with backtracking.
///
/// From the current cell it steps to the unvisited neighbor closest to the
/// food by Manhattan distance, the earliest in canonical order on ties. A dead
/// end pops the walk back one cell. Every unvisited neighbor considered is
/// recorded in the trace, including ones never stepped onto.
pub struct Greedy;

impl SearchStrategy for Greedy {
    fn search(&self, grid: &Grid) -> SearchResult {
        let start = grid.start();
        let target = grid.food();
        let step_limit = grid.size() * grid.size();

        let mut visited = HashSet::from([start]);
        let mut path = Vec::new();
        let mut trace = SearchTrace::new();
        let mut current = start;

        while current != target {
            let candidates: Vec<_> = grid
                .neighbors(current)
                .into_iter()
                .filter(|neighbor| !visited.contains(neighbor))
                .collect();

            for &neighbor in &candidates {
                trace.record(current, neighbor);
            }

            // min_by_key keeps the first of equal minima
            let Some(best) = candidates
                .into_iter()
                .min_by_key(|neighbor| neighbor.manhattan_distance(target))
            else {
                if path.pop().is_none() {
                    log::debug!("greedy: stuck at start, no path");
                    return SearchResult::unreachable(trace);
                }
                current = path.last().copied().unwrap_or(start);
                log::trace!("greedy: backtracking to {}", current);
                continue;
            };

            path.push(best);
            visited.insert(best);
            current = best;

            if path.len() > step_limit {
                log::warn!("greedy: walk exceeded {} steps, giving up", step_limit);
                return SearchResult::unreachable(trace);
            }
        }

        log::debug!(
            "greedy: {} steps, {} edges explored",
            path.len(),
            trace.len()
        );
        SearchResult::found(path, trace)
    }

    fn name(&self) -> &'static str {
        "Greedy"
    }
}
