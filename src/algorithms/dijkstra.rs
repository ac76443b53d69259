use std::collections::{HashMap, HashSet};

use crate::maze::{Grid, Position};

use super::{
    reconstruct::reconstruct_path,
    trace::{SearchResult, SearchTrace},
    traits::SearchStrategy,
};

const UNREACHED: usize = usize::MAX;

/// Dijkstra over every non-obstacle cell with unit edge weights.
///
/// The unvisited cells are kept in row-major order and scanned linearly, so
/// ties on distance go to the cell that comes first in that order.
pub struct Dijkstra;

impl SearchStrategy for Dijkstra {
    fn search(&self, grid: &Grid) -> SearchResult {
        let start = grid.start();
        let target = grid.food();

        let mut unvisited: Vec<Position> =
            grid.positions().filter(|&pos| grid.is_walkable(pos)).collect();
        let mut distances: HashMap<Position, usize> =
            unvisited.iter().map(|&pos| (pos, UNREACHED)).collect();
        let mut previous: HashMap<Position, Position> = HashMap::new();
        let mut settled: HashSet<Position> = HashSet::new();
        let mut trace = SearchTrace::new();

        distances.insert(start, 0);

        while let Some((index, distance)) = unvisited
            .iter()
            .map(|pos| distances[pos])
            .enumerate()
            .min_by_key(|&(_, distance)| distance)
        {
            if distance == UNREACHED {
                log::debug!(
                    "dijkstra: {} cells left unreachable",
                    unvisited.len()
                );
                break;
            }

            let current = unvisited.remove(index);
            settled.insert(current);

            if current == target {
                let path = reconstruct_path(&previous, start, target);
                log::debug!(
                    "dijkstra: {} steps, {} edges explored",
                    path.len(),
                    trace.len()
                );
                return SearchResult::found(path, trace);
            }

            for neighbor in grid.neighbors(current) {
                trace.record(current, neighbor);

                if settled.contains(&neighbor) {
                    continue;
                }

                let candidate = distance + 1;
                if candidate < distances[&neighbor] {
                    distances.insert(neighbor, candidate);
                    previous.insert(neighbor, current);
                }
            }
        }

        SearchResult::unreachable(trace)
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
}
