use std::collections::{HashMap, HashSet};

use crate::maze::{Grid, Position};

use super::{
    reconstruct::reconstruct_path,
    trace::{SearchResult, SearchTrace},
    traits::SearchStrategy,
};

/// A* with the Manhattan heuristic and unit step cost.
///
/// The open set is a plain list scanned for the lowest f score; among equal
/// scores the entry added earliest wins.
pub struct AStar;

impl SearchStrategy for AStar {
    fn search(&self, grid: &Grid) -> SearchResult {
        let start = grid.start();
        let target = grid.food();

        let mut open_set = vec![start];
        let mut closed_set: HashSet<Position> = HashSet::new();
        let mut came_from: HashMap<Position, Position> = HashMap::new();
        let mut g_scores: HashMap<Position, usize> = HashMap::from([(start, 0)]);
        let mut f_scores: HashMap<Position, usize> =
            HashMap::from([(start, start.manhattan_distance(target))]);
        let mut trace = SearchTrace::new();

        while let Some((index, &current)) = open_set
            .iter()
            .enumerate()
            .min_by_key(|(_, pos)| f_scores[*pos])
        {
            if current == target {
                let path = reconstruct_path(&came_from, start, target);
                log::debug!(
                    "a*: {} steps, {} edges explored",
                    path.len(),
                    trace.len()
                );
                return SearchResult::found(path, trace);
            }

            open_set.remove(index);
            closed_set.insert(current);

            let current_g = g_scores[&current];

            for neighbor in grid.neighbors(current) {
                trace.record(current, neighbor);

                if closed_set.contains(&neighbor) {
                    continue;
                }

                let tentative_g = current_g + 1;

                if !open_set.contains(&neighbor) {
                    open_set.push(neighbor);
                } else if tentative_g >= g_scores[&neighbor] {
                    continue;
                }

                came_from.insert(neighbor, current);
                g_scores.insert(neighbor, tentative_g);
                f_scores.insert(neighbor, tentative_g + neighbor.manhattan_distance(target));
            }
        }

        log::debug!("a*: open set exhausted after {} edges", trace.len());
        SearchResult::unreachable(trace)
    }

    fn name(&self) -> &'static str {
        "A*"
    }
}
