use std::collections::{HashMap, HashSet, VecDeque};

use crate::maze::{Grid, Position};

use super::{
    reconstruct::reconstruct_path,
    trace::{SearchResult, SearchTrace},
};

/// a frontier entry carries the parent it was pushed from
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    point: Position,
    parent: Option<Position>,
}

/// insertion/removal discipline of an uninformed search
pub(crate) trait Frontier: Default {
    fn put(&mut self, entry: Entry);
    fn take(&mut self) -> Option<Entry>;
}

/// LIFO
impl Frontier for Vec<Entry> {
    fn put(&mut self, entry: Entry) {
        self.push(entry);
    }

    fn take(&mut self) -> Option<Entry> {
        self.pop()
    }
}

/// FIFO
impl Frontier for VecDeque<Entry> {
    fn put(&mut self, entry: Entry) {
        self.push_back(entry);
    }

    fn take(&mut self) -> Option<Entry> {
        self.pop_front()
    }
}

/// Shared body of depth-first and breadth-first search.
///
/// A position may sit in the frontier several times; only its first removal
/// counts; later copies are discarded. That first removal marks it visited,
/// records the edge from the entry's parent in the trace, and fixes the
/// predecessor used for path reconstruction, so the trace and the returned
/// path always agree.
pub(crate) fn frontier_search<F: Frontier>(grid: &Grid) -> SearchResult {
    let start = grid.start();
    let target = grid.food();

    let mut frontier = F::default();
    let mut visited = HashSet::new();
    let mut came_from = HashMap::new();
    let mut trace = SearchTrace::new();

    frontier.put(Entry {
        point: start,
        parent: None,
    });

    while let Some(Entry { point, parent }) = frontier.take() {
        if !visited.insert(point) {
            continue;
        }

        if let Some(parent) = parent {
            trace.record(parent, point);
            came_from.insert(point, parent);
        }

        if point == target {
            return SearchResult::found(reconstruct_path(&came_from, start, target), trace);
        }

        for neighbor in grid.neighbors(point) {
            if !visited.contains(&neighbor) {
                frontier.put(Entry {
                    point: neighbor,
                    parent: Some(point),
                });
            }
        }
    }

    SearchResult::unreachable(trace)
}
