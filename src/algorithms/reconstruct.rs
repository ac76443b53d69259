use std::collections::HashMap;

use crate::maze::Position;

/// walks the predecessor chain from `target` back to `start`; the result
/// excludes `start` and ends at `target`
pub(crate) fn reconstruct_path(
    came_from: &HashMap<Position, Position>,
    start: Position,
    target: Position,
) -> Vec<Position> {
    let mut path = Vec::new();
    let mut current = target;

    while current != start {
        path.push(current);
        match came_from.get(&current) {
            Some(&prev) => current = prev,
            None => break,
        }
    }

    path.reverse();
    path
}
