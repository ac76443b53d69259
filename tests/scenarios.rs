use grid_pathfinder::{CompareDriver, Grid, Position, Strategy};

fn p(x: usize, y: usize) -> Position {
    Position::new(x, y)
}

#[test]
fn open_grid_shortest_paths_match_manhattan() {
    let grid = Grid::new(5, [], p(4, 4)).unwrap();
    let expected = grid.start().manhattan_distance(grid.food());

    for strategy in [Strategy::Bfs, Strategy::Dijkstra, Strategy::AStar] {
        let result = strategy.run(&grid);
        assert_eq!(result.path_len(), Some(expected), "{}", strategy.name());
    }
}

#[test]
fn open_grid_bfs_fixture() {
    let grid = Grid::new(5, [], p(4, 4)).unwrap();
    let result = Strategy::Bfs.run(&grid);

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

fn wall_grid() -> Grid {
    Grid::from_rows(&[
        "S.#.F", //
        "..#..", //
        "..#..", //
        "..#..", //
        ".....",
    ])
    .unwrap()
}

#[test]
fn wall_forces_detour_along_bottom_row() {
    let grid = wall_grid();

    for outcome in CompareDriver::run_all(&grid) {
        let name = outcome.strategy.name();
        let path = outcome
            .result
            .path
            .unwrap_or_else(|| panic!("{} reported unreachable", name));

        assert!(path.iter().any(|pos| pos.y == 4), "{} skipped the gap", name);
        assert_eq!(path.last(), Some(&grid.food()), "{}", name);
    }
}

#[test]
fn wall_optimal_strategies_take_twelve_steps() {
    let grid = wall_grid();

    for strategy in [Strategy::Bfs, Strategy::Dijkstra, Strategy::AStar] {
        assert_eq!(strategy.run(&grid).path_len(), Some(12), "{}", strategy.name());
    }
}

#[test]
fn wall_greedy_walk() {
    let result = Strategy::Greedy.run(&wall_grid());

    assert_eq!(
        result.path,
        Some(vec![
            p(1, 0),
            p(1, 1),
            p(1, 2),
            p(1, 3),
            p(1, 4),
            p(2, 4),
            p(3, 4),
            p(3, 3),
            p(3, 2),
            p(3, 1),
            p(3, 0),
            p(4, 0),
        ])
    );
}

#[test]
fn enclosed_food_is_unreachable_for_everyone() {
    let grid = Grid::from_rows(&[
        "S....", //
        "..#..", //
        ".#F#.", //
        "..#..", //
        ".....",
    ])
    .unwrap();
    let food = grid.food();

    for outcome in CompareDriver::run_all(&grid) {
        let name = outcome.strategy.name();
        let result = outcome.result;

        assert_eq!(result.path, None, "{}", name);
        assert!(!result.trace.is_empty(), "{} explored nothing", name);
        assert!(
            result.trace.iter().all(|edge| edge.from != food && edge.to != food),
            "{} reached into the enclosure",
            name
        );

        // the cells around the enclosure were reached
        for wall_side in [p(2, 0), p(0, 2), p(4, 2), p(2, 4)] {
            assert!(
                result.trace.iter().any(|edge| edge.to == wall_side),
                "{} never reached {}",
                name,
                wall_side
            );
        }
    }
}
