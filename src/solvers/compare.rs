use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::algorithms::{SearchResult, Strategy};
use crate::maze::Grid;

#[derive(Debug, Clone)]
pub struct StrategyOutcome {
    pub strategy: Strategy,
    pub result: SearchResult,
    pub planning_time: Duration,
}

impl StrategyOutcome {
    pub fn run(strategy: Strategy, grid: &Grid) -> Self {
        let planning_start = Instant::now();
        let result = strategy.run(grid);
        let planning_time = planning_start.elapsed();

        log::debug!(
            "{} planned in {:?}: {}",
            strategy.name(),
            planning_time,
            match result.path_len() {
                Some(steps) => format!("{} steps", steps),
                None => "unreachable".to_string(),
            }
        );

        Self {
            strategy,
            result,
            planning_time,
        }
    }
}

/// runs every strategy against one grid; each run owns its own search state
pub struct CompareDriver;

impl CompareDriver {
    pub fn run_all(grid: &Grid) -> [StrategyOutcome; 5] {
        Strategy::ALL.map(|strategy| StrategyOutcome::run(strategy, grid))
    }

    /// same as [`CompareDriver::run_all`] with one blocking task per strategy;
    /// results keep `Strategy::ALL` order whatever order the tasks finish in
    pub async fn run_all_parallel(grid: Arc<Grid>) -> eyre::Result<[StrategyOutcome; 5]> {
        let tasks = Strategy::ALL.map(|strategy| {
            let grid = Arc::clone(&grid);
            tokio::task::spawn_blocking(move || StrategyOutcome::run(strategy, &grid))
        });

        let outcomes = futures::future::try_join_all(tasks).await?;

        outcomes
            .try_into()
            .map_err(|v: Vec<_>| eyre::eyre!("expected 5 outcomes, got {}", v.len()))
    }
}

#[derive(Debug)]
pub struct ComparisonSummary<'a> {
    pub shortest: Option<&'a StrategyOutcome>,
    pub fastest: Option<&'a StrategyOutcome>,
}

impl<'a> ComparisonSummary<'a> {
    /// the first strategy wins ties
    pub fn of(outcomes: &'a [StrategyOutcome]) -> Self {
        let shortest = outcomes
            .iter()
            .filter_map(|o| o.result.path_len().map(|len| (len, o)))
            .min_by_key(|&(len, _)| len)
            .map(|(_, o)| o);

        let fastest = outcomes
            .iter()
            .filter(|o| o.result.is_found())
            .min_by_key(|o| o.planning_time);

        Self { shortest, fastest }
    }
}
