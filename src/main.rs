mod cli;
mod logging;

use std::sync::Arc;

use clap::Parser;
use eyre::{Result, WrapErr};
use log::{debug, info, warn};

use cli::{Args, Command};
use grid_pathfinder::{
    CompareDriver, Grid, Strategy, StrategyOutcome,
    display::{self, Playback, PlaybackDelays, PlaybackOutcome},
    solvers::ComparisonSummary,
};
use logging::Logger;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    let grid = load_grid(&args)?;
    info!(
        "{}x{} map, {} obstacles, food at {}",
        grid.size(),
        grid.size(),
        grid.obstacle_count(),
        grid.food()
    );

    let delays = args.playback_delays();

    match args.command {
        Command::Run {
            strategy,
            hide_trace,
        } => run_single(&grid, strategy, !hide_trace, delays).await,
        Command::Compare { parallel } => run_compare(grid, parallel, delays).await,
    }
}

fn load_grid(args: &Args) -> Result<Grid> {
    if let Some(ref path) = args.map {
        info!("loading map: {}", path.display());
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read map {}", path.display()))?;
        let rows: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
        return Grid::from_rows(&rows).wrap_err_with(|| format!("invalid map {}", path.display()));
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("generating map with seed {}", seed);
    Grid::from_seed(seed, args.size, args.density)
}

// ========== Single strategy ==========

async fn run_single(
    grid: &Grid,
    strategy: Strategy,
    show_trace: bool,
    delays: Option<PlaybackDelays>,
) -> Result<()> {
    info!("searching with {}", strategy.name());

    let outcome = StrategyOutcome::run(strategy, grid);
    print_outcome(&outcome);

    if let Some(delays) = delays {
        play_all(grid, std::slice::from_ref(&outcome), delays).await;
    }

    println!(
        "{}",
        display::render(
            grid,
            &outcome.result,
            show_trace,
            display::strategy_color(strategy)
        )
    );
    Ok(())
}

// ========== Comparison ==========

async fn run_compare(grid: Grid, parallel: bool, delays: Option<PlaybackDelays>) -> Result<()> {
    info!("comparing all strategies");

    let grid = Arc::new(grid);
    let outcomes = if parallel {
        debug!("running strategies on worker threads");
        CompareDriver::run_all_parallel(Arc::clone(&grid)).await?
    } else {
        CompareDriver::run_all(&grid)
    };

    for outcome in &outcomes {
        print_outcome(outcome);
    }

    if let Some(delays) = delays {
        play_all(&grid, &outcomes, delays).await;
    }

    for outcome in &outcomes {
        println!("{}", outcome.strategy.name());
        println!(
            "{}",
            display::render(
                &grid,
                &outcome.result,
                false,
                display::strategy_color(outcome.strategy)
            )
        );
    }

    print_comparison_summary(&outcomes);
    Ok(())
}

/// plays every found path concurrently; ctrl-c cancels all of them
async fn play_all(grid: &Grid, outcomes: &[StrategyOutcome], delays: PlaybackDelays) {
    let (handles, playbacks): (Vec<_>, Vec<_>) = outcomes
        .iter()
        .filter_map(|outcome| {
            let path = outcome.result.path.as_deref()?;
            let name = outcome.strategy.name();
            let (handle, token) = display::cancellation();
            let playback = Playback::new(grid.start(), path, delays);

            let task = async move {
                let len = path.len();
                let result = playback
                    .run(token, |i, pos| debug!("{}: step {}/{} at {}", name, i + 1, len, pos))
                    .await;
                (name, result)
            };
            Some((handle, task))
        })
        .unzip();

    let all = futures::future::join_all(playbacks);
    tokio::pin!(all);

    let results = tokio::select! {
        results = &mut all => results,
        _ = tokio::signal::ctrl_c() => {
            warn!("interrupted, stopping playback");
            for handle in &handles {
                handle.cancel();
            }
            all.await
        }
    };

    for (name, result) in results {
        match result {
            PlaybackOutcome::Completed => debug!("{}: playback finished", name),
            PlaybackOutcome::Cancelled { shown } => {
                info!("{}: playback cancelled after {} steps", name, shown)
            }
        }
    }
}

// ========== Utilities ==========

fn print_outcome(outcome: &StrategyOutcome) {
    let name = outcome.strategy.name();
    match outcome.result.path_len() {
        Some(steps) => info!(
            "{}: {} steps, {} edges explored ({:?})",
            name,
            steps,
            outcome.result.trace.len(),
            outcome.planning_time
        ),
        None => warn!(
            "{}: no path found, {} edges explored ({:?})",
            name,
            outcome.result.trace.len(),
            outcome.planning_time
        ),
    }
}

fn print_comparison_summary(outcomes: &[StrategyOutcome]) {
    info!("comparison results:");
    info!(
        "{:<10} {:>8}  {:>8}  {:>12}",
        "strategy", "steps", "edges", "plan"
    );
    info!("{:-<44}", "");

    for outcome in outcomes {
        let steps = outcome
            .result
            .path_len()
            .map_or_else(|| "-".to_string(), |steps| steps.to_string());
        info!(
            "{:<10} {:>8}  {:>8}  {:>12?}",
            outcome.strategy.name(),
            steps,
            outcome.result.trace.len(),
            outcome.planning_time,
        );
    }

    let summary = ComparisonSummary::of(outcomes);

    if let Some(best) = summary.shortest {
        info!(
            "shortest: {} ({} steps)",
            best.strategy.name(),
            best.result.path_len().unwrap_or_default()
        );
    } else {
        warn!("no strategy reached the food");
    }

    if let Some(fastest) = summary.fastest {
        info!(
            "fastest: {} ({:?})",
            fastest.strategy.name(),
            fastest.planning_time
        );
    }
}
