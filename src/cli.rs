use std::path::PathBuf;

use clap::{Parser, Subcommand};
use grid_pathfinder::{
    Strategy,
    display::PlaybackDelays,
    maze::{DEFAULT_OBSTACLE_DENSITY, DEFAULT_SIZE},
};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "grid-pathfinder")]
#[command(about = "Grid path search with five strategies side by side")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Side length of the generated square map
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Fraction of cells turned into obstacles
    #[arg(long, default_value_t = DEFAULT_OBSTACLE_DENSITY)]
    pub density: f64,

    /// Seed for map generation (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Load the map from a text file instead of generating one
    #[arg(short, long, value_name = "FILE", conflicts_with = "seed")]
    pub map: Option<PathBuf>,

    /// Delay between playback steps in milliseconds (0 = no playback)
    #[arg(short, long, default_value_t = 0)]
    pub delay: u64,

    /// Delay after a turn in milliseconds (defaults to twice --delay)
    #[arg(long)]
    pub corner_delay: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn playback_delays(&self) -> Option<PlaybackDelays> {
        (self.delay > 0).then(|| {
            PlaybackDelays::from_millis(self.delay, self.corner_delay.unwrap_or(self.delay * 2))
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search with a single strategy
    Run {
        /// Search strategy to use
        #[arg(value_enum)]
        strategy: Strategy,

        /// Hide the cells the search explored
        #[arg(long)]
        hide_trace: bool,
    },

    /// Run all five strategies on the same map and compare them
    Compare {
        /// Run the strategies on worker threads
        #[arg(short, long)]
        parallel: bool,
    },
}
