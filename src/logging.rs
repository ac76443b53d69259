use chrono::Local;
use colog::format::CologStyle;
use colored::Colorize;
use log::{Level, LevelFilter};

struct TimestampStyle;

impl CologStyle for TimestampStyle {
    fn prefix_token(&self, level: &Level) -> String {
        format!(
            "{} {}{}{}",
            Local::now().format("%H:%M:%S%.3f").to_string().dimmed(),
            "[".blue().bold(),
            self.level_color(level, self.level_token(level)),
            "]".blue().bold()
        )
    }
}

pub struct Logger;

impl Logger {
    /// `PATHFINDER_LOG` overrides `level` when set
    pub fn init(level: LevelFilter) {
        let mut builder = env_logger::Builder::new();
        builder
            .format(colog::formatter(TimestampStyle))
            .filter_level(level)
            .parse_env(env_logger::Env::new().filter("PATHFINDER_LOG"));

        if let Err(e) = builder.try_init() {
            eprintln!("logger already initialized: {}", e);
        }
    }
}
