mod compare;

pub use compare::{CompareDriver, ComparisonSummary, StrategyOutcome};
