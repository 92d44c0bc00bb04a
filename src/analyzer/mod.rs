// Analyzer module: aggregates submodules for each pipeline stage.

pub mod moving_average;
pub mod signal;
pub mod threshold;
