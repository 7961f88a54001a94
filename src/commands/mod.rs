//! Command implementations

pub mod auto;
pub mod play;

pub use auto::{AutoplayOptions, AutoplayReport, RoundReport, TraceStep, run_autoplay};
pub use play::run_play;
