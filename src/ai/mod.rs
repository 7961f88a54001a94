//! Computer player
//!
//! The frequency-based letter guessing heuristic.

mod frequency;

pub use frequency::FrequencyAi;
