//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with zero external
//! dependencies: the guessing alphabet, validated words, difficulty levels
//! and the round state machine.

pub mod alphabet;
mod difficulty;
mod round;
mod word;

pub use difficulty::Difficulty;
pub use round::{GuessOutcome, Round, Slot};
pub use word::{Word, WordError};
