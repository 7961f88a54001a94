//! Hangman
//!
//! A console hangman game with a German word list, difficulty progression
//! and a letter-frequency computer player.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hangman::game::GameSession;
//! use hangman::wordlists::loader::builtin_collection;
//!
//! let mut session = GameSession::new(builtin_collection());
//! session.start_round().unwrap();
//!
//! let outcome = session.guess_letter('e');
//! println!("Guessed 'e': {outcome:?}");
//! ```

// Core domain types
pub mod core;

// Round lifecycle and difficulty progression
pub mod game;

// Letter-frequency computer player
pub mod ai;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
