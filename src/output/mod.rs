//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{help_text, print_autoplay_report, print_lost, print_round, print_won};
