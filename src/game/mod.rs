//! Game session layer
//!
//! Coordinates rounds, difficulty progression and the win streak.

mod session;

pub use session::{GameSession, SessionError};
