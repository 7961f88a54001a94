//! Game session
//!
//! Owns the round lifecycle across multiple rounds: random word selection,
//! difficulty progression and the win streak. The session forwards guesses
//! to the round and reacts to the returned outcome before handing it back
//! to the caller.

use crate::core::{Difficulty, GuessOutcome, Round};
use crate::wordlists::WordCollection;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// Number of consecutive wins required to advance one difficulty level
const WINS_PER_LEVEL: u32 = 3;

/// Error type for session operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A round cannot start without any playable words
    EmptyWordCollection,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordCollection => {
                write!(f, "Cannot start a round with an empty word collection")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// A game session spanning multiple rounds
pub struct GameSession {
    words: WordCollection,
    round: Round,
    difficulty: Difficulty,
    streak: u32,
    running: bool,
    rng: StdRng,
}

impl GameSession {
    /// Create a session over the given word collection
    #[must_use]
    pub fn new(words: WordCollection) -> Self {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Create a session with a seeded random source
    ///
    /// Word selection becomes reproducible, which tests and scripted runs
    /// rely on.
    #[must_use]
    pub fn with_seed(words: WordCollection, seed: u64) -> Self {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: WordCollection, rng: StdRng) -> Self {
        Self {
            words,
            round: Round::new(),
            difficulty: Difficulty::L1,
            streak: 0,
            running: false,
            rng,
        }
    }

    /// Start a new round at the session's current difficulty
    ///
    /// # Errors
    /// Returns [`SessionError::EmptyWordCollection`] if no words are
    /// available.
    pub fn start_round(&mut self) -> Result<(), SessionError> {
        self.start_round_at(self.difficulty)
    }

    /// Start a new round at an explicit difficulty
    ///
    /// The session adopts the difficulty; the round takes a snapshot of it.
    ///
    /// # Errors
    /// Returns [`SessionError::EmptyWordCollection`] if no words are
    /// available.
    pub fn start_round_at(&mut self, difficulty: Difficulty) -> Result<(), SessionError> {
        let word = self
            .words
            .pick_random(&mut self.rng)
            .cloned()
            .ok_or(SessionError::EmptyWordCollection)?;

        self.difficulty = difficulty;
        self.round.start(&word, difficulty);
        self.running = true;
        Ok(())
    }

    /// Forward a letter guess to the active round
    ///
    /// On a winning guess the streak grows, and every third consecutive win
    /// advances the difficulty one level (capped at the hardest). A lost
    /// round does not reset the streak. The round outcome is returned
    /// unchanged so callers can react to win and loss themselves.
    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        let outcome = self.round.guess(letter);

        if outcome == GuessOutcome::CorrectAndWon {
            self.streak += 1;
            if self.streak % WINS_PER_LEVEL == 0 {
                self.difficulty = self.difficulty.next();
            }
        }

        outcome
    }

    /// Stop the active round
    ///
    /// Resets the round to idle; difficulty and streak are untouched.
    pub fn stop(&mut self) {
        self.round.reset();
        self.running = false;
    }

    /// Stop the round and reset difficulty and streak to their start values
    pub fn reset(&mut self) {
        self.stop();
        self.difficulty = Difficulty::L1;
        self.streak = 0;
    }

    /// The active round (read-only)
    #[inline]
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// The session's word collection
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &WordCollection {
        &self.words
    }

    /// Mutable access to the word collection, for adding words mid-session
    #[inline]
    pub const fn words_mut(&mut self) -> &mut WordCollection {
        &mut self.words
    }

    /// The session's current difficulty
    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Consecutive round wins
    #[inline]
    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    /// Whether a round is currently running
    #[inline]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::collection_from_slice;

    fn session_with(words: &[&str]) -> GameSession {
        GameSession::with_seed(collection_from_slice(words), 7)
    }

    /// Win the active round by guessing every letter of the target.
    fn win_round(session: &mut GameSession) {
        let target: Vec<char> = session.round().target().chars().collect();
        let mut won = false;
        for letter in target {
            if session.guess_letter(letter) == GuessOutcome::CorrectAndWon {
                won = true;
                break;
            }
        }
        assert!(won);
        session.stop();
    }

    #[test]
    fn start_round_requires_words() {
        let mut session = session_with(&[]);
        assert_eq!(
            session.start_round(),
            Err(SessionError::EmptyWordCollection)
        );
        assert!(!session.is_running());
    }

    #[test]
    fn start_round_picks_a_word_and_runs() {
        let mut session = session_with(&["Katze"]);
        session.start_round().unwrap();

        assert!(session.is_running());
        assert!(session.round().is_active());
        assert_eq!(session.round().target(), "KATZE");
    }

    #[test]
    fn difficulty_advances_every_third_win() {
        let mut session = session_with(&["Katze", "Hund", "Maus"]);

        for expected_streak in 1..=6 {
            session.start_round().unwrap();
            win_round(&mut session);
            assert_eq!(session.streak(), expected_streak);
        }

        // 6 wins: two promotions
        assert_eq!(session.difficulty(), Difficulty::L3);
    }

    #[test]
    fn difficulty_never_exceeds_the_hardest_level() {
        let mut session = session_with(&["Ei"]);

        // 3 * 6 wins would overshoot L6 without the cap
        for _ in 0..18 {
            session.start_round().unwrap();
            win_round(&mut session);
        }

        assert_eq!(session.difficulty(), Difficulty::L6);
    }

    #[test]
    fn streak_is_not_reset_by_a_loss() {
        let mut session = session_with(&["Ei"]);

        session.start_round().unwrap();
        win_round(&mut session);
        assert_eq!(session.streak(), 1);

        // Lose a round at L6: one wrong letter suffices
        session.start_round_at(Difficulty::L6).unwrap();
        assert_eq!(session.guess_letter('x'), GuessOutcome::WrongAndLost);
        session.stop();

        assert_eq!(session.streak(), 1);
    }

    #[test]
    fn stop_preserves_difficulty_and_streak() {
        let mut session = session_with(&["Ei"]);

        for _ in 0..3 {
            session.start_round().unwrap();
            win_round(&mut session);
        }
        assert_eq!(session.difficulty(), Difficulty::L2);

        session.start_round().unwrap();
        session.stop();

        assert!(!session.is_running());
        assert!(!session.round().is_active());
        assert_eq!(session.difficulty(), Difficulty::L2);
        assert_eq!(session.streak(), 3);
    }

    #[test]
    fn reset_restores_session_start_values() {
        let mut session = session_with(&["Ei"]);

        for _ in 0..3 {
            session.start_round().unwrap();
            win_round(&mut session);
        }

        session.reset();

        assert!(!session.is_running());
        assert_eq!(session.difficulty(), Difficulty::L1);
        assert_eq!(session.streak(), 0);
    }

    #[test]
    fn explicit_difficulty_is_adopted_by_the_session() {
        let mut session = session_with(&["Katze"]);
        session.start_round_at(Difficulty::L4).unwrap();

        assert_eq!(session.difficulty(), Difficulty::L4);
        assert_eq!(session.round().difficulty(), Difficulty::L4);
    }

    #[test]
    fn seeded_sessions_pick_the_same_words() {
        let words = ["Katze", "Hund", "Maus", "Igel", "Zebra"];
        let mut a = GameSession::with_seed(collection_from_slice(&words), 99);
        let mut b = GameSession::with_seed(collection_from_slice(&words), 99);

        for _ in 0..5 {
            a.start_round().unwrap();
            b.start_round().unwrap();
            assert_eq!(a.round().target(), b.round().target());
        }
    }

    #[test]
    fn guesses_are_forwarded_to_the_round() {
        let mut session = session_with(&["Katze"]);
        session.start_round().unwrap();

        assert_eq!(session.guess_letter('k'), GuessOutcome::Correct);
        assert_eq!(session.guess_letter('q'), GuessOutcome::Wrong);
        assert_eq!(session.guess_letter('!'), GuessOutcome::Rejected);
        assert_eq!(session.round().wrong_letters(), &['Q']);
    }
}
