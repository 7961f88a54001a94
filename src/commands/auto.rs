//! AI autoplay command
//!
//! Lets the frequency-based computer player run rounds on its own, either a
//! single traced round or a multi-round simulation with statistics.

use crate::ai::FrequencyAi;
use crate::core::{Difficulty, GuessOutcome, alphabet};
use crate::game::{GameSession, SessionError};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Options for an autoplay run
pub struct AutoplayOptions {
    /// Difficulty for every round
    pub difficulty: Difficulty,
    /// Number of rounds to play
    pub rounds: usize,
    /// Print a per-guess trace (single-round runs)
    pub trace: bool,
}

/// One guess the AI made during a traced round
pub struct TraceStep {
    pub letter: char,
    pub outcome: GuessOutcome,
    pub revealed: String,
}

/// Outcome of a single AI round
pub struct RoundReport {
    pub target: String,
    pub won: bool,
    pub total_guesses: usize,
    pub wrong_guesses: usize,
    pub trace: Vec<TraceStep>,
}

/// Aggregated result of an autoplay run
pub struct AutoplayReport {
    pub difficulty: Difficulty,
    pub rounds: Vec<RoundReport>,
    pub wins: usize,
    pub losses: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub duration: Duration,
}

impl AutoplayReport {
    /// Average guesses per round, 0 for an empty run
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.rounds.is_empty() {
            return 0.0;
        }
        let total: usize = self.rounds.iter().map(|r| r.total_guesses).sum();
        total as f64 / self.rounds.len() as f64
    }

    /// Win rate in percent, 0 for an empty run
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds.is_empty() {
            return 0.0;
        }
        self.wins as f64 / self.rounds.len() as f64 * 100.0
    }
}

/// Play rounds with the frequency AI
///
/// Each round recomputes the letter frequencies over the session's word
/// collection, then picks letters until the round is won or lost. A pick
/// loop is bounded by the alphabet size, so every round terminates.
///
/// # Errors
/// Returns [`SessionError::EmptyWordCollection`] if the session has no
/// playable words.
pub fn run_autoplay(
    session: &mut GameSession,
    options: &AutoplayOptions,
) -> Result<AutoplayReport, SessionError> {
    let start = Instant::now();
    let mut ai = FrequencyAi::new();

    let progress = if options.rounds > 1 && !options.trace {
        let bar = ProgressBar::new(options.rounds as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} rounds ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Some(bar)
    } else {
        None
    };

    let mut rounds = Vec::with_capacity(options.rounds);
    let mut wins = 0;
    let mut losses = 0;
    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();

    for _ in 0..options.rounds {
        let report = play_one_round(session, &mut ai, options)?;

        if report.won {
            wins += 1;
        } else {
            losses += 1;
        }
        *guess_distribution.entry(report.total_guesses).or_insert(0) += 1;
        rounds.push(report);

        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }

    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }

    Ok(AutoplayReport {
        difficulty: options.difficulty,
        rounds,
        wins,
        losses,
        guess_distribution,
        duration: start.elapsed(),
    })
}

fn play_one_round(
    session: &mut GameSession,
    ai: &mut FrequencyAi,
    options: &AutoplayOptions,
) -> Result<RoundReport, SessionError> {
    session.start_round_at(options.difficulty)?;
    ai.prepare(session.words());

    let target = session.round().target().to_string();
    let mut trace = Vec::new();
    let mut total_guesses = 0;
    let mut won = false;

    // The AI never repeats a letter, so the round always ends within
    // one pass over the alphabet
    for _ in 0..alphabet::LEN {
        let Some(letter) = ai.pick_letter() else {
            break;
        };

        let outcome = session.guess_letter(letter);
        total_guesses += 1;

        if options.trace {
            trace.push(TraceStep {
                letter,
                outcome,
                revealed: crate::output::formatters::reveal_line(session.round().slots()),
            });
        }

        match outcome {
            GuessOutcome::CorrectAndWon => {
                won = true;
                break;
            }
            GuessOutcome::WrongAndLost => break,
            _ => {}
        }
    }

    let wrong_guesses = session.round().wrong_letters().len();
    session.stop();

    Ok(RoundReport {
        target,
        won,
        total_guesses,
        wrong_guesses,
        trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::collection_from_slice;

    fn seeded_session(words: &[&str]) -> GameSession {
        GameSession::with_seed(collection_from_slice(words), 11)
    }

    #[test]
    fn single_word_round_is_always_won_at_the_easiest_level() {
        // With one word, its own letters dominate the frequency table
        let mut session = seeded_session(&["Tee"]);
        let options = AutoplayOptions {
            difficulty: Difficulty::L1,
            rounds: 1,
            trace: true,
        };

        let report = run_autoplay(&mut session, &options).unwrap();

        assert_eq!(report.wins, 1);
        assert_eq!(report.losses, 0);
        assert_eq!(report.rounds[0].target, "TEE");
        // E then T: two guesses, zero wrong
        assert_eq!(report.rounds[0].total_guesses, 2);
        assert_eq!(report.rounds[0].wrong_guesses, 0);
    }

    #[test]
    fn every_round_terminates_within_the_alphabet() {
        let mut session = seeded_session(&["Katze", "Hund", "Eichhörnchen", "Straße"]);
        let options = AutoplayOptions {
            difficulty: Difficulty::L4,
            rounds: 25,
            trace: false,
        };

        let report = run_autoplay(&mut session, &options).unwrap();

        assert_eq!(report.rounds.len(), 25);
        assert_eq!(report.wins + report.losses, 25);
        for round in &report.rounds {
            assert!(round.total_guesses <= alphabet::LEN);
        }
    }

    #[test]
    fn distribution_sums_to_round_count() {
        let mut session = seeded_session(&["Katze", "Hund", "Maus"]);
        let options = AutoplayOptions {
            difficulty: Difficulty::L2,
            rounds: 10,
            trace: false,
        };

        let report = run_autoplay(&mut session, &options).unwrap();

        let sum: usize = report.guess_distribution.values().sum();
        assert_eq!(sum, 10);
        assert!(report.average_guesses() >= 1.0);
    }

    #[test]
    fn autoplay_needs_a_non_empty_collection() {
        let mut session = seeded_session(&[]);
        let options = AutoplayOptions {
            difficulty: Difficulty::L1,
            rounds: 1,
            trace: false,
        };

        assert!(run_autoplay(&mut session, &options).is_err());
    }

    #[test]
    fn trace_records_each_guess() {
        let mut session = seeded_session(&["Tee"]);
        let options = AutoplayOptions {
            difficulty: Difficulty::L1,
            rounds: 1,
            trace: true,
        };

        let report = run_autoplay(&mut session, &options).unwrap();
        let round = &report.rounds[0];

        assert_eq!(round.trace.len(), round.total_guesses);
        assert_eq!(round.trace[0].letter, 'E');
        assert_eq!(round.trace[0].revealed, "_ E E");
    }
}
