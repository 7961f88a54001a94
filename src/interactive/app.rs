//! TUI application state and logic

use crate::ai::FrequencyAi;
use crate::core::{Difficulty, GuessOutcome};
use crate::game::GameSession;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which screen the application is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// No round running; shows the menu
    Menu,
    /// A human-played round
    HumanRound,
    /// Word entry prompt for growing the collection at runtime
    AddWord,
    /// Difficulty selection for a computer round
    AiSetup,
    /// A computer-played round, stepped by the user
    AiRound,
    /// A finished round, waiting for confirmation
    RoundOver { won: bool, target: String, ai: bool },
    /// The help overlay
    Help,
}

/// A log message shown in the message panel
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session-level statistics shown in the status bar
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

/// Application state
pub struct App {
    pub session: GameSession,
    pub ai: FrequencyAi,
    pub screen: Screen,
    /// Screen to return to when the help overlay closes
    pub help_return: Screen,
    /// Buffer for the word entry prompt
    pub input: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        let mut app = Self {
            session,
            ai: FrequencyAi::new(),
            screen: Screen::Menu,
            help_return: Screen::Menu,
            input: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };

        app.add_message(
            "Welcome! Press F2 to start a game, F1 for help.",
            MessageStyle::Info,
        );
        app
    }

    /// Start a fresh human game: resets streak and difficulty
    pub fn start_human_game(&mut self) {
        self.session.reset();

        match self.session.start_round() {
            Ok(()) => {
                self.screen = Screen::HumanRound;
                self.add_message("New game started. Type letters to guess!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Start a computer round at the chosen difficulty
    pub fn start_ai_game(&mut self, difficulty: Difficulty) {
        self.session.reset();

        match self.session.start_round_at(difficulty) {
            Ok(()) => {
                self.ai.prepare(self.session.words());
                self.screen = Screen::AiRound;
                self.add_message(
                    &format!("Computer plays at {difficulty}. Enter steps, Space skips to the end."),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Evaluate one human guess
    pub fn guess(&mut self, letter: char) {
        let outcome = self.session.guess_letter(letter);

        match outcome {
            GuessOutcome::Rejected => {
                self.add_message(
                    &format!("'{letter}' is not a letter of the alphabet"),
                    MessageStyle::Error,
                );
            }
            GuessOutcome::Correct | GuessOutcome::Wrong => {}
            GuessOutcome::CorrectAndWon | GuessOutcome::WrongAndLost => {
                self.finish_round(outcome == GuessOutcome::CorrectAndWon, false);
            }
        }
    }

    /// Let the computer guess one letter
    pub fn ai_step(&mut self) {
        let Some(letter) = self.ai.pick_letter() else {
            // Unreachable in a normal round; the alphabet outlasts every budget
            self.add_message("The computer has no letters left!", MessageStyle::Error);
            return;
        };

        let outcome = self.session.guess_letter(letter);

        match outcome {
            GuessOutcome::Correct => {
                self.add_message(&format!("Computer guesses {letter} - hit"), MessageStyle::Info);
            }
            GuessOutcome::Wrong => {
                self.add_message(&format!("Computer guesses {letter} - miss"), MessageStyle::Info);
            }
            GuessOutcome::CorrectAndWon | GuessOutcome::WrongAndLost => {
                self.add_message(&format!("Computer guesses {letter}"), MessageStyle::Info);
                self.finish_round(outcome == GuessOutcome::CorrectAndWon, true);
            }
            GuessOutcome::Rejected => {}
        }
    }

    /// Run the computer round to its conclusion
    ///
    /// Bounded by the alphabet size, which outlasts every wrong-guess budget.
    pub fn ai_skip_to_end(&mut self) {
        for _ in 0..crate::core::alphabet::LEN {
            if !matches!(self.screen, Screen::AiRound) {
                break;
            }
            self.ai_step();
        }
    }

    fn finish_round(&mut self, won: bool, ai: bool) {
        self.stats.rounds_played += 1;
        if won {
            self.stats.rounds_won += 1;
        }

        let target = self.session.round().target().to_string();

        if won {
            let text = if ai {
                "The computer guessed the word!".to_string()
            } else {
                format!("Congratulations, you guessed {target}!")
            };
            self.add_message(&text, MessageStyle::Success);
        } else {
            self.add_message(&format!("Game over! The word was {target}."), MessageStyle::Error);
        }

        self.screen = Screen::RoundOver { won, target, ai };
    }

    /// Confirm a finished round
    ///
    /// A human win continues playing at the (possibly advanced) difficulty;
    /// everything else returns to the menu.
    pub fn confirm_round_over(&mut self) {
        let Screen::RoundOver { won, ai, .. } = self.screen.clone() else {
            return;
        };

        self.session.stop();

        if won && !ai {
            match self.session.start_round() {
                Ok(()) => {
                    self.screen = Screen::HumanRound;
                    self.add_message(
                        &format!("Next word! Difficulty is {}.", self.session.difficulty()),
                        MessageStyle::Info,
                    );
                }
                Err(e) => {
                    self.screen = Screen::Menu;
                    self.add_message(&e.to_string(), MessageStyle::Error);
                }
            }
        } else {
            self.screen = Screen::Menu;
        }
    }

    /// Open the word entry prompt
    pub fn open_add_word(&mut self) {
        self.input.clear();
        self.screen = Screen::AddWord;
    }

    /// Validate the typed word and add it to the collection
    ///
    /// The prompt stays open so several words can be added in a row.
    pub fn submit_new_word(&mut self) {
        let raw = std::mem::take(&mut self.input);
        if raw.trim().is_empty() {
            return;
        }

        match self.session.words_mut().add(&raw) {
            Ok(true) => self.add_message(
                &format!(
                    "Added '{}'. {} words available.",
                    raw.trim(),
                    self.session.words().len()
                ),
                MessageStyle::Success,
            ),
            Ok(false) => self.add_message(
                &format!("'{}' is already in the collection.", raw.trim()),
                MessageStyle::Info,
            ),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Abandon the running round and return to the menu
    pub fn abandon_round(&mut self) {
        self.session.stop();
        self.screen = Screen::Menu;
        self.add_message("Round abandoned.", MessageStyle::Info);
    }

    pub fn open_help(&mut self) {
        if self.screen != Screen::Help {
            self.help_return = self.screen.clone();
            self.screen = Screen::Help;
        }
    }

    pub fn close_help(&mut self) {
        self.screen = self.help_return.clone();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Global keys
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::F(1) => app.open_help(),
                _ => handle_screen_key(&mut app, key.code),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_screen_key(app: &mut App, code: KeyCode) {
    match app.screen.clone() {
        Screen::Menu => match code {
            KeyCode::F(2) => app.start_human_game(),
            KeyCode::F(3) => app.open_add_word(),
            KeyCode::F(4) => {
                if app.session.words().is_empty() {
                    app.add_message("No words available!", MessageStyle::Error);
                } else {
                    app.screen = Screen::AiSetup;
                }
            }
            KeyCode::F(5) | KeyCode::Esc => app.should_quit = true,
            _ => {}
        },
        Screen::HumanRound => match code {
            KeyCode::F(5) | KeyCode::Esc => app.abandon_round(),
            KeyCode::F(2) => {
                app.session.stop();
                app.start_human_game();
            }
            KeyCode::Char(c) => app.guess(c),
            _ => {}
        },
        Screen::AddWord => match code {
            KeyCode::Esc => {
                app.input.clear();
                app.screen = Screen::Menu;
            }
            KeyCode::Enter => app.submit_new_word(),
            KeyCode::Backspace => {
                app.input.pop();
            }
            KeyCode::Char(c) => app.input.push(c),
            _ => {}
        },
        Screen::AiSetup => match code {
            KeyCode::Esc => app.screen = Screen::Menu,
            KeyCode::Char(c) => {
                if let Some(difficulty) =
                    c.to_digit(10).and_then(|d| Difficulty::from_level(d as u8))
                {
                    app.start_ai_game(difficulty);
                }
            }
            _ => {}
        },
        Screen::AiRound => match code {
            KeyCode::F(5) | KeyCode::Esc => app.abandon_round(),
            KeyCode::Enter => app.ai_step(),
            KeyCode::Char(' ') => app.ai_skip_to_end(),
            _ => {}
        },
        Screen::RoundOver { .. } => {
            if code == KeyCode::Enter {
                app.confirm_round_over();
            }
        }
        Screen::Help => match code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::F(1) => app.close_help(),
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::collection_from_slice;

    fn test_app(words: &[&str]) -> App {
        App::new(GameSession::with_seed(collection_from_slice(words), 3))
    }

    #[test]
    fn new_app_starts_in_the_menu() {
        let app = test_app(&["Katze"]);
        assert_eq!(app.screen, Screen::Menu);
        assert!(!app.should_quit);
    }

    #[test]
    fn starting_a_game_without_words_reports_an_error() {
        let mut app = test_app(&[]);
        app.start_human_game();

        assert_eq!(app.screen, Screen::Menu);
        assert!(!app.session.is_running());
    }

    #[test]
    fn human_win_flows_into_round_over() {
        let mut app = test_app(&["Ei"]);
        app.start_human_game();
        assert_eq!(app.screen, Screen::HumanRound);

        app.guess('e');
        app.guess('i');

        assert!(matches!(app.screen, Screen::RoundOver { won: true, .. }));
        assert_eq!(app.stats.rounds_played, 1);
        assert_eq!(app.stats.rounds_won, 1);
    }

    #[test]
    fn confirming_a_human_win_starts_the_next_round() {
        let mut app = test_app(&["Ei"]);
        app.start_human_game();
        app.guess('e');
        app.guess('i');
        app.confirm_round_over();

        assert_eq!(app.screen, Screen::HumanRound);
        assert!(app.session.is_running());
    }

    #[test]
    fn confirming_a_loss_returns_to_the_menu() {
        let mut app = test_app(&["Ei"]);
        app.start_human_game();

        // L1 budget is 10; lose with 11 distinct wrong letters
        for letter in "bcdfghjklmn".chars() {
            app.guess(letter);
        }

        assert!(matches!(app.screen, Screen::RoundOver { won: false, .. }));
        app.confirm_round_over();
        assert_eq!(app.screen, Screen::Menu);
        assert!(!app.session.is_running());
    }

    #[test]
    fn ai_round_runs_to_an_outcome_when_skipping() {
        let mut app = test_app(&["Katze", "Hund", "Maus"]);
        app.start_ai_game(Difficulty::L3);
        assert_eq!(app.screen, Screen::AiRound);

        app.ai_skip_to_end();

        assert!(matches!(app.screen, Screen::RoundOver { ai: true, .. }));
        assert_eq!(app.stats.rounds_played, 1);
    }

    #[test]
    fn words_can_be_added_at_runtime() {
        let mut app = test_app(&["Katze"]);
        app.open_add_word();
        assert_eq!(app.screen, Screen::AddWord);

        app.input.push_str("Igel");
        app.submit_new_word();

        assert!(app.session.words().contains("Igel"));
        assert_eq!(app.session.words().len(), 2);
        assert!(app.input.is_empty());
        // The prompt stays open for further words
        assert_eq!(app.screen, Screen::AddWord);
    }

    #[test]
    fn invalid_word_entry_reports_an_error_without_adding() {
        let mut app = test_app(&["Katze"]);
        app.open_add_word();

        app.input.push_str("zwei Worte");
        app.submit_new_word();

        assert_eq!(app.session.words().len(), 1);
        assert!(matches!(
            app.messages.last().unwrap().style,
            MessageStyle::Error
        ));
    }

    #[test]
    fn duplicate_word_entry_keeps_the_collection_unchanged() {
        let mut app = test_app(&["Katze"]);
        app.open_add_word();

        app.input.push_str("KATZE");
        app.submit_new_word();

        assert_eq!(app.session.words().len(), 1);
    }

    #[test]
    fn added_words_are_playable_in_the_next_round() {
        let mut app = test_app(&[]);
        app.open_add_word();
        app.input.push_str("Igel");
        app.submit_new_word();

        app.start_human_game();
        assert_eq!(app.screen, Screen::HumanRound);
        assert_eq!(app.session.round().target(), "IGEL");
    }

    #[test]
    fn help_returns_to_the_previous_screen() {
        let mut app = test_app(&["Katze"]);
        app.start_human_game();

        app.open_help();
        assert_eq!(app.screen, Screen::Help);

        app.close_help();
        assert_eq!(app.screen, Screen::HumanRound);
    }

    #[test]
    fn abandoning_a_round_keeps_the_session_idle() {
        let mut app = test_app(&["Katze"]);
        app.start_human_game();
        app.abandon_round();

        assert_eq!(app.screen, Screen::Menu);
        assert!(!app.session.is_running());
        assert!(!app.session.round().is_active());
    }
}
