//! Simple interactive CLI mode
//!
//! Text-based hangman loop without TUI.

use crate::core::GuessOutcome;
use crate::game::GameSession;
use crate::output::{help_text, print_lost, print_round, print_won};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the session has no words or if reading user input
/// fails.
pub fn run_play(session: &mut GameSession) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════╗");
    println!("║                 H A N G M A N                          ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!(
        "\n{} words available. Guess one letter at a time.",
        session.words().len()
    );
    println!(
        "Commands: 'help', 'new' for a fresh game, 'add <word>' to add a word, 'quit' to exit\n"
    );

    session.start_round().map_err(|e| e.to_string())?;

    loop {
        print_round(session.round());

        let input = get_user_input("\n-> Your letter")?;

        // Single characters are always guesses; only full words are commands
        match input.as_str() {
            "quit" | "exit" => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            "help" => {
                println!("\n{}", help_text());
                continue;
            }
            "new" => {
                // A fresh game resets streak and difficulty
                session.reset();
                session.start_round().map_err(|e| e.to_string())?;
                println!("\nNew game started!");
                continue;
            }
            _ => {}
        }

        // Grow the collection mid-session; the new word is eligible from
        // the next round on
        if let Some(raw) = input.strip_prefix("add ") {
            match session.words_mut().add(raw) {
                Ok(true) => println!(
                    "Added '{}'. {} words available.",
                    raw.trim(),
                    session.words().len()
                ),
                Ok(false) => println!("'{}' is already in the collection.", raw.trim()),
                Err(e) => println!("{}", e.to_string().yellow()),
            }
            continue;
        }

        let mut letters = input.chars();
        let (Some(letter), None) = (letters.next(), letters.next()) else {
            println!("{}", "Please enter exactly one letter.".yellow());
            continue;
        };

        match session.guess_letter(letter) {
            GuessOutcome::Rejected => {
                println!("{}", "That is not a letter of the alphabet.".yellow());
            }
            GuessOutcome::Correct | GuessOutcome::Wrong => {}
            GuessOutcome::CorrectAndWon => {
                print_round(session.round());
                print_won(session.streak());
                session.stop();

                let answer = get_user_input("\nContinue playing? [Y/N]")?;
                if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
                    // Difficulty progression carries over between rounds
                    session.start_round().map_err(|e| e.to_string())?;
                } else {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
            }
            GuessOutcome::WrongAndLost => {
                print_round(session.round());
                print_lost(session.round().target());
                session.stop();

                let answer = get_user_input("\nPlay again? [Y/N]")?;
                if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
                    // Starting over after a loss resets the session
                    session.reset();
                    session.start_round().map_err(|e| e.to_string())?;
                } else {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
