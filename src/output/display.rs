//! Display functions for game and command output

use super::formatters::{gallows, reveal_line, wrong_letters_line};
use crate::commands::AutoplayReport;
use crate::core::{GuessOutcome, Round, alphabet};
use colored::Colorize;

/// Print the current round: gallows, difficulty, masked word and alphabet
pub fn print_round(round: &Round) {
    println!(
        "\n{}",
        gallows(
            round.wrong_letters().len(),
            round.difficulty().max_wrong_guesses()
        )
    );

    println!(
        "\nDifficulty: {}   Wrong guesses left: {}",
        round.difficulty().to_string().bright_yellow(),
        round.wrong_guesses_left().to_string().bright_yellow()
    );

    println!(
        "\nWord: {}",
        reveal_line(round.slots()).bright_white().bold()
    );

    if !round.wrong_letters().is_empty() {
        println!(
            "Wrong: {}",
            wrong_letters_line(round.wrong_letters()).red()
        );
    }

    println!("\n{}", alphabet_overview(round));
}

/// The full alphabet with per-letter coloring
///
/// Revealed letters show green, wrong letters red, untouched letters plain.
#[must_use]
pub fn alphabet_overview(round: &Round) -> String {
    let mut line = String::new();

    for (i, &letter) in alphabet::LETTERS.iter().enumerate() {
        if i > 0 {
            line.push(' ');
            // Two display rows, split after the 15th letter
            if i == 15 {
                line.push('\n');
            }
        }

        let colored_letter = if round.is_letter_wrong(letter) {
            letter.to_string().red().to_string()
        } else if round.is_letter_revealed(letter) {
            letter.to_string().green().to_string()
        } else {
            letter.to_string()
        };

        line.push_str(&colored_letter);
    }

    line
}

/// Announce a won round
pub fn print_won(streak: u32) {
    println!(
        "\n{}",
        "-> Congratulations, you guessed the word!".green().bold()
    );
    println!("   Winning streak: {streak}");
}

/// Announce a lost round, revealing the target
pub fn print_lost(target: &str) {
    println!("\n{}", "-> GAME OVER!".red().bold());
    println!("   The word was: {}", target.bright_white().bold());
}

/// Print the trace and summary of an autoplay run
pub fn print_autoplay_report(report: &AutoplayReport) {
    for round in &report.rounds {
        for step in &round.trace {
            let marker = match step.outcome {
                GuessOutcome::Correct | GuessOutcome::CorrectAndWon => "+".green(),
                GuessOutcome::Wrong | GuessOutcome::WrongAndLost => "-".red(),
                GuessOutcome::Rejected => "?".yellow(),
            };
            println!("  [{marker}] {}   {}", step.letter, step.revealed);
        }

        if round.won {
            println!(
                "{}",
                format!(
                    "-> The computer guessed {} in {} guesses ({} wrong)",
                    round.target, round.total_guesses, round.wrong_guesses
                )
                .green()
            );
        } else {
            println!(
                "{}",
                format!("-> The computer was hanged; the word was {}", round.target).red()
            );
        }
    }

    if report.rounds.len() > 1 {
        print_autoplay_summary(report);
    }
}

fn print_autoplay_summary(report: &AutoplayReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "AUTOPLAY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\nDifficulty:       {}", report.difficulty);
    println!("Rounds played:    {}", report.rounds.len());
    println!(
        "Won / lost:       {} / {}",
        report.wins.to_string().green(),
        report.losses.to_string().red()
    );
    println!("Win rate:         {:.1}%", report.win_rate());
    println!("Average guesses:  {:.2}", report.average_guesses());
    println!("Duration:         {:.2?}", report.duration);

    let mut counts: Vec<(usize, usize)> = report
        .guess_distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    counts.sort_unstable();

    println!("\nGuess distribution:");
    for (guesses, count) in counts {
        let bar_len = count * 40 / report.rounds.len().max(1);
        println!("  {guesses:>2} guesses: {:<40} {count}", "█".repeat(bar_len));
    }
}

/// Static help text: goal, difficulty table and word sources
#[must_use]
pub fn help_text() -> String {
    let mut text = String::new();

    text.push_str("The goal of this game is to find out the word by guessing letters.\n\n");
    text.push_str("The maximum amount of wrong letters depends on the difficulty level [1 - 6]:\n\n");
    text.push_str("  - L1: Game over after 11 wrong letters\n");
    text.push_str("  - L2:                  9 wrong letters\n");
    text.push_str("  - L3:                  7 wrong letters\n");
    text.push_str("  - L4:                  5 wrong letters\n");
    text.push_str("  - L5:                  3 wrong letters\n");
    text.push_str("  - L6:                  1 wrong letter\n");
    text.push_str("\nThe difficulty always starts at L1 and increases after every third victory\n");
    text.push_str("when you continue to play.\n");
    text.push_str("\nTo let the computer play, use the 'auto' subcommand and set its\n");
    text.push_str("difficulty level with --level.\n");
    text.push_str("\nThere are three ways to add words to the game:\n\n");
    text.push_str(" - By command line arguments: -f file1.txt -f file2.txt -w word1 -w word2\n");
    text.push_str(" - While the game runs: press [F3] in the menu, or type 'add <word>'\n");
    text.push_str("   in the simple mode\n");
    text.push_str(" - By editing the builtin word list before building\n");

    text
}
