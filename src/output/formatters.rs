//! Formatting utilities for terminal output

use crate::core::Slot;

/// Progressive gallows drawings, from empty scaffold to complete figure
///
/// Eleven body parts appear one by one; index 0 is the bare scaffold and
/// index 11 the finished hangman.
pub const STAGES: [&str; 12] = [
    // 0: bare scaffold
    "  =========\n  ||\n  ||\n  ||\n  ||\n  ||\n======",
    // 1: brace
    "  =========\n  ||/\n  ||\n  ||\n  ||\n  ||\n======",
    // 2: rope
    "  =========\n  ||/    |\n  ||\n  ||\n  ||\n  ||\n======",
    // 3: head
    "  =========\n  ||/    |\n  ||     O\n  ||\n  ||\n  ||\n======",
    // 4: torso
    "  =========\n  ||/    |\n  ||     O\n  ||     |\n  ||\n  ||\n======",
    // 5: left arm
    "  =========\n  ||/    |\n  ||     O\n  ||    /|\n  ||\n  ||\n======",
    // 6: right arm
    "  =========\n  ||/    |\n  ||     O\n  ||    /|\\\n  ||\n  ||\n======",
    // 7: lower torso
    "  =========\n  ||/    |\n  ||     O\n  ||    /|\\\n  ||     |\n  ||\n======",
    // 8: left leg
    "  =========\n  ||/    |\n  ||     O\n  ||    /|\\\n  ||     |\n  ||    /\n======",
    // 9: right leg
    "  =========\n  ||/    |\n  ||     O\n  ||    /|\\\n  ||     |\n  ||    / \\\n======",
    // 10: left foot
    "  =========\n  ||/    |\n  ||     O\n  ||    /|\\\n  ||     |\n  ||   _/ \\\n======",
    // 11: right foot, complete
    "  =========\n  ||/    |\n  ||     O\n  ||    /|\\\n  ||     |\n  ||   _/ \\_\n======",
];

/// Select the gallows stage for the current wrong-letter count
///
/// The number of drawn parts scales with the wrong-guess budget so the
/// figure completes exactly when the budget is exceeded, at every
/// difficulty.
#[must_use]
pub fn gallows(wrong_count: usize, max_wrong: usize) -> &'static str {
    let total_parts = STAGES.len() - 1;
    let parts_per_wrong = total_parts as f64 / (max_wrong as f64 + 1.0);
    let drawn = (wrong_count as f64 * parts_per_wrong) as usize;

    STAGES[drawn.min(total_parts)]
}

/// Format the reveal buffer as a spaced line, e.g. `K _ T Z E`
#[must_use]
pub fn reveal_line(slots: &[Slot]) -> String {
    let rendered: Vec<String> = slots
        .iter()
        .map(|slot| match slot {
            Slot::Hidden => "_".to_string(),
            Slot::Revealed(c) => c.to_string(),
        })
        .collect();

    rendered.join(" ")
}

/// Format the wrong letters as a spaced line in guess order
#[must_use]
pub fn wrong_letters_line(letters: &[char]) -> String {
    let rendered: Vec<String> = letters.iter().map(char::to_string).collect();
    rendered.join(" ")
}
