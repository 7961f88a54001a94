//! The fixed guessing alphabet
//!
//! All guessing and frequency counting happens over this ordered universe:
//! the 26 base Latin letters followed by the four extended letters Ä, Ö, Ü
//! and ß. The order is significant for deterministic frequency tie-breaks
//! and for display.

/// Number of letters in the alphabet
pub const LEN: usize = 30;

/// All available letters, in canonical (folded) form and fixed order
pub const LETTERS: [char; LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ä', 'Ö', 'Ü', 'ß',
];

/// Case-fold a character into the canonical alphabet
///
/// Returns the folded letter, or `None` if the character is not a letter of
/// the alphabet. `ß` folds to itself: `char::to_uppercase` would expand it
/// to `SS`, which is not a single letter of this alphabet.
///
/// # Examples
/// ```
/// use hangman::core::alphabet;
///
/// assert_eq!(alphabet::fold('a'), Some('A'));
/// assert_eq!(alphabet::fold('ä'), Some('Ä'));
/// assert_eq!(alphabet::fold('ß'), Some('ß'));
/// assert_eq!(alphabet::fold('7'), None);
/// ```
#[must_use]
pub fn fold(c: char) -> Option<char> {
    let folded = match c {
        'ß' | 'ẞ' => 'ß',
        _ => {
            let mut upper = c.to_uppercase();
            let first = upper.next()?;
            // Multi-char expansions cannot be alphabet letters
            if upper.next().is_some() {
                return None;
            }
            first
        }
    };

    LETTERS.contains(&folded).then_some(folded)
}

/// Position of a letter within the alphabet order
///
/// Folds the input first, so both cases are accepted.
#[must_use]
pub fn index_of(c: char) -> Option<usize> {
    let folded = fold(c)?;
    LETTERS.iter().position(|&letter| letter == folded)
}

/// Check whether a character is a letter of the alphabet (either case)
#[must_use]
pub fn contains(c: char) -> bool {
    fold(c).is_some()
}
