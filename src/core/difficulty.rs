//! Difficulty levels and the wrong-guess budget
//!
//! Six levels, each mapping to a fixed number of wrong letters a player may
//! guess before losing. The mapping is a hardcoded table, not a formula.

use std::fmt;

/// Difficulty level of a round
///
/// Ordered from easiest (`L1`) to hardest (`L6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Difficulty {
    /// 10 wrong guesses allowed
    #[default]
    L1,
    /// 8 wrong guesses allowed
    L2,
    /// 6 wrong guesses allowed
    L3,
    /// 4 wrong guesses allowed
    L4,
    /// 2 wrong guesses allowed
    L5,
    /// 0 wrong guesses allowed
    L6,
}

impl Difficulty {
    /// Maximum number of distinct wrong letters before the round is lost
    ///
    /// The loss triggers when the wrong-letter count strictly exceeds this
    /// value, so a round at `L6` ends on the first wrong letter.
    #[must_use]
    pub const fn max_wrong_guesses(self) -> usize {
        match self {
            Self::L1 => 10,
            Self::L2 => 8,
            Self::L3 => 6,
            Self::L4 => 4,
            Self::L5 => 2,
            Self::L6 => 0,
        }
    }

    /// The next harder level, saturating at `L6`
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::L1 => Self::L2,
            Self::L2 => Self::L3,
            Self::L3 => Self::L4,
            Self::L4 => Self::L5,
            Self::L5 | Self::L6 => Self::L6,
        }
    }

    /// Level as the external 1-6 ordinal
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::L1 => 1,
            Self::L2 => 2,
            Self::L3 => 3,
            Self::L4 => 4,
            Self::L5 => 5,
            Self::L6 => 6,
        }
    }

    /// Convert the external 1-6 ordinal back to a level
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::L1),
            2 => Some(Self::L2),
            3 => Some(Self::L3),
            4 => Some(Self::L4),
            5 => Some(Self::L5),
            6 => Some(Self::L6),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_table_matches_design() {
        assert_eq!(Difficulty::L1.max_wrong_guesses(), 10);
        assert_eq!(Difficulty::L2.max_wrong_guesses(), 8);
        assert_eq!(Difficulty::L3.max_wrong_guesses(), 6);
        assert_eq!(Difficulty::L4.max_wrong_guesses(), 4);
        assert_eq!(Difficulty::L5.max_wrong_guesses(), 2);
        assert_eq!(Difficulty::L6.max_wrong_guesses(), 0);
    }

    #[test]
    fn next_saturates_at_hardest() {
        assert_eq!(Difficulty::L1.next(), Difficulty::L2);
        assert_eq!(Difficulty::L5.next(), Difficulty::L6);
        assert_eq!(Difficulty::L6.next(), Difficulty::L6);
    }

    #[test]
    fn default_is_lowest() {
        assert_eq!(Difficulty::default(), Difficulty::L1);
    }

    #[test]
    fn level_round_trip() {
        for level in 1..=6 {
            let difficulty = Difficulty::from_level(level).unwrap();
            assert_eq!(difficulty.level(), level);
        }
        assert_eq!(Difficulty::from_level(0), None);
        assert_eq!(Difficulty::from_level(7), None);
    }

    #[test]
    fn ordering_matches_severity() {
        assert!(Difficulty::L1 < Difficulty::L2);
        assert!(Difficulty::L5 < Difficulty::L6);
    }
}
