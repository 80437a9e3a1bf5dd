/// The seven natural letter names of Western notation
///
/// Letters are ordered around the C-based diatonic cycle C D E F G A B.
/// Each letter carries its natural semitone offset above C:
///
///   C=0, D=2, E=4, F=5, G=7, A=9, B=11

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

/// Letters in diatonic cycle order
pub const LETTER_CYCLE: [Letter; 7] = [
    Letter::C,
    Letter::D,
    Letter::E,
    Letter::F,
    Letter::G,
    Letter::A,
    Letter::B,
];

impl Letter {
    /// Position in the diatonic cycle (C=0 .. B=6)
    pub fn index(&self) -> usize {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Semitones above C for the unaltered letter
    pub fn natural_semitone(&self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Letter at a cycle position, wrapping in both directions
    pub fn from_index(index: i32) -> Letter {
        LETTER_CYCLE[index.rem_euclid(7) as usize]
    }

    /// The natural letter sitting exactly on a pitch class, if any
    ///
    /// Examples:
    ///   0 → C, 11 → B, -1 → B, 12 → C, 1 → None
    pub fn from_semitone(semitone: i32) -> Option<Letter> {
        let pitch_class = semitone.rem_euclid(12);
        LETTER_CYCLE
            .iter()
            .copied()
            .find(|letter| letter.natural_semitone() == pitch_class)
    }

    /// Parse an uppercase letter character
    pub fn from_char(c: char) -> Option<Letter> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_semitones() {
        let semitones: Vec<i32> = LETTER_CYCLE.iter().map(|l| l.natural_semitone()).collect();
        assert_eq!(semitones, vec![0, 2, 4, 5, 7, 9, 11]);
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(Letter::from_index(0), Letter::C);
        assert_eq!(Letter::from_index(7), Letter::C);
        assert_eq!(Letter::from_index(9), Letter::E);
        assert_eq!(Letter::from_index(-1), Letter::B);
    }

    #[test]
    fn test_from_semitone() {
        assert_eq!(Letter::from_semitone(0), Some(Letter::C));
        assert_eq!(Letter::from_semitone(5), Some(Letter::F));
        assert_eq!(Letter::from_semitone(-1), Some(Letter::B));
        assert_eq!(Letter::from_semitone(14), Some(Letter::D));
        assert_eq!(Letter::from_semitone(6), None);
    }

    #[test]
    fn test_letter_consistency() {
        for letter in LETTER_CYCLE {
            assert_eq!(Letter::from_semitone(letter.natural_semitone()), Some(letter));
            assert_eq!(Letter::from_index(letter.index() as i32), letter);
            assert_eq!(Letter::from_char(letter.as_char()), Some(letter));
        }
    }

    #[test]
    fn test_from_char_rejects_lowercase() {
        assert_eq!(Letter::from_char('c'), None);
        assert_eq!(Letter::from_char('H'), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Letter::G), "G");
    }
}
