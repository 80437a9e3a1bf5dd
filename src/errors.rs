//! Error types for pitch and interval construction
//!
//! Every constructor in this crate validates its input up front and either
//! returns a complete value or one of these errors. Nothing is partially built.

use thiserror::Error;

use crate::models::interval::Quality;

/// Result alias used throughout the crate
pub type TheoryResult<T> = Result<T, TheoryError>;

/// Errors raised while parsing or constructing tonal values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Accidental text outside `^([#x]*|b*)$`, or mixing sharps with flats
    #[error("Invalid accidental '{0}'. Allowed characters are [#, x] or [b], never both")]
    InvalidAccidentalSyntax(String),

    /// Note text outside `^[A-G][#xb]*[1-8]?$`
    #[error("Invalid note '{0}'. Must be [A-G][#xb]*[1-8]?")]
    InvalidNoteSyntax(String),

    /// Octave so far from middle C that the pitch does not fit an `i32`
    #[error("Octave {0} is out of range")]
    InvalidOctave(i32),

    /// Key text outside `^[a-gA-G][#b]?$`
    #[error("Invalid key signature '{0}'. Must be [a-gA-G][#b]?")]
    InvalidKeySignature(String),

    /// Quality symbol not one of P, M, m, A, d
    #[error("Invalid interval quality '{0}'. Must be one of [P, M, m, A, d]")]
    InvalidQuality(String),

    /// Quantity outside 1..=8
    #[error("Invalid interval quantity '{0}'. Must be in range [1, 8]")]
    InvalidQuantity(String),

    /// Quality and quantity are each fine but the pair does not exist (e.g. P3)
    #[error("Interval {quality}{quantity} does not exist")]
    InvalidIntervalCombination { quality: Quality, quantity: u8 },

    /// Reverse lookup found no catalog entry
    #[error("No interval with quantity {quantity} spans {semitones} semitones")]
    NoMatchingInterval { quantity: u8, semitones: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_input() {
        let err = TheoryError::InvalidNoteSyntax("C12".to_string());
        assert!(err.to_string().contains("C12"));

        let err = TheoryError::InvalidIntervalCombination {
            quality: Quality::Perfect,
            quantity: 3,
        };
        assert_eq!(err.to_string(), "Interval P3 does not exist");
    }

    #[test]
    fn test_no_matching_interval_message() {
        let err = TheoryError::NoMatchingInterval { quantity: 3, semitones: 9 };
        assert_eq!(err.to_string(), "No interval with quantity 3 spans 9 semitones");
    }
}
