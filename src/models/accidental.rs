//! Accidental representation
//!
//! An accidental keeps the text it was written with (`"#x"`), the normalised
//! expansion where every `x` becomes two sharps (`[#, #, #]`), and the signed
//! magnitude (`+3`). Positive magnitudes are sharps, negative are flats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{TheoryError, TheoryResult};
use crate::parse::grammar::{scan_accidental, AccidentalSymbol};

/// Direction of a single normalised accidental step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccidentalSign {
    Sharp,
    Flat,
}

impl AccidentalSign {
    pub fn symbol(&self) -> char {
        match self {
            AccidentalSign::Sharp => '#',
            AccidentalSign::Flat => 'b',
        }
    }

    /// +1 for sharps, -1 for flats
    pub fn unit(&self) -> i32 {
        match self {
            AccidentalSign::Sharp => 1,
            AccidentalSign::Flat => -1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Accidental {
    /// Text as written, kept for display
    raw: String,

    /// Expansion with every `x` replaced by two sharps
    normalized: Vec<AccidentalSign>,

    /// Signed number of semitones this accidental alters a letter by
    magnitude: i32,
}

impl Accidental {
    /// Parse accidental text such as `""`, `"#"`, `"x"`, `"#x"` or `"bbb"`
    pub fn parse(raw: &str) -> TheoryResult<Self> {
        let symbols = scan_accidental(raw)?;

        let normalized: Vec<AccidentalSign> = symbols
            .iter()
            .flat_map(|symbol| match symbol {
                AccidentalSymbol::Sharp => vec![AccidentalSign::Sharp],
                AccidentalSymbol::DoubleSharp => vec![AccidentalSign::Sharp, AccidentalSign::Sharp],
                AccidentalSymbol::Flat => vec![AccidentalSign::Flat],
            })
            .collect();

        let magnitude = match normalized.first() {
            Some(sign) => sign.unit() * normalized.len() as i32,
            None => 0,
        };

        Ok(Self {
            raw: raw.to_string(),
            normalized,
            magnitude,
        })
    }

    /// The empty accidental
    pub fn natural() -> Self {
        Self {
            raw: String::new(),
            normalized: Vec::new(),
            magnitude: 0,
        }
    }

    /// Build `magnitude` sharps, or `|magnitude|` flats when negative
    pub fn from_magnitude(magnitude: i32) -> Self {
        let sign = if magnitude < 0 {
            AccidentalSign::Flat
        } else {
            AccidentalSign::Sharp
        };
        let count = magnitude.unsigned_abs() as usize;

        Self {
            raw: sign.symbol().to_string().repeat(count),
            normalized: vec![sign; count],
            magnitude,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &[AccidentalSign] {
        &self.normalized
    }

    pub fn magnitude(&self) -> i32 {
        self.magnitude
    }

    /// Sign class of the accidental, `None` when natural
    pub fn sign(&self) -> Option<AccidentalSign> {
        self.normalized.first().copied()
    }

    pub fn is_natural(&self) -> bool {
        self.magnitude == 0
    }

    /// Magnitude counted toward one sign class
    ///
    /// Positive when the accidental belongs to `sign`, negated when it belongs
    /// to the other class, zero when natural.
    pub fn contribution_toward(&self, sign: AccidentalSign) -> i32 {
        match self.sign() {
            None => 0,
            Some(own) if own == sign => self.magnitude.abs(),
            Some(_) => -self.magnitude.abs(),
        }
    }
}

impl Default for Accidental {
    fn default() -> Self {
        Self::natural()
    }
}

/// Accidentals are equal when they alter by the same amount (`x` == `##`)
impl PartialEq for Accidental {
    fn eq(&self, other: &Self) -> bool {
        self.magnitude == other.magnitude
    }
}

impl Eq for Accidental {}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for Accidental {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_accidentals() {
        assert!(Accidental::parse("d").is_err());
        assert!(Accidental::parse("##b").is_err());
        assert!(Accidental::parse("b#").is_err());
        assert!(Accidental::parse("xb").is_err());
    }

    #[test]
    fn test_natural() {
        let acc = Accidental::parse("").unwrap();
        assert_eq!(acc.magnitude(), 0);
        assert!(acc.is_natural());
        assert_eq!(acc.sign(), None);
        assert_eq!(acc, Accidental::natural());
    }

    #[test]
    fn test_magnitude_is_linear() {
        for k in 1..=5 {
            assert_eq!(Accidental::parse(&"#".repeat(k)).unwrap().magnitude(), k as i32);
            assert_eq!(Accidental::parse(&"b".repeat(k)).unwrap().magnitude(), -(k as i32));
        }
    }

    #[test]
    fn test_double_sharp_expansion() {
        let acc = Accidental::parse("x").unwrap();
        assert_eq!(acc.magnitude(), 2);
        assert_eq!(acc.normalized(), &[AccidentalSign::Sharp, AccidentalSign::Sharp]);

        let acc = Accidental::parse("#x").unwrap();
        assert_eq!(acc.magnitude(), 3);
        assert_eq!(acc.raw(), "#x");
        assert_eq!(acc.normalized().len(), 3);

        let acc = Accidental::parse("xx").unwrap();
        assert_eq!(acc.magnitude(), 4);
    }

    #[test]
    fn test_from_magnitude() {
        assert_eq!(Accidental::from_magnitude(2).raw(), "##");
        assert_eq!(Accidental::from_magnitude(-3).raw(), "bbb");
        assert_eq!(Accidental::from_magnitude(0).raw(), "");
        assert_eq!(Accidental::from_magnitude(-1).magnitude(), -1);
    }

    #[test]
    fn test_equality_by_magnitude() {
        assert_eq!(Accidental::parse("x").unwrap(), Accidental::parse("##").unwrap());
        assert_ne!(Accidental::parse("#").unwrap(), Accidental::parse("b").unwrap());
    }

    #[test]
    fn test_contribution_toward() {
        let sharp = Accidental::parse("x").unwrap();
        assert_eq!(sharp.contribution_toward(AccidentalSign::Sharp), 2);
        assert_eq!(sharp.contribution_toward(AccidentalSign::Flat), -2);

        let flat = Accidental::parse("b").unwrap();
        assert_eq!(flat.contribution_toward(AccidentalSign::Flat), 1);
        assert_eq!(flat.contribution_toward(AccidentalSign::Sharp), -1);

        assert_eq!(Accidental::natural().contribution_toward(AccidentalSign::Sharp), 0);
    }

    #[test]
    fn test_display_keeps_raw_text() {
        assert_eq!(format!("{}", Accidental::parse("#x").unwrap()), "#x");
        assert_eq!("bb".parse::<Accidental>().unwrap().magnitude(), -2);
    }
}
