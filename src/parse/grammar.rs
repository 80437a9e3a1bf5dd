//! Grammar checks for the textual forms of accidentals, notes, keys and intervals
//!
//! Each scanner walks its input once and either returns the recognised parts
//! or the error kind that names the failed grammar:
//!
//! - accidental: `^([#x]*|b*)$`
//! - note:       `^[A-G][#xb]*[1-8]?$`
//! - key:        `^[a-gA-G][#b]?$`
//! - interval:   `{P,M,m,A,d}` followed by the quantity digits

use crate::errors::{TheoryError, TheoryResult};
use crate::models::interval::Quality;
use crate::models::letter::Letter;

/// A single accidental character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccidentalSymbol {
    Sharp,
    DoubleSharp,
    Flat,
}

impl AccidentalSymbol {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(AccidentalSymbol::Sharp),
            'x' => Some(AccidentalSymbol::DoubleSharp),
            'b' => Some(AccidentalSymbol::Flat),
            _ => None,
        }
    }

    fn is_sharp_class(&self) -> bool {
        matches!(self, AccidentalSymbol::Sharp | AccidentalSymbol::DoubleSharp)
    }
}

/// Parts of a note name. The accidental slice is not validated yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTokens<'a> {
    pub letter: Letter,
    pub accidental: &'a str,
    pub octave: Option<i32>,
}

/// Parts of a key name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTokens<'a> {
    /// Letter as written; lowercase means minor
    pub letter: char,
    pub accidental: &'a str,
}

/// Check an accidental string and split it into symbols
pub fn scan_accidental(raw: &str) -> TheoryResult<Vec<AccidentalSymbol>> {
    let mut symbols = Vec::with_capacity(raw.len());

    for c in raw.chars() {
        let symbol = AccidentalSymbol::from_char(c)
            .ok_or_else(|| TheoryError::InvalidAccidentalSyntax(raw.to_string()))?;
        symbols.push(symbol);
    }

    // Sharps and flats never share one accidental
    if let Some(first) = symbols.first() {
        let sharp_class = first.is_sharp_class();
        if symbols.iter().any(|s| s.is_sharp_class() != sharp_class) {
            return Err(TheoryError::InvalidAccidentalSyntax(raw.to_string()));
        }
    }

    Ok(symbols)
}

/// Split a note name into letter, accidental text and optional octave digit
pub fn scan_note(name: &str) -> TheoryResult<NoteTokens<'_>> {
    let invalid = || TheoryError::InvalidNoteSyntax(name.to_string());

    let letter = name
        .chars()
        .next()
        .and_then(Letter::from_char)
        .ok_or_else(invalid)?;

    // Letters are ASCII, so the accidental run starts at byte 1
    let rest = &name[1..];
    let accidental_len = rest
        .find(|c: char| AccidentalSymbol::from_char(c).is_none())
        .unwrap_or(rest.len());
    let (accidental, tail) = rest.split_at(accidental_len);

    let octave = match tail.as_bytes() {
        [] => None,
        [digit @ b'1'..=b'8'] => Some((digit - b'0') as i32),
        _ => return Err(invalid()),
    };

    Ok(NoteTokens { letter, accidental, octave })
}

/// Split a key name into its letter and optional single accidental
pub fn scan_key(key: &str) -> TheoryResult<KeyTokens<'_>> {
    let invalid = || TheoryError::InvalidKeySignature(key.to_string());

    let letter = key.chars().next().ok_or_else(invalid)?;
    if Letter::from_char(letter.to_ascii_uppercase()).is_none() || !letter.is_ascii() {
        return Err(invalid());
    }

    let accidental = &key[1..];
    if !matches!(accidental, "" | "#" | "b") {
        return Err(invalid());
    }

    Ok(KeyTokens { letter, accidental })
}

/// Split a canonical interval name such as `M3` into quality and quantity
///
/// The quantity is exactly one digit. Its range is not checked here;
/// `Interval::new` owns that rule.
pub fn scan_interval_name(name: &str) -> TheoryResult<(Quality, u8)> {
    let mut chars = name.chars();
    let symbol = chars
        .next()
        .ok_or_else(|| TheoryError::InvalidQuality(name.to_string()))?;
    let quality = Quality::from_symbol(symbol)?;

    let digits = chars.as_str();
    match digits.as_bytes() {
        [digit @ b'0'..=b'9'] => Ok((quality, digit - b'0')),
        _ => Err(TheoryError::InvalidQuantity(digits.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_accidental_valid() {
        assert!(scan_accidental("").unwrap().is_empty());
        assert_eq!(
            scan_accidental("#x").unwrap(),
            vec![AccidentalSymbol::Sharp, AccidentalSymbol::DoubleSharp]
        );
        assert_eq!(scan_accidental("bb").unwrap().len(), 2);
    }

    #[test]
    fn test_scan_accidental_invalid() {
        assert!(matches!(
            scan_accidental("d"),
            Err(TheoryError::InvalidAccidentalSyntax(_))
        ));
        assert!(matches!(
            scan_accidental("##b"),
            Err(TheoryError::InvalidAccidentalSyntax(_))
        ));
        assert!(scan_accidental("bx").is_err());
        assert!(scan_accidental(",").is_err());
    }

    #[test]
    fn test_scan_note() {
        let tokens = scan_note("F#2").unwrap();
        assert_eq!(tokens.letter, Letter::F);
        assert_eq!(tokens.accidental, "#");
        assert_eq!(tokens.octave, Some(2));

        let tokens = scan_note("Abb").unwrap();
        assert_eq!(tokens.accidental, "bb");
        assert_eq!(tokens.octave, None);

        // Mixed classes pass the note grammar; the accidental grammar rejects them
        assert_eq!(scan_note("C#b").unwrap().accidental, "#b");
    }

    #[test]
    fn test_scan_note_invalid() {
        for name in ["", "W", "U", "c", "E%", "E/", "C12", "F#12", "C9", "C0", "C4#"] {
            assert!(
                matches!(scan_note(name), Err(TheoryError::InvalidNoteSyntax(_))),
                "{} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_scan_key() {
        let tokens = scan_key("f#").unwrap();
        assert_eq!(tokens.letter, 'f');
        assert_eq!(tokens.accidental, "#");

        for key in ["", "M", "Gx", "Cbb", "H", "C4"] {
            assert!(
                matches!(scan_key(key), Err(TheoryError::InvalidKeySignature(_))),
                "{} should be rejected",
                key
            );
        }
    }

    #[test]
    fn test_scan_interval_name() {
        assert_eq!(scan_interval_name("M3").unwrap(), (Quality::Major, 3));
        assert_eq!(scan_interval_name("d8").unwrap(), (Quality::Diminished, 8));
        assert!(matches!(scan_interval_name("Q3"), Err(TheoryError::InvalidQuality(_))));
        assert!(matches!(scan_interval_name(""), Err(TheoryError::InvalidQuality(_))));
        assert!(matches!(scan_interval_name("M"), Err(TheoryError::InvalidQuantity(_))));
        assert!(matches!(scan_interval_name("Mx"), Err(TheoryError::InvalidQuantity(_))));
    }

    #[test]
    fn test_scan_interval_name_takes_one_digit() {
        for name in ["P05", "M03", "M10", "M003", "P5 ", "m3b"] {
            assert!(
                matches!(scan_interval_name(name), Err(TheoryError::InvalidQuantity(_))),
                "{} should be rejected",
                name
            );
        }
        // Out of range digits reach the catalog check
        assert_eq!(scan_interval_name("M9").unwrap(), (Quality::Major, 9));
    }
}
