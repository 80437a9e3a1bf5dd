//! Key signature derivation
//!
//! A key is written as a letter and an optional `#` or `b`. Uppercase letters
//! are major keys, lowercase letters are minor keys (`"A"` = A major,
//! `"f#"` = F# minor).
//!
//! Minor keys borrow the notes of their relative major (a minor third up) and
//! rotate them to start on the minor tonic.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::accidental::Accidental;
use super::interval::{Interval, Quality};
use super::letter::Letter;
use super::note::{Note, DEFAULT_OCTAVE};
use crate::errors::{TheoryError, TheoryResult};
use crate::parse::grammar::scan_key;
use crate::transposition::lookup_table::major_scale;

/// Major scale degrees above the tonic
const MAJOR_SCALE_STEPS: [(Quality, u8); 7] = [
    (Quality::Perfect, 1),
    (Quality::Major, 2),
    (Quality::Major, 3),
    (Quality::Perfect, 4),
    (Quality::Perfect, 5),
    (Quality::Major, 6),
    (Quality::Major, 7),
];

/// Rotation that moves a major scale's sixth degree to the front
const RELATIVE_MINOR_ROTATION: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct KeySignature {
    /// Key as written (`"A"`, `"f"`, `"Bb"`)
    key: String,
    letter: char,
    accidental: Accidental,
    tonic: Note,
    is_minor: bool,

    /// Seven notes of the key, starting on the tonic
    notes: Vec<String>,
    natural_notes: Vec<String>,
    altered_notes: Vec<String>,

    relative_key: String,
    parallel_key: String,
    dominant_key: String,
    subdominant_key: String,
}

impl KeySignature {
    pub fn parse(key: &str) -> TheoryResult<Self> {
        let tokens = scan_key(key)?;
        let accidental = Accidental::parse(tokens.accidental)?;
        let is_minor = tokens.letter.is_ascii_lowercase();
        let tonic_letter = Letter::from_char(tokens.letter.to_ascii_uppercase())
            .ok_or_else(|| TheoryError::InvalidKeySignature(key.to_string()))?;
        let tonic = Note::new(tonic_letter, accidental.clone(), DEFAULT_OCTAVE);

        let notes = if is_minor {
            let relative_major = &tonic + Interval::new(Quality::Minor, 3)?;
            let mut notes = major_scale_notes(&relative_major)?;
            notes.rotate_left(RELATIVE_MINOR_ROTATION);
            notes
        } else {
            major_scale_notes(&tonic)?
        };

        let (natural_notes, altered_notes): (Vec<String>, Vec<String>) = notes
            .iter()
            .cloned()
            .partition(|name| name.chars().count() == 1);

        let minor_third = Interval::new(Quality::Minor, 3)?;
        let relative_key = if is_minor {
            (&tonic + minor_third).name()
        } else {
            (&tonic - minor_third).name().to_lowercase()
        };

        let parallel_letter = if is_minor {
            tokens.letter.to_ascii_uppercase()
        } else {
            tokens.letter.to_ascii_lowercase()
        };
        let parallel_key = format!("{}{}", parallel_letter, accidental.raw());

        let in_mode = |note: Note| {
            if is_minor {
                note.name().to_lowercase()
            } else {
                note.name()
            }
        };
        let dominant_key = in_mode(&tonic + Interval::new(Quality::Perfect, 5)?);
        let subdominant_key = in_mode(&tonic + Interval::new(Quality::Perfect, 4)?);

        log::debug!(
            "key {}: notes {:?}, relative {}, dominant {}",
            key,
            notes,
            relative_key,
            dominant_key
        );

        Ok(Self {
            key: key.to_string(),
            letter: tokens.letter,
            accidental,
            tonic,
            is_minor,
            notes,
            natural_notes,
            altered_notes,
            relative_key,
            parallel_key,
            dominant_key,
            subdominant_key,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Letter as written; its case encodes the mode
    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn accidental(&self) -> &Accidental {
        &self.accidental
    }

    pub fn tonic(&self) -> &Note {
        &self.tonic
    }

    pub fn is_minor(&self) -> bool {
        self.is_minor
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn natural_notes(&self) -> &[String] {
        &self.natural_notes
    }

    pub fn altered_notes(&self) -> &[String] {
        &self.altered_notes
    }

    /// Relative minor (lowercase) of a major key, or relative major of a minor key
    pub fn relative_key(&self) -> &str {
        &self.relative_key
    }

    pub fn parallel_key(&self) -> &str {
        &self.parallel_key
    }

    pub fn dominant_key(&self) -> &str {
        &self.dominant_key
    }

    pub fn subdominant_key(&self) -> &str {
        &self.subdominant_key
    }
}

/// Seven note names of the major key on `tonic`
///
/// Canonical keys come from the circle-of-fifths table. Theoretical keys
/// (G#, Fb, ...) are spelled by stacking the major scale intervals.
fn major_scale_notes(tonic: &Note) -> TheoryResult<Vec<String>> {
    let name = tonic.name();
    if let Some(scale) = major_scale(&name) {
        return Ok(scale.iter().map(|note| note.to_string()).collect());
    }

    log::debug!("{} major is not in the circle of fifths, deriving its scale", name);
    derive_major_scale(tonic)
}

pub(crate) fn derive_major_scale(tonic: &Note) -> TheoryResult<Vec<String>> {
    MAJOR_SCALE_STEPS
        .iter()
        .map(|&(quality, quantity)| Ok((tonic + Interval::new(quality, quantity)?).name()))
        .collect()
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

impl FromStr for KeySignature {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
