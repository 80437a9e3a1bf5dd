//! Note representation and pitch arithmetic entry points
//!
//! A note is a letter, an accidental and an octave. Its absolute pitch follows
//! the MIDI convention (C4 = 60):
//!
//!   pitch = natural semitone of letter + accidental magnitude + (octave + 1) * 12
//!
//! `==` compares sounding pitch (enharmonic equality, `C# == Db`), while
//! [`Note::is_same`] additionally requires the same spelling.

use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::str::FromStr;

use super::accidental::Accidental;
use super::interval::Interval;
use super::letter::Letter;
use crate::errors::{TheoryError, TheoryResult};
use crate::parse::grammar::scan_note;
use crate::transposition::{distance, enharmonic, interval_step, Direction};

/// Octave used when a note name carries no octave digit
pub const DEFAULT_OCTAVE: i32 = 4;

/// Absolute pitch of a letter altered by `magnitude` semitones in `octave`
///
/// Callers keep the octave within the range accepted by [`checked_pitch_value`].
pub fn pitch_value(letter: Letter, magnitude: i32, octave: i32) -> i32 {
    letter.natural_semitone() + magnitude + (octave + 1) * 12
}

/// [`pitch_value`], or `None` when the result does not fit an `i32`
///
/// One octave of headroom is required on top, so that stepping and respelling
/// the note stay in range.
pub fn checked_pitch_value(letter: Letter, magnitude: i32, octave: i32) -> Option<i32> {
    let pitch = octave
        .checked_add(1)?
        .checked_mul(12)?
        .checked_add(letter.natural_semitone())?
        .checked_add(magnitude)?;
    pitch.checked_add(12 * pitch.signum()).map(|_| pitch)
}

#[derive(Debug, Clone, Serialize)]
pub struct Note {
    letter: Letter,
    accidental: Accidental,
    octave: i32,

    /// Absolute pitch, MIDI numbering
    pitch: i32,

    /// Easier spelling of the same pitch, only for awkward spellings (Cb, E#, Abb, ...)
    respelled: Option<Box<Note>>,
}

impl Note {
    /// Parse a note name such as `"C"`, `"F#2"` or `"Bbb5"`, defaulting to octave 4
    pub fn parse(name: &str) -> TheoryResult<Self> {
        Self::parse_with_octave(name, DEFAULT_OCTAVE)
    }

    /// Parse a note name, using `default_octave` when the name has no octave digit
    pub fn parse_with_octave(name: &str, default_octave: i32) -> TheoryResult<Self> {
        let tokens = scan_note(name)?;
        let accidental = Accidental::parse(tokens.accidental)?;
        let octave = tokens.octave.unwrap_or(default_octave);
        checked_pitch_value(tokens.letter, accidental.magnitude(), octave)
            .ok_or(TheoryError::InvalidOctave(octave))?;

        log::trace!("parsed note '{}' as {}{} octave {}", name, tokens.letter, accidental, octave);

        Ok(Self::new(tokens.letter, accidental, octave))
    }

    /// Build a note from already validated parts
    pub fn new(letter: Letter, accidental: Accidental, octave: i32) -> Self {
        let pitch = pitch_value(letter, accidental.magnitude(), octave);
        let respelled = enharmonic::respell(letter, &accidental, octave).map(Box::new);

        Self {
            letter,
            accidental,
            octave,
            pitch,
            respelled,
        }
    }

    /// Natural note at a position of the diatonic cycle (1 = C .. 7 = B)
    pub fn from_index(index: u8) -> Option<Self> {
        if !(1..=7).contains(&index) {
            return None;
        }
        let letter = Letter::from_index(index as i32 - 1);
        Some(Self::new(letter, Accidental::natural(), DEFAULT_OCTAVE))
    }

    /// Note for a pitch class in the default octave
    ///
    /// Uses the natural letter when one sits on the pitch class, otherwise the
    /// sharp of the natural below it (1 → C#, 6 → F#).
    pub fn from_semitones(semitones: i32) -> Self {
        let pitch_class = semitones.rem_euclid(12);
        match Letter::from_semitone(pitch_class) {
            Some(letter) => Self::new(letter, Accidental::natural(), DEFAULT_OCTAVE),
            None => {
                // Black keys always have a natural one semitone below
                let below = Letter::from_semitone(pitch_class - 1).unwrap_or(Letter::C);
                Self::new(below, Accidental::from_magnitude(1), DEFAULT_OCTAVE)
            }
        }
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn accidental(&self) -> &Accidental {
        &self.accidental
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// Absolute pitch (C4 = 60)
    pub fn pitch(&self) -> i32 {
        self.pitch
    }

    /// Pitch class 0-11 (C = 0)
    pub fn pitch_class(&self) -> i32 {
        self.pitch.rem_euclid(12)
    }

    /// Letter and accidental as written, without octave (`"C#"`)
    pub fn name(&self) -> String {
        format!("{}{}", self.letter, self.accidental)
    }

    /// Easier spelling of this pitch, if the current spelling is awkward
    pub fn respelled(&self) -> Option<&Note> {
        self.respelled.as_deref()
    }

    /// Same pitch and same spelling (letter, accidental and octave)
    pub fn is_same(&self, other: &Note) -> bool {
        self == other
            && self.letter == other.letter
            && self.accidental == other.accidental
            && self.octave == other.octave
    }

    pub fn add_interval(&self, interval: &Interval) -> Note {
        interval_step::step(self, interval, Direction::Up)
    }

    pub fn sub_interval(&self, interval: &Interval) -> Note {
        interval_step::step(self, interval, Direction::Down)
    }

    /// Ascending (quantity, semitones) from this note to `target`, ignoring accidentals
    pub fn calc_distance_to(&self, target: &Note) -> (u8, i32) {
        distance::calc_distance(self, target)
    }

    /// Interval between this note and `target`, up or down
    pub fn minus_note(&self, target: &Note) -> TheoryResult<Interval> {
        distance::interval_between(self, target)
    }
}

/// Enharmonic equality: notes are equal when they sound the same
impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.pitch == other.pitch
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pitch.hash(state);
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.letter, self.accidental, self.octave)
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add<Interval> for &Note {
    type Output = Note;

    fn add(self, interval: Interval) -> Note {
        self.add_interval(&interval)
    }
}

impl Add<Interval> for Note {
    type Output = Note;

    fn add(self, interval: Interval) -> Note {
        self.add_interval(&interval)
    }
}

impl Sub<Interval> for &Note {
    type Output = Note;

    fn sub(self, interval: Interval) -> Note {
        self.sub_interval(&interval)
    }
}

impl Sub<Interval> for Note {
    type Output = Note;

    fn sub(self, interval: Interval) -> Note {
        self.sub_interval(&interval)
    }
}

impl Sub<&Note> for &Note {
    type Output = TheoryResult<Interval>;

    fn sub(self, target: &Note) -> TheoryResult<Interval> {
        self.minus_note(target)
    }
}

impl Sub<Note> for Note {
    type Output = TheoryResult<Interval>;

    fn sub(self, target: Note) -> TheoryResult<Interval> {
        self.minus_note(&target)
    }
}
