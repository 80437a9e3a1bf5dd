/// Enharmonic respelling of awkward notes
///
/// A spelling is awkward when it names a white key by its neighbour
/// (Cb, Fb, B#, E#) or stacks two or more like accidentals (Abb, Gx, E#x).
/// Such notes get an easier spelling of the same pitch with at most one
/// accidental:
///
///   Cb → B (octave below), B#x → D (octave above), Fbb → Eb, G### → A#
///
/// The accidental is applied to the letter's semitone position. If a natural
/// letter sits there it is the answer; otherwise the position is moved one
/// semitone back toward the original letter and a single accidental of the
/// original sign covers the remaining semitone. The octave follows the
/// position across the C/B boundary.

use crate::models::accidental::{Accidental, AccidentalSign};
use crate::models::letter::Letter;
use crate::models::note::Note;

/// Whether a spelling should be offered an easier equivalent
pub fn is_awkward(letter: Letter, accidental: &Accidental) -> bool {
    match accidental.sign() {
        None => false,
        Some(_) if accidental.magnitude().abs() >= 2 => true,
        Some(AccidentalSign::Flat) => matches!(letter, Letter::C | Letter::F),
        Some(AccidentalSign::Sharp) => matches!(letter, Letter::B | Letter::E),
    }
}

/// Easier spelling of `letter` + `accidental` in `octave`, if it is awkward
pub fn respell(letter: Letter, accidental: &Accidental, octave: i32) -> Option<Note> {
    if !is_awkward(letter, accidental) {
        return None;
    }

    let magnitude = accidental.magnitude();
    let position = letter.natural_semitone() + magnitude;

    let respelled = match Letter::from_semitone(position) {
        Some(natural) => Note::new(natural, Accidental::natural(), octave + position.div_euclid(12)),
        None => {
            let sign = magnitude.signum();
            let stepped = position - sign;
            // Two adjacent pitch classes are never both black keys
            let natural = Letter::from_semitone(stepped)?;
            Note::new(natural, Accidental::from_magnitude(sign), octave + stepped.div_euclid(12))
        }
    };

    log::debug!(
        "respelled {}{}{} as {}",
        letter,
        accidental,
        octave,
        respelled
    );

    Some(respelled)
}
