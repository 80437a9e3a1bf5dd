/// Adding and subtracting intervals
///
/// 1. Walk `quantity - 1` letters around C D E F G A B, crossing into the next
///    octave past B (up) or the previous one past C (down).
/// 2. Measure the semitones between the root and that letter left unaltered.
/// 3. Put the missing semitones on the new letter as sharps or flats.
///
/// Example: Eb + d4 lands on A (three letters up). Eb4→A4 is 6 semitones but a
/// diminished 4th spans 4, so two flats are needed: Abb.

use super::Direction;
use crate::models::accidental::Accidental;
use crate::models::interval::Interval;
use crate::models::note::{pitch_value, Note};
use crate::models::letter::Letter;

/// Move `root` by `interval` in `direction`
pub fn step(root: &Note, interval: &Interval, direction: Direction) -> Note {
    let steps = interval.quantity() as i32 - 1;
    let raw_index = root.letter().index() as i32 + direction.unit() * steps;

    // At most one wrap: steps never exceed 7
    let letter = Letter::from_index(raw_index);
    let octave = root.octave() + raw_index.div_euclid(7);

    let unaltered_delta = pitch_value(letter, 0, octave) - root.pitch();
    let needed = match direction {
        Direction::Up => interval.semitones() - unaltered_delta,
        Direction::Down => -unaltered_delta - interval.semitones(),
    };

    log::trace!(
        "{} {:?} {} -> {}{} (accidental {:+})",
        root,
        direction,
        interval,
        letter,
        octave,
        needed
    );

    Note::new(letter, Accidental::from_magnitude(needed), octave)
}
