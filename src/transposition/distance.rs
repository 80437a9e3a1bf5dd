/// Measuring the interval between two notes
///
/// The letter distance fixes the quantity; the natural semitone distance of
/// the two letters is then corrected by each note's accidental. Descending
/// intervals are measured upward first and folded with the octave complement
/// (quantity → 9 - quantity, semitones → 12 - semitones).

use crate::errors::TheoryResult;
use crate::models::accidental::AccidentalSign;
use crate::models::interval::Interval;
use crate::models::note::Note;

/// Upward (quantity, semitones) from `root`'s letter to `target`'s letter
///
/// Accidentals are ignored. A target letter at or below the root letter is
/// read in the next octave up, except for the same letter in the same octave,
/// which is a unison.
pub fn calc_distance(root: &Note, target: &Note) -> (u8, i32) {
    let root_index = root.letter().index() as i32;
    let target_index = target.letter().index() as i32;
    let root_semitone = root.letter().natural_semitone();
    let target_semitone = target.letter().natural_semitone();

    if root_index == target_index && root.octave() == target.octave() {
        (1, 0)
    } else if target_index > root_index {
        (
            (target_index - root_index + 1) as u8,
            target_semitone - root_semitone,
        )
    } else {
        (
            (7 - root_index + target_index + 1) as u8,
            12 - root_semitone + target_semitone,
        )
    }
}

/// Interval from `root` to `target`, ascending or descending
pub fn interval_between(root: &Note, target: &Note) -> TheoryResult<Interval> {
    let descending = if root.octave() == target.octave() {
        root.pitch() > target.pitch()
    } else {
        root.octave() > target.octave()
    };

    let (mut quantity, mut semitones) = calc_distance(root, target);

    if descending {
        // An exact octave below is already measured as P8
        if root.pitch() != target.pitch() + 12 {
            quantity = 9 - quantity;
            semitones = 12 - semitones;
        }
        semitones += root.accidental().contribution_toward(AccidentalSign::Sharp);
        semitones += target.accidental().contribution_toward(AccidentalSign::Flat);
    } else {
        semitones += root.accidental().contribution_toward(AccidentalSign::Flat);
        semitones += target.accidental().contribution_toward(AccidentalSign::Sharp);
    }

    log::trace!(
        "{} -> {}: {} quantity {} semitones {}",
        root,
        target,
        if descending { "descending" } else { "ascending" },
        quantity,
        semitones
    );

    Interval::from_quantity_and_semitones(quantity, semitones)
}
