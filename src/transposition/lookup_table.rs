/// Major scale lookup table
///
/// The 15 major keys of the circle of fifths (C, up to seven sharps, up to
/// seven flats) mapped to their seven notes, tonic first.
///
/// Example:
///   "A"  → [A, B, C#, D, E, F#, G#]
///   "Gb" → [Gb, Ab, Bb, Cb, Db, Eb, F]

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref MAJOR_SCALES: HashMap<&'static str, [&'static str; 7]> = build_lookup_table();
}

/// Canonical major key names in circle-of-fifths order, sharps first
pub const CIRCLE_OF_FIFTHS: [&str; 15] = [
    "C", "G", "D", "A", "E", "B", "F#", "C#", "F", "Bb", "Eb", "Ab", "Db", "Gb", "Cb",
];

/// Notes of a major key, if it is one of the 15 canonical keys
pub fn major_scale(key: &str) -> Option<&'static [&'static str; 7]> {
    MAJOR_SCALES.get(key)
}

fn build_lookup_table() -> HashMap<&'static str, [&'static str; 7]> {
    let mut table = HashMap::new();

    // Naturals
    table.insert("C", ["C", "D", "E", "F", "G", "A", "B"]);

    // Sharps
    table.insert("G", ["G", "A", "B", "C", "D", "E", "F#"]);
    table.insert("D", ["D", "E", "F#", "G", "A", "B", "C#"]);
    table.insert("A", ["A", "B", "C#", "D", "E", "F#", "G#"]);
    table.insert("E", ["E", "F#", "G#", "A", "B", "C#", "D#"]);
    table.insert("B", ["B", "C#", "D#", "E", "F#", "G#", "A#"]);
    table.insert("F#", ["F#", "G#", "A#", "B", "C#", "D#", "E#"]);
    table.insert("C#", ["C#", "D#", "E#", "F#", "G#", "A#", "B#"]);

    // Flats
    table.insert("F", ["F", "G", "A", "Bb", "C", "D", "E"]);
    table.insert("Bb", ["Bb", "C", "D", "Eb", "F", "G", "A"]);
    table.insert("Eb", ["Eb", "F", "G", "Ab", "Bb", "C", "D"]);
    table.insert("Ab", ["Ab", "Bb", "C", "Db", "Eb", "F", "G"]);
    table.insert("Db", ["Db", "Eb", "F", "Gb", "Ab", "Bb", "C"]);
    table.insert("Gb", ["Gb", "Ab", "Bb", "Cb", "Db", "Eb", "F"]);
    table.insert("Cb", ["Cb", "Db", "Eb", "Fb", "Gb", "Ab", "Bb"]);

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_15_keys_present() {
        assert_eq!(MAJOR_SCALES.len(), 15);
        for key in CIRCLE_OF_FIFTHS {
            let scale = major_scale(key).unwrap();
            assert_eq!(scale[0], key);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(
            major_scale("A").unwrap(),
            &["A", "B", "C#", "D", "E", "F#", "G#"]
        );
        assert!(major_scale("G#").is_none());
        assert!(major_scale("a").is_none());
    }

    #[test]
    fn test_each_scale_uses_every_letter_once() {
        for key in CIRCLE_OF_FIFTHS {
            let mut letters: Vec<char> = major_scale(key)
                .unwrap()
                .iter()
                .filter_map(|note| note.chars().next())
                .collect();
            letters.sort_unstable();
            assert_eq!(letters, vec!['A', 'B', 'C', 'D', 'E', 'F', 'G'], "{}", key);
        }
    }

    #[test]
    fn test_key_signature_accidentals_are_uniform() {
        // A key uses sharps or flats, never both
        for key in CIRCLE_OF_FIFTHS {
            let scale = major_scale(key).unwrap();
            let sharps = scale.iter().any(|n| n.contains('#'));
            let flats = scale.iter().any(|n| n.contains('b'));
            assert!(!(sharps && flats), "{}", key);
        }
    }
}
