//! Shared types for the WASM API
//!
//! Flat, JavaScript-friendly views of the tonal value objects.

use crate::models::{Interval, Note};

/// A parsed note as seen from JavaScript
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct NoteInfo {
    pub name: String,
    pub letter: String,
    pub accidental: String,
    pub octave: i32,
    pub pitch: i32,
    /// Easier spelling with octave (`"B3"` for `Cb4`), if the note has one
    pub respelled: Option<String>,
}

impl From<&Note> for NoteInfo {
    fn from(note: &Note) -> Self {
        Self {
            name: note.name(),
            letter: note.letter().to_string(),
            accidental: note.accidental().raw().to_string(),
            octave: note.octave(),
            pitch: note.pitch(),
            respelled: note.respelled().map(|n| n.to_string()),
        }
    }
}

/// An interval as seen from JavaScript
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct IntervalInfo {
    pub name: String,
    pub label: String,
    pub quantity: u8,
    pub semitones: i32,
}

impl From<&Interval> for IntervalInfo {
    fn from(interval: &Interval) -> Self {
        Self {
            name: interval.name(),
            label: interval.label().to_string(),
            quantity: interval.quantity(),
            semitones: interval.semitones(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_info() {
        let info = NoteInfo::from(&Note::parse("Cb4").unwrap());
        assert_eq!(info.name, "Cb");
        assert_eq!(info.letter, "C");
        assert_eq!(info.accidental, "b");
        assert_eq!(info.pitch, 59);
        assert_eq!(info.respelled.as_deref(), Some("B3"));
    }

    #[test]
    fn test_interval_info_json() {
        let info = IntervalInfo::from(&Interval::from_name("A6").unwrap());
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["label"], "Augmented 6th");
        assert_eq!(json["semitones"], 10);
    }
}
