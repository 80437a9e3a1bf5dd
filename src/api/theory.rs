//! JavaScript-facing pitch arithmetic
//!
//! Every function takes text (note names such as `"F#3"`, interval names such
//! as `"m3"`, keys such as `"Bb"` or `"c#"`) and rejects invalid input with an
//! error string.

use wasm_bindgen::prelude::*;

use super::helpers::{serialize, theory_error};
use super::types::{IntervalInfo, NoteInfo};
use crate::models::{Interval, KeySignature, Note};

/// Parse a note and describe it
#[wasm_bindgen(js_name = parseNote)]
pub fn parse_note(name: &str) -> Result<JsValue, JsValue> {
    let note = Note::parse(name).map_err(theory_error)?;
    serialize(&NoteInfo::from(&note), "Failed to serialize note")
}

/// Note reached by adding an interval, e.g. `addInterval("B", "M2")` → `"C#5"`
#[wasm_bindgen(js_name = addInterval)]
pub fn add_interval(note: &str, interval: &str) -> Result<String, JsValue> {
    let note = Note::parse(note).map_err(theory_error)?;
    let interval = Interval::from_name(interval).map_err(theory_error)?;
    Ok((note + interval).to_string())
}

/// Note reached by subtracting an interval, e.g. `subtractInterval("D", "P5")` → `"G3"`
#[wasm_bindgen(js_name = subtractInterval)]
pub fn subtract_interval(note: &str, interval: &str) -> Result<String, JsValue> {
    let note = Note::parse(note).map_err(theory_error)?;
    let interval = Interval::from_name(interval).map_err(theory_error)?;
    Ok((note - interval).to_string())
}

/// Interval from `root` to `target`
#[wasm_bindgen(js_name = intervalBetween)]
pub fn interval_between(root: &str, target: &str) -> Result<JsValue, JsValue> {
    let root = Note::parse(root).map_err(theory_error)?;
    let target = Note::parse(target).map_err(theory_error)?;
    let interval = root.minus_note(&target).map_err(theory_error)?;
    serialize(&IntervalInfo::from(&interval), "Failed to serialize interval")
}

#[wasm_bindgen(js_name = invertInterval)]
pub fn invert_interval(name: &str) -> Result<String, JsValue> {
    let interval = Interval::from_name(name).map_err(theory_error)?;
    let inverted = interval.invert().map_err(theory_error)?;
    Ok(inverted.name())
}

/// Easier spelling of an awkward note (`"Cb4"` → `"B3"`), or `undefined`
#[wasm_bindgen(js_name = respellNote)]
pub fn respell_note(name: &str) -> Result<Option<String>, JsValue> {
    let note = Note::parse(name).map_err(theory_error)?;
    Ok(note.respelled().map(|n| n.to_string()))
}

/// Full key signature: notes, natural/altered split and related keys
#[wasm_bindgen(js_name = keySignature)]
pub fn key_signature(key: &str) -> Result<JsValue, JsValue> {
    let keysig = KeySignature::parse(key).map_err(theory_error)?;
    serialize(&keysig, "Failed to serialize key signature")
}

/// The seven note names of a key
#[wasm_bindgen(js_name = keyNotes)]
pub fn key_notes(key: &str) -> Result<js_sys::Array, JsValue> {
    let keysig = KeySignature::parse(key).map_err(theory_error)?;
    Ok(keysig
        .notes()
        .iter()
        .map(|name| JsValue::from_str(name))
        .collect())
}
