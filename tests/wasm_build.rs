//! WASM build test
//!
//! This module tests that the WASM module can be built and the exported
//! functions work from JavaScript's side of the boundary.

#![cfg(target_arch = "wasm32")]

use tonal_wasm::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_add_and_subtract_interval() {
    assert_eq!(add_interval("B", "M2").unwrap(), "C#5");
    assert_eq!(subtract_interval("D4", "M3").unwrap(), "Bb3");
}

#[wasm_bindgen_test]
fn test_invalid_input_is_rejected() {
    let err = add_interval("H", "M2").unwrap_err();
    assert!(err.as_string().unwrap().contains("H"));
    assert!(invert_interval("P3").is_err());
}

#[wasm_bindgen_test]
fn test_invert_and_respell() {
    assert_eq!(invert_interval("M3").unwrap(), "m6");
    assert_eq!(respell_note("Cb4").unwrap().as_deref(), Some("B3"));
    assert_eq!(respell_note("C#4").unwrap(), None);
}

#[wasm_bindgen_test]
fn test_parse_note_returns_object() {
    let value = parse_note("F#2").unwrap();
    let pitch = js_sys::Reflect::get(&value, &JsValue::from_str("pitch")).unwrap();
    assert_eq!(pitch.as_f64(), Some(42.0));
}

#[wasm_bindgen_test]
fn test_key_notes() {
    let notes: Vec<String> = key_notes("f")
        .unwrap()
        .iter()
        .filter_map(|v| v.as_string())
        .collect();
    assert_eq!(notes, vec!["F", "G", "Ab", "Bb", "C", "Db", "Eb"]);
    assert!(key_signature("A").is_ok());
    assert!(interval_between("C", "G").is_ok());
}
