//! Tonal Pitch WASM Module
//!
//! Western tonal pitch arithmetic: note names, accidentals, intervals,
//! enharmonic respelling and key signatures, exposed to JavaScript through
//! `wasm_bindgen` and usable as a plain Rust library.

pub mod api;
pub mod errors;
pub mod models;
pub mod parse;
pub mod transposition;

// Re-export commonly used types
pub use errors::{TheoryError, TheoryResult};
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Ignored when the host page already installed a logger
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).ok();

    log::info!("Tonal pitch WASM module initialized");
}
