//! Tonal Pitch WASM API
//!
//! This module provides the JavaScript-facing API for pitch arithmetic.
//!
//! # Module Structure
//!
//! - `helpers`: Serialization and error conversion shared by all exports
//! - `types`: Flat result records handed to JavaScript
//! - `theory`: The exported functions

pub mod helpers;
pub mod theory;
pub mod types;

pub use theory::*;
