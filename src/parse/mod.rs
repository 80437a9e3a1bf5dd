//! Parsing module for tonal values
//!
//! This module contains the grammar checks that turn note, accidental,
//! key and interval text into validated parts.

pub mod grammar;

// Re-export commonly used types
pub use grammar::*;
