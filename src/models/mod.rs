//! Models module for tonal pitch values
//!
//! This module contains the immutable value objects: accidentals, letters,
//! intervals, notes and key signatures.

pub mod accidental;
pub mod interval;
pub mod key_signature;
pub mod letter;
pub mod note;

// Re-export commonly used types
pub use accidental::{Accidental, AccidentalSign};
pub use interval::{Interval, Quality};
pub use key_signature::KeySignature;
pub use letter::Letter;
pub use note::{Note, DEFAULT_OCTAVE};
