//! Pitch arithmetic
//!
//! Moving a note by an interval keeps two coordinate systems in step: letter
//! steps around the 7-letter cycle and semitones around the 12-tone cycle.
//! The letter always comes from the interval's quantity; the accidental makes
//! up whatever semitone difference remains.

pub mod distance;
pub mod enharmonic;
pub mod interval_step;
pub mod lookup_table;

pub use distance::{calc_distance, interval_between};
pub use enharmonic::respell;
pub use interval_step::step;
pub use lookup_table::major_scale;

/// Direction of an interval step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// +1 for up, -1 for down
    pub fn unit(&self) -> i32 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}
