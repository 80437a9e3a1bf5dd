//! Interval model and the static interval catalog
//!
//! An interval is a (quality, quantity) pair. Only 28 pairs exist; each maps to a
//! fixed number of semitones through the catalog below, never through arithmetic
//! on the quality and quantity.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::{TheoryError, TheoryResult};
use crate::parse::grammar::scan_interval_name;

/// Descriptive size category of an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "P")]
    Perfect,
    #[serde(rename = "M")]
    Major,
    #[serde(rename = "m")]
    Minor,
    #[serde(rename = "A")]
    Augmented,
    #[serde(rename = "d")]
    Diminished,
}

impl Quality {
    pub fn symbol(&self) -> char {
        match self {
            Quality::Perfect => 'P',
            Quality::Major => 'M',
            Quality::Minor => 'm',
            Quality::Augmented => 'A',
            Quality::Diminished => 'd',
        }
    }

    pub fn from_symbol(symbol: char) -> TheoryResult<Quality> {
        match symbol {
            'P' => Ok(Quality::Perfect),
            'M' => Ok(Quality::Major),
            'm' => Ok(Quality::Minor),
            'A' => Ok(Quality::Augmented),
            'd' => Ok(Quality::Diminished),
            other => Err(TheoryError::InvalidQuality(other.to_string())),
        }
    }

    /// Quality of the inverted interval (Perfect stays Perfect)
    pub fn inverted(&self) -> Quality {
        match self {
            Quality::Perfect => Quality::Perfect,
            Quality::Major => Quality::Minor,
            Quality::Minor => Quality::Major,
            Quality::Augmented => Quality::Diminished,
            Quality::Diminished => Quality::Augmented,
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Quality {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Quality::from_symbol(symbol),
            _ => Err(TheoryError::InvalidQuality(s.to_string())),
        }
    }
}

/// One row of the interval catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub quality: Quality,
    pub quantity: u8,
    pub label: &'static str,
    pub semitones: i32,
}

const fn entry(quality: Quality, quantity: u8, label: &'static str, semitones: i32) -> CatalogEntry {
    CatalogEntry {
        quality,
        quantity,
        label,
        semitones,
    }
}

/// All valid intervals, ordered by semitone distance
pub static INTERVAL_CATALOG: [CatalogEntry; 28] = [
    entry(Quality::Diminished, 1, "Diminished Unison", -1),
    entry(Quality::Perfect, 1, "Perfect Unison", 0),
    entry(Quality::Diminished, 2, "Diminished 2nd", 0),
    entry(Quality::Minor, 2, "Minor 2nd", 1),
    entry(Quality::Augmented, 1, "Augmented Unison", 1),
    entry(Quality::Major, 2, "Major 2nd", 2),
    entry(Quality::Diminished, 3, "Diminished 3rd", 2),
    entry(Quality::Minor, 3, "Minor 3rd", 3),
    entry(Quality::Augmented, 2, "Augmented 2nd", 3),
    entry(Quality::Major, 3, "Major 3rd", 4),
    entry(Quality::Diminished, 4, "Diminished 4th", 4),
    entry(Quality::Perfect, 4, "Perfect 4th", 5),
    entry(Quality::Augmented, 3, "Augmented 3rd", 5),
    entry(Quality::Diminished, 5, "Diminished 5th", 6),
    entry(Quality::Augmented, 4, "Augmented 4th", 6),
    entry(Quality::Perfect, 5, "Perfect 5th", 7),
    entry(Quality::Diminished, 6, "Diminished 6th", 7),
    entry(Quality::Minor, 6, "Minor 6th", 8),
    entry(Quality::Augmented, 5, "Augmented 5th", 8),
    entry(Quality::Major, 6, "Major 6th", 9),
    entry(Quality::Diminished, 7, "Diminished 7th", 9),
    entry(Quality::Minor, 7, "Minor 7th", 10),
    entry(Quality::Augmented, 6, "Augmented 6th", 10),
    entry(Quality::Major, 7, "Major 7th", 11),
    entry(Quality::Diminished, 8, "Diminished Octave", 11),
    entry(Quality::Augmented, 7, "Augmented 7th", 12),
    entry(Quality::Perfect, 8, "Perfect Octave", 12),
    entry(Quality::Augmented, 8, "Augmented Octave", 13),
];

/// Catalog indexed by (quality, quantity)
static CATALOG_INDEX: Lazy<HashMap<(Quality, u8), CatalogEntry>> = Lazy::new(|| {
    INTERVAL_CATALOG
        .iter()
        .map(|entry| ((entry.quality, entry.quantity), *entry))
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IntervalFields")]
pub struct Interval {
    quality: Quality,
    /// Diatonic step count, 1 (unison) to 8 (octave)
    quantity: u8,
    semitones: i32,
}

impl Interval {
    /// Look up an interval by quality and quantity
    pub fn new(quality: Quality, quantity: u8) -> TheoryResult<Self> {
        if !(1..=8).contains(&quantity) {
            return Err(TheoryError::InvalidQuantity(quantity.to_string()));
        }

        let entry = CATALOG_INDEX
            .get(&(quality, quantity))
            .ok_or(TheoryError::InvalidIntervalCombination { quality, quantity })?;

        Ok(Self::from_entry(entry))
    }

    /// Parse a quality symbol and quantity, e.g. `("M", 3)`
    pub fn from_parts(quality: &str, quantity: u8) -> TheoryResult<Self> {
        Self::new(quality.parse()?, quantity)
    }

    /// Parse a canonical name such as `"P5"` or `"m3"`
    pub fn from_name(name: &str) -> TheoryResult<Self> {
        let (quality, quantity) = scan_interval_name(name)?;
        Self::new(quality, quantity)
    }

    /// Reverse lookup by quantity and semitone distance
    ///
    /// Every (quantity, semitones) pair in the catalog is unique, so at most one
    /// entry can match.
    pub fn from_quantity_and_semitones(quantity: u8, semitones: i32) -> TheoryResult<Self> {
        INTERVAL_CATALOG
            .iter()
            .find(|entry| entry.quantity == quantity && entry.semitones == semitones)
            .map(Self::from_entry)
            .ok_or(TheoryError::NoMatchingInterval { quantity, semitones })
    }

    /// Complementary interval that completes this one to an octave
    ///
    /// Examples:
    ///   M3 → m6, A4 → d5, P1 → P8, d8 → A1
    pub fn invert(&self) -> TheoryResult<Self> {
        Self::new(self.quality.inverted(), 9_u8.saturating_sub(self.quantity))
    }

    /// Every valid interval, in catalog order
    pub fn catalog() -> impl Iterator<Item = Interval> {
        INTERVAL_CATALOG.iter().map(Self::from_entry)
    }

    fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            quality: entry.quality,
            quantity: entry.quantity,
            semitones: entry.semitones,
        }
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn quantity(&self) -> u8 {
        self.quantity
    }

    pub fn semitones(&self) -> i32 {
        self.semitones
    }

    /// Canonical name: quality symbol followed by quantity (`"M3"`)
    pub fn name(&self) -> String {
        format!("{}{}", self.quality.symbol(), self.quantity)
    }

    /// Human readable label (`"Major 3rd"`)
    pub fn label(&self) -> &'static str {
        CATALOG_INDEX
            .get(&(self.quality, self.quantity))
            .map(|entry| entry.label)
            .unwrap_or("")
    }
}

/// Unchecked wire form of an interval; deserialization goes through the catalog
#[derive(Deserialize)]
struct IntervalFields {
    quality: Quality,
    quantity: u8,
    semitones: i32,
}

impl TryFrom<IntervalFields> for Interval {
    type Error = TheoryError;

    fn try_from(fields: IntervalFields) -> Result<Self, Self::Error> {
        let interval = Interval::new(fields.quality, fields.quantity)?;
        if interval.semitones != fields.semitones {
            return Err(TheoryError::NoMatchingInterval {
                quantity: fields.quantity,
                semitones: fields.semitones,
            });
        }
        Ok(interval)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quality.symbol(), self.quantity)
    }
}

impl FromStr for Interval {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
