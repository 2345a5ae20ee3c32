//! Pitch vocabulary: note letters, accidentals and the validated octave.

use std::fmt;

use crate::error::MmlError;

/// One equal-tempered semitone: the twelfth root of two, to seven decimals.
pub const SEMITONE_RATIO: f64 = 1.0594631;

/// Natural note name A-G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchLetter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl PitchLetter {
    /// Letters in table order, C first.
    pub const ALL: [PitchLetter; 7] = [
        PitchLetter::C,
        PitchLetter::D,
        PitchLetter::E,
        PitchLetter::F,
        PitchLetter::G,
        PitchLetter::A,
        PitchLetter::B,
    ];

    /// Uppercase letters only; lowercase `b` is a flat sign, not a note.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(PitchLetter::C),
            'D' => Some(PitchLetter::D),
            'E' => Some(PitchLetter::E),
            'F' => Some(PitchLetter::F),
            'G' => Some(PitchLetter::G),
            'A' => Some(PitchLetter::A),
            'B' => Some(PitchLetter::B),
            _ => None,
        }
    }

    /// Row index into the frequency table.
    pub fn index(self) -> usize {
        match self {
            PitchLetter::C => 0,
            PitchLetter::D => 1,
            PitchLetter::E => 2,
            PitchLetter::F => 3,
            PitchLetter::G => 4,
            PitchLetter::A => 5,
            PitchLetter::B => 6,
        }
    }
}

impl fmt::Display for PitchLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PitchLetter::C => "C",
            PitchLetter::D => "D",
            PitchLetter::E => "E",
            PitchLetter::F => "F",
            PitchLetter::G => "G",
            PitchLetter::A => "A",
            PitchLetter::B => "B",
        };
        f.pad(name)
    }
}

/// Semitone modifier applied to a pitch letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accidental {
    Sharp,
    Flat,
    #[default]
    Natural,
}

impl Accidental {
    /// `#`/`+` raise, `b`/`-` lower.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' | '+' => Some(Accidental::Sharp),
            'b' | '-' => Some(Accidental::Flat),
            _ => None,
        }
    }

    /// Frequency multiplier for this accidental.
    pub fn multiplier(self) -> f64 {
        match self {
            Accidental::Sharp => SEMITONE_RATIO,
            Accidental::Flat => 1.0 / SEMITONE_RATIO,
            Accidental::Natural => 1.0,
        }
    }
}

/// Octave number, always within 1..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Octave(u8);

impl Octave {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 10;

    /// Validate an octave number. Out-of-range values are rejected, never clamped.
    ///
    /// ```
    /// use mml::{MmlError, Octave};
    ///
    /// assert_eq!(Octave::new(4).unwrap().get(), 4);
    /// assert_eq!(Octave::new(0), Err(MmlError::InvalidOctave(0)));
    /// ```
    pub fn new(value: u32) -> Result<Self, MmlError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Octave(value as u8))
        } else {
            Err(MmlError::InvalidOctave(value))
        }
    }

    pub fn get(self) -> u32 {
        self.0 as u32
    }

    /// All octaves, lowest first.
    pub fn all() -> impl Iterator<Item = Octave> {
        (Self::MIN..=Self::MAX).map(|o| Octave(o as u8))
    }
}
