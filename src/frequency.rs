//! # Frequency Table
//!
//! Equal-tempered base frequencies for ten octaves of the seven natural notes.
//!
//! Octave 1 is seeded with C=16.35 Hz through B=30.87 Hz; every higher octave
//! doubles it (`base * 2^(octave - 1)`), rounded to two decimals when the table
//! is built. Lookups never recompute anything, so the table can be shared
//! read-only between any number of runs.
//!
//! ## Example
//! ```rust
//! use mml::{Accidental, FrequencyTable, Octave, PitchLetter};
//!
//! let table = FrequencyTable::new();
//! let octave = Octave::new(4)?;
//! assert_eq!(table.compute_frequency(octave, PitchLetter::C, Accidental::Sharp), 139);
//! # Ok::<(), mml::MmlError>(())
//! ```

use std::sync::OnceLock;

use crate::pitch::{Accidental, Octave, PitchLetter};

/// Octave 1 frequencies in Hz, C through B.
const OCTAVE_ONE: [f64; 7] = [16.35, 18.35, 20.60, 21.83, 24.50, 27.50, 30.87];

const OCTAVES: usize = Octave::MAX as usize;

fn round_to_cents(hz: f64) -> f64 {
    (hz * 100.0).round_ties_even() / 100.0
}

/// Immutable (octave, letter) -> Hz mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    rows: [[f64; 7]; OCTAVES],
}

impl FrequencyTable {
    /// Build the table for all ten octaves.
    pub fn new() -> Self {
        let mut rows = [[0.0; 7]; OCTAVES];
        for (i, row) in rows.iter_mut().enumerate() {
            let factor = f64::powi(2.0, i as i32);
            for (cell, base) in row.iter_mut().zip(OCTAVE_ONE) {
                *cell = round_to_cents(base * factor);
            }
        }
        Self { rows }
    }

    /// Process-wide table, built on first use.
    pub fn shared() -> &'static FrequencyTable {
        static TABLE: OnceLock<FrequencyTable> = OnceLock::new();
        TABLE.get_or_init(FrequencyTable::new)
    }

    /// Natural frequency of `letter` in `octave`, as stored.
    pub fn base(&self, octave: Octave, letter: PitchLetter) -> f64 {
        self.rows[octave.get() as usize - 1][letter.index()]
    }

    /// Integer frequency of a note after applying its accidental.
    ///
    /// Rounds half to even, so A in octave 1 (27.5 Hz) plays at 28 Hz.
    pub fn compute_frequency(
        &self,
        octave: Octave,
        letter: PitchLetter,
        accidental: Accidental,
    ) -> u32 {
        (self.base(octave, letter) * accidental.multiplier()).round_ties_even() as u32
    }

    /// Every stored entry, lowest octave first.
    pub fn rows(&self) -> impl Iterator<Item = (Octave, PitchLetter, f64)> + '_ {
        Octave::all().flat_map(move |octave| {
            PitchLetter::ALL
                .into_iter()
                .map(move |letter| (octave, letter, self.base(octave, letter)))
        })
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn octave(n: u32) -> Octave {
        Octave::new(n).unwrap()
    }

    #[test]
    fn test_octave_one_matches_seed() {
        let table = FrequencyTable::new();
        assert_approx_eq!(table.base(octave(1), PitchLetter::C), 16.35);
        assert_approx_eq!(table.base(octave(1), PitchLetter::E), 20.60);
        assert_approx_eq!(table.base(octave(1), PitchLetter::B), 30.87);
    }

    #[test]
    fn test_each_octave_doubles_the_previous() {
        let table = FrequencyTable::new();
        for o in 2..=10 {
            for letter in PitchLetter::ALL {
                let lower = table.base(octave(o - 1), letter);
                let upper = table.base(octave(o), letter);
                assert_eq!(upper, 2.0 * lower, "octave {} letter {}", o, letter);
            }
        }
    }

    #[test]
    fn test_top_octave_values() {
        let table = FrequencyTable::new();
        assert_approx_eq!(table.base(octave(10), PitchLetter::C), 8371.2);
        assert_approx_eq!(table.base(octave(10), PitchLetter::A), 14080.0);
    }

    #[test]
    fn test_a1_rounds_to_even() {
        let table = FrequencyTable::new();
        assert_eq!(
            table.compute_frequency(octave(1), PitchLetter::A, Accidental::Natural),
            28
        );
    }

    #[test]
    fn test_c4_sharp() {
        let table = FrequencyTable::new();
        assert_eq!(
            table.compute_frequency(octave(4), PitchLetter::C, Accidental::Sharp),
            139
        );
    }

    #[test]
    fn test_flat_lowers_a_semitone() {
        let table = FrequencyTable::new();
        // A5 = 440 Hz; 440 / 1.0594631 = 415.30
        assert_eq!(
            table.compute_frequency(octave(5), PitchLetter::A, Accidental::Natural),
            440
        );
        assert_eq!(
            table.compute_frequency(octave(5), PitchLetter::A, Accidental::Flat),
            415
        );
    }

    #[test]
    fn test_rows_cover_whole_table() {
        let table = FrequencyTable::new();
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows.len(), 70);
        assert_eq!(rows[0].0, octave(1));
        assert_eq!(rows[0].1, PitchLetter::C);
        assert_eq!(rows[69].1, PitchLetter::B);
    }
}
