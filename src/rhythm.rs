//! Duration model: length denominators and rhythm scalar to milliseconds.

use crate::error::MmlError;

/// Milliseconds of a whole note (`L1`) at rhythm scalar 1.
pub const DURATION_BASE_MS: f64 = 2000.0;

/// Multiplier applied to every computed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rhythm {
    scalar: f64,
}

impl Rhythm {
    /// Rhythm derived from a tempo value: `2.0 / tempo`.
    ///
    /// ```
    /// use mml::Rhythm;
    ///
    /// let rhythm = Rhythm::from_tempo(120)?;
    /// assert_eq!(rhythm.duration_in_rhythm(4)?, 8);
    /// # Ok::<(), mml::MmlError>(())
    /// ```
    pub fn from_tempo(tempo: u32) -> Result<Self, MmlError> {
        if tempo == 0 {
            return Err(MmlError::InvalidTempo(tempo));
        }
        Ok(Self {
            scalar: 2.0 / tempo as f64,
        })
    }

    pub fn scalar(&self) -> f64 {
        self.scalar
    }

    /// Duration in ms of a note of length `1/denominator`.
    pub fn duration_in_rhythm(&self, denominator: u32) -> Result<u32, MmlError> {
        if denominator == 0 {
            return Err(MmlError::InvalidLength(denominator));
        }
        Ok((self.scalar * (DURATION_BASE_MS / denominator as f64)).round_ties_even() as u32)
    }
}

impl Default for Rhythm {
    fn default() -> Self {
        Self { scalar: 1.0 }
    }
}

/// Each dot adds half of `current_ms` (rounded half to even); dots do not compound.
///
/// Saturates at `u32::MAX` instead of overflowing on long dot runs.
pub fn dotted_duration(current_ms: u32, dots: u32) -> u32 {
    let bonus = (current_ms as f64 / 2.0).round_ties_even() as u32;
    current_ms.saturating_add(dots.saturating_mul(bonus))
}
