//! # Player Configuration
//!
//! Settings that shape a single interpretation run. Every field has a default,
//! so an empty YAML document is a valid configuration.
//!
//! ```yaml
//! initial-octave: 4
//! initial-duration-ms: 250
//! tempo-coupling: true
//! ```
//!
//! `tempo-coupling` makes `T` tokens set the rhythm scalar (`2 / tempo`) that
//! later `L` tokens use. It is off by default, in which case tempo is parsed and
//! ignored.
//!
//! `initial-duration-ms` must lie in `1..=60000`.

use serde::{Deserialize, Serialize};

use crate::error::MmlError;
use crate::pitch::Octave;
use crate::playback::PerformanceState;
use crate::rhythm::Rhythm;

/// Note duration in effect before any `L` token.
pub const DEFAULT_DURATION_MS: u32 = 200;

/// Longest accepted `initial-duration-ms`, one minute.
pub const MAX_INITIAL_DURATION_MS: u32 = 60_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PlayerConfig {
    pub initial_octave: u32,
    pub initial_duration_ms: u32,
    pub tempo_coupling: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            initial_octave: Octave::MIN,
            initial_duration_ms: DEFAULT_DURATION_MS,
            tempo_coupling: false,
        }
    }
}

impl PlayerConfig {
    /// Parse and validate a YAML configuration.
    ///
    /// ```
    /// use mml::PlayerConfig;
    ///
    /// let config = PlayerConfig::from_yaml("initial-octave: 4")?;
    /// assert_eq!(config.initial_octave, 4);
    /// assert_eq!(config.initial_duration_ms, 200);
    /// # Ok::<(), mml::MmlError>(())
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, MmlError> {
        // serde_yaml rejects an empty document; treat it as all defaults
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: PlayerConfig =
            serde_yaml::from_str(content).map_err(|e| MmlError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MmlError> {
        Octave::new(self.initial_octave).map_err(|_| {
            MmlError::ConfigError(format!(
                "initial-octave must be between {} and {}, got {}",
                Octave::MIN,
                Octave::MAX,
                self.initial_octave
            ))
        })?;
        if !(1..=MAX_INITIAL_DURATION_MS).contains(&self.initial_duration_ms) {
            return Err(MmlError::ConfigError(format!(
                "initial-duration-ms must be between 1 and {}, got {}",
                MAX_INITIAL_DURATION_MS, self.initial_duration_ms
            )));
        }
        Ok(())
    }

    /// Fresh state for one run. Validates first, so a hand-built config fails
    /// with the same `ConfigError` as a loaded one.
    pub fn initial_state(&self) -> Result<PerformanceState, MmlError> {
        self.validate()?;
        Ok(PerformanceState {
            octave: Octave::new(self.initial_octave)?,
            duration_ms: self.initial_duration_ms,
            rhythm: Rhythm::default(),
        })
    }
}
