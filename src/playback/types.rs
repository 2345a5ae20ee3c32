//! Playback type definitions
//!
//! The per-run performance state and the events a run produces.

use serde::Serialize;

use crate::pitch::Octave;
use crate::rhythm::Rhythm;

/// One tone to render, in emission order.
///
/// # Fields
/// - `frequency`: pitch in Hz; values outside the audible range are silent
/// - `duration`: length in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayEvent {
    pub frequency: u32,
    pub duration: u32,
}

/// Mutable settings threaded through one interpretation run.
///
/// The state is `Copy` and passed by value into each step; a failed step leaves
/// the previous state untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceState {
    pub octave: Octave,
    /// Note duration in effect, set by `L`
    pub duration_ms: u32,
    /// Scalar used by the next `L`; only `T` changes it, and only with tempo coupling
    pub rhythm: Rhythm,
}
