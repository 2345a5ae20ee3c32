//! Tone emitters: where play events end up.
//!
//! The crate does not synthesize audio. A [`ToneEmitter`] is the seam where a
//! platform tone primitive plugs in; the two provided here record events or
//! reproduce the timing of a blocking beep.

use std::thread;
use std::time::Duration;

use tracing::info;

use super::types::PlayEvent;

/// Lowest frequency (exclusive) a tone primitive will play.
pub const MIN_AUDIBLE_HZ: u32 = 37;
/// Highest frequency (exclusive) a tone primitive will play.
pub const MAX_AUDIBLE_HZ: u32 = 32767;

/// True when `37 < frequency < 32767`.
///
/// ```
/// use mml::playback::is_audible;
///
/// assert!(is_audible(440));
/// assert!(!is_audible(37));
/// assert!(!is_audible(32767));
/// ```
pub fn is_audible(frequency: u32) -> bool {
    MIN_AUDIBLE_HZ < frequency && frequency < MAX_AUDIBLE_HZ
}

/// Renders one tone at a time.
///
/// A tone primitive blocks for `duration_ms` when `frequency` is audible and
/// returns immediately otherwise. Recorders may skip the blocking.
pub trait ToneEmitter {
    fn play(&mut self, frequency: u32, duration_ms: u32);
}

/// Collects every event it is given. Never blocks.
#[derive(Debug, Default, Clone)]
pub struct EventRecorder {
    events: Vec<PlayEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events, including inaudible ones.
    pub fn events(&self) -> &[PlayEvent] {
        &self.events
    }

    /// Only the events a tone primitive would actually sound.
    pub fn audible(&self) -> impl Iterator<Item = &PlayEvent> {
        self.events.iter().filter(|e| is_audible(e.frequency))
    }

    /// Sum of the time a blocking emitter would spend on these events.
    pub fn total_blocking_ms(&self) -> u64 {
        self.audible().map(|e| e.duration as u64).sum()
    }

    pub fn into_events(self) -> Vec<PlayEvent> {
        self.events
    }
}

impl ToneEmitter for EventRecorder {
    fn play(&mut self, frequency: u32, duration_ms: u32) {
        self.events.push(PlayEvent {
            frequency,
            duration: duration_ms,
        });
    }
}

/// Logs each audible tone and sleeps for its duration.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimedEmitter;

impl ToneEmitter for TimedEmitter {
    fn play(&mut self, frequency: u32, duration_ms: u32) {
        if !is_audible(frequency) {
            return;
        }
        info!(frequency, duration_ms, "tone");
        thread::sleep(Duration::from_millis(duration_ms as u64));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_audible_range_is_exclusive() {
        assert!(!is_audible(0));
        assert!(!is_audible(37));
        assert!(is_audible(38));
        assert!(is_audible(32766));
        assert!(!is_audible(32767));
    }

    #[test]
    fn test_recorder_keeps_order_and_filters_audible() {
        let mut recorder = EventRecorder::new();
        recorder.play(28, 200);
        recorder.play(440, 500);
        recorder.play(262, 250);

        assert_eq!(recorder.events().len(), 3);
        assert_eq!(recorder.events()[0].frequency, 28);
        let audible: Vec<_> = recorder.audible().map(|e| e.frequency).collect();
        assert_eq!(audible, vec![440, 262]);
        assert_eq!(recorder.total_blocking_ms(), 750);
    }

    #[test]
    fn test_timed_emitter_skips_inaudible_without_delay() {
        let start = Instant::now();
        TimedEmitter.play(20, 5_000);
        assert!(start.elapsed() < Duration::from_millis(1_000));
    }

    #[test]
    fn test_timed_emitter_blocks_for_audible() {
        let start = Instant::now();
        TimedEmitter.play(440, 30);
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
