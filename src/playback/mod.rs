//! # Playback Module
//!
//! Turns MML source into an ordered stream of play events and hands them to a
//! tone emitter.
//!
//! ## Sub-modules
//! - `types` - PlayEvent and PerformanceState
//! - `engine` - The streaming interpreter
//! - `emitter` - ToneEmitter trait and the provided emitters
//!
//! ## Performance State
//!
//! Each run starts from [`PlayerConfig::initial_state`](crate::PlayerConfig::initial_state)
//! (octave 1, 200 ms by default) and threads it through every token:
//!
//! | Token | Effect |
//! |---|---|
//! | `C`..`B` | emits `{ frequency, duration + dots * round(duration / 2) }` |
//! | `O n` | octave = n, error unless 1 <= n <= 10 |
//! | `L n` | duration = round(rhythm * 2000 / n) |
//! | `T n` | rhythm = 2 / n, only with tempo coupling |
//! | others | parsed, no effect |
//!
//! A note's own length digits (`C8`) are parsed but do not change its duration;
//! only `L` does.
//!
//! ## Example
//! ```rust
//! use mml::playback::{EventRecorder, PlayEvent};
//! use mml::{play, PlayerConfig};
//!
//! let mut recorder = EventRecorder::new();
//! play("O5 L4 A", &PlayerConfig::default(), &mut recorder)?;
//!
//! assert_eq!(recorder.events(), &[PlayEvent { frequency: 440, duration: 500 }]);
//! # Ok::<(), mml::MmlError>(())
//! ```

mod emitter;
mod engine;
mod types;


pub use emitter::{is_audible, EventRecorder, TimedEmitter, ToneEmitter, MAX_AUDIBLE_HZ, MIN_AUDIBLE_HZ};
pub use engine::Interpreter;
pub use types::{PerformanceState, PlayEvent};
