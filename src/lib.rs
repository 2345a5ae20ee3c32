pub mod api;
pub mod config;
pub mod error;
pub mod frequency;
pub mod lexer;
pub mod pitch;
pub mod playback;
pub mod rhythm;

pub use api::{interpret, interpret_with_config, play, tokenize};
pub use config::PlayerConfig;
pub use error::*;
pub use frequency::FrequencyTable;
pub use lexer::{Lexer, LocatedToken, ShiftDirection, SkippedChar, TokenKind};
pub use pitch::{Accidental, Octave, PitchLetter};
pub use playback::{Interpreter, PerformanceState, PlayEvent, ToneEmitter};
pub use rhythm::{dotted_duration, Rhythm, DURATION_BASE_MS};
