//! # Public API
//!
//! Entry points for the MML interpreter library.
//!
//! - [`tokenize()`] - Scan source into tokens
//! - [`interpret()`] - Collect the play events of a tune with the default configuration
//! - [`interpret_with_config()`] - Same, with a custom [`PlayerConfig`]
//! - [`play()`] - Stream events into a [`ToneEmitter`] one at a time
//!
//! ## Typical Usage
//!
//! ```rust
//! use mml::interpret;
//!
//! let events = interpret("t90;L16;O5;D;D;R16;C")?;
//! assert_eq!(events.len(), 3);
//! assert_eq!(events[0].duration, 125);
//! # Ok::<(), mml::MmlError>(())
//! ```

use crate::config::PlayerConfig;
use crate::error::MmlError;
use crate::frequency::FrequencyTable;
use crate::lexer::{Lexer, LocatedToken};
use crate::playback::{Interpreter, PlayEvent, ToneEmitter};

/// Scan `source` into tokens.
///
/// Unrecognized characters are skipped (and logged); only `O`/`Y` without digits
/// or oversized numbers fail.
///
/// # Example
/// ```rust
/// use mml::{tokenize, TokenKind};
///
/// let tokens = tokenize("O5")?;
/// assert_eq!(tokens[0].kind, TokenKind::Octave(5));
/// # Ok::<(), mml::MmlError>(())
/// ```
pub fn tokenize(source: &str) -> Result<Vec<LocatedToken>, MmlError> {
    Lexer::new(source).tokenize()
}

/// Interpret `source` with the default configuration and collect its events.
pub fn interpret(source: &str) -> Result<Vec<PlayEvent>, MmlError> {
    interpret_with_config(source, &PlayerConfig::default())
}

/// Interpret `source` and collect its events.
///
/// # Errors
/// Returns the first lexing or interpretation error; events before it are dropped.
pub fn interpret_with_config(
    source: &str,
    config: &PlayerConfig,
) -> Result<Vec<PlayEvent>, MmlError> {
    Interpreter::new(source, FrequencyTable::shared(), config)?.collect()
}

/// Interpret `source`, sending each event to `emitter` as soon as it is produced.
///
/// Events before an error have already been played when the error is returned.
/// Returns the number of events sent.
///
/// # Example
/// ```rust
/// use mml::playback::EventRecorder;
/// use mml::{play, PlayerConfig};
///
/// let mut recorder = EventRecorder::new();
/// let sent = play("O4 C D E", &PlayerConfig::default(), &mut recorder)?;
/// assert_eq!(sent, 3);
/// # Ok::<(), mml::MmlError>(())
/// ```
pub fn play<E: ToneEmitter + ?Sized>(
    source: &str,
    config: &PlayerConfig,
    emitter: &mut E,
) -> Result<usize, MmlError> {
    let mut sent = 0;
    for event in Interpreter::new(source, FrequencyTable::shared(), config)? {
        let event = event?;
        emitter.play(event.frequency, event.duration);
        sent += 1;
    }
    Ok(sent)
}
