//! Interpreter: streams tokens into play events.
//!
//! Tokens are pulled from the lexer one at a time. Each token is folded into the
//! performance state by [`Interpreter::step`], which may yield one event. The
//! iterator hands events out as soon as they exist, so a caller driving a
//! blocking emitter interleaves parsing and playback.

use tracing::{debug, trace};

use crate::config::PlayerConfig;
use crate::error::MmlError;
use crate::frequency::FrequencyTable;
use crate::lexer::{Lexer, LocatedToken, SkippedChar, TokenKind};
use crate::pitch::Octave;
use crate::rhythm::{dotted_duration, Rhythm};

use super::types::{PerformanceState, PlayEvent};

/// One interpretation run over a source string.
pub struct Interpreter<'a> {
    lexer: Lexer<'a>,
    table: &'a FrequencyTable,
    state: PerformanceState,
    tempo_coupling: bool,
    finished: bool,
}

impl<'a> Interpreter<'a> {
    pub fn new(
        source: &'a str,
        table: &'a FrequencyTable,
        config: &PlayerConfig,
    ) -> Result<Self, MmlError> {
        Ok(Self {
            lexer: Lexer::new(source),
            table,
            state: config.initial_state()?,
            tempo_coupling: config.tempo_coupling,
            finished: false,
        })
    }

    /// State after the last successfully applied token.
    pub fn state(&self) -> PerformanceState {
        self.state
    }

    /// Characters the lexer has skipped so far.
    pub fn skipped(&self) -> &[SkippedChar] {
        self.lexer.skipped()
    }

    /// Apply one token to `state`.
    ///
    /// Returns the next state and, for notes, the event to play. Only notes,
    /// `O`, `L` and (with tempo coupling) `T` have an effect; every other token
    /// is accepted and ignored.
    pub fn step(
        &self,
        state: PerformanceState,
        token: &LocatedToken,
    ) -> Result<(PerformanceState, Option<PlayEvent>), MmlError> {
        let mut next = state;
        match &token.kind {
            TokenKind::Note {
                letter,
                accidental,
                dots,
                ..
            } => {
                let event = PlayEvent {
                    frequency: self.table.compute_frequency(
                        state.octave,
                        *letter,
                        accidental.unwrap_or_default(),
                    ),
                    duration: dotted_duration(state.duration_ms, *dots),
                };
                return Ok((state, Some(event)));
            }
            TokenKind::Octave(value) => {
                next.octave = Octave::new(*value)?;
                debug!(octave = value, "octave set");
            }
            TokenKind::Length(Some(denominator)) => {
                next.duration_ms = state.rhythm.duration_in_rhythm(*denominator)?;
                debug!(denominator, duration_ms = next.duration_ms, "length set");
            }
            TokenKind::Tempo(Some(tempo)) if self.tempo_coupling => {
                next.rhythm = Rhythm::from_tempo(*tempo)?;
                debug!(tempo, scalar = next.rhythm.scalar(), "rhythm set");
            }
            TokenKind::Length(None)
            | TokenKind::Tempo(_)
            | TokenKind::Rest { .. }
            | TokenKind::Volume(_)
            | TokenKind::Sustain(_)
            | TokenKind::EnvelopePeriod(_)
            | TokenKind::Register(_)
            | TokenKind::OctaveShift(_)
            | TokenKind::NoteNumeric { .. } => {}
        }
        Ok((next, None))
    }

    fn fail(&mut self, error: MmlError) -> Option<Result<PlayEvent, MmlError>> {
        self.finished = true;
        Some(Err(error))
    }
}

impl Iterator for Interpreter<'_> {
    type Item = Result<PlayEvent, MmlError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let token = match self.lexer.next_token() {
                Some(Ok(token)) => token,
                Some(Err(e)) => return self.fail(e),
                None => {
                    self.finished = true;
                    break;
                }
            };

            match self.step(self.state, &token) {
                Ok((state, event)) => {
                    self.state = state;
                    if let Some(event) = event {
                        trace!(
                            text = %token.text,
                            frequency = event.frequency,
                            duration = event.duration,
                            "event"
                        );
                        return Some(Ok(event));
                    }
                }
                Err(e) => return self.fail(e),
            }
        }
        None
    }
}
