//! # Lexer
//!
//! Scans MML text into typed tokens.
//!
//! Rules are tried in a fixed priority order and each one is greedy: once a rule
//! owns the operator character it consumes its whole run of accidentals, digits
//! and dots. The operator alphabets do not overlap, so the first character alone
//! decides the rule.
//!
//! | Priority | Token | Pattern |
//! |---|---|---|
//! | 1 | `NoteNumeric` | `[Nn][0-9]+\.*` |
//! | 2 | `Note` | `[A-G][#+b-]*[0-9]*\.*` |
//! | 3 | `OctaveShift` | `<` or `>` |
//! | 4 | `Rest` | `[Rr][0-9]*\.*` |
//! | 5 | `Tempo` | `[Tt][0-9]*` |
//! | 6 | `Volume` | `[Vv][0-9]*` |
//! | 7 | `Length` | `[Ll][0-9]*` |
//! | 8 | `Sustain` | `[Ss][0-9]*` |
//! | 9 | `EnvelopePeriod` | `[Mm][0-9]*` |
//! | 10 | `Octave` | `[Oo][0-9]+` |
//! | 11 | `Register` | `[Yy][0-9]+` |
//!
//! `;` and whitespace separate tokens and are otherwise ignored. A character no
//! rule accepts is logged, recorded in [`Lexer::skipped`] and skipped; scanning
//! carries on. `O` and `Y` without digits are fatal.

use std::iter::Peekable;
use std::str::Chars;

use tracing::warn;

use crate::error::MmlError;
use crate::pitch::{Accidental, PitchLetter};

/// Direction of a `<` / `>` octave shift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    Up,   // >
    Down, // <
}

/// Token types for MML
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `N12..` - note by number. Parsed, not played.
    NoteNumeric { number: u32, dots: u32 },

    /// `C#8.` - letter, first accidental of the run, optional length, dots
    Note {
        letter: PitchLetter,
        accidental: Option<Accidental>,
        length: Option<u32>,
        dots: u32,
    },

    /// `<` or `>`. Parsed, not played.
    OctaveShift(ShiftDirection),

    /// `R16.`
    Rest { length: Option<u32>, dots: u32 },

    // Single optional argument; `None` means no digits were written
    Tempo(Option<u32>),
    Volume(Option<u32>),
    Length(Option<u32>),
    Sustain(Option<u32>),
    EnvelopePeriod(Option<u32>), // M

    // Argument required
    Octave(u32),
    Register(u32), // Y
}

/// A token with the text it was scanned from and its position in the source
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedToken {
    pub kind: TokenKind,
    /// Operator character exactly as written (`o` stays lowercase)
    pub operator: char,
    /// Full matched text, e.g. `"C#8."`
    pub text: String,
    pub line: usize,
    pub column: usize,
}

/// A character that matched no rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedChar {
    pub character: char,
    pub line: usize,
    pub column: usize,
}

/// Lexer for tokenizing MML source
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
    position: usize,
    skipped: Vec<SkippedChar>,
    failed: bool,
}

fn is_separator(c: char) -> bool {
    c == ';' || c.is_whitespace()
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
            position: 0,
            skipped: Vec::new(),
            failed: false,
        }
    }

    /// Characters skipped so far because no rule matched them.
    pub fn skipped(&self) -> &[SkippedChar] {
        &self.skipped
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    /// True when the character after the current one is an ASCII digit.
    fn digit_follows(&self, current: char) -> bool {
        self.input[self.position + current.len_utf8()..]
            .starts_with(|d: char| d.is_ascii_digit())
    }

    fn take_digits(&mut self) -> &'a str {
        let start = self.position;
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.advance();
        }
        &self.input[start..self.position]
    }

    fn take_dots(&mut self) -> u32 {
        let mut dots = 0;
        while let Some(&'.') = self.peek() {
            self.advance();
            dots += 1;
        }
        dots
    }

    /// Consume a run of accidental signs, keeping the first one.
    fn take_accidentals(&mut self) -> Option<Accidental> {
        let mut first = None;
        while let Some(&c) = self.peek() {
            let Some(accidental) = Accidental::from_char(c) else {
                break;
            };
            self.advance();
            first = first.or(Some(accidental));
        }
        first
    }

    fn parse_number(
        &self,
        digits: &str,
        line: usize,
        column: usize,
    ) -> Result<Option<u32>, MmlError> {
        if digits.is_empty() {
            return Ok(None);
        }
        digits
            .parse::<u32>()
            .map(Some)
            .map_err(|_| MmlError::ParseError {
                line,
                column,
                message: format!("Number '{}' is too large", digits),
            })
    }

    fn optional_argument(&mut self, line: usize, column: usize) -> Result<Option<u32>, MmlError> {
        let digits = self.take_digits();
        self.parse_number(digits, line, column)
    }

    fn required_argument(
        &mut self,
        operator: char,
        line: usize,
        column: usize,
    ) -> Result<u32, MmlError> {
        self.optional_argument(line, column)?
            .ok_or_else(|| MmlError::ParseError {
                line,
                column,
                message: format!("'{}' requires a numeric argument", operator),
            })
    }

    fn skip_unrecognized(&mut self, character: char, line: usize, column: usize) {
        warn!(line, column, %character, "skipping unrecognized character");
        self.advance();
        self.skipped.push(SkippedChar {
            character,
            line,
            column,
        });
    }

    /// Scan the next token, skipping separators and unrecognized characters.
    ///
    /// Returns `None` at the end of input, and after the first fatal error.
    pub fn next_token(&mut self) -> Option<Result<LocatedToken, MmlError>> {
        if self.failed {
            return None;
        }
        let result = self.scan().transpose();
        if let Some(Err(_)) = result {
            self.failed = true;
        }
        result
    }

    fn scan(&mut self) -> Result<Option<LocatedToken>, MmlError> {
        while let Some(&c) = self.peek() {
            let line = self.line;
            let column = self.column;
            let start = self.position;

            if is_separator(c) {
                self.advance();
                continue;
            }

            let kind = match c {
                'N' | 'n' => {
                    if !self.digit_follows(c) {
                        self.skip_unrecognized(c, line, column);
                        continue;
                    }
                    self.advance();
                    let number = self.required_argument(c, line, column)?;
                    TokenKind::NoteNumeric {
                        number,
                        dots: self.take_dots(),
                    }
                }
                '<' | '>' => {
                    self.advance();
                    if c == '>' {
                        TokenKind::OctaveShift(ShiftDirection::Up)
                    } else {
                        TokenKind::OctaveShift(ShiftDirection::Down)
                    }
                }
                'R' | 'r' => {
                    self.advance();
                    let length = self.optional_argument(line, column)?;
                    TokenKind::Rest {
                        length,
                        dots: self.take_dots(),
                    }
                }
                'T' | 't' | 'V' | 'v' | 'L' | 'l' | 'S' | 's' | 'M' | 'm' => {
                    self.advance();
                    let argument = self.optional_argument(line, column)?;
                    match c.to_ascii_uppercase() {
                        'T' => TokenKind::Tempo(argument),
                        'V' => TokenKind::Volume(argument),
                        'L' => TokenKind::Length(argument),
                        'S' => TokenKind::Sustain(argument),
                        _ => TokenKind::EnvelopePeriod(argument),
                    }
                }
                'O' | 'o' | 'Y' | 'y' => {
                    self.advance();
                    let argument = self.required_argument(c, line, column)?;
                    if c.eq_ignore_ascii_case(&'O') {
                        TokenKind::Octave(argument)
                    } else {
                        TokenKind::Register(argument)
                    }
                }
                // Note letters share no character with the operators above
                _ => match PitchLetter::from_char(c) {
                    Some(letter) => {
                        self.advance();
                        let accidental = self.take_accidentals();
                        let length = self.optional_argument(line, column)?;
                        TokenKind::Note {
                            letter,
                            accidental,
                            length,
                            dots: self.take_dots(),
                        }
                    }
                    None => {
                        self.skip_unrecognized(c, line, column);
                        continue;
                    }
                },
            };

            return Ok(Some(LocatedToken {
                kind,
                operator: c,
                text: self.input[start..self.position].to_string(),
                line,
                column,
            }));
        }
        Ok(None)
    }

    /// Scan the whole input, stopping at the first fatal error.
    pub fn tokenize(&mut self) -> Result<Vec<LocatedToken>, MmlError> {
        self.by_ref().collect()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<LocatedToken, MmlError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
