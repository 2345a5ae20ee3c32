//! Integration tests for the MML interpreter
//!
//! Tests the full pipeline from MML source to play events.

use mml::playback::{is_audible, EventRecorder};
use mml::{interpret, interpret_with_config, play, tokenize, MmlError, PlayerConfig, TokenKind};

// Opening bars of a classic game tune, in the separator-heavy style MML songs use
const OPENING: &str = "t90;L16;V11;S0;M3000;O5;D;D;R16;C;R16;O4;B;V13;B4;B;S0;D";

#[test]
fn test_opening_bars() {
    let events = interpret(OPENING).unwrap();
    let frequencies: Vec<_> = events.iter().map(|e| e.frequency).collect();
    assert_eq!(frequencies, vec![294, 294, 262, 247, 247, 247, 147]);
    assert!(events.iter().all(|e| e.duration == 125));
}

#[test]
fn test_opening_bars_tokenize_cleanly() {
    let tokens = tokenize(OPENING).unwrap();
    assert_eq!(tokens.len(), 18);
    assert_eq!(tokens[0].kind, TokenKind::Tempo(Some(90)));
    assert_eq!(tokens[0].text, "t90");
    assert_eq!(tokens[4].kind, TokenKind::EnvelopePeriod(Some(3000)));
}

#[test]
fn test_accidentals_in_context() {
    let events = interpret("O5;G#;Bb;C#;V13;C#8;S0").unwrap();
    let frequencies: Vec<_> = events.iter().map(|e| e.frequency).collect();
    assert_eq!(frequencies, vec![415, 466, 277, 277]);
}

#[test]
fn test_dotted_note_after_length() {
    // L16 = 125 ms; one dot adds round(62.5) = 62
    let events = interpret("L16;O5;C4.").unwrap();
    assert_eq!(events[0].duration, 187);
}

#[test]
fn test_play_matches_interpret() {
    let mut recorder = EventRecorder::new();
    let sent = play(OPENING, &PlayerConfig::default(), &mut recorder).unwrap();
    assert_eq!(sent, 7);
    assert_eq!(recorder.events(), interpret(OPENING).unwrap().as_slice());
}

#[test]
fn test_low_octave_notes_are_inaudible() {
    let mut recorder = EventRecorder::new();
    play("O1 C D E F G A B O2 C", &PlayerConfig::default(), &mut recorder).unwrap();
    assert_eq!(recorder.events().len(), 8);
    // Octave 1 and C2 top out at 33 Hz
    assert_eq!(recorder.audible().count(), 0);
    assert_eq!(recorder.total_blocking_ms(), 0);
}

#[test]
fn test_tempo_coupling_from_yaml_config() {
    let config = PlayerConfig::from_yaml("tempo-coupling: true\ninitial-octave: 5").unwrap();
    // rhythm = 2 / 90; L16 = round(2/90 * 125) = 3 ms
    let events = interpret_with_config("t90;L16;A", &config).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].frequency, 440);
    assert_eq!(events[0].duration, 3);
    assert!(is_audible(events[0].frequency));
}

#[test]
fn test_events_serialize_to_yaml() {
    let events = interpret("O5 L4 A").unwrap();
    let yaml = serde_yaml::to_string(&events).unwrap();
    assert!(yaml.contains("frequency: 440"));
    assert!(yaml.contains("duration: 500"));
}

#[test]
fn test_error_messages() {
    let err = interpret("O4 C O").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parse error at line 1, column 6: 'O' requires a numeric argument"
    );
    assert_eq!(
        interpret("O4 C O12").unwrap_err(),
        MmlError::InvalidOctave(12)
    );
}

#[test]
fn test_multiline_source() {
    let source = "O5\nL4\nA;\n  B\n";
    let events = interpret(source).unwrap();
    assert_eq!(events.len(), 2);

    let tokens = tokenize(source).unwrap();
    assert_eq!((tokens[3].line, tokens[3].column), (4, 3));
}
