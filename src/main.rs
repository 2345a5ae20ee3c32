use std::env;
use std::fs;
use std::process;

use mml::playback::TimedEmitter;
use mml::{Accidental, FrequencyTable, PlayerConfig};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: mml table
       mml events [--config <config.yaml>] <notation>
       mml play [--config <config.yaml>] <notation>";

fn usage() -> ! {
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn print_table() {
    let table = FrequencyTable::shared();
    println!("octave note natural sharp");
    for (octave, letter, hz) in table.rows() {
        println!(
            "{:>6} {:>4} {:>7.2} {:>5}",
            octave.get(),
            letter,
            hz,
            table.compute_frequency(octave, letter, Accidental::Sharp)
        );
    }
}

/// Split `[--config <path>] <notation>` into a config and the notation.
fn parse_run_args(args: &[String]) -> (PlayerConfig, &str) {
    let (config_path, rest) = match args {
        [flag, path, rest @ ..] if flag == "--config" => (Some(path), rest),
        _ => (None, args),
    };
    let [notation] = rest else { usage() };

    let config = match config_path {
        Some(path) => {
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading config '{}': {}", path, e);
                    process::exit(1);
                }
            };
            match PlayerConfig::from_yaml(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("{}", e);
                    process::exit(1);
                }
            }
        }
        None => PlayerConfig::default(),
    };
    (config, notation.as_str())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(command) = args.get(1) else { usage() };

    match command.as_str() {
        "table" => print_table(),
        "events" => {
            let (config, notation) = parse_run_args(&args[2..]);
            let events = match mml::interpret_with_config(notation, &config) {
                Ok(events) => events,
                Err(e) => {
                    eprintln!("Interpretation error: {}", e);
                    process::exit(1);
                }
            };
            match serde_yaml::to_string(&events) {
                Ok(yaml) => print!("{}", yaml),
                Err(e) => {
                    eprintln!("Error writing events: {}", e);
                    process::exit(1);
                }
            }
        }
        "play" => {
            let (config, notation) = parse_run_args(&args[2..]);
            match mml::play(notation, &config, &mut TimedEmitter) {
                Ok(count) => eprintln!("Played {} events", count),
                Err(e) => {
                    eprintln!("Interpretation error: {}", e);
                    process::exit(1);
                }
            }
        }
        _ => usage(),
    }
}
