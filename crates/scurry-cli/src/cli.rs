//! Command-line interface for `scurry`.
//!
//! # Examples
//!
//! ```bash
//! # Move from the origin to (640, 480) like an average user
//! scurry --x 640 --y 480 --nature average
//!
//! # Reproducible robot move, printed as JSON
//! scurry --x 300 --y 200 --nature robot --speed 150 --seed 7 --format json
//! ```

use clap::{Parser, ValueEnum};

/// Generate a human-like mouse trajectory.
///
/// Runs one move on a virtual screen and prints every cursor position it
/// visits with its timestamp.
#[derive(Parser, Debug, Clone)]
#[command(name = "scurry", author, version, about)]
pub struct Cli {
    /// Target x coordinate
    #[arg(long, allow_negative_numbers = true)]
    pub x: i32,

    /// Target y coordinate
    #[arg(long, allow_negative_numbers = true)]
    pub y: i32,

    /// Movement personality
    #[arg(long, short = 'n', value_enum, default_value_t = NatureKind::Default, env = "SCURRY_NATURE")]
    pub nature: NatureKind,

    /// Milliseconds per 100 pixels (robot nature only)
    #[arg(long)]
    pub speed: Option<u64>,

    /// Starting cursor position as `X,Y`
    #[arg(long, value_parser = parse_pair::<i32>, default_value = "0,0")]
    pub from: (i32, i32),

    /// Screen size as `WIDTHxHEIGHT`
    #[arg(long, value_parser = parse_size, default_value = "1920x1080")]
    pub screen: (i32, i32),

    /// Seed for reproducible output
    #[arg(long, short = 's', env = "SCURRY_SEED")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Sleep in real time instead of simulating the clock
    #[arg(long)]
    pub realtime: bool,

    /// Log progress (INFO level) to stderr
    #[arg(long)]
    pub info: bool,

    /// Log every step (DEBUG level) to stderr
    #[arg(long)]
    pub debug: bool,
}

/// Built-in natures.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NatureKind {
    /// Balanced defaults
    #[default]
    Default,
    /// Slow, shaky and hesitant
    Granny,
    /// Medium speed with the occasional overshoot
    Average,
    /// Straight lines at constant speed
    Robot,
    /// Fast with frequent overshoots
    FastGamer,
}

/// Trajectory output formats.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `time_ms x y` line per position
    #[default]
    Text,
    /// A JSON document with the target and the trail
    Json,
    /// CSV with a header row
    Csv,
}

fn parse_pair<T: std::str::FromStr>(value: &str) -> Result<(T, T), String> {
    parse_separated(value, ',')
}

fn parse_size(value: &str) -> Result<(i32, i32), String> {
    let (width, height) = parse_separated::<i32>(value, 'x')?;
    if width <= 0 || height <= 0 {
        return Err(format!("screen size must be positive, got {value}"));
    }
    Ok((width, height))
}

fn parse_separated<T: std::str::FromStr>(value: &str, separator: char) -> Result<(T, T), String> {
    let (a, b) = value
        .split_once(separator)
        .ok_or_else(|| format!("expected two values separated by '{separator}', got {value}"))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<T>()
            .map_err(|_| format!("invalid number '{s}' in {value}"))
    };
    Ok((parse(a)?, parse(b)?))
}
