#![forbid(unsafe_code)]

//! # Scurry CLI
//!
//! Runs a single move on a [`VirtualScreen`] and writes the recorded
//! trajectory as text, JSON or CSV.

pub mod cli;

use std::io::Write;

use anyhow::{Context, Result, bail};
use scurry::{
    Clock, Dimension, MotionNature, MouseMotion, Point, RandomSource, SeededRandom, TimedPoint,
    VirtualScreen,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use cli::{Cli, NatureKind, OutputFormat};

/// Installs the stderr log subscriber.
///
/// `--debug` wins over `--info`; without either, `RUST_LOG` is honored and
/// the default level is WARN.
pub fn init_logging(cli: &Cli) {
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else if cli.info {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// The JSON document written by `--format json`.
#[derive(Debug, Serialize)]
struct Report<'a> {
    nature: &'a str,
    screen: Dimension,
    from: Point,
    target: Point,
    landed: Point,
    trail: &'a [TimedPoint],
}

/// Runs the move described by `cli` and writes the trajectory to `out`.
///
/// # Errors
///
/// Fails on invalid arguments (robot without a positive `--speed`), on
/// motion errors and on write errors.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let mut random = match cli.seed {
        Some(seed) => SeededRandom::from_seed(seed),
        None => SeededRandom::new(),
    };
    let nature = build_nature(cli, &mut random)?;

    let screen = Dimension::new(cli.screen.0, cli.screen.1);
    let from = screen.clamp(Point::new(cli.from.0, cli.from.1));
    let clock = if cli.realtime {
        Clock::Realtime
    } else {
        Clock::Simulated
    };
    let virtual_screen = VirtualScreen::new(screen)
        .with_position(from)
        .with_clock(clock);

    info!(nature = ?cli.nature, %from, "Running move");
    let mut motion = MouseMotion::new(nature, virtual_screen, random);
    let landed = motion
        .move_to(cli.x, cli.y)
        .with_context(|| format!("moving to ({}, {})", cli.x, cli.y))?;
    let (_, virtual_screen, _) = motion.into_parts();
    let trail = virtual_screen.trail();

    match cli.format {
        OutputFormat::Text => {
            for p in trail {
                writeln!(out, "{} {} {}", p.time_ms, p.x, p.y)?;
            }
        }
        OutputFormat::Csv => {
            writeln!(out, "time_ms,x,y")?;
            for p in trail {
                writeln!(out, "{},{},{}", p.time_ms, p.x, p.y)?;
            }
        }
        OutputFormat::Json => {
            let report = Report {
                nature: nature_name(cli.nature),
                screen,
                from,
                target: screen.clamp(Point::new(cli.x, cli.y)),
                landed,
                trail,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn build_nature(cli: &Cli, random: &mut dyn RandomSource) -> Result<MotionNature> {
    if cli.speed.is_some() && cli.nature != NatureKind::Robot {
        bail!("--speed only applies to the robot nature");
    }
    let nature = match cli.nature {
        NatureKind::Default => MotionNature::default_nature()?,
        NatureKind::Granny => MotionNature::granny(random)?,
        NatureKind::Average => MotionNature::average_user()?,
        NatureKind::FastGamer => MotionNature::fast_gamer()?,
        NatureKind::Robot => match cli.speed {
            Some(speed) if speed > 0 => MotionNature::robot(speed)?,
            _ => bail!("the robot nature needs --speed greater than 0"),
        },
    };
    Ok(nature)
}

fn nature_name(kind: NatureKind) -> &'static str {
    match kind {
        NatureKind::Default => "default",
        NatureKind::Granny => "granny",
        NatureKind::Average => "average",
        NatureKind::Robot => "robot",
        NatureKind::FastGamer => "fast-gamer",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn output(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("scurry").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(&cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_text_output_ends_on_target() {
        let text = output(&["--x", "50", "--y", "60", "--seed", "1"]).unwrap();
        assert_eq!(text.lines().last().unwrap().split(' ').skip(1).collect::<Vec<_>>(), ["50", "60"]);
    }

    #[test]
    fn test_csv_has_header() {
        let csv = output(&["--x", "5", "--y", "5", "--format", "csv", "--seed", "2"]).unwrap();
        assert_eq!(csv.lines().next(), Some("time_ms,x,y"));
    }

    #[test]
    fn test_json_report() {
        let json = output(&[
            "--x", "900", "--y", "10", "--screen", "800x600", "--format", "json", "--seed", "3",
        ])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["target"]["x"], 799);
        assert_eq!(value["landed"]["x"], 799);
        assert_eq!(value["nature"], "default");
        assert!(value["trail"].as_array().unwrap().len() > 1);
    }

    #[test]
    fn test_robot_requires_speed() {
        assert!(output(&["--x", "5", "--y", "5", "--nature", "robot"]).is_err());
        assert!(output(&["--x", "5", "--y", "5", "--nature", "robot", "--speed", "0"]).is_err());
        assert!(output(&["--x", "5", "--y", "5", "--nature", "robot", "--speed", "100"]).is_ok());
    }

    #[test]
    fn test_speed_rejected_for_other_natures() {
        assert!(output(&["--x", "5", "--y", "5", "--speed", "100"]).is_err());
    }

    #[test]
    fn test_same_seed_same_output() {
        let args = ["--x", "700", "--y", "300", "--nature", "granny", "--seed", "42"];
        assert_eq!(output(&args).unwrap(), output(&args).unwrap());
    }
}
