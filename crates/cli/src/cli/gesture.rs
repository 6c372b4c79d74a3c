//! Gesture CLI commands.

use clap::{Parser, Subcommand, ValueEnum};
use kanbancal_core::calendar::DateKey;
use kanbancal_core::gesture::Point;
use kanbancal_core::navigation::ViewMode;

/// Gesture commands.
#[derive(Debug, Parser)]
pub struct GestureCommand {
    #[command(subcommand)]
    pub action: GestureAction,
}

/// CLI view mode (with clap ValueEnum).
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Mode {
    #[default]
    Day,
    Week,
}

impl From<Mode> for ViewMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Day => ViewMode::Day,
            Mode::Week => ViewMode::Week,
        }
    }
}

/// Available gesture actions.
#[derive(Debug, Subcommand)]
pub enum GestureAction {
    /// Replay a touch gesture and show where the calendar ends up.
    Swipe {
        /// Touch start point as "x,y".
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        start: Point,
        /// Release point as "x,y".
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        end: Point,
        /// Intermediate samples as "x,y", in order.
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        via: Vec<Point>,
        /// Date the calendar is showing (defaults to today).
        #[arg(long)]
        date: Option<DateKey>,
        /// View mode.
        #[arg(long, value_enum, default_value = "day")]
        mode: Mode,
        /// Override the configured swipe threshold.
        #[arg(long)]
        threshold: Option<f64>,
    },
}

/// Parses an "x,y" pair.
pub fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got {value:?}"))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid x coordinate in {value:?}"))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid y coordinate in {value:?}"))?;
    if !x.is_finite() || !y.is_finite() {
        return Err(format!("coordinates must be finite: {value:?}"));
    }
    Ok(Point::new(x, y))
}
