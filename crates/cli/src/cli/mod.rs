//! CLI command definitions.

pub mod events;
pub mod gesture;

use clap::{Parser, Subcommand, ValueEnum};

/// Inspect the kanbancal event store, generator and gesture interpreter.
#[derive(Debug, Parser)]
#[command(name = "kanbancal")]
#[command(version, about = "Inspect the kanbancal calendar core", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, env = "KANBANCAL_FORMAT", default_value = "pretty", global = true)]
    pub format: OutputFormat,

    /// Emit logs as JSON on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate, list and move events.
    Events(events::EventsCommand),
    /// Classify pointer gestures.
    Gesture(gesture::GestureCommand),
    /// Convert a `hh:mm AM|PM` label to minutes after midnight.
    Time {
        /// Time label, e.g. "02:30 PM".
        label: String,
    },
}
