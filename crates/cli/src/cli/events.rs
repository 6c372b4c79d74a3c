//! Event CLI commands.

use clap::{Parser, Subcommand};
use kanbancal_core::calendar::DateKey;

/// Event store commands. Every invocation starts from a fresh store.
#[derive(Debug, Parser)]
pub struct EventsCommand {
    #[command(subcommand)]
    pub action: EventsAction,
}

/// Available event actions.
#[derive(Debug, Subcommand)]
pub enum EventsAction {
    /// Show the generator's output for a date key, bypassing the store.
    Generate {
        /// Date key (YYYY-MM-DD). Invalid keys generate nothing.
        date: String,
    },
    /// List one day's events, sorted by time.
    Day {
        /// Date key (YYYY-MM-DD).
        date: DateKey,
    },
    /// List the Sunday-to-Saturday week containing a date.
    Week {
        /// Any date in the week (YYYY-MM-DD).
        date: DateKey,
    },
    /// Move an event to another day and show both days afterwards.
    Move {
        /// Event ID.
        id: String,
        /// Target date key.
        #[arg(long)]
        to: String,
        /// Day the event is expected on; the whole store is searched otherwise.
        #[arg(long)]
        from: Option<String>,
    },
    /// Edit an event's details.
    Update {
        /// Event ID.
        id: String,
        /// Day to load before editing; generated events exist only once their day is read.
        #[arg(long)]
        on: Option<DateKey>,
        /// New title.
        #[arg(long)]
        title: Option<String>,
        /// New description.
        #[arg(long)]
        description: Option<String>,
        /// New time label (hh:mm AM|PM).
        #[arg(long)]
        time: Option<String>,
        /// New image reference.
        #[arg(long)]
        image_url: Option<String>,
    },
}
