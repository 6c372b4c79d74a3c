//! Pretty output formatting.

use kanbancal_core::calendar::{DayData, Event};

use crate::app::{MoveReport, SwipeReport, TimeReport};

/// Format an event for display.
pub fn format_event(event: &Event) -> String {
    let mut output = format!(
        "{}  {}\n  ID: {}\n  Date: {}",
        event.time, event.title, event.id, event.date_key
    );
    if let Some(desc) = &event.description {
        output.push_str(&format!("\n  Description: {}", desc));
    }
    if let Some(image) = &event.image_url {
        output.push_str(&format!("\n  Image: {}", image));
    }
    output
}

/// Format events for display.
pub fn format_events(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!("EVENTS ({})\n", events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event)));
        output.push('\n');
    }
    output
}

/// Format one day column for display.
pub fn format_day(day: &DayData) -> String {
    let mut output = format!(
        "{} ({})\n",
        day.date_key,
        day.date_key.date().format("%A")
    );
    output.push_str(&"-".repeat(40));
    if day.is_empty() {
        output.push_str("\n  No events.");
        return output;
    }
    for event in &day.events {
        output.push_str(&format!("\n{}", format_event(event)));
    }
    output
}

/// Format several day columns, one after the other.
pub fn format_week(days: &[DayData]) -> String {
    days.iter()
        .map(format_day)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format the outcome of a move.
pub fn format_move(report: &MoveReport) -> String {
    let mut output = format!("Moved:\n{}", format_event(&report.event));
    if let Some(from) = &report.from {
        output.push_str(&format!("\n\n{}", format_day(from)));
    }
    output.push_str(&format!("\n\n{}", format_day(&report.to)));
    output
}

/// Format the outcome of a replayed gesture.
pub fn format_swipe(report: &SwipeReport) -> String {
    let direction = report
        .direction
        .map(|d| d.as_str())
        .unwrap_or("none");
    let mut output = format!(
        "Swipe: {}\n  From: {}\n  Now: {}",
        direction, report.started_on, report.current
    );
    if !report.offsets.is_empty() {
        let offsets: Vec<String> = report.offsets.iter().map(|o| format!("{o}")).collect();
        output.push_str(&format!("\n  Offsets: {}", offsets.join(", ")));
    }
    if let Some(peek) = report.peek {
        output.push_str(&format!("\n  Peeked: {}", peek));
    }
    output.push_str(&format!("\n\n{}", format_week(&report.days)));
    output
}

/// Format a parsed time label.
pub fn format_time(report: &TimeReport) -> String {
    format!("{} = {} minutes after midnight", report.label, report.minutes)
}
