use std::collections::HashSet;

use super::types::Event;

/// Sorts a day's events by time of day.
/// The sort is stable; events whose time label cannot be parsed go last.
pub fn sort_events_by_time(events: &mut [Event]) {
    events.sort_by_key(|event| match event.minute_of_day() {
        Ok(minutes) => (0, minutes),
        Err(_) => (1, 0),
    });
}

/// Removes events whose id was already seen, keeping the first occurrence.
pub fn dedupe_by_id(events: Vec<Event>) -> Vec<Event> {
    let mut seen = HashSet::new();
    events
        .into_iter()
        .filter(|event| seen.insert(event.id.clone()))
        .collect()
}

/// Prepares a day's events for display: drops records without an id,
/// removes duplicate ids and sorts by time.
pub fn prepare_day(events: &[Event]) -> Vec<Event> {
    let well_formed: Vec<Event> = events
        .iter()
        .filter(|event| {
            if !event.is_well_formed() {
                tracing::warn!(title = %event.title, "Dropping event without id");
            }
            event.is_well_formed()
        })
        .cloned()
        .collect();

    let mut prepared = dedupe_by_id(well_formed);
    sort_events_by_time(&mut prepared);
    prepared
}

/// Returns where a dragged event would land in a sorted day.
///
/// This is the index of the first event whose time is at or after the dragged
/// event's time, or `None` when it would go after every event. A dragged event
/// with an unparseable time always goes last.
pub fn preview_position(sorted: &[Event], dragged: &Event) -> Option<usize> {
    let dragged_minutes = dragged.minute_of_day().ok()?;
    sorted.iter().position(|event| {
        event
            .minute_of_day()
            .is_ok_and(|minutes| minutes >= dragged_minutes)
    })
}
