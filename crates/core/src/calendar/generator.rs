//! Deterministic mock event generation.
//!
//! Events are a pure function of the date key: the same key always produces
//! the same ids, titles, times and image references, so lazily generated days
//! behave exactly like pre-populated ones. There is no hidden state.

use super::date_key::DateKey;
use super::types::Event;

/// Events per day, indexed by weekday (Sunday = 0 through Saturday = 6).
pub const EVENTS_PER_WEEKDAY: [usize; 7] = [1, 2, 2, 2, 1, 2, 1];

/// Title and description templates, selected by `(seed + index)`.
pub const EVENT_TEMPLATES: [(&str, &str); 12] = [
    (
        "Project Kickoff",
        "Start new project with marketing team to develop campaign strategy.",
    ),
    ("Code Review", "Review recent feature implementation with development team."),
    (
        "Design Workshop",
        "Collaborative session to refine UI/UX designs for new product.",
    ),
    (
        "Client Presentation",
        "Present quarterly results and future plans to key clients.",
    ),
    (
        "Team Building",
        "Outdoor activities to strengthen team collaboration and communication.",
    ),
    (
        "Coffee with Alex",
        "Meet with Alex to brainstorm ideas for the upcoming product launch.",
    ),
    ("Team Standup", "Weekly standup meeting with the dev team."),
    (
        "Yoga Session",
        "Join for a relaxing yoga session to reduce stress and improve mindfulness.",
    ),
    (
        "Strategy Meeting",
        "Discuss long-term business strategy and growth opportunities.",
    ),
    ("Budget Review", "Quarterly financial review and budget planning session."),
    ("Sprint Planning", "Plan tasks and goals for the upcoming sprint."),
    (
        "Networking Event",
        "Industry networking event to connect with potential partners.",
    ),
];

/// Time-of-day labels, selected by `(seed + index * 2)`.
pub const EVENT_TIMES: [&str; 10] = [
    "09:00 AM", "09:30 AM", "10:00 AM", "11:00 AM", "12:30 PM", "01:30 PM", "02:00 PM",
    "03:00 PM", "04:00 PM", "06:00 PM",
];

const IMAGE_POOL_SIZE: i64 = 1000;

/// A source of events for days the store has not materialized yet.
pub trait EventSource {
    /// Returns the events for a day. Must be deterministic for a given key.
    fn events_for(&self, date_key: &DateKey) -> Vec<Event>;
}

/// Generates stable synthetic events keyed by calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockEventGenerator;

impl EventSource for MockEventGenerator {
    fn events_for(&self, date_key: &DateKey) -> Vec<Event> {
        let seed = date_key.seed();
        let count = EVENTS_PER_WEEKDAY[date_key.weekday_index()];

        (0..count)
            .map(|index| {
                let index = index as i64;
                let (title, description) = EVENT_TEMPLATES[pick(seed + index, EVENT_TEMPLATES.len())];
                let time = EVENT_TIMES[pick(seed + index * 2, EVENT_TIMES.len())];
                let image = (seed * 31 + index * 7).rem_euclid(IMAGE_POOL_SIZE) + 1;

                Event::new(
                    format!("event-{}-{}", date_key, index + 1),
                    title,
                    time,
                    *date_key,
                )
                .with_description(description)
                .with_image_url(format!("https://picsum.photos/1920/1080?random={image}"))
            })
            .collect()
    }
}

/// A source that never generates anything; days start empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySource;

impl EventSource for EmptySource {
    fn events_for(&self, _date_key: &DateKey) -> Vec<Event> {
        Vec::new()
    }
}

fn pick(value: i64, len: usize) -> usize {
    value.rem_euclid(len as i64) as usize
}

/// Generates the mock events for a raw date key string.
///
/// Invalid or non-round-tripping keys yield an empty list rather than an error.
///
/// ```
/// use kanbancal_core::calendar::generate_events;
///
/// let sunday = generate_events("2025-03-16");
/// assert_eq!(sunday.len(), 1);
/// assert_eq!(sunday[0].id, "event-2025-03-16-1");
///
/// assert!(generate_events("2025-02-30").is_empty());
/// ```
pub fn generate_events(date_key: &str) -> Vec<Event> {
    match DateKey::parse(date_key) {
        Ok(key) => MockEventGenerator.events_for(&key),
        Err(err) => {
            tracing::trace!(%date_key, error = %err, "Not generating events for invalid date key");
            Vec::new()
        }
    }
}
