mod date_key;
mod error;
mod generator;
mod seed;
mod sorting;
mod time_of_day;
mod types;

pub use date_key::{day_window, start_of_week, week_dates, DateKey};
pub use error::{DateKeyError, EventError, TimeOfDayError};
pub use generator::{
    generate_events, EmptySource, EventSource, MockEventGenerator, EVENTS_PER_WEEKDAY,
    EVENT_TEMPLATES, EVENT_TIMES,
};
pub use seed::seed_events;
pub use sorting::{dedupe_by_id, prepare_day, preview_position, sort_events_by_time};
pub use time_of_day::{format_time_of_day, parse_time_of_day, MINUTES_PER_DAY};
pub use types::{DayData, Event, EventUpdate};
