use serde::{Deserialize, Serialize};

use super::date_key::DateKey;
use super::error::{EventError, TimeOfDayError};
use super::time_of_day::parse_time_of_day;

/// A single event filed under one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Opaque identifier, unique across the whole store.
    /// Missing on input deserializes to an empty string so the record can be filtered.
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Wall-clock label (`hh:mm AM|PM`) used only for same-day ordering.
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// The day this event is currently filed under.
    pub date_key: DateKey,
}

impl Event {
    /// Creates a new event with no description or image.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        time: impl Into<String>,
        date_key: DateKey,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            time: time.into(),
            image_url: None,
            date_key,
        }
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the image reference for this event.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Minutes after midnight for this event's time label.
    pub fn minute_of_day(&self) -> Result<u16, TimeOfDayError> {
        parse_time_of_day(&self.time)
    }

    /// Returns false for records without an id, which are never rendered.
    pub fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// Validates an event before it is added to or edited in a store.
    pub fn validate(&self) -> Result<(), EventError> {
        if !self.is_well_formed() {
            return Err(EventError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }
        self.minute_of_day()?;
        Ok(())
    }
}

/// A partial edit applied to an existing event. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub time: Option<String>,
    pub image_url: Option<String>,
}

impl EventUpdate {
    /// Returns a copy of `event` with this update applied.
    pub fn apply_to(&self, event: &Event) -> Event {
        let mut updated = event.clone();
        if let Some(title) = &self.title {
            updated.title = title.clone();
        }
        if let Some(description) = &self.description {
            updated.description = Some(description.clone());
        }
        if let Some(time) = &self.time {
            updated.time = time.clone();
        }
        if let Some(image_url) = &self.image_url {
            updated.image_url = Some(image_url.clone());
        }
        updated
    }
}

/// Data for a single day column in the calendar view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayData {
    pub date_key: DateKey,
    pub events: Vec<Event>,
}

impl DayData {
    /// Creates a new DayData with the given date and events.
    pub fn new(date_key: DateKey, events: Vec<Event>) -> Self {
        Self { date_key, events }
    }

    /// Creates an empty DayData for the given date.
    pub fn empty(date_key: DateKey) -> Self {
        Self {
            date_key,
            events: Vec::new(),
        }
    }

    /// Returns true if this day has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the number of events for this day.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}
