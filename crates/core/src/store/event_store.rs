//! In-memory, date-keyed event store.
//!
//! Days are materialized on first read through an [`EventSource`] and then
//! kept for the lifetime of the store. A secondary `id -> DateKey` index keeps
//! ids unique across the whole store and makes lookups and moves O(day size).

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::calendar::{
    prepare_day, seed_events, DateKey, DayData, Event, EventSource, EventUpdate,
    MockEventGenerator,
};

use super::{Result, StoreError};

/// Owns every materialized day and the events filed under it.
#[derive(Debug, Clone)]
pub struct EventStore<S = MockEventGenerator> {
    days: BTreeMap<DateKey, Vec<Event>>,
    index: HashMap<String, DateKey>,
    source: S,
}

impl Default for EventStore<MockEventGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore<MockEventGenerator> {
    /// Creates an empty store backed by the mock generator.
    pub fn new() -> Self {
        Self::with_source(MockEventGenerator)
    }

    /// Creates a store preloaded with the demo fixture; other days are generated.
    pub fn with_seed_data() -> Self {
        let mut store = Self::new();
        for (date_key, events) in seed_events() {
            let admitted = store.replace_day(date_key, events);
            tracing::trace!(%date_key, admitted, "Seeded day");
        }
        store
    }
}

impl<S: EventSource> EventStore<S> {
    /// Creates an empty store that materializes missing days from `source`.
    pub fn with_source(source: S) -> Self {
        Self {
            days: BTreeMap::new(),
            index: HashMap::new(),
            source,
        }
    }

    /// Returns a day's events, generating and caching them on first access.
    ///
    /// Invalid date keys return an empty slice and leave the store untouched.
    ///
    /// ```
    /// use kanbancal_core::calendar::generate_events;
    /// use kanbancal_core::store::EventStore;
    ///
    /// let mut store = EventStore::new();
    /// let first = store.get("2030-01-01").to_vec();
    ///
    /// assert_eq!(first, generate_events("2030-01-01"));
    /// assert_eq!(store.get("2030-01-01"), first.as_slice());
    /// assert!(store.get("2025-02-30").is_empty());
    /// ```
    pub fn get(&mut self, date_key: &str) -> &[Event] {
        match DateKey::parse(date_key) {
            Ok(key) => self.materialize(key).as_slice(),
            Err(err) => {
                tracing::trace!(%date_key, error = %err, "Ignoring read of invalid date key");
                &[]
            }
        }
    }

    /// Typed variant of [`EventStore::get`].
    pub fn get_day(&mut self, date_key: DateKey) -> &[Event] {
        self.materialize(date_key).as_slice()
    }

    /// Returns a day's events only if the day is already materialized.
    pub fn peek(&self, date_key: &str) -> Option<&[Event]> {
        let key = DateKey::parse(date_key).ok()?;
        self.days.get(&key).map(Vec::as_slice)
    }

    /// Returns true if the day has an entry (generated, seeded or explicit).
    pub fn is_materialized(&self, date_key: &str) -> bool {
        self.peek(date_key).is_some()
    }

    /// Ensures an entry exists for the day without generating content.
    ///
    /// An existing entry is left as it is.
    pub fn add_day(&mut self, date_key: &str) -> Result<()> {
        let key = DateKey::parse(date_key)?;
        if !self.days.contains_key(&key) {
            tracing::debug!(%key, "Added empty day");
            self.days.insert(key, Vec::new());
        }
        Ok(())
    }

    /// Explicitly creates a day with the given events, replacing any existing entry.
    ///
    /// Records without an id and ids already filed under another day are
    /// dropped. Returns the number of events kept.
    pub fn insert_day(&mut self, date_key: &str, events: Vec<Event>) -> Result<usize> {
        let key = DateKey::parse(date_key)?;
        Ok(self.replace_day(key, events))
    }

    /// Adds a single event under its own `date_key`, materializing that day first.
    ///
    /// Ids the day would generate count as taken even before the day is read.
    pub fn insert_event(&mut self, event: Event) -> Result<()> {
        event.validate()?;
        let key = event.date_key;

        if self.index.contains_key(&event.id) || self.would_generate(key, &event.id) {
            return Err(StoreError::AlreadyExists { id: event.id });
        }
        self.materialize(key);

        tracing::debug!(event_id = %event.id, %key, "Event inserted");
        self.index.insert(event.id.clone(), key);
        self.days.entry(key).or_default().push(event);
        Ok(())
    }

    /// Looks up an event by id across every materialized day.
    pub fn find(&self, event_id: &str) -> Option<&Event> {
        let key = self.index.get(event_id)?;
        self.days.get(key)?.iter().find(|e| e.id == event_id)
    }

    /// Moves an event to another day and returns it with its new `date_key`.
    ///
    /// `from` is a hint naming the day the caller believes the event is on. An
    /// unread hinted day is generated first if it holds the event; when the
    /// hint is absent or stale the whole store is consulted. The target day
    /// is materialized before the source is modified, and every failure leaves
    /// the store exactly as it was.
    pub fn move_event(&mut self, event_id: &str, from: Option<&str>, to: &str) -> Result<Event> {
        let target = DateKey::parse(to)?;
        if let Some(hint) = from.and_then(|f| DateKey::parse(f).ok()) {
            if self.would_generate(hint, event_id) {
                self.materialize(hint);
            }
        }
        let source = self
            .locate(event_id, from)
            .ok_or_else(|| StoreError::not_found(event_id))?;

        let Some(position) = self
            .days
            .get(&source)
            .and_then(|events| events.iter().position(|e| e.id == event_id))
        else {
            return Err(StoreError::not_found(event_id));
        };

        if source == target {
            return self
                .find(event_id)
                .cloned()
                .ok_or_else(|| StoreError::not_found(event_id));
        }

        self.materialize(target);

        let mut event = match self.days.get_mut(&source) {
            Some(events) => events.remove(position),
            None => return Err(StoreError::not_found(event_id)),
        };
        event.date_key = target;

        self.index.insert(event.id.clone(), target);
        self.days.entry(target).or_default().push(event.clone());

        tracing::debug!(%event_id, from = %source, to = %target, "Event moved");
        Ok(event)
    }

    /// Applies a partial edit to an event and returns the edited copy.
    pub fn update_event(&mut self, event_id: &str, update: &EventUpdate) -> Result<Event> {
        let key = *self
            .index
            .get(event_id)
            .ok_or_else(|| StoreError::not_found(event_id))?;

        let slot = self
            .days
            .get_mut(&key)
            .and_then(|events| events.iter_mut().find(|e| e.id == event_id))
            .ok_or_else(|| StoreError::not_found(event_id))?;

        let updated = update.apply_to(slot);
        updated.validate()?;
        *slot = updated.clone();

        tracing::debug!(%event_id, %key, "Event updated");
        Ok(updated)
    }

    /// Returns a day prepared for display (malformed records dropped, sorted by time).
    pub fn day_data(&mut self, date_key: DateKey) -> DayData {
        DayData::new(date_key, prepare_day(self.get_day(date_key)))
    }

    /// Builds display data for each of the given dates.
    pub fn days_data(&mut self, dates: &[NaiveDate]) -> Vec<DayData> {
        dates
            .iter()
            .map(|date| self.day_data(DateKey::from(*date)))
            .collect()
    }

    /// Total number of events across every materialized day.
    pub fn total_events(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Materialized day keys in calendar order.
    pub fn materialized_days(&self) -> impl Iterator<Item = &DateKey> {
        self.days.keys()
    }

    fn materialize(&mut self, key: DateKey) -> &mut Vec<Event> {
        if self.days.contains_key(&key) {
            tracing::trace!(%key, "Day already materialized");
        } else {
            let generated = self.source.events_for(&key);
            let admitted = self.admit(key, generated);
            tracing::trace!(%key, count = admitted.len(), "Materialized day");
            self.days.insert(key, admitted);
        }
        self.days.entry(key).or_default()
    }

    fn replace_day(&mut self, key: DateKey, events: Vec<Event>) -> usize {
        if let Some(previous) = self.days.remove(&key) {
            for event in previous {
                self.index.remove(&event.id);
            }
        }
        let admitted = self.admit(key, events);
        let count = admitted.len();
        self.days.insert(key, admitted);
        count
    }

    /// Files events under `key`, indexing them and dropping records that would
    /// break id uniqueness. Keeps the first occurrence of any id.
    fn admit(&mut self, key: DateKey, events: Vec<Event>) -> Vec<Event> {
        let mut admitted = Vec::with_capacity(events.len());
        for mut event in events {
            if !event.is_well_formed() {
                tracing::warn!(%key, title = %event.title, "Dropping event without id");
                continue;
            }
            if let Some(existing) = self.index.get(&event.id) {
                tracing::warn!(%key, event_id = %event.id, %existing, "Dropping duplicate event id");
                continue;
            }
            event.date_key = key;
            self.index.insert(event.id.clone(), key);
            admitted.push(event);
        }
        admitted
    }

    /// True if `key` is not materialized yet and its source would produce `event_id`.
    fn would_generate(&self, key: DateKey, event_id: &str) -> bool {
        !self.days.contains_key(&key)
            && self
                .source
                .events_for(&key)
                .iter()
                .any(|e| e.id == event_id)
    }

    fn locate(&self, event_id: &str, from: Option<&str>) -> Option<DateKey> {
        if let Some(hint) = from.and_then(|f| DateKey::parse(f).ok()) {
            let on_hint = self
                .days
                .get(&hint)
                .is_some_and(|events| events.iter().any(|e| e.id == event_id));
            if on_hint {
                return Some(hint);
            }
            tracing::debug!(%event_id, %hint, "Event not on hinted day, using index");
        }
        self.index.get(event_id).copied()
    }
}
