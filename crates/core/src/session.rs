//! Interaction state for one calendar view.
//!
//! A [`CalendarSession`] owns the event store and the navigator and routes
//! gestures, key presses and drag-and-drop to them. It is the single mutable
//! owner the view layer talks to; there is no global state.

use std::time::Instant;

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{
    prepare_day, preview_position, DateKey, DayData, Event, EventSource, MockEventGenerator,
};
use crate::gesture::{EdgeConfig, EdgeDragDetector, Point, SwipeConfig, SwipeTracker};
use crate::navigation::{NavKey, Navigator, ViewMode};
use crate::store::{EventStore, Result, StoreError};

/// Gesture tuning for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionConfig {
    pub swipe: SwipeConfig,
    pub edge: EdgeConfig,
}

/// Where a dragged event would land if dropped now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPreview {
    pub event: Event,
    pub target: DateKey,
    /// Index in the target day's sorted list; `None` means after every event.
    pub position: Option<usize>,
}

#[derive(Debug, Clone)]
struct DragState {
    event_id: String,
    from: DateKey,
    preview: Option<DragPreview>,
}

pub struct CalendarSession<S = MockEventGenerator> {
    store: EventStore<S>,
    navigator: Navigator,
    swipe: SwipeTracker,
    edge: EdgeDragDetector,
    selected: Option<String>,
    drag: Option<DragState>,
    peek: Option<NaiveDate>,
}

impl<S: EventSource> CalendarSession<S> {
    /// Opens a session on `today`, making sure today always has an entry.
    pub fn new(
        mut store: EventStore<S>,
        today: NaiveDate,
        mode: ViewMode,
        config: SessionConfig,
    ) -> Self {
        if let Err(err) = store.add_day(&DateKey::from(today).to_string()) {
            tracing::warn!(error = %err, "Could not add today's entry");
        }

        Self {
            store,
            navigator: Navigator::new(today, mode),
            swipe: SwipeTracker::new(config.swipe),
            edge: EdgeDragDetector::new(config.edge),
            selected: None,
            drag: None,
            peek: None,
        }
    }

    pub fn store(&self) -> &EventStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EventStore<S> {
        &mut self.store
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    /// Display data for every visible column, materializing days as needed.
    pub fn visible_days(&mut self) -> Vec<DayData> {
        let dates = self.navigator.visible_dates();
        self.store.days_data(&dates)
    }

    // Touch navigation

    pub fn touch_start(&mut self, point: Point) {
        if self.drag.is_some() {
            return;
        }
        self.swipe.start(point);
        self.peek = None;
    }

    /// Returns the live swipe offset. Ignored while an event is being dragged.
    pub fn touch_move(&mut self, point: Point) -> f64 {
        if self.drag.is_some() || !self.swipe.is_active() {
            return 0.0;
        }
        let offset = self.swipe.move_to(point);
        if self.peek.is_none() {
            self.peek = self
                .navigator
                .peek_date(offset, self.swipe.config().threshold);
        }
        offset
    }

    /// Ends a touch gesture. Returns the new current date if a swipe was recognized.
    pub fn touch_end(&mut self, point: Point) -> Option<NaiveDate> {
        self.peek = None;
        if self.drag.is_some() {
            self.swipe.cancel();
            return None;
        }
        let direction = self.swipe.end(point)?;
        let date = self.navigator.apply_swipe(direction);
        tracing::debug!(direction = direction.as_str(), %date, "Navigated by swipe");
        Some(date)
    }

    /// Live horizontal offset for visual feedback.
    pub fn swipe_offset(&self) -> f64 {
        self.swipe.offset()
    }

    /// The neighboring date a live swipe is currently revealing.
    pub fn peek_date(&self) -> Option<NaiveDate> {
        self.peek
    }

    // Keyboard

    pub fn press_key(&mut self, key: NavKey) -> bool {
        self.navigator.handle_key(key, self.selected.is_some())
    }

    // Detail modal

    /// Opens the detail view for an event. Unknown ids leave the modal closed.
    pub fn select_event(&mut self, event_id: &str) -> Option<&Event> {
        if self.drag.is_some() {
            return None;
        }
        let event = self.store.find(event_id)?;
        self.selected = Some(event_id.to_string());
        Some(event)
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.store.find(self.selected.as_deref()?)
    }

    pub fn is_modal_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn close_modal(&mut self) {
        self.selected = None;
    }

    // Drag and drop

    /// Picks up an event. Any touch gesture in progress is abandoned.
    pub fn begin_drag(&mut self, event_id: &str, now: Instant) -> Result<()> {
        let event = self
            .store
            .find(event_id)
            .ok_or_else(|| StoreError::EventNotFound {
                id: event_id.to_string(),
            })?;

        self.drag = Some(DragState {
            event_id: event.id.clone(),
            from: event.date_key,
            preview: None,
        });
        self.swipe.cancel();
        self.peek = None;
        self.edge.begin(now);
        tracing::trace!(%event_id, "Drag started");
        Ok(())
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Updates the drop preview for the column under the pointer.
    /// `None` or an invalid key clears the preview.
    pub fn drag_over(&mut self, target: Option<&str>) -> Option<&DragPreview> {
        let drag = self.drag.as_mut()?;
        drag.preview = None;

        let target = target.and_then(|t| DateKey::parse(t).ok())?;
        let event = self.store.find(&drag.event_id)?.clone();

        let others: Vec<Event> = self
            .store
            .get_day(target)
            .iter()
            .filter(|e| e.id != event.id)
            .cloned()
            .collect();
        let position = preview_position(&prepare_day(&others), &event);

        drag.preview = Some(DragPreview {
            event,
            target,
            position,
        });
        drag.preview.as_ref()
    }

    /// Handles the pointer position of a drag in progress. When it presses
    /// against an edge the view turns one day and the event moves with it.
    pub fn drag_at_edge(
        &mut self,
        x: f64,
        viewport_width: f64,
        now: Instant,
    ) -> Result<Option<Event>> {
        let Some(drag) = self.drag.as_ref() else {
            return Ok(None);
        };
        let Some(side) = self.edge.on_drag(x, viewport_width, now) else {
            return Ok(None);
        };

        let event_id = drag.event_id.clone();
        let from = drag.from;
        let to = from.offset_days(side.day_delta());

        let moved = self
            .store
            .move_event(&event_id, Some(&from.to_string()), &to.to_string())?;
        self.navigator.step_days(side.day_delta());

        if let Some(drag) = self.drag.as_mut() {
            drag.from = moved.date_key;
            drag.preview = None;
        }
        Ok(Some(moved))
    }

    /// Drops the dragged event on `target`. Dropping outside any column
    /// (`None`) ends the drag without moving anything.
    pub fn drop_on(&mut self, target: Option<&str>) -> Result<Option<Event>> {
        let Some(drag) = self.drag.take() else {
            return Ok(None);
        };
        self.edge.finish();

        let Some(target) = target else {
            tracing::trace!(event_id = %drag.event_id, "Dropped outside any day");
            return Ok(None);
        };

        let moved = self
            .store
            .move_event(&drag.event_id, Some(&drag.from.to_string()), target)?;
        Ok(Some(moved))
    }

    pub fn cancel_drag(&mut self) {
        self.drag = None;
        self.edge.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::calendar::EmptySource;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn seeded_session(mode: ViewMode) -> CalendarSession {
        CalendarSession::new(
            EventStore::with_seed_data(),
            make_date(2025, 3, 16),
            mode,
            SessionConfig::default(),
        )
    }

    fn ids(day: &DayData) -> Vec<&str> {
        day.events.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_today_always_has_an_entry() {
        let session = CalendarSession::new(
            EventStore::with_source(EmptySource),
            make_date(2031, 7, 4),
            ViewMode::Day,
            SessionConfig::default(),
        );
        assert_eq!(session.store().peek("2031-07-04"), Some(&[][..]));
    }

    #[test]
    fn test_today_entry_added_without_generation() {
        let mut session = CalendarSession::new(
            EventStore::new(),
            make_date(2031, 7, 4),
            ViewMode::Day,
            SessionConfig::default(),
        );
        assert!(session.store_mut().get("2031-07-04").is_empty());
    }

    #[test]
    fn test_visible_days_day_mode() {
        let mut session = seeded_session(ViewMode::Day);
        let days = session.visible_days();

        assert_eq!(days.len(), 3);
        assert_eq!(days[1].date_key.to_string(), "2025-03-16");
        assert_eq!(ids(&days[1]), vec!["event-6", "event-6a"]);
    }

    #[test]
    fn test_visible_days_week_mode_sorted() {
        let mut session = seeded_session(ViewMode::Week);
        session.navigator_mut().go_to(make_date(2025, 3, 29));
        let days = session.visible_days();

        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date_key.to_string(), "2025-03-23");
        assert_eq!(ids(&days[6]), vec!["event-16", "event-16b", "event-16a"]);
    }

    #[test]
    fn test_left_swipe_goes_to_next_day() {
        let mut session = seeded_session(ViewMode::Day);

        session.touch_start(Point::new(100.0, 100.0));
        assert_eq!(session.touch_move(Point::new(40.0, 102.0)), -60.0);
        assert_eq!(session.peek_date(), Some(make_date(2025, 3, 17)));

        let date = session.touch_end(Point::new(20.0, 105.0));

        assert_eq!(date, Some(make_date(2025, 3, 17)));
        assert_eq!(session.navigator().current(), make_date(2025, 3, 17));
        assert_eq!(session.swipe_offset(), 0.0);
        assert_eq!(session.peek_date(), None);
    }

    #[test]
    fn test_right_swipe_goes_to_previous_day() {
        let mut session = seeded_session(ViewMode::Day);

        session.touch_start(Point::new(20.0, 100.0));
        session.touch_move(Point::new(90.0, 100.0));
        assert_eq!(session.peek_date(), Some(make_date(2025, 3, 15)));

        assert_eq!(
            session.touch_end(Point::new(120.0, 100.0)),
            Some(make_date(2025, 3, 15))
        );
    }

    #[test]
    fn test_vertical_or_short_drag_does_not_navigate() {
        let mut session = seeded_session(ViewMode::Day);

        session.touch_start(Point::new(100.0, 100.0));
        assert_eq!(session.touch_end(Point::new(100.0, 160.0)), None);

        session.touch_start(Point::new(100.0, 100.0));
        assert_eq!(session.touch_end(Point::new(130.0, 100.0)), None);

        assert_eq!(session.navigator().current(), make_date(2025, 3, 16));
    }

    #[test]
    fn test_swipes_ignored_while_dragging_event() {
        let mut session = seeded_session(ViewMode::Day);
        session.begin_drag("event-6", Instant::now()).unwrap();

        session.touch_start(Point::new(100.0, 100.0));
        assert_eq!(session.touch_move(Point::new(0.0, 100.0)), 0.0);
        assert_eq!(session.touch_end(Point::new(0.0, 100.0)), None);
        assert_eq!(session.navigator().current(), make_date(2025, 3, 16));
    }

    #[test]
    fn test_keys_ignored_while_modal_open() {
        let mut session = seeded_session(ViewMode::Week);

        let selected = session.select_event("event-6").unwrap();
        assert_eq!(selected.title, "Project Kickoff");
        assert!(session.is_modal_open());
        assert!(!session.press_key(NavKey::ArrowRight));

        session.close_modal();
        assert!(session.press_key(NavKey::ArrowRight));
        assert_eq!(session.navigator().current(), make_date(2025, 3, 23));
    }

    #[test]
    fn test_select_unknown_event_keeps_modal_closed() {
        let mut session = seeded_session(ViewMode::Day);
        assert!(session.select_event("nope").is_none());
        assert!(!session.is_modal_open());
        assert!(session.selected_event().is_none());
    }

    #[test]
    fn test_selected_event_follows_moves() {
        let mut session = seeded_session(ViewMode::Day);
        session.select_event("event-6");
        session
            .store_mut()
            .move_event("event-6", None, "2025-03-18")
            .unwrap();

        assert_eq!(
            session.selected_event().unwrap().date_key.to_string(),
            "2025-03-18"
        );
    }

    #[test]
    fn test_drag_preview_and_drop() {
        let mut session = seeded_session(ViewMode::Week);
        session.begin_drag("event-6", Instant::now()).unwrap();

        // event-6 is at 10:00 AM; 2025-03-17 has 01:00 PM and 03:30 PM.
        let preview = session.drag_over(Some("2025-03-17")).unwrap();
        assert_eq!(preview.target.to_string(), "2025-03-17");
        assert_eq!(preview.position, Some(0));

        let moved = session.drop_on(Some("2025-03-17")).unwrap().unwrap();
        assert_eq!(moved.date_key.to_string(), "2025-03-17");
        assert!(!session.is_dragging());

        let days = session.visible_days();
        assert_eq!(ids(&days[0]), vec!["event-6a"]);
        assert_eq!(ids(&days[1]), vec!["event-6", "event-7", "event-7a"]);
    }

    #[test]
    fn test_drag_over_nothing_clears_preview() {
        let mut session = seeded_session(ViewMode::Week);
        session.begin_drag("event-6", Instant::now()).unwrap();

        assert!(session.drag_over(Some("2025-03-17")).is_some());
        assert!(session.drag_over(None).is_none());
        assert!(session.drag_over(Some("garbage")).is_none());
    }

    #[test]
    fn test_drop_outside_any_day_moves_nothing() {
        let mut session = seeded_session(ViewMode::Week);
        let total = session.store().total_events();
        session.begin_drag("event-6", Instant::now()).unwrap();

        assert_eq!(session.drop_on(None).unwrap(), None);
        assert_eq!(
            session.store().find("event-6").unwrap().date_key.to_string(),
            "2025-03-16"
        );
        assert_eq!(session.store().total_events(), total);
    }

    #[test]
    fn test_begin_drag_unknown_event() {
        let mut session = seeded_session(ViewMode::Day);
        assert!(session
            .begin_drag("missing", Instant::now())
            .unwrap_err()
            .is_not_found());
        assert!(!session.is_dragging());
    }

    #[test]
    fn test_drag_at_edge_moves_event_and_view() {
        let mut session = seeded_session(ViewMode::Day);
        let start = Instant::now();
        session.begin_drag("event-6", start).unwrap();

        // Still inside the cooldown.
        let early = session.drag_at_edge(10.0, 400.0, start + Duration::from_millis(200));
        assert_eq!(early.unwrap(), None);

        let moved = session
            .drag_at_edge(10.0, 400.0, start + Duration::from_millis(1200))
            .unwrap()
            .unwrap();
        assert_eq!(moved.date_key.to_string(), "2025-03-15");
        assert_eq!(session.navigator().current(), make_date(2025, 3, 15));

        let moved = session
            .drag_at_edge(390.0, 400.0, start + Duration::from_millis(2400))
            .unwrap()
            .unwrap();
        assert_eq!(moved.date_key.to_string(), "2025-03-16");

        let moved = session.drop_on(Some("2025-03-18")).unwrap().unwrap();
        assert_eq!(moved.date_key.to_string(), "2025-03-18");
    }

    #[test]
    fn test_cancel_drag() {
        let mut session = seeded_session(ViewMode::Day);
        session.begin_drag("event-6", Instant::now()).unwrap();
        session.cancel_drag();

        assert!(!session.is_dragging());
        assert_eq!(session.drop_on(Some("2025-03-18")).unwrap(), None);
        assert!(session.select_event("event-6").is_some());
    }
}
