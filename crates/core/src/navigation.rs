//! Which dates the calendar is showing, and how input moves between them.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{day_window, week_dates};
use crate::gesture::SwipeDirection;

/// Layout chosen by the host. The core never decides this itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// One day at a time, with its neighbors kept ready for swiping.
    #[default]
    Day,
    /// A Sunday-to-Saturday week.
    Week,
}

/// Keys the calendar reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
}

/// Current position of the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: NaiveDate,
    mode: ViewMode,
}

impl Navigator {
    pub fn new(current: NaiveDate, mode: ViewMode) -> Self {
        Self { current, mode }
    }

    pub fn current(&self) -> NaiveDate {
        self.current
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        self.current = date;
    }

    /// Dates to render: previous/current/next in day mode, the week otherwise.
    pub fn visible_dates(&self) -> Vec<NaiveDate> {
        match self.mode {
            ViewMode::Day => day_window(self.current),
            ViewMode::Week => week_dates(self.current),
        }
    }

    pub fn step_days(&mut self, days: i64) -> NaiveDate {
        self.current += Duration::days(days);
        self.current
    }

    pub fn next_week(&mut self) -> NaiveDate {
        self.step_days(7)
    }

    pub fn previous_week(&mut self) -> NaiveDate {
        self.step_days(-7)
    }

    /// Applies a recognized swipe: left goes forward, right goes back.
    /// Day mode moves one day, week mode a whole week.
    pub fn apply_swipe(&mut self, direction: SwipeDirection) -> NaiveDate {
        let span = match self.mode {
            ViewMode::Day => 1,
            ViewMode::Week => 7,
        };
        self.step_days(direction.day_delta() * span)
    }

    /// Arrow keys page by week. Ignored while a modal is open.
    /// Returns true if the key changed the date.
    pub fn handle_key(&mut self, key: NavKey, modal_open: bool) -> bool {
        if modal_open {
            return false;
        }
        match key {
            NavKey::ArrowLeft => self.previous_week(),
            NavKey::ArrowRight => self.next_week(),
        };
        true
    }

    /// The neighbor a live drag is revealing, once it passes `threshold`.
    ///
    /// Dragging left (negative offset) reveals the next day.
    pub fn peek_date(&self, offset: f64, threshold: f64) -> Option<NaiveDate> {
        if offset < -threshold {
            Some(self.current + Duration::days(1))
        } else if offset > threshold {
            Some(self.current - Duration::days(1))
        } else {
            None
        }
    }
}
