//! Canonical `yyyy-MM-dd` date keys.
//!
//! A date key names a local calendar day (no timezone, no instant). It is the
//! primary key of the event store and is reparsed often, so parsing is strict:
//! the string must have exactly the `YYYY-MM-DD` shape and must round-trip
//! through a real Gregorian date back to the same text.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::DateKeyError;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// A validated calendar day, displayed as `yyyy-MM-dd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Parses a date key, rejecting anything that does not round-trip.
    ///
    /// ```
    /// use kanbancal_core::calendar::DateKey;
    ///
    /// assert!(DateKey::parse("2025-03-16").is_ok());
    /// assert!(DateKey::parse("2025-02-30").is_err());
    /// assert!(DateKey::parse("2025-3-16").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, DateKeyError> {
        if !has_date_key_shape(input) {
            return Err(DateKeyError::Malformed(input.to_string()));
        }

        let date = NaiveDate::parse_from_str(input, DATE_KEY_FORMAT)
            .map_err(|_| DateKeyError::NotACalendarDate(input.to_string()))?;

        // chrono is lenient about some inputs; the normalized form must match.
        if date.format(DATE_KEY_FORMAT).to_string() != input {
            return Err(DateKeyError::NotACalendarDate(input.to_string()));
        }

        Ok(Self(date))
    }

    /// Returns the underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Weekday index with Sunday = 0 through Saturday = 6.
    pub fn weekday_index(&self) -> usize {
        self.0.weekday().num_days_from_sunday() as usize
    }

    /// Numeric seed derived from the date: `year * 10000 + month * 100 + day`.
    pub fn seed(&self) -> i64 {
        i64::from(self.0.year()) * 10_000 + i64::from(self.0.month()) * 100 + i64::from(self.0.day())
    }

    /// Returns the key `days` days away (negative values go backwards).
    pub fn offset_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    pub fn previous(&self) -> Self {
        self.offset_days(-1)
    }

    pub fn next(&self) -> Self {
        self.offset_days(1)
    }
}

fn has_date_key_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateKey {
    type Error = DateKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// Returns the Sunday that starts the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(offset)
}

/// Returns the seven dates of the week containing `date` (Sunday to Saturday).
pub fn week_dates(date: NaiveDate) -> Vec<NaiveDate> {
    let sunday = start_of_week(date);
    (0..7).map(|offset| sunday + Duration::days(offset)).collect()
}

/// Returns the previous, current and next day around `date`.
pub fn day_window(date: NaiveDate) -> Vec<NaiveDate> {
    (-1..=1).map(|offset| date + Duration::days(offset)).collect()
}
