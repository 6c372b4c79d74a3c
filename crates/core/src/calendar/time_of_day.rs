//! 12-hour `hh:mm AM|PM` labels and their minute-of-day values.

use super::error::TimeOfDayError;

/// Minutes in a day; every parsed label maps into `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Converts a `hh:mm AM|PM` label to minutes after midnight.
///
/// `12:00 AM` is midnight (0) and `12:00 PM` is noon (720).
///
/// ```
/// use kanbancal_core::calendar::parse_time_of_day;
///
/// assert_eq!(parse_time_of_day("12:00 AM"), Ok(0));
/// assert_eq!(parse_time_of_day("12:00 PM"), Ok(720));
/// assert_eq!(parse_time_of_day("02:30 PM"), Ok(870));
/// ```
pub fn parse_time_of_day(label: &str) -> Result<u16, TimeOfDayError> {
    let malformed = || TimeOfDayError::Malformed(label.to_string());

    let (clock, modifier) = label.trim().split_once(' ').ok_or_else(malformed)?;
    let (hours, minutes) = clock.split_once(':').ok_or_else(malformed)?;

    if hours.is_empty()
        || hours.len() > 2
        || minutes.len() != 2
        || !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit())
    {
        return Err(malformed());
    }

    let hours: u16 = hours.parse().map_err(|_| malformed())?;
    let minutes: u16 = minutes.parse().map_err(|_| malformed())?;

    if !(1..=12).contains(&hours) || minutes > 59 {
        return Err(TimeOfDayError::OutOfRange(label.to_string()));
    }

    let hours = match modifier {
        "AM" if hours == 12 => 0,
        "AM" => hours,
        "PM" if hours == 12 => 12,
        "PM" => hours + 12,
        _ => return Err(malformed()),
    };

    Ok(hours * 60 + minutes)
}

/// Renders a minute-of-day value as a zero-padded `hh:mm AM|PM` label.
///
/// Values past the end of the day wrap around.
pub fn format_time_of_day(minute_of_day: u16) -> String {
    let minute_of_day = minute_of_day % MINUTES_PER_DAY;
    let (hours, minutes) = (minute_of_day / 60, minute_of_day % 60);
    let modifier = if hours < 12 { "AM" } else { "PM" };
    let hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{hours:02}:{minutes:02} {modifier}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(parse_time_of_day("12:00 AM"), Ok(0));
        assert_eq!(parse_time_of_day("12:30 AM"), Ok(30));
        assert_eq!(parse_time_of_day("12:00 PM"), Ok(720));
        assert_eq!(parse_time_of_day("11:59 PM"), Ok(1439));
    }

    #[test]
    fn test_morning_and_afternoon() {
        assert_eq!(parse_time_of_day("09:30 AM"), Ok(570));
        assert_eq!(parse_time_of_day("9:30 AM"), Ok(570));
        assert_eq!(parse_time_of_day("01:00 PM"), Ok(780));
        assert_eq!(parse_time_of_day("08:00 PM"), Ok(1200));
    }

    #[test]
    fn test_malformed_labels() {
        for label in ["", "noon", "10:00", "10:00 XM", "10-00 AM", "10:0 AM", "ab:cd PM"] {
            assert_eq!(
                parse_time_of_day(label),
                Err(TimeOfDayError::Malformed(label.to_string())),
                "{label}"
            );
        }
    }

    #[test]
    fn test_out_of_range_labels() {
        for label in ["00:30 AM", "13:00 PM", "10:60 AM"] {
            assert_eq!(
                parse_time_of_day(label),
                Err(TimeOfDayError::OutOfRange(label.to_string())),
                "{label}"
            );
        }
    }

    #[test]
    fn test_format_time_of_day() {
        assert_eq!(format_time_of_day(0), "12:00 AM");
        assert_eq!(format_time_of_day(570), "09:30 AM");
        assert_eq!(format_time_of_day(720), "12:00 PM");
        assert_eq!(format_time_of_day(1439), "11:59 PM");
        assert_eq!(format_time_of_day(MINUTES_PER_DAY + 60), "01:00 AM");
    }

    #[test]
    fn test_format_then_parse_is_identity_for_every_minute() {
        for minute in 0..MINUTES_PER_DAY {
            assert_eq!(parse_time_of_day(&format_time_of_day(minute)), Ok(minute));
        }
    }
}
