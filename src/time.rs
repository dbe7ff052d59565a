use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Weekday labels, Sunday-first, matching the console's locale.
pub const DAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Every half-hour boundary within `[start_hour, end_hour)`, formatted
/// as zero-padded `HH:MM`.
///
/// An inverted range produces an empty axis rather than an error.
///
/// # Examples
/// ```
/// use chinba_libs::time::half_hour_slots;
///
/// assert_eq!(half_hour_slots(9, 11), vec!["09:00", "09:30", "10:00", "10:30"]);
/// assert!(half_hour_slots(12, 12).is_empty());
/// assert!(half_hour_slots(18, 9).is_empty());
/// ```
pub fn half_hour_slots(start_hour: u8, end_hour: u8) -> Vec<String> {
    let mut slots = Vec::with_capacity(
        end_hour.saturating_sub(start_hour) as usize * 2,
    );

    for hour in start_hour..end_hour {
        slots.push(format!("{:02}:00", hour));
        slots.push(format!("{:02}:30", hour));
    }

    slots
}

/// The join key for one grid cell.
///
/// Slot records are matched against grid coordinates by exact string
/// equality on this key, so both sides of the join must build it here
/// and nowhere else.
///
/// # Examples
/// ```
/// use chinba_libs::time::slot_key;
///
/// assert_eq!(slot_key("2024-03-04", "09:30"), "2024-03-04T09:30:00");
/// ```
pub fn slot_key(date: &str, time: &str) -> String {
    format!("{}T{}:00", date, time)
}

/// Column header for one candidate date: the raw date string, a short
/// `M/D` label, and the localized weekday.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DateInfo {
    pub date: String,
    pub label: String,
    pub day: String,
}

impl DateInfo {
    /// Builds the header for an ISO `YYYY-MM-DD` date string.
    ///
    /// A date that does not parse keeps its raw string as the label and
    /// gets an empty weekday, consistent with the grid's silent-degrade
    /// contract for malformed upstream data.
    pub fn from_date(date: &str) -> DateInfo {
        match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(parsed) => DateInfo {
                date: date.to_string(),
                label: format!("{}/{}", parsed.month(), parsed.day()),
                day: DAY_LABELS[parsed.weekday().num_days_from_sunday() as usize].to_string(),
            },
            Err(_) => DateInfo {
                date: date.to_string(),
                label: date.to_string(),
                day: String::new(),
            },
        }
    }
}
