//! Humanized descriptions of time differences
//!
//! A difference is rendered in the largest whole unit it reaches, from
//! seconds up to years, with the unit name pluralized. The signed difference
//! rides along so callers can tell past from future.

use crate::text::pluralize;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Millisecond divisor and singular name for each supported unit, smallest
/// first. A difference must reach a unit's divisor to be rendered in it.
const UNIT_DIVISORS: [(i64, &str); 7] = [
    (1_000, "second"),
    (60_000, "minute"),
    (3_600_000, "hour"),
    (86_400_000, "day"),
    (604_800_000, "week"),
    (2_630_880_000, "month"),
    (31_570_560_000, "year"),
];

/// A rendered timespan plus the signed difference it was rendered from
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimespanDescription {
    /// Human-readable rendering, e.g. "35 seconds"
    pub description: String,
    /// Signed difference `end - start` in milliseconds
    pub difference_ms: i64,
}

/// Describe the span between two instants in the largest whole unit
///
/// The description is computed from the absolute difference, so spans into
/// the past and future render identically; the sign survives in
/// `difference_ms`. Sub-second spans render as "0 seconds".
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use kitbag::timespan::describe_timespan;
///
/// let start = Utc::now();
/// let described = describe_timespan(start, start + Duration::seconds(35));
/// assert_eq!(described.description, "35 seconds");
/// assert_eq!(described.difference_ms, 35_000);
/// ```
pub fn describe_timespan(start: DateTime<Utc>, end: DateTime<Utc>) -> TimespanDescription {
    let difference_ms = (end - start).num_milliseconds();
    let magnitude = difference_ms.abs();

    let (divisor, unit_name) = UNIT_DIVISORS
        .iter()
        .rev()
        .find(|(divisor, _)| magnitude >= *divisor)
        .copied()
        .unwrap_or(UNIT_DIVISORS[0]);

    let count = (magnitude / divisor) as u64;
    TimespanDescription {
        description: format!("{} {}", count, pluralize(unit_name, count)),
        difference_ms,
    }
}

/// Describe an instant relative to a reference instant with tense
///
/// Instants after `now` render as "in {span}", instants before (or equal to)
/// `now` as "{span} ago".
pub fn relative_to(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let TimespanDescription {
        description,
        difference_ms,
    } = describe_timespan(date, now);

    if difference_ms < 0 {
        format!("in {description}")
    } else {
        format!("{description} ago")
    }
}

/// Describe an instant relative to the current time with tense
pub fn time_since(date: DateTime<Utc>) -> String {
    relative_to(date, Utc::now())
}

/// Render a whole number of minutes as "H:MM"
///
/// # Examples
///
/// ```
/// use kitbag::timespan::minutes_to_clock;
///
/// assert_eq!(minutes_to_clock(90), "1:30");
/// ```
pub fn minutes_to_clock(minutes: u32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}
