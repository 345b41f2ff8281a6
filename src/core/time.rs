//! Absolute and relative time formatting for templates.
//!
//! Every formatter takes a [`TimeInput`], normalizes it to an instant and
//! renders it. Input that cannot be normalized never errors: a non-empty
//! string comes back unchanged, anything else renders as `""`.

use crate::core::clock::SystemClock;
use crate::domain::ports::Clock;
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, TimeZone, Utc};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// `Mon D, YYYY`
pub const DATE_FORMAT: &str = "%b %-d, %Y";
/// `Mon D, YYYY h:mm AM/PM`
pub const TIME_FORMAT: &str = "%b %-d, %Y %-I:%M %p";
/// `Mon DD, YYYY HH:mm`
pub const DATE_TIME_FORMAT: &str = "%b %d, %Y %H:%M";

/// Unix seconds of `0001-01-01T00:00:00Z`, the zero timestamp many
/// backends serialize for "unset".
const ZERO_INSTANT_SECS: i64 = -62_135_596_800;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Anything a template may hand to a time helper.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeInput {
    Instant(DateTime<FixedOffset>),
    /// RFC 3339 date-time or `YYYY-MM-DD` date.
    Text(String),
    /// Seconds since the Unix epoch.
    Unix(i64),
    Absent,
}

impl TimeInput {
    fn passthrough(&self) -> String {
        match self {
            TimeInput::Text(s) => s.clone(),
            _ => String::new(),
        }
    }
}

impl From<DateTime<FixedOffset>> for TimeInput {
    fn from(value: DateTime<FixedOffset>) -> Self {
        TimeInput::Instant(value)
    }
}

impl From<DateTime<Utc>> for TimeInput {
    fn from(value: DateTime<Utc>) -> Self {
        TimeInput::Instant(value.fixed_offset())
    }
}

impl From<&str> for TimeInput {
    fn from(value: &str) -> Self {
        TimeInput::Text(value.to_string())
    }
}

impl From<String> for TimeInput {
    fn from(value: String) -> Self {
        TimeInput::Text(value)
    }
}

impl From<i64> for TimeInput {
    fn from(value: i64) -> Self {
        TimeInput::Unix(value)
    }
}

impl<T: Into<TimeInput>> From<Option<T>> for TimeInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(TimeInput::Absent, Into::into)
    }
}

impl From<&Value> for TimeInput {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => TimeInput::Text(s.clone()),
            Value::Number(n) => n.as_i64().map_or(TimeInput::Absent, TimeInput::Unix),
            _ => TimeInput::Absent,
        }
    }
}

fn is_zero_instant<Tz: TimeZone>(dt: &DateTime<Tz>) -> bool {
    dt.timestamp() == ZERO_INSTANT_SECS && dt.timestamp_subsec_nanos() == 0
}

/// Formats instants against an injectable clock and display offset.
///
/// The offset only applies to epoch-second input; instants and strings
/// keep the offset they carry, and date-only strings are UTC.
#[derive(Clone)]
pub struct TimeFormatter {
    clock: Arc<dyn Clock>,
    offset: FixedOffset,
}

impl fmt::Debug for TimeFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeFormatter")
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

impl Default for TimeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeFormatter {
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            offset: Utc.fix(),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_shared_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Resolves the input to an instant, or `None` when it is absent, zero or unparseable.
    pub fn normalize(&self, input: &TimeInput) -> Option<DateTime<FixedOffset>> {
        let instant = match input {
            TimeInput::Instant(dt) => Some(*dt),
            TimeInput::Text(s) if s.is_empty() => None,
            TimeInput::Text(s) => parse_time_text(s),
            TimeInput::Unix(0) => None,
            TimeInput::Unix(secs) => Utc
                .timestamp_opt(*secs, 0)
                .single()
                .map(|dt| dt.with_timezone(&self.offset)),
            TimeInput::Absent => None,
        };

        let instant = instant.filter(|dt| !is_zero_instant(dt));
        if instant.is_none() {
            tracing::debug!("time helper could not normalize input: {:?}", input);
        }
        instant
    }

    fn format_with(&self, input: &TimeInput, pattern: &str) -> String {
        match self.normalize(input) {
            Some(dt) => dt.format(pattern).to_string(),
            None => input.passthrough(),
        }
    }

    pub fn format_date(&self, input: impl Into<TimeInput>) -> String {
        self.format_with(&input.into(), DATE_FORMAT)
    }

    pub fn format_time(&self, input: impl Into<TimeInput>) -> String {
        self.format_with(&input.into(), TIME_FORMAT)
    }

    pub fn format_date_time(&self, input: impl Into<TimeInput>) -> String {
        self.format_with(&input.into(), DATE_TIME_FORMAT)
    }

    /// Describes how long ago the input was, relative to the clock.
    pub fn time_ago(&self, input: impl Into<TimeInput>) -> String {
        let input = input.into();
        match self.normalize(&input) {
            Some(dt) => describe_elapsed((self.clock.now() - dt.with_timezone(&Utc)).num_seconds()),
            None => input.passthrough(),
        }
    }
}

fn parse_time_text(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Buckets elapsed seconds into a phrase. Counts are truncated, never rounded.
pub fn describe_elapsed(secs: i64) -> String {
    match secs {
        s if s < MINUTE => "just now".to_string(),
        s if s < HOUR => plural(s / MINUTE, "minute"),
        s if s < DAY => plural(s / HOUR, "hour"),
        s if s < 7 * DAY => match s / DAY {
            1 => "yesterday".to_string(),
            days => format!("{days} days ago"),
        },
        s if s < 30 * DAY => plural(s / (7 * DAY), "week"),
        s if s < 365 * DAY => plural(s / (30 * DAY), "month"),
        s => plural(s / (365 * DAY), "year"),
    }
}

pub fn format_date(input: impl Into<TimeInput>) -> String {
    TimeFormatter::new().format_date(input)
}

pub fn format_time(input: impl Into<TimeInput>) -> String {
    TimeFormatter::new().format_time(input)
}

pub fn format_date_time(input: impl Into<TimeInput>) -> String {
    TimeFormatter::new().format_date_time(input)
}

/// [`TimeFormatter::time_ago`] against the system clock.
pub fn time_ago(input: impl Into<TimeInput>) -> String {
    TimeFormatter::new().time_ago(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use chrono::Duration;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn formatter() -> TimeFormatter {
        TimeFormatter::new().with_clock(FixedClock(fixed_now()))
    }

    #[test]
    fn test_time_ago_buckets() {
        let f = formatter();
        let ago = |d: Duration| f.time_ago(fixed_now() - d);

        assert_eq!(ago(Duration::seconds(30)), "just now");
        assert_eq!(ago(Duration::seconds(-300)), "just now");
        assert_eq!(ago(Duration::seconds(60)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(5)), "5 minutes ago");
        assert_eq!(ago(Duration::minutes(59)), "59 minutes ago");
        assert_eq!(ago(Duration::minutes(60)), "1 hour ago");
        assert_eq!(ago(Duration::hours(23)), "23 hours ago");
        assert_eq!(ago(Duration::hours(24)), "yesterday");
        assert_eq!(ago(Duration::hours(47)), "yesterday");
        assert_eq!(ago(Duration::days(6)), "6 days ago");
        assert_eq!(ago(Duration::days(7)), "1 week ago");
        assert_eq!(ago(Duration::days(29)), "4 weeks ago");
        assert_eq!(ago(Duration::days(30)), "1 month ago");
        assert_eq!(ago(Duration::days(364)), "12 months ago");
        assert_eq!(ago(Duration::days(365)), "1 year ago");
        assert_eq!(ago(Duration::days(365 * 3 + 100)), "3 years ago");
    }

    #[test]
    fn test_time_ago_rejected_input() {
        let f = formatter();
        assert_eq!(f.time_ago(""), "");
        assert_eq!(f.time_ago(TimeInput::Absent), "");
        assert_eq!(f.time_ago(0i64), "");
        assert_eq!(f.time_ago("not a date"), "not a date");
        assert_eq!(f.time_ago("0001-01-01T00:00:00Z"), "0001-01-01T00:00:00Z");
        let zero = Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(f.time_ago(zero), "");
    }

    #[test]
    fn test_time_ago_accepts_every_input_shape() {
        let f = formatter();
        let two_hours = fixed_now() - Duration::hours(2);
        assert_eq!(f.time_ago(two_hours), "2 hours ago");
        assert_eq!(f.time_ago(two_hours.to_rfc3339()), "2 hours ago");
        assert_eq!(f.time_ago(two_hours.timestamp()), "2 hours ago");
        assert_eq!(f.time_ago("2024-06-13"), "2 days ago");
    }

    #[test]
    fn test_absolute_formats() {
        let f = formatter();
        assert_eq!(f.format_date("2024-06-15"), "Jun 15, 2024");
        assert_eq!(f.format_date("2024-06-05"), "Jun 5, 2024");
        assert_eq!(f.format_time("2024-06-15T10:30:00Z"), "Jun 15, 2024 10:30 AM");
        assert_eq!(f.format_time("2024-06-15T00:05:00Z"), "Jun 15, 2024 12:05 AM");
        assert_eq!(f.format_date_time("2024-06-05T14:30:00Z"), "Jun 05, 2024 14:30");
    }

    #[test]
    fn test_string_keeps_its_offset_and_epoch_uses_display_offset() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let f = formatter().with_offset(plus_two);
        assert_eq!(f.format_date_time("2024-06-15T14:30:00+05:00"), "Jun 15, 2024 14:30");
        let epoch = Utc.with_ymd_and_hms(2024, 6, 15, 14, 30, 0).unwrap().timestamp();
        assert_eq!(f.format_date_time(epoch), "Jun 15, 2024 16:30");
    }

    #[test]
    fn test_debug_output_is_stable() {
        let f = TimeFormatter::new();
        assert_eq!(format!("{:?}", f), format!("{:?}", f));
        assert!(!format!("{:?}", f).contains("now"));
    }

    #[test]
    fn test_value_conversion() {
        assert_eq!(TimeInput::from(&Value::Null), TimeInput::Absent);
        assert_eq!(TimeInput::from(&serde_json::json!(1.5)), TimeInput::Absent);
        assert_eq!(TimeInput::from(&serde_json::json!(42)), TimeInput::Unix(42));
        assert_eq!(TimeInput::from(None::<i64>), TimeInput::Absent);
    }
}
