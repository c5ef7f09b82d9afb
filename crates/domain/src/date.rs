use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ScheduleParseError {
    #[error("Invalid interview date: `{0}`. Expected format is YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid interview time: `{0}`. Expected format is HH:MM")]
    InvalidTime(String),
    #[error("Interview schedule `{0}` does not exist in the configured timezone")]
    NonExistentLocalTime(String),
}

/// The zone in which the wall-clock date and time of an `Interview` are
/// interpreted. Interviews are stored without any timezone information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReminderTimezone {
    /// The local timezone of the server process
    Local,
    Named(Tz),
}

impl ReminderTimezone {
    /// Accepts `local` or an IANA timezone name like `Europe/Oslo`
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("local") {
            return Some(Self::Local);
        }
        name.parse::<Tz>().ok().map(Self::Named)
    }

    /// Converts a wall-clock datetime into an instant.
    ///
    /// Ambiguous wall-clock times (when clocks are turned back) resolve to the
    /// earliest instant. Times that fall into a gap (when clocks are turned
    /// forward) are moved forward by one hour.
    pub fn resolve(&self, datetime: &NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Self::Local => resolve_in(&Local, datetime),
            Self::Named(tz) => resolve_in(tz, datetime),
        }
    }
}

impl Default for ReminderTimezone {
    fn default() -> Self {
        Self::Local
    }
}

fn resolve_in<T: TimeZone>(tz: &T, datetime: &NaiveDateTime) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(datetime) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => tz
            .from_local_datetime(&(*datetime + Duration::hours(1)))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc)),
    }
}

/// Combines a `YYYY-MM-DD` date and a `HH:MM` (or `HH:MM:SS`) time
pub fn parse_schedule(date: &str, time: &str) -> Result<NaiveDateTime, ScheduleParseError> {
    let parsed_date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| ScheduleParseError::InvalidDate(date.to_string()))?;
    let parsed_time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time.trim(), "%H:%M:%S"))
        .map_err(|_| ScheduleParseError::InvalidTime(time.to_string()))?;

    Ok(parsed_date.and_time(parsed_time))
}
