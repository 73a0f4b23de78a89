// Time-of-day module
// Minute-of-day values and the "H:MM am/pm" display codec

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Minutes since midnight, always within `0..=1439`.
///
/// Display strings are a derived view; serialized as the canonical
/// display string so seed files read like the calendar shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MINUTES_PER_DAY: u16 = 24 * 60;
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const LAST_MINUTE: TimeOfDay = TimeOfDay(Self::MINUTES_PER_DAY - 1);

    /// Create a time from a minute-of-day offset.
    pub fn new(minutes: u16) -> Result<Self> {
        if minutes >= Self::MINUTES_PER_DAY {
            return Err(ScheduleError::out_of_range(
                "minute of day",
                minutes as i64,
                0,
                Self::LAST_MINUTE.0 as i64,
            ));
        }
        Ok(Self(minutes))
    }

    /// Create a time from a 24-hour clock hour and minute.
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self> {
        if minute > 59 {
            return Err(ScheduleError::out_of_range("minute", minute as i64, 0, 59));
        }
        Self::new(hour.saturating_mul(60).saturating_add(minute))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Shift by a number of minutes, failing if the result leaves the day.
    pub fn checked_add_minutes(self, minutes: u16) -> Result<Self> {
        let total = self.0 as u32 + minutes as u32;
        if total >= Self::MINUTES_PER_DAY as u32 {
            return Err(ScheduleError::out_of_range(
                "minute of day",
                total as i64,
                0,
                Self::LAST_MINUTE.0 as i64,
            ));
        }
        Ok(Self(total as u16))
    }

    pub fn to_naive_time(self) -> NaiveTime {
        // Both components are in range by construction.
        NaiveTime::from_hms_opt(self.hour() as u32, self.minute() as u32, 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Seconds are truncated.
    fn from(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&TimeCodec::format(*self))
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        TimeCodec::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self> {
        TimeCodec::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        TimeCodec::format(value)
    }
}

/// Converts between `"H:MM am/pm"` display strings and [`TimeOfDay`].
pub struct TimeCodec;

impl TimeCodec {
    const PARSE_FORMAT: &'static str = "%I:%M%p";
    const DISPLAY_FORMAT: &'static str = "%-I:%M %P";

    /// Parse a 12-hour display time such as `"3:00 pm"` or `"12:15AM"`.
    ///
    /// Accepts one or two hour digits, one or two minute digits, at most one
    /// whitespace character before the case-insensitive `am`/`pm` suffix.
    /// `12:MM am` is the midnight hour and `12:MM pm` the noon hour.
    pub fn parse(display: &str) -> Result<TimeOfDay> {
        let invalid = || ScheduleError::InvalidFormat(display.to_string());

        let lower = display.to_ascii_lowercase();
        let (clock, suffix) = if let Some(rest) = lower.strip_suffix("am") {
            (rest, "am")
        } else if let Some(rest) = lower.strip_suffix("pm") {
            (rest, "pm")
        } else {
            return Err(invalid());
        };
        let clock = clock
            .strip_suffix(|c: char| c.is_whitespace())
            .unwrap_or(clock);

        let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;
        if !is_short_number(hour) || !is_short_number(minute) {
            return Err(invalid());
        }

        let normalized = format!("{}:{:0>2}{}", hour, minute, suffix);
        NaiveTime::parse_from_str(&normalized, Self::PARSE_FORMAT)
            .map(TimeOfDay::from)
            .map_err(|_| invalid())
    }

    /// Format as `"H:MM am"` / `"H:MM pm"` with two-digit minutes.
    pub fn format(time: TimeOfDay) -> String {
        time.to_naive_time().format(Self::DISPLAY_FORMAT).to_string()
    }
}

/// One or two ASCII digits.
fn is_short_number(text: &str) -> bool {
    (1..=2).contains(&text.len()) && text.bytes().all(|b| b.is_ascii_digit())
}
