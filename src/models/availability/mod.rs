// Availability module
// Fifteen-minute slots of the availability grid

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::day::Day;
use crate::models::time::{TimeCodec, TimeOfDay};

pub const QUARTERS_PER_HOUR: u8 = 4;
pub const MINUTES_PER_QUARTER: u16 = 15;

/// Address of one availability cell: day, 24-hour clock hour, quarter of the hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "SlotKeyRepr")]
pub struct SlotKey {
    day: Day,
    hour: u8,
    quarter: u8,
}

/// Unchecked wire form of a [`SlotKey`].
#[derive(Deserialize)]
struct SlotKeyRepr {
    day: Day,
    hour: u8,
    quarter: u8,
}

impl TryFrom<SlotKeyRepr> for SlotKey {
    type Error = ScheduleError;

    fn try_from(repr: SlotKeyRepr) -> Result<Self> {
        Self::new(repr.day, repr.hour, repr.quarter)
    }
}

impl SlotKey {
    pub fn new(day: Day, hour: u8, quarter: u8) -> Result<Self> {
        if hour > 23 {
            return Err(ScheduleError::out_of_range("slot hour", hour as i64, 0, 23));
        }
        if quarter >= QUARTERS_PER_HOUR {
            return Err(ScheduleError::out_of_range(
                "slot quarter",
                quarter as i64,
                0,
                QUARTERS_PER_HOUR as i64 - 1,
            ));
        }
        Ok(Self { day, hour, quarter })
    }

    /// The slot containing the given time.
    pub fn containing(day: Day, time: TimeOfDay) -> Self {
        Self {
            day,
            hour: time.hour() as u8,
            quarter: (time.minute() / MINUTES_PER_QUARTER) as u8,
        }
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn quarter(&self) -> u8 {
        self.quarter
    }

    /// Position of the slot within its day, `0..96`.
    pub fn index_in_day(&self) -> u16 {
        self.hour as u16 * QUARTERS_PER_HOUR as u16 + self.quarter as u16
    }

    /// Minute of day at which the slot begins.
    pub fn start_minute(&self) -> u16 {
        self.index_in_day() * MINUTES_PER_QUARTER
    }

    pub fn start(&self) -> TimeOfDay {
        TimeOfDay::new(self.start_minute()).unwrap_or(TimeOfDay::MIDNIGHT)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.start())
    }
}

/// One quarter-hour cell in a [`TimeSlotRow`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarterSlot {
    pub quarter: u8,
    pub minutes: u16,
    /// 24-hour `H:MM` value, e.g. `"13:15"`.
    pub value: String,
}

/// A labelled hour row of the availability grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlotRow {
    pub hour: u8,
    /// Display label for the hour, e.g. `"1:00 pm"`.
    pub label: String,
    pub slots: Vec<QuarterSlot>,
}

impl TimeSlotRow {
    pub fn meridiem(&self) -> &str {
        &self.label[self.label.len() - 2..]
    }
}

/// The 24 hour rows of the availability grid, four quarter slots each.
pub fn time_slot_rows() -> Vec<TimeSlotRow> {
    (0..24u8)
        .map(|hour| {
            let top_of_hour = TimeOfDay::new(hour as u16 * 60).unwrap_or(TimeOfDay::MIDNIGHT);
            let label = TimeCodec::format(top_of_hour);
            let slots = (0..QUARTERS_PER_HOUR)
                .map(|quarter| {
                    let minutes = quarter as u16 * MINUTES_PER_QUARTER;
                    QuarterSlot {
                        quarter,
                        minutes,
                        value: format!("{}:{:02}", hour, minutes),
                    }
                })
                .collect();
            TimeSlotRow { hour, label, slots }
        })
        .collect()
}
