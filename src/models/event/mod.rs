// Event module
// A scheduled lesson occupying one day column of the weekly calendar

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::color::EventColor;
use crate::models::day::Day;
use crate::models::time::TimeOfDay;

/// Identifier assigned by the schedule; never reused after deletion.
pub type EventId = u64;

/// A scheduled lesson. Invariant: `end > start`.
///
/// Only the schedule builds these; input arrives as [`NewEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub day: Day,
    #[serde(rename = "startTime")]
    pub start: TimeOfDay,
    #[serde(rename = "endTime")]
    pub end: TimeOfDay,
    pub color: EventColor,
}

impl Event {
    /// Length of the lesson in minutes; zero for an inverted interval.
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Whether the lesson covers the given minute of its day.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.start <= time && time < self.end
    }

    /// Whether two lessons share any minute on the same day.
    ///
    /// Overlap is allowed in the schedule; this only informs rendering.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

/// Check the interval invariant shared by creation and updates.
pub fn validate_interval(start: TimeOfDay, end: TimeOfDay) -> Result<()> {
    if end <= start {
        return Err(ScheduleError::InvalidInterval {
            start: start.minutes(),
            end: end.minutes(),
        });
    }
    Ok(())
}

/// Event data before the schedule assigns an id.
///
/// Field names follow the seed file format (`startTime`, `endTime`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub day: Day,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default)]
    pub color: EventColor,
}

impl NewEvent {
    pub fn new(
        title: impl Into<String>,
        day: Day,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
    ) -> Self {
        Self {
            title: title.into(),
            day,
            start_time,
            end_time,
            color: EventColor::default(),
        }
    }

    pub fn color(mut self, color: EventColor) -> Self {
        self.color = color;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_interval(self.start_time, self.end_time)
    }
}

/// Partial update; only the supplied fields change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub day: Option<Day>,
    pub start_time: Option<TimeOfDay>,
    pub end_time: Option<TimeOfDay>,
    pub color: Option<EventColor>,
}

impl EventPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn day(mut self, day: Day) -> Self {
        self.day = Some(day);
        self
    }

    pub fn start_time(mut self, start: TimeOfDay) -> Self {
        self.start_time = Some(start);
        self
    }

    pub fn end_time(mut self, end: TimeOfDay) -> Self {
        self.end_time = Some(end);
        self
    }

    pub fn color(mut self, color: EventColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Produce the patched event without touching the original.
    pub fn apply(&self, event: &Event) -> Result<Event> {
        let start = self.start_time.unwrap_or(event.start);
        let end = self.end_time.unwrap_or(event.end);
        validate_interval(start, end)?;

        Ok(Event {
            id: event.id,
            title: self.title.clone().unwrap_or_else(|| event.title.clone()),
            day: self.day.unwrap_or(event.day),
            start,
            end,
            color: self.color.clone().unwrap_or_else(|| event.color.clone()),
        })
    }
}
