// Settings module
// Grid configuration supplied by the view layer

use serde::{Deserialize, Serialize};

use crate::models::day::Day;
use crate::models::time::{TimeCodec, TimeOfDay};

/// When a drag gesture commits positions to the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovePolicy {
    /// Move the event on every pointer-move tick.
    #[default]
    PerTick,
    /// Track the preview only; move once on pointer-up.
    OnRelease,
}

/// Immutable geometry of the weekly lesson calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Height in pixels of one hour row.
    pub cell_height_px: f32,
    /// Snap granularity in minutes; must divide 60.
    pub minute_interval: u16,
    pub calendar_start_minute: u16,
    /// Exclusive; may be 1440 for a calendar that runs to midnight.
    pub calendar_end_minute: u16,
    /// Width of the time label column left of the day columns.
    pub time_column_width_px: f32,
    pub days: Vec<Day>,
    pub move_policy: MovePolicy,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_height_px: 60.0,
            minute_interval: 15,
            calendar_start_minute: 10 * 60, // 10:00 am
            calendar_end_minute: 21 * 60,   // last row is 8:00 pm
            time_column_width_px: 60.0,
            days: Day::ALL.to_vec(),
            move_policy: MovePolicy::PerTick,
        }
    }
}

impl GridConfig {
    /// Same grid with Monday as the first column.
    pub fn monday_first() -> Self {
        let mut days = Day::ALL.to_vec();
        days.rotate_left(1);
        Self {
            days,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.minute_interval == 0 || 60 % self.minute_interval != 0 {
            return Err(format!(
                "Minute interval must divide 60, got {}",
                self.minute_interval
            ));
        }
        if self.calendar_start_minute >= self.calendar_end_minute {
            return Err("Calendar start must be before calendar end".to_string());
        }
        if self.calendar_end_minute > TimeOfDay::MINUTES_PER_DAY {
            return Err(format!(
                "Calendar end must be at most {} minutes",
                TimeOfDay::MINUTES_PER_DAY
            ));
        }
        if (self.calendar_end_minute - self.calendar_start_minute) % self.minute_interval != 0 {
            return Err("Calendar span must be a whole number of intervals".to_string());
        }
        if self.cell_height_px.is_nan() || self.cell_height_px <= 0.0 {
            return Err("Cell height must be positive".to_string());
        }
        if self.time_column_width_px.is_nan() || self.time_column_width_px < 0.0 {
            return Err("Time column width cannot be negative".to_string());
        }
        if self.days.len() != 7 {
            return Err(format!("Expected 7 days, got {}", self.days.len()));
        }
        for (i, day) in self.days.iter().enumerate() {
            if self.days[..i].contains(day) {
                return Err(format!("Day {} listed twice", day));
            }
        }
        Ok(())
    }

    /// Number of snap intervals in one hour row.
    pub fn intervals_per_cell(&self) -> f32 {
        60.0 / self.minute_interval as f32
    }

    /// Pixel height of one snap interval.
    pub fn interval_height_px(&self) -> f32 {
        self.cell_height_px / self.intervals_per_cell()
    }

    /// Number of snap intervals between calendar start and end.
    pub fn total_intervals(&self) -> u32 {
        let span = self
            .calendar_end_minute
            .saturating_sub(self.calendar_start_minute);
        span.checked_div(self.minute_interval).unwrap_or(0) as u32
    }

    pub fn num_columns(&self) -> usize {
        self.days.len()
    }

    pub fn column_for_day(&self, day: Day) -> Option<usize> {
        self.days.iter().position(|d| *d == day)
    }

    pub fn day_for_column(&self, column: usize) -> Option<Day> {
        self.days.get(column).copied()
    }

    /// Labels for the time column, one per hour row.
    pub fn hour_labels(&self) -> Vec<String> {
        (self.calendar_start_minute..self.calendar_end_minute)
            .step_by(60)
            .filter_map(|minute| TimeOfDay::new(minute).ok())
            .map(TimeCodec::format)
            .collect()
    }
}
