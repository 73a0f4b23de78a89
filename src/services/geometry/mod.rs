//! Grid geometry for the weekly lesson calendar.
//!
//! Maps minute-of-day values and day columns to discrete interval cells and
//! pixel offsets. Pointer coordinates are plain `f32` pixels in the host's
//! coordinate space.

use crate::error::{Result, ScheduleError};
use crate::models::event::Event;
use crate::models::settings::GridConfig;
use crate::models::time::TimeOfDay;

/// Pixels reserved for the event border when sizing an event box.
pub const VISUAL_MARGIN_PX: f32 = 2.0;
/// Stacking order of the event being dragged.
pub const DRAGGING_Z_INDEX: u32 = 100;
/// Stacking order of resting events.
pub const RESTING_Z_INDEX: u32 = 10;

/// A pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A bounding box as reported by the host (`left`/`top` in page pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x < self.right()
            && point.y >= self.top
            && point.y < self.bottom()
    }
}

/// Where an event box sits in the grid.
///
/// `left_fraction` and `width_fraction` are relative to the day area (the
/// grid without the time column) so the view can lay them out as percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventLayout {
    pub column: usize,
    pub left_fraction: f32,
    pub width_fraction: f32,
    pub top_px: f32,
    pub height_px: f32,
    pub z_index: u32,
}

/// Coordinate conversions for one [`GridConfig`].
#[derive(Debug, Clone)]
pub struct GridGeometry {
    config: GridConfig,
}

impl GridGeometry {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Interval cell containing `time`.
    ///
    /// Never clamps: a time before calendar start or past the last interval
    /// is `OutOfRange`.
    pub fn cell_index(&self, time: TimeOfDay) -> Result<u32> {
        let total = self.config.total_intervals() as i64;
        let offset = time.minutes() as i64 - self.config.calendar_start_minute as i64;
        let index = offset.div_euclid(self.config.minute_interval.max(1) as i64);
        if index < 0 || index >= total {
            return Err(ScheduleError::out_of_range("cell index", index, 0, total - 1));
        }
        Ok(index as u32)
    }

    /// Vertical pixel offset of the top of an interval cell.
    pub fn pixel_offset(&self, cell_index: u32) -> f32 {
        cell_index as f32 * self.config.interval_height_px()
    }

    /// Column under horizontal offset `x` within an area `total_width` wide.
    ///
    /// Clamps into `0..num_columns`; during a fast drag the pointer may be
    /// well outside the grid.
    pub fn column_for_x(x: f32, total_width: f32, num_columns: usize) -> usize {
        if num_columns == 0 {
            return 0;
        }
        let column_width = total_width / num_columns as f32;
        let raw = (x / column_width).floor();
        if raw.is_nan() || raw < 0.0 {
            0
        } else {
            (raw as usize).min(num_columns - 1)
        }
    }

    /// Box height for a lesson lasting `duration_minutes`, never negative.
    pub fn height_for_duration(&self, duration_minutes: u16) -> f32 {
        let intervals = duration_minutes as f32 / self.config.minute_interval as f32;
        let height = intervals * self.config.interval_height_px() - VISUAL_MARGIN_PX;
        height.max(0.0)
    }

    /// Start time of interval cell `index`, counted from calendar start.
    pub fn start_for_interval(&self, index: u32) -> Result<TimeOfDay> {
        let minutes = (self.config.minute_interval as u32)
            .saturating_mul(index)
            .saturating_add(self.config.calendar_start_minute as u32);
        TimeOfDay::new(u16::try_from(minutes).unwrap_or(u16::MAX))
    }

    /// Width of the day columns once the time column is taken off.
    pub fn day_area_width(&self, grid_width: f32) -> f32 {
        (grid_width - self.config.time_column_width_px).max(0.0)
    }

    /// Render placement of an event; `dragging` lifts it above its neighbours.
    pub fn event_layout(&self, event: &Event, dragging: bool) -> Result<EventLayout> {
        let columns = self.config.num_columns();
        let column = self.config.column_for_day(event.day).ok_or_else(|| {
            ScheduleError::out_of_range("day column", event.day as i64, 0, columns as i64 - 1)
        })?;

        let minutes_from_start =
            event.start.minutes() as f32 - self.config.calendar_start_minute as f32;
        let intervals_from_start = minutes_from_start / self.config.minute_interval as f32;

        Ok(EventLayout {
            column,
            left_fraction: column as f32 / columns as f32,
            width_fraction: 1.0 / columns as f32,
            top_px: intervals_from_start * self.config.interval_height_px(),
            height_px: self.height_for_duration(event.duration_minutes()),
            z_index: if dragging {
                DRAGGING_Z_INDEX
            } else {
                RESTING_Z_INDEX
            },
        })
    }
}
