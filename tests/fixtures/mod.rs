// Test fixtures - reusable test data
// Provides consistent schedules and grid geometry across test files

#![allow(dead_code)]

use muscheduler::{Day, EventColor, EventId, Point, Rect, ScheduleModel, TimeCodec, TimeOfDay};

/// Parse a display time, panicking on malformed fixtures.
pub fn time(display: &str) -> TimeOfDay {
    TimeCodec::parse(display).expect("fixture time should parse")
}

/// Sample schedules
pub mod schedules {
    use super::*;

    /// A schedule holding the 30-minute Monday 3:00 pm lesson.
    pub fn thirty_minute_monday() -> (ScheduleModel, EventId) {
        let mut model = ScheduleModel::new();
        let event = model
            .add_event(
                Day::Mon,
                time("3:00 pm"),
                time("3:30 pm"),
                "30min Lesson",
                EventColor::green(),
            )
            .expect("fixture event should be valid");
        (model, event.id)
    }

    /// The calendar's five sample lessons.
    pub fn sample_week() -> ScheduleModel {
        let mut model = ScheduleModel::new();
        model
            .seed_sample_lessons()
            .expect("sample lessons should be valid");
        model
    }
}

/// Pixel layout of the default grid
pub mod grid {
    use super::*;

    pub const TIME_COLUMN_WIDTH: f32 = 60.0;
    pub const COLUMN_WIDTH: f32 = 100.0;
    pub const INTERVAL_HEIGHT: f32 = 15.0;

    /// Calendar box with a 60px time column and seven 100px day columns.
    pub fn calendar_rect() -> Rect {
        Rect::new(
            200.0,
            100.0,
            TIME_COLUMN_WIDTH + 7.0 * COLUMN_WIDTH,
            44.0 * INTERVAL_HEIGHT,
        )
    }

    /// Pointer position landing the grabbed point of an event in `column`
    /// at `interval`, given where inside the event it was grabbed.
    pub fn pointer_for(column: usize, interval: u32, grab_offset: Point) -> Point {
        let calendar = calendar_rect();
        Point::new(
            calendar.left + TIME_COLUMN_WIDTH + column as f32 * COLUMN_WIDTH + 20.0 + grab_offset.x,
            calendar.top + interval as f32 * INTERVAL_HEIGHT + 2.0 + grab_offset.y,
        )
    }
}
