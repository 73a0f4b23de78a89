// Property-based tests for the scheduling core
// Exercise the codec, schedule and drag controller with random inputs

use muscheduler::{
    Day, DragController, EventColor, GridConfig, Point, Rect, ScheduleModel, SlotKey, TimeCodec,
    TimeOfDay,
};
use proptest::prelude::*;

fn any_day() -> impl Strategy<Value = Day> {
    (0..7usize).prop_map(|i| Day::ALL[i])
}

fn any_slot() -> impl Strategy<Value = SlotKey> {
    (any_day(), 0..24u8, 0..4u8).prop_map(|(day, hour, quarter)| {
        SlotKey::new(day, hour, quarter).expect("generated slot is in range")
    })
}

/// A lesson start and a duration that keeps it within the day.
fn any_interval() -> impl Strategy<Value = (u16, u16)> {
    (0..1380u16).prop_flat_map(|start| (Just(start), 1..=(1439 - start).min(180)))
}

proptest! {
    /// Property: formatting then parsing returns the same minute
    #[test]
    fn prop_format_parse_round_trip(minutes in 0..1440u16) {
        let time = TimeOfDay::new(minutes).unwrap();
        prop_assert_eq!(TimeCodec::parse(&TimeCodec::format(time)).unwrap(), time);
    }

    /// Property: moving a lesson never changes its length
    #[test]
    fn prop_move_preserves_duration(
        (start, duration) in any_interval(),
        day in any_day(),
        new_start in 0..1440u16,
    ) {
        let mut model = ScheduleModel::new();
        let event = model
            .add_event(
                Day::Mon,
                TimeOfDay::new(start).unwrap(),
                TimeOfDay::new(start + duration).unwrap(),
                "Lesson",
                EventColor::blue(),
            )
            .unwrap();

        let moved = model.move_event(event.id, day, TimeOfDay::new(new_start).unwrap());
        let after = model.get_event(event.id).unwrap();
        prop_assert_eq!(after.duration_minutes(), duration);
        if moved.is_ok() {
            prop_assert_eq!(after.start.minutes(), new_start);
            prop_assert_eq!(after.day, day);
        } else {
            prop_assert_eq!(after, &event);
        }
    }

    /// Property: toggling a slot twice restores its state
    #[test]
    fn prop_toggle_twice_is_identity(slot in any_slot(), preselect in any::<bool>()) {
        let mut model = ScheduleModel::new();
        if preselect {
            model.toggle_slot(slot);
        }
        let before = model.is_selected(slot);
        model.toggle_slot(slot);
        model.toggle_slot(slot);
        prop_assert_eq!(model.is_selected(slot), before);
    }

    /// Property: add followed by remove leaves the listing unchanged
    #[test]
    fn prop_add_remove_is_neutral((start, duration) in any_interval(), day in any_day()) {
        let mut model = ScheduleModel::new();
        model.seed_sample_lessons().unwrap();
        let before: Vec<_> = model.list_events(None).cloned().collect();

        let added = model
            .add_event(
                day,
                TimeOfDay::new(start).unwrap(),
                TimeOfDay::new(start + duration).unwrap(),
                "Extra",
                EventColor::red(),
            )
            .unwrap();
        model.remove_event(added.id).unwrap();

        let after: Vec<_> = model.list_events(None).cloned().collect();
        prop_assert_eq!(after, before);
    }

    /// Property: any pointer path keeps the dragged lesson inside the grid
    #[test]
    fn prop_drag_stays_in_grid(
        path in prop::collection::vec((-2000.0f32..2000.0, -2000.0f32..2000.0), 1..20),
    ) {
        let mut model = ScheduleModel::new();
        model.seed_sample_lessons().unwrap();
        let config = GridConfig::default();
        let mut drag = DragController::new(config.clone());
        let calendar = Rect::new(0.0, 0.0, 760.0, 660.0);

        let target = Rect::new(0.0, 0.0, 100.0, 118.0);
        prop_assert!(drag.pointer_down(&model, 5, Point::new(10.0, 10.0), target));
        for (x, y) in path {
            drag.pointer_move(&mut model, Point::new(x, y), calendar).unwrap();
        }
        drag.pointer_up(&mut model).unwrap();

        let event = model.get_event(5).unwrap();
        prop_assert_eq!(event.duration_minutes(), 120);
        prop_assert!(event.start.minutes() >= config.calendar_start_minute);
        prop_assert!(event.start.minutes() < config.calendar_end_minute);
        prop_assert_eq!((event.start.minutes() - config.calendar_start_minute) % 15, 0);
    }
}
