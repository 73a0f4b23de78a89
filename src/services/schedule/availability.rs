use std::fmt;

use log::debug;

use super::ScheduleModel;
use crate::models::availability::{SlotKey, MINUTES_PER_QUARTER};
use crate::models::day::Day;
use crate::models::time::{TimeCodec, TimeOfDay};

/// A run of contiguous selected slots on one day, `[start, end)` in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityRange {
    pub day: Day,
    pub start_minute: u16,
    /// Exclusive; 1440 when the run reaches midnight.
    pub end_minute: u16,
}

impl fmt::Display for AvailabilityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = |minute: u16| {
            TimeOfDay::new(minute % TimeOfDay::MINUTES_PER_DAY)
                .map(TimeCodec::format)
                .unwrap_or_default()
        };
        write!(
            f,
            "{}: {}-{}",
            self.day.full_name(),
            label(self.start_minute),
            label(self.end_minute)
        )
    }
}

impl ScheduleModel {
    /// Flip one slot; returns the new selection state.
    pub fn toggle_slot(&mut self, slot: SlotKey) -> bool {
        let selected = if self.selected_slots.remove(&slot) {
            false
        } else {
            self.selected_slots.insert(slot);
            true
        };
        debug!("Toggled slot {} -> {}", slot, selected);
        selected
    }

    /// Fix the paint direction for the current gesture: `true` adds, `false` removes.
    pub fn set_selecting(&mut self, selecting: bool) {
        self.selecting = selecting;
    }

    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    pub fn is_selected(&self, slot: SlotKey) -> bool {
        self.selected_slots.contains(&slot)
    }

    /// Add or remove `slot` according to the paint direction; idempotent.
    /// Returns whether the selection changed.
    pub fn apply_slot(&mut self, slot: SlotKey) -> bool {
        if self.selecting {
            self.selected_slots.insert(slot)
        } else {
            self.selected_slots.remove(&slot)
        }
    }

    pub fn clear_slots(&mut self) {
        self.selected_slots.clear();
    }

    /// Selected slots, ordered by day then time.
    pub fn selected_slots(&self, day: Option<Day>) -> impl Iterator<Item = &SlotKey> + Clone + '_ {
        self.selected_slots
            .iter()
            .filter(move |slot| day.map_or(true, |d| slot.day() == d))
    }

    /// Contiguous selected runs for one day.
    pub fn availability_ranges(&self, day: Day) -> Vec<AvailabilityRange> {
        let mut ranges: Vec<AvailabilityRange> = Vec::new();
        for slot in self.selected_slots(Some(day)) {
            let start = slot.start_minute();
            let end = start + MINUTES_PER_QUARTER;
            match ranges.last_mut() {
                Some(last) if last.end_minute == start => last.end_minute = end,
                _ => ranges.push(AvailabilityRange {
                    day,
                    start_minute: start,
                    end_minute: end,
                }),
            }
        }
        ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn slot(day: Day, hour: u8, quarter: u8) -> SlotKey {
        SlotKey::new(day, hour, quarter).unwrap()
    }

    #[test]
    fn test_toggle_slot_is_involution() {
        let mut model = ScheduleModel::new();
        let key = slot(Day::Mon, 13, 0);

        assert!(model.toggle_slot(key));
        assert!(model.is_selected(key));
        assert!(!model.toggle_slot(key));
        assert!(!model.is_selected(key));
    }

    #[test]
    fn test_apply_slot_follows_direction() {
        let mut model = ScheduleModel::new();
        let key = slot(Day::Wed, 9, 2);

        assert!(model.is_selecting());
        assert!(model.apply_slot(key));
        assert!(!model.apply_slot(key));
        assert!(model.is_selected(key));

        model.set_selecting(false);
        assert!(model.apply_slot(key));
        assert!(!model.apply_slot(key));
        assert!(!model.is_selected(key));
    }

    #[test]
    fn test_availability_ranges_merge_contiguous_slots() {
        let mut model = ScheduleModel::new();
        for hour in 13..15 {
            for quarter in 0..4 {
                model.toggle_slot(slot(Day::Mon, hour, quarter));
            }
        }
        model.toggle_slot(slot(Day::Mon, 16, 2));
        model.toggle_slot(slot(Day::Fri, 13, 0));

        let ranges = model.availability_ranges(Day::Mon);
        assert_eq!(
            ranges,
            vec![
                AvailabilityRange {
                    day: Day::Mon,
                    start_minute: 780,
                    end_minute: 900
                },
                AvailabilityRange {
                    day: Day::Mon,
                    start_minute: 990,
                    end_minute: 1005
                },
            ]
        );
        assert_eq!(ranges[0].to_string(), "Monday: 1:00 pm-3:00 pm");
    }

    #[test]
    fn test_range_ending_at_midnight() {
        let mut model = ScheduleModel::new();
        model.toggle_slot(slot(Day::Sat, 23, 3));
        let ranges = model.availability_ranges(Day::Sat);
        assert_eq!(ranges[0].end_minute, 1440);
        assert_eq!(ranges[0].to_string(), "Saturday: 11:45 pm-12:00 am");
    }

    #[test]
    fn test_selected_slots_by_day() {
        let mut model = ScheduleModel::new();
        model.toggle_slot(slot(Day::Tue, 10, 0));
        model.toggle_slot(slot(Day::Mon, 10, 0));
        assert_eq!(model.selected_slots(None).count(), 2);
        assert_eq!(model.selected_slots(Some(Day::Mon)).count(), 1);
        model.clear_slots();
        assert_eq!(model.selected_slots(None).count(), 0);
    }
}
