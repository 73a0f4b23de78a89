use super::ScheduleModel;
use crate::models::day::Day;
use crate::models::event::{Event, EventId};
use crate::models::time::TimeOfDay;

impl ScheduleModel {
    /// Events in insertion order, optionally limited to one day.
    ///
    /// The iterator is lazy and `Clone`; each call starts a fresh cursor.
    pub fn list_events(&self, day: Option<Day>) -> impl Iterator<Item = &Event> + Clone + '_ {
        self.events
            .values()
            .filter(move |event| day.map_or(true, |d| event.day == d))
    }

    pub fn get_event(&self, id: EventId) -> Option<&Event> {
        self.events.get(&id)
    }

    pub fn contains_event(&self, id: EventId) -> bool {
        self.events.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events covering `time` on `day`, bottom to top in render order.
    pub fn events_at(&self, day: Day, time: TimeOfDay) -> impl Iterator<Item = &Event> + '_ {
        self.list_events(Some(day))
            .filter(move |event| event.contains(time))
    }

    /// Other events sharing time with `id` on the same day.
    pub fn overlapping(&self, id: EventId) -> impl Iterator<Item = &Event> + '_ {
        let target = self.events.get(&id);
        self.events.values().filter(move |event| {
            target.map_or(false, |t| t.id != event.id && t.overlaps(event))
        })
    }
}
