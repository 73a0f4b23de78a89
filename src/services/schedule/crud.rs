use log::debug;

use super::ScheduleModel;
use crate::error::{Result, ScheduleError};
use crate::models::color::EventColor;
use crate::models::day::Day;
use crate::models::event::{validate_interval, Event, EventId, EventPatch, NewEvent};
use crate::models::time::TimeOfDay;

impl ScheduleModel {
    /// Add a lesson and return it with its newly assigned id.
    pub fn add_event(
        &mut self,
        day: Day,
        start: TimeOfDay,
        end: TimeOfDay,
        title: impl Into<String>,
        color: EventColor,
    ) -> Result<Event> {
        validate_interval(start, end)?;

        let event = Event {
            id: self.allocate_id()?,
            title: title.into(),
            day,
            start,
            end,
            color,
        };
        debug!(
            "Added event {} '{}' on {} {}-{}",
            event.id, event.title, event.day, event.start, event.end
        );
        self.events.insert(event.id, event.clone());
        Ok(event)
    }

    /// Add a lesson from a draft.
    pub fn insert(&mut self, draft: NewEvent) -> Result<Event> {
        self.add_event(
            draft.day,
            draft.start_time,
            draft.end_time,
            draft.title,
            draft.color,
        )
    }

    /// Apply a partial update; on failure the event is left untouched.
    pub fn update_event(&mut self, id: EventId, patch: &EventPatch) -> Result<Event> {
        let current = self.events.get(&id).ok_or(ScheduleError::NotFound(id))?;
        let updated = patch.apply(current)?;

        debug!("Updated event {}: {:?}", id, patch);
        self.events.insert(id, updated.clone());
        Ok(updated)
    }

    /// Remove a lesson, returning it. Removing the same id again fails.
    pub fn remove_event(&mut self, id: EventId) -> Result<Event> {
        let removed = self.events.remove(&id).ok_or(ScheduleError::NotFound(id))?;
        debug!("Removed event {} '{}'", id, removed.title);
        Ok(removed)
    }

    /// Move a lesson to a new day and start time, keeping its duration.
    ///
    /// Called on every drag tick; touches only the one event.
    pub fn move_event(&mut self, id: EventId, day: Day, start: TimeOfDay) -> Result<()> {
        let event = self.events.get_mut(&id).ok_or(ScheduleError::NotFound(id))?;
        let end = start.checked_add_minutes(event.duration_minutes())?;

        event.day = day;
        event.start = start;
        event.end = end;
        debug!("Moved event {} to {} {}-{}", id, day, start, end);
        Ok(())
    }
}
