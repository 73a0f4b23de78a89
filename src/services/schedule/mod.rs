//! In-memory lesson schedule.
//! Holds scheduled events and the availability selection, with CRUD,
//! queries and slot selection organized across focused submodules.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Result, ScheduleError};
use crate::models::availability::SlotKey;
use crate::models::event::{Event, EventId};

pub mod availability;
pub mod crud;
pub mod queries;

/// The single mutable schedule shared by the view and the drag controller.
///
/// Ids come from a monotonic counter owned by the schedule, so keying events
/// by id also keeps them in insertion order.
#[derive(Debug, Clone)]
pub struct ScheduleModel {
    pub(crate) events: BTreeMap<EventId, Event>,
    pub(crate) next_id: EventId,
    pub(crate) selected_slots: BTreeSet<SlotKey>,
    pub(crate) selecting: bool,
}

impl ScheduleModel {
    /// Create an empty schedule whose first event gets id 1.
    pub fn new() -> Self {
        Self::with_next_id(1)
    }

    /// Create an empty schedule that continues an existing id sequence.
    pub fn with_next_id(next_id: EventId) -> Self {
        Self {
            events: BTreeMap::new(),
            next_id,
            selected_slots: BTreeSet::new(),
            selecting: true,
        }
    }

    /// The id the next added event will receive.
    pub fn next_id(&self) -> EventId {
        self.next_id
    }

    /// Fails without advancing the counter once it is exhausted.
    fn allocate_id(&mut self) -> Result<EventId> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or_else(|| {
            let value = i64::try_from(id).unwrap_or(i64::MAX);
            ScheduleError::out_of_range("event id", value, 0, i64::MAX)
        })?;
        Ok(id)
    }

    /// How many more ids can be handed out.
    pub(crate) fn remaining_ids(&self) -> u64 {
        u64::MAX - self.next_id
    }
}

impl Default for ScheduleModel {
    fn default() -> Self {
        Self::new()
    }
}
