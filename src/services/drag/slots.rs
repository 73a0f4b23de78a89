//! Paint gesture for the availability grid.
//!
//! Pressing on a slot fixes the direction for the whole gesture: pressing an
//! unselected slot selects every slot the pointer enters, pressing a selected
//! one clears them.

use log::debug;

use super::{DragController, PointerListeners};
use crate::models::availability::SlotKey;
use crate::services::schedule::ScheduleModel;

impl<L: PointerListeners> DragController<L> {
    pub fn is_painting_slots(&self) -> bool {
        self.painting_slots
    }

    /// Start a paint gesture on `slot` and apply it there.
    pub fn slot_down(&mut self, model: &mut ScheduleModel, slot: SlotKey) {
        let selecting = !model.is_selected(slot);
        model.set_selecting(selecting);
        model.apply_slot(slot);
        self.painting_slots = true;
        debug!(
            "Slot paint started at {} ({})",
            slot,
            if selecting { "selecting" } else { "clearing" }
        );
    }

    /// Pointer entered `slot`; paints it if a gesture is active.
    /// Returns whether the selection changed.
    pub fn slot_enter(&mut self, model: &mut ScheduleModel, slot: SlotKey) -> bool {
        self.painting_slots && model.apply_slot(slot)
    }

    /// Pointer released or left the grid.
    pub fn slot_up(&mut self) {
        if self.painting_slots {
            debug!("Slot paint ended");
        }
        self.painting_slots = false;
    }
}
