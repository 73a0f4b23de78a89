// Drag System
//
// Moves lessons around the weekly grid with the pointer.
// - pointer_down on an event starts a session and acquires the host's
//   move/up listeners
// - pointer_move snaps the pointer to a day column and interval row
// - pointer_up (or cancel, or dropping the controller) ends the session
//   and releases the listeners
//
// The availability grid's paint gesture lives in `slots`.

use log::{debug, warn};

use crate::error::Result;
use crate::models::day::Day;
use crate::models::event::{Event, EventId};
use crate::models::settings::{GridConfig, MovePolicy};
use crate::models::time::TimeOfDay;
use crate::services::geometry::{GridGeometry, Point, Rect};
use crate::services::schedule::ScheduleModel;

mod slots;

/// Host hooks for document-level pointer listeners.
///
/// `begin_drag_listening` is called once when a drag starts and
/// `end_drag_listening` exactly once when it ends, whichever way it ends.
#[cfg_attr(test, mockall::automock)]
pub trait PointerListeners {
    fn begin_drag_listening(&mut self);
    fn end_drag_listening(&mut self);
}

/// Listener hooks for hosts that route pointer events themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoListeners;

impl PointerListeners for NoListeners {
    fn begin_drag_listening(&mut self) {}
    fn end_drag_listening(&mut self) {}
}

/// Snapped position of the event under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPreview {
    pub event_id: EventId,
    pub column: usize,
    pub day: Day,
    pub interval_index: u32,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// State of one drag gesture, from pointer-down to pointer-up.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub event_id: EventId,
    /// Where inside the event box the pointer went down.
    pub pointer_offset: Point,
    pub original_duration_minutes: u16,
    pub original_day: Day,
    pub original_start: TimeOfDay,
    pub preview: Option<DragPreview>,
}

#[derive(Debug)]
enum DragState {
    Idle,
    Dragging(DragSession),
}

/// Translates pointer events into schedule moves.
pub struct DragController<L: PointerListeners = NoListeners> {
    geometry: GridGeometry,
    listeners: L,
    state: DragState,
    painting_slots: bool,
}

impl DragController<NoListeners> {
    pub fn new(config: GridConfig) -> Self {
        Self::with_listeners(config, NoListeners)
    }
}

impl<L: PointerListeners> DragController<L> {
    pub fn with_listeners(config: GridConfig, listeners: L) -> Self {
        Self {
            geometry: GridGeometry::new(config),
            listeners,
            state: DragState::Idle,
            painting_slots: false,
        }
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn config(&self) -> &GridConfig {
        self.geometry.config()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn dragged_event_id(&self) -> Option<EventId> {
        self.session().map(|session| session.event_id)
    }

    /// Live position of the dragged event, before or after it is committed.
    pub fn current_drag_preview(&self) -> Option<DragPreview> {
        self.session().and_then(|session| session.preview)
    }

    /// Start dragging `event_id`. Returns whether a drag started.
    ///
    /// Ignored while another drag is active or when the event is unknown.
    pub fn pointer_down(
        &mut self,
        model: &ScheduleModel,
        event_id: EventId,
        pointer: Point,
        target: Rect,
    ) -> bool {
        if let Some(active) = self.dragged_event_id() {
            warn!(
                "Ignoring pointer down on event {} while event {} is being dragged",
                event_id, active
            );
            return false;
        }
        let Some(event) = model.get_event(event_id) else {
            warn!("Ignoring pointer down on unknown event {}", event_id);
            return false;
        };

        let session = DragSession {
            event_id,
            pointer_offset: Point::new(pointer.x - target.left, pointer.y - target.top),
            original_duration_minutes: event.duration_minutes(),
            original_day: event.day,
            original_start: event.start,
            preview: self.resting_preview(event),
        };
        debug!(
            "Drag started on event {} with offset ({}, {})",
            event_id, session.pointer_offset.x, session.pointer_offset.y
        );
        self.state = DragState::Dragging(session);
        self.listeners.begin_drag_listening();
        true
    }

    /// Snap the pointer to the grid and, under [`MovePolicy::PerTick`],
    /// move the event there. Returns the new preview, or `None` when idle.
    pub fn pointer_move(
        &mut self,
        model: &mut ScheduleModel,
        pointer: Point,
        calendar: Rect,
    ) -> Result<Option<DragPreview>> {
        let DragState::Dragging(session) = &self.state else {
            return Ok(None);
        };
        let preview = self.snap(session, pointer, calendar)?;

        if self.config().move_policy == MovePolicy::PerTick {
            if let Err(err) = model.move_event(preview.event_id, preview.day, preview.start) {
                warn!("Drag move of event {} failed: {}", preview.event_id, err);
                return Err(err);
            }
        }
        if let DragState::Dragging(session) = &mut self.state {
            session.preview = Some(preview);
        }
        Ok(Some(preview))
    }

    /// End the drag. Under [`MovePolicy::OnRelease`] the last preview is
    /// committed here; the session is discarded either way.
    pub fn pointer_up(&mut self, model: &mut ScheduleModel) -> Result<Option<DragPreview>> {
        let Some(session) = self.release() else {
            return Ok(None);
        };
        debug!("Drag ended on event {}", session.event_id);

        let preview = session.preview;
        if self.config().move_policy == MovePolicy::OnRelease {
            if let Some(preview) = preview {
                model.move_event(preview.event_id, preview.day, preview.start)?;
            }
        }
        Ok(preview)
    }

    /// Abandon the drag without touching the schedule.
    pub fn cancel(&mut self) -> Option<DragSession> {
        let session = self.release();
        if let Some(session) = &session {
            debug!("Drag cancelled on event {}", session.event_id);
        }
        session
    }

    fn release(&mut self) -> Option<DragSession> {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Dragging(session) => {
                self.listeners.end_drag_listening();
                Some(session)
            }
            DragState::Idle => None,
        }
    }

    /// Preview of the event where it sits now, if it is inside the grid.
    fn resting_preview(&self, event: &Event) -> Option<DragPreview> {
        Some(DragPreview {
            event_id: event.id,
            column: self.config().column_for_day(event.day)?,
            day: event.day,
            interval_index: self.geometry.cell_index(event.start).ok()?,
            start: event.start,
            end: event.end,
        })
    }

    fn snap(&self, session: &DragSession, pointer: Point, calendar: Rect) -> Result<DragPreview> {
        let config = self.config();
        let x = pointer.x - calendar.left - config.time_column_width_px - session.pointer_offset.x;
        let y = pointer.y - calendar.top - session.pointer_offset.y;

        let column = GridGeometry::column_for_x(
            x,
            self.geometry.day_area_width(calendar.width),
            config.num_columns(),
        );
        let day = config
            .day_for_column(column)
            .unwrap_or(session.original_day);

        let interval_index = self.clamp_interval(y, session.original_duration_minutes);
        let start = self.geometry.start_for_interval(interval_index)?;
        let end = start.checked_add_minutes(session.original_duration_minutes)?;

        Ok(DragPreview {
            event_id: session.event_id,
            column,
            day,
            interval_index,
            start,
            end,
        })
    }

    /// Interval row under `y`, clamped to the grid and so that an event of
    /// `duration` minutes still ends within the day.
    fn clamp_interval(&self, y: f32, duration: u16) -> u32 {
        let config = self.config();
        let interval = config.minute_interval.max(1) as u32;
        let last_in_grid = config.total_intervals().saturating_sub(1);
        let latest_start = (TimeOfDay::LAST_MINUTE.minutes() as u32)
            .saturating_sub(duration as u32)
            .saturating_sub(config.calendar_start_minute as u32);
        let last = last_in_grid.min(latest_start / interval);

        let raw = (y / config.interval_height_px()).floor();
        if raw.is_nan() || raw < 0.0 {
            0
        } else {
            (raw as u32).min(last)
        }
    }
}

impl<L: PointerListeners> Drop for DragController<L> {
    fn drop(&mut self) {
        if self.release().is_some() {
            debug!("Drag controller disposed mid-drag; listeners released");
        }
    }
}
