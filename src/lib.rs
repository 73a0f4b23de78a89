// Muscheduler Library
// Scheduling grid engine for the weekly lesson calendar and availability grid

pub mod error;
pub mod models;
pub mod services;

pub use error::{Result, ScheduleError};
pub use models::availability::SlotKey;
pub use models::color::EventColor;
pub use models::day::Day;
pub use models::event::{Event, EventId, EventPatch, NewEvent};
pub use models::settings::{GridConfig, MovePolicy};
pub use models::time::{TimeCodec, TimeOfDay};
pub use services::drag::{DragController, DragPreview, DragSession, NoListeners, PointerListeners};
pub use services::geometry::{EventLayout, GridGeometry, Point, Rect};
pub use services::schedule::ScheduleModel;
