// Module exports for models

pub mod availability;
pub mod color;
pub mod day;
pub mod event;
pub mod settings;
pub mod time;
