// Service module exports

pub mod config;
pub mod drag;
pub mod geometry;
pub mod schedule;
pub mod seed;
