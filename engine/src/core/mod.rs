//! Core utilities: time management

pub mod time;

pub use time::DayClock;
