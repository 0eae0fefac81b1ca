//! Application state

pub mod display_mode;
