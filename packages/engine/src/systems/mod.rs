//! Per-body physics and collision handling

pub mod body;
pub mod collision;
