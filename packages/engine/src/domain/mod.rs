//! Scene data: tuning, wall layout and render handles

pub mod config;
pub mod handles;
pub mod level;
