//! Body - a rigid entity advanced at a fixed timestep
//!
//! The body keeps the previous/current state pair; render-time transforms
//! are blended from it and never fed back into the simulation.

mod body;
mod state;

pub use body::Body;
pub use state::{PhysicalState, Placement};
