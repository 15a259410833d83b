//! Tanks Engine - fixed-timestep brick wall simulation in WASM
//!
//! A tank fires projectiles at a wall of stacked bricks; struck bricks are
//! knocked loose, fly off and settle. The host calls `simulate` once per
//! displayed frame and draws the blended transforms.
//!
//! Architecture:
//! - core/       - math types, console logging
//! - domain/     - configuration, level layout, render handles
//! - systems/    - rigid bodies, collision shapes and response
//! - simulation/ - orchestration and the JS facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

#[doc(hidden)]
pub use web_sys;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Tanks engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::math::{Mat4, Vec3, Vec4};
pub use crate::domain::config::{ColliderKind, ResolveVariant, SimulationConfig};
pub use crate::domain::handles::{MaterialHandle, ShapeHandle};
pub use crate::domain::level::LevelLayout;
pub use crate::simulation::{AimState, FrameReport, PerfStats, StepOutcome, Tanks, TanksCore};
pub use crate::systems::body::{Body, Placement};
pub use crate::systems::collision::{resolve_collision, CollisionShape, ResolveParams};
