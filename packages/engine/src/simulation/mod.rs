//! Tanks scene - fixed-timestep simulation of a breakable brick wall
//!
//! Owns three collections and moves bodies between them:
//! - `columns`: stacked wall bricks (index 0 = bottom brick)
//! - `free_bodies`: bricks knocked out of their column
//! - `projectiles`: shots fired from the tank
//!
//! Per displayed frame the host calls `simulate(frame_time)` once; it runs
//! zero or more fixed ticks (`update_state` then `advance`) and blends the
//! last two ticks for drawing.

use std::collections::HashSet;

use crate::core::math::{Mat4, Vec3};
use crate::domain::config::SimulationConfig;
use crate::domain::level::LevelLayout;
use crate::systems::body::Body;
use crate::systems::collision::{CollisionShape, ResolveParams};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/update.rs"]
mod update;
#[path = "step/simulate.rs"]
mod simulate;
#[path = "commands/commands.rs"]
mod commands;
#[path = "commands/aim.rs"]
mod aim;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;
mod report;

pub use aim::AimState;
pub use facade::Tanks;
pub use perf_stats::PerfStats;
pub use random::random_spin_axis;
pub use report::FrameReport;
pub use update::StepOutcome;

use perf_timer::PerfTimer;

/// Ordered stack of wall bricks, bottom first
pub type Column = Vec<Body>;

pub(crate) struct RenderBuffers {
    /// 16 floats per body, row-major `drawn_location`
    pub(crate) transforms: Vec<f32>,
    /// (shape, material) per body
    pub(crate) handles: Vec<u32>,
}

/// The simulation scene
pub struct TanksCore {
    config: SimulationConfig,
    resolve: ResolveParams,
    collider: CollisionShape,
    layout: LevelLayout,

    // Bodies
    columns: Vec<Column>,
    free_bodies: Vec<Body>,
    projectiles: Vec<Body>,
    /// Gate for re-resolving free bodies against projectiles.
    /// Keyed by `free_bodies.len() - index`; nothing inserts a first key, so
    /// the re-hit path stays dormant.
    free_body_hits: HashSet<usize>,

    aim: AimState,

    // Time
    time_accumulator: f32,
    t: f32,
    steps_taken: u64,

    // State
    rng_state: u32,
    cleared_announced: bool,
    cap_warned: bool,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,

    render: RenderBuffers,
}

impl TanksCore {
    /// Default tuning, default wall
    pub fn new() -> Self {
        init::create_core(SimulationConfig::default(), LevelLayout::default())
    }

    pub fn with_config(config: SimulationConfig, layout: LevelLayout) -> Result<Self, String> {
        config.validate()?;
        layout.validate()?;
        Ok(init::create_core(config, layout))
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn layout(&self) -> &LevelLayout {
        &self.layout
    }

    pub fn collider(&self) -> &CollisionShape {
        &self.collider
    }

    /// Replace tuning; bodies are kept, the time budget restarts
    pub fn set_config(&mut self, config: SimulationConfig) -> Result<(), String> {
        settings::set_config(self, config)
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        let config = SimulationConfig::from_json(json)?;
        self.set_config(config)
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        settings::set_time_scale(self, scale);
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === BODIES ===

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn free_bodies(&self) -> &[Body] {
        &self.free_bodies
    }

    pub fn projectiles(&self) -> &[Body] {
        &self.projectiles
    }

    /// Every body in draw order: columns, free bodies, projectiles
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.columns
            .iter()
            .flatten()
            .chain(self.free_bodies.iter())
            .chain(self.projectiles.iter())
    }

    pub fn body_count(&self) -> usize {
        self.brick_count() + self.free_bodies.len() + self.projectiles.len()
    }

    /// Bricks still standing in columns
    pub fn brick_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// Level-clear signal: no column holds a brick
    pub fn all_columns_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }

    // === COMMANDS ===

    /// Clear every collection and rebuild the wall from the current layout
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    pub fn reset_with_layout(&mut self, layout: LevelLayout) -> Result<(), String> {
        commands::reset_with_layout(self, layout)
    }

    pub fn load_level_json(&mut self, json: &str) -> Result<(), String> {
        let layout = LevelLayout::from_json(json)?;
        self.reset_with_layout(layout)
    }

    /// Fire from the tank's muzzle using the current aim
    pub fn fire(&mut self) {
        commands::fire(self);
    }

    /// Insert a unit projectile at `location` moving with `velocity`
    pub fn spawn_projectile(&mut self, location: Mat4, velocity: Vec3) {
        commands::spawn_projectile(self, location, velocity);
    }

    pub fn aim(&self) -> &AimState {
        &self.aim
    }

    pub fn aim_mut(&mut self) -> &mut AimState {
        &mut self.aim
    }

    /// World transform projectiles are fired from
    pub fn muzzle_transform(&self) -> Mat4 {
        self.aim.muzzle_transform(self.layout.tank_origin)
    }

    // === TIME ===

    /// Advance by one displayed frame of `frame_time` seconds
    pub fn simulate(&mut self, frame_time: f32) -> FrameReport {
        simulate::simulate(self, frame_time)
    }

    /// One fixed tick of forces, collisions and settling (no integration)
    pub fn update_state(&mut self, dt: f32) -> StepOutcome {
        update::update_state(self, dt)
    }

    /// Integrate every body by `dt`
    pub fn advance_all(&mut self, dt: f32) {
        simulate::advance_all(self, dt);
    }

    /// Blend every body's drawn transform at `alpha`
    pub fn blend_all(&mut self, alpha: f32) {
        simulate::blend_all(self, alpha);
    }

    pub fn time(&self) -> f32 {
        self.t
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    pub fn time_accumulator(&self) -> f32 {
        self.time_accumulator
    }

    // === RENDER ===

    /// Pack drawn transforms and handles; returns the body count
    pub fn collect_draw_list(&mut self) -> usize {
        render_extract::collect_draw_list(self)
    }

    pub fn draw_transforms(&self) -> &[f32] {
        &self.render.transforms
    }

    pub fn draw_handles(&self) -> &[u32] {
        &self.render.handles
    }
}

impl Default for TanksCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
