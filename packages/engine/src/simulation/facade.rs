use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::report::FrameReport;
use super::TanksCore;

/// Browser-facing handle to the scene
#[wasm_bindgen]
pub struct Tanks {
    core: TanksCore,
}

#[wasm_bindgen]
impl Tanks {
    /// Default tuning and the default wall
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: TanksCore::new() }
    }

    /// Replace tuning from camelCase JSON; unset fields take defaults
    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_config_json(&json).map_err(|e| {
            console_warn!("config rejected: {}", e);
            JsValue::from_str(&e)
        })
    }

    pub fn get_config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Rebuild the wall from a level layout JSON
    pub fn load_level(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_level_json(&json).map_err(|e| {
            console_warn!("level rejected: {}", e);
            JsValue::from_str(&e)
        })
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.core.set_time_scale(scale);
    }

    // === FRAME LOOP ===

    /// Call once per displayed frame with the elapsed seconds
    pub fn simulate(&mut self, frame_time: f32) -> FrameReport {
        self.core.simulate(frame_time)
    }

    // === AIM ===

    pub fn fire(&mut self) {
        self.core.fire();
    }

    pub fn raise_turret(&mut self) {
        self.core.aim_mut().raise();
    }

    pub fn lower_turret(&mut self) {
        self.core.aim_mut().lower();
    }

    pub fn rotate_right(&mut self) {
        self.core.aim_mut().rotate_right();
    }

    pub fn rotate_left(&mut self) {
        self.core.aim_mut().rotate_left();
    }

    /// Degrees above horizontal
    #[wasm_bindgen(getter)]
    pub fn turret_angle(&self) -> f32 {
        self.core.aim().turret_angle()
    }

    #[wasm_bindgen(setter)]
    pub fn set_turret_angle(&mut self, degrees: f32) {
        self.core.aim_mut().set_turret_angle(degrees);
    }

    /// Radians, positive turns toward +x
    #[wasm_bindgen(getter)]
    pub fn rotate_factor(&self) -> f32 {
        self.core.aim().rotate_factor()
    }

    #[wasm_bindgen(setter)]
    pub fn set_rotate_factor(&mut self, radians: f32) {
        self.core.aim_mut().set_rotate_factor(radians);
    }

    /// Row-major muzzle transform (16 floats)
    pub fn muzzle_transform(&self) -> Vec<f32> {
        self.core.muzzle_transform().to_row_major().to_vec()
    }

    // === QUERIES ===

    pub fn all_columns_empty(&self) -> bool {
        self.core.all_columns_empty()
    }

    #[wasm_bindgen(getter)]
    pub fn brick_count(&self) -> usize {
        self.core.brick_count()
    }

    #[wasm_bindgen(getter)]
    pub fn free_body_count(&self) -> usize {
        self.core.free_bodies().len()
    }

    #[wasm_bindgen(getter)]
    pub fn projectile_count(&self) -> usize {
        self.core.projectiles().len()
    }

    #[wasm_bindgen(getter)]
    pub fn steps_taken(&self) -> u64 {
        self.core.steps_taken()
    }

    /// Simulated seconds (runs backwards under a negative time scale)
    #[wasm_bindgen(getter)]
    pub fn time(&self) -> f32 {
        self.core.time()
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    // === RENDERING API ===

    /// Pack drawn transforms and handles for every body; returns the count
    pub fn collect_draw_list(&mut self) -> usize {
        self.core.collect_draw_list()
    }

    /// 16 f32 per body, row-major
    pub fn draw_transforms_ptr(&self) -> *const f32 {
        self.core.draw_transforms().as_ptr()
    }

    pub fn draw_transforms_len(&self) -> usize {
        self.core.draw_transforms().len()
    }

    /// (shape, material) u32 pair per body
    pub fn draw_handles_ptr(&self) -> *const u32 {
        self.core.draw_handles().as_ptr()
    }

    pub fn draw_handles_len(&self) -> usize {
        self.core.draw_handles().len()
    }
}

impl Default for Tanks {
    fn default() -> Self {
        Self::new()
    }
}

impl Tanks {
    /// Native access for embedding and tests
    pub fn core(&self) -> &TanksCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut TanksCore {
        &mut self.core
    }
}
