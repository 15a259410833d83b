use wasm_bindgen::prelude::*;

/// Timings and counters for the last `simulate` call
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) frame_ms: f64,
    pub(super) update_ms: f64,
    pub(super) advance_ms: f64,
    pub(super) blend_ms: f64,
    pub(super) steps: u32,
    pub(super) collision_checks: u32,
    pub(super) bricks_dislodged: u32,
    pub(super) bodies_settled: u32,
    pub(super) column_bricks: u32,
    pub(super) free_bodies: u32,
    pub(super) projectiles: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn update_ms(&self) -> f64 { self.update_ms }
    #[wasm_bindgen(getter)]
    pub fn advance_ms(&self) -> f64 { self.advance_ms }
    #[wasm_bindgen(getter)]
    pub fn blend_ms(&self) -> f64 { self.blend_ms }
    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> u32 { self.steps }
    #[wasm_bindgen(getter)]
    pub fn collision_checks(&self) -> u32 { self.collision_checks }
    #[wasm_bindgen(getter)]
    pub fn bricks_dislodged(&self) -> u32 { self.bricks_dislodged }
    #[wasm_bindgen(getter)]
    pub fn bodies_settled(&self) -> u32 { self.bodies_settled }
    #[wasm_bindgen(getter)]
    pub fn column_bricks(&self) -> u32 { self.column_bricks }
    #[wasm_bindgen(getter)]
    pub fn free_bodies(&self) -> u32 { self.free_bodies }
    #[wasm_bindgen(getter)]
    pub fn projectiles(&self) -> u32 { self.projectiles }
}
