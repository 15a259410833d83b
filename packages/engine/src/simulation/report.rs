use wasm_bindgen::prelude::*;

/// What one `simulate` call did
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub(super) steps: u32,
    pub(super) level_cleared: bool,
    pub(super) bricks_dislodged: u32,
    pub(super) bodies_settled: u32,
    pub(super) alpha: f32,
}

#[wasm_bindgen]
impl FrameReport {
    /// Fixed ticks run this frame
    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// No column holds a brick after this frame
    #[wasm_bindgen(getter)]
    pub fn level_cleared(&self) -> bool {
        self.level_cleared
    }

    #[wasm_bindgen(getter)]
    pub fn bricks_dislodged(&self) -> u32 {
        self.bricks_dislodged
    }

    #[wasm_bindgen(getter)]
    pub fn bodies_settled(&self) -> u32 {
        self.bodies_settled
    }

    /// Blend factor used for drawing: leftover budget / dt
    #[wasm_bindgen(getter)]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}
