#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use tanks_engine::Tanks;

#[wasm_bindgen_test]
fn facade_runs_a_frame() {
    let mut tanks = Tanks::new();
    tanks.fire();
    let report = tanks.simulate(0.05);
    assert_eq!(report.steps(), 1);
    assert_eq!(tanks.projectile_count(), 1);
}

#[wasm_bindgen_test]
fn facade_rejects_bad_config() {
    let mut tanks = Tanks::new();
    assert!(tanks.load_config("{ \"dt\": 0 }".to_string()).is_err());
    assert!(tanks.load_config("{ \"timeScale\": 0.5 }".to_string()).is_ok());
}
