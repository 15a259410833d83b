use tanks_engine::{LevelLayout, Mat4, SimulationConfig, Tanks, TanksCore, Vec3};

const DT: f32 = 1.0 / 32.0;

fn config() -> SimulationConfig {
    SimulationConfig {
        dt: DT,
        ..SimulationConfig::default()
    }
}

#[test]
fn knocking_out_the_last_brick_clears_the_level() {
    let origin = Vec3::new(0.0, 0.0, 0.0);
    let mut core =
        TanksCore::with_config(config(), LevelLayout::single_column(origin, 1)).expect("valid scene");
    core.spawn_projectile(Mat4::translation(origin), Vec3::new(0.0, 0.0, 40.0));

    let report = core.simulate(DT);

    assert!(report.level_cleared());
    assert!(core.all_columns_empty());
    assert_eq!(core.brick_count(), 0);
    assert_eq!(core.free_bodies().len(), 1);
}

#[test]
fn fired_shot_travels_down_range() {
    let mut core = TanksCore::with_config(config(), LevelLayout::empty()).expect("valid scene");
    core.fire();
    let start = core.projectiles()[0].center;

    for _ in 0..8 {
        core.simulate(DT);
    }

    let now = core.projectiles()[0].center;
    assert!((now.z - start.z - 10.0).abs() < 1e-3);
    assert!(now.y < start.y);
}

#[test]
fn level_json_round_trips_through_the_facade() {
    let mut tanks = Tanks::new();
    let json = r#"{ "columns": 2, "bricksPerColumn": 5, "origin": [0, -6, 0] }"#;
    assert!(tanks.core_mut().load_level_json(json).is_ok());
    assert_eq!(tanks.brick_count(), 10);

    assert!(tanks.core_mut().load_level_json("{ not json").is_err());
    assert_eq!(tanks.brick_count(), 10);
}

#[test]
fn default_wall_draws_every_brick() {
    let mut tanks = Tanks::new();
    tanks.simulate(0.016);
    let count = tanks.collect_draw_list();

    assert_eq!(count, 36);
    assert_eq!(tanks.draw_transforms_len(), 36 * 16);
    assert_eq!(tanks.draw_handles_len(), 36 * 2);
}
