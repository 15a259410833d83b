use tanks_engine::{LevelLayout, Mat4, SimulationConfig, TanksCore, Vec3};

const DT: f32 = 1.0 / 32.0;

fn projectile_scene() -> TanksCore {
    let config = SimulationConfig {
        dt: DT,
        ..SimulationConfig::default()
    };
    let mut core = TanksCore::with_config(config, LevelLayout::empty()).expect("valid scene");
    core.spawn_projectile(
        Mat4::translation(Vec3::new(0.0, 20.0, 0.0)),
        Vec3::new(1.0, 6.0, 40.0),
    );
    core
}

#[test]
fn one_long_frame_matches_three_short_ones() {
    let mut once = projectile_scene();
    let mut thrice = projectile_scene();

    let report = once.simulate(3.0 * DT);
    let steps: u32 = (0..3).map(|_| thrice.simulate(DT).steps()).sum();

    assert_eq!(report.steps(), 3);
    assert_eq!(steps, 3);

    let a = &once.projectiles()[0];
    let b = &thrice.projectiles()[0];
    assert_eq!(a.center, b.center);
    assert_eq!(a.linear_velocity, b.linear_velocity);
    assert!(a.drawn_location.approx_eq(&b.drawn_location, 1e-6));
}

#[test]
fn huge_frame_is_capped() {
    let mut core = projectile_scene();

    let report = core.simulate(1000.0 * DT);

    let max = core.config().max_ticks_per_frame();
    assert_eq!(max, 3);
    assert!(report.steps() <= max);
    assert_eq!(core.steps_taken(), u64::from(report.steps()));
}

#[test]
fn drawn_location_blends_between_ticks() {
    let mut core = projectile_scene();
    core.simulate(DT);
    let start = core.projectiles()[0].center;

    // Half a tick: no step, drawn halfway between the last two states
    let report = core.simulate(0.5 * DT);
    assert_eq!(report.steps(), 0);
    assert_eq!(report.alpha(), 0.5);

    let body = &core.projectiles()[0];
    let drawn = body.drawn_location.origin();
    let expected = body.previous.center.mix(body.center, 0.5);
    assert!((drawn - expected).length() < 1e-5);
    assert_eq!(body.center, start);
}

#[test]
fn same_inputs_same_results() {
    let run = || {
        let mut core = TanksCore::with_config(
            SimulationConfig {
                dt: DT,
                ..SimulationConfig::default()
            },
            LevelLayout::default(),
        )
        .expect("valid scene");
        for shot in 0..4 {
            core.aim_mut().set_rotate_factor(-0.2 + 0.1 * shot as f32);
            core.fire();
            for _ in 0..30 {
                core.simulate(DT * 1.25);
            }
        }
        core.bodies()
            .map(|b| (b.center, b.linear_velocity))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn carried_budget_never_exceeds_the_cap() {
    let mut core = projectile_scene();
    let max = core.config().max_ticks_per_frame();

    for frame in [0.03, 1000.0 * DT, 0.03, 5.0, DT * 0.9, 1.0] {
        let report = core.simulate(frame);
        assert!(report.steps() <= max, "{} ticks for a {}s frame", report.steps(), frame);
    }
}
