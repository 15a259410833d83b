use crate::core::math::{Mat4, Vec3};
use crate::domain::level::LevelLayout;
use crate::systems::body::{Body, Placement};

use super::init::build_columns;
use super::TanksCore;

pub(super) fn reset(core: &mut TanksCore) {
    core.columns.clear();
    core.free_bodies.clear();
    core.projectiles.clear();
    core.free_body_hits.clear();

    core.time_accumulator = 0.0;
    core.t = 0.0;
    core.steps_taken = 0;
    core.cleared_announced = false;

    core.rng_state = core.layout.seed;
    core.columns = build_columns(&core.layout, &mut core.rng_state);

    console_log!(
        "level reset: {} columns, {} bricks",
        core.columns.len(),
        core.brick_count()
    );
}

pub(super) fn reset_with_layout(core: &mut TanksCore, layout: LevelLayout) -> Result<(), String> {
    layout.validate()?;
    core.layout = layout;
    reset(core);
    Ok(())
}

pub(super) fn fire(core: &mut TanksCore) {
    let location = core.muzzle_transform();
    let velocity = core.aim.launch_velocity(core.config.power);
    spawn_projectile(core, location, velocity);
}

pub(super) fn spawn_projectile(core: &mut TanksCore, location: Mat4, velocity: Vec3) {
    let projectile = Body::new(
        core.layout.projectile_shape,
        core.layout.projectile_material,
        Vec3::one(),
        Placement::at(location).with_velocity(velocity),
    );
    core.projectiles.push(projectile);
}
