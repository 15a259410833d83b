use crate::systems::body::Body;
use crate::systems::collision::resolve_collision;

use super::TanksCore;

/// Counters from one fixed tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Bricks knocked out of their column this tick
    pub dislodged: u32,
    /// Free bodies removed after slowing down
    pub settled: u32,
    pub collision_checks: u32,
}

/// Forces, collisions and settling for one fixed tick.
///
/// Integration is not part of the tick; `advance_all` runs afterwards.
pub(super) fn update_state(core: &mut TanksCore, dt: f32) -> StepOutcome {
    let TanksCore {
        config,
        resolve,
        collider,
        columns,
        free_bodies,
        projectiles,
        free_body_hits,
        ..
    } = core;
    let (config, resolve, collider) = (&*config, &*resolve, &*collider);
    let mut outcome = StepOutcome::default();

    // === GRAVITY + FLOOR ===
    for body in columns.iter_mut().flatten().chain(free_bodies.iter_mut()) {
        body.linear_velocity.y -= config.gravity * dt;
        if body.center.y < config.body_floor_height && body.linear_velocity.y < 0.0 {
            body.linear_velocity.y *= -config.body_floor_restitution;
        }
    }

    // === COLUMNS: stacking support and projectile hits ===
    for column in columns.iter_mut() {
        let mut i = 0;
        while i < column.len() {
            let supported = i != 0
                && column.iter().any(|other| {
                    let brick = &column[i];
                    if std::ptr::eq(brick, other) {
                        return false;
                    }
                    outcome.collision_checks += 1;
                    brick.check_if_colliding(other, collider) && brick.center.y > other.center.y
                });
            if supported {
                column[i].linear_velocity.y = 0.0;
            }

            // The brick leaves its column on the first hit and is resolved
            // against every projectile touching it.
            let mut detached: Option<Body> = None;
            for projectile in projectiles.iter_mut() {
                outcome.collision_checks += 1;
                let hit = match &detached {
                    Some(brick) => brick.check_if_colliding(projectile, collider),
                    None => column[i].check_if_colliding(projectile, collider),
                };
                if !hit {
                    continue;
                }
                let brick = detached.get_or_insert_with(|| {
                    let mut brick = column.remove(i);
                    brick.bottom_brick = i == 0;
                    brick
                });
                resolve_collision(brick, projectile, resolve);
            }

            match detached {
                Some(brick) => {
                    free_bodies.push(brick);
                    outcome.dislodged += 1;
                }
                None => i += 1,
            }
        }
    }

    // === FREE BODIES: decay and settle ===
    let mut i = 0;
    while i < free_bodies.len() {
        let body = &mut free_bodies[i];
        body.linear_velocity.z /= config.free_body_z_decay;
        body.linear_velocity.x /= config.free_body_x_decay;
        body.angular_velocity /= config.free_body_angular_decay;

        if body.linear_velocity.z < config.settle_z_threshold
            && body.linear_velocity.x < config.settle_x_threshold
        {
            free_bodies.remove(i);
            outcome.settled += 1;
            continue;
        }

        // Re-hit gate: only keys already present resolve again, and nothing
        // inserts the first one, so this never fires.
        let key = free_bodies.len() - i;
        if free_body_hits.contains(&key) {
            let body = &mut free_bodies[i];
            for projectile in projectiles.iter_mut() {
                outcome.collision_checks += 1;
                if body.check_if_colliding(projectile, collider) {
                    resolve_collision(body, projectile, resolve);
                }
            }
        }
        i += 1;
    }

    // === PROJECTILES ===
    for projectile in projectiles.iter_mut() {
        projectile.linear_velocity.y -= config.gravity * dt;
        if projectile.center.y < config.projectile_floor_height {
            let r = config.projectile_floor_restitution;
            projectile.linear_velocity.x *= r;
            projectile.linear_velocity.y *= -r;
            projectile.linear_velocity.z *= r;
        }
    }

    outcome
}
