use crate::domain::config::{ResolveVariant, SimulationConfig};
use crate::systems::body::Body;

/// Constants the brick/projectile exchange needs
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolveParams {
    pub brick_mass: f32,
    pub ball_mass: f32,
    /// Added to the projectile's world z velocity after the exchange
    pub projectile_z_kick: f32,
    /// Divisor for a bottom brick's z velocity
    pub bottom_brick_z_damping: f32,
    pub variant: ResolveVariant,
}

impl From<&SimulationConfig> for ResolveParams {
    fn from(config: &SimulationConfig) -> Self {
        Self {
            brick_mass: config.brick_mass,
            ball_mass: config.ball_mass,
            projectile_z_kick: config.projectile_z_kick,
            bottom_brick_z_damping: config.bottom_brick_z_damping,
            variant: config.resolve_variant,
        }
    }
}

impl Default for ResolveParams {
    fn default() -> Self {
        Self::from(&SimulationConfig::default())
    }
}

/// `atan2(y, z)`, pinned to 0 for the zero vector (including signed zeros)
#[inline]
fn heading(y: f32, z: f32) -> f32 {
    if y == 0.0 && z == 0.0 {
        0.0
    } else {
        y.atan2(z)
    }
}

/// Exchange velocities between a brick and the projectile that hit it.
///
/// Works in the (y, z) plane: both velocities are rotated into the frame of
/// the collision angle, the along-axis components go through the 1-D
/// elastic formula, and the result is rotated back. On top of that:
/// - the brick's cross-axis component is clamped to <= 0,
/// - the brick never ends up moving toward -z,
/// - a bottom brick has its z velocity damped and its spin removed,
/// - x velocities follow `params.variant`,
/// - the projectile's z velocity gets `params.projectile_z_kick` added.
///
/// This is a gameplay approximation, not a physical collision response.
pub fn resolve_collision(brick: &mut Body, projectile: &mut Body, params: &ResolveParams) {
    let collide_angle = heading(
        brick.center.y - projectile.center.y,
        brick.center.z - projectile.center.z,
    );

    let v1 = brick.linear_velocity;
    let v2 = projectile.linear_velocity;
    let speed1 = (v1.y * v1.y + v1.z * v1.z).sqrt();
    let speed2 = (v2.y * v2.y + v2.z * v2.z).sqrt();
    let direction1 = heading(v1.y, v1.z);
    let direction2 = heading(v2.y, v2.z);

    let new_xspeed_1 = speed1 * (direction1 - collide_angle).cos();
    let new_yspeed_1 = speed1 * (direction1 - collide_angle).sin();
    let new_xspeed_2 = speed2 * (direction2 - collide_angle).cos();
    let new_yspeed_2 = speed2 * (direction2 - collide_angle).sin();

    let m1 = params.brick_mass;
    let m2 = params.ball_mass;
    let final_xspeed_1 = ((m1 - m2) * new_xspeed_1 + (m2 + m2) * new_xspeed_2) / (m1 + m2);
    let final_xspeed_2 = ((m1 + m1) * new_xspeed_1 + (m2 - m1) * new_xspeed_2) / (m1 + m2);
    let final_yspeed_1 = new_yspeed_1.min(0.0);
    let final_yspeed_2 = new_yspeed_2;

    let (sin_angle, cos_angle) = collide_angle.sin_cos();

    brick.linear_velocity.z = cos_angle * final_xspeed_1 - sin_angle * final_yspeed_1;
    brick.linear_velocity.y = sin_angle * final_xspeed_1 + cos_angle * final_yspeed_1;
    brick.linear_velocity.x = params.variant.brick_x_velocity(v2.x);
    brick.angular_velocity = collide_angle / 2.0;

    if brick.linear_velocity.z < 0.0 {
        brick.linear_velocity.z = -brick.linear_velocity.z;
    }
    if brick.bottom_brick {
        brick.linear_velocity.z /= params.bottom_brick_z_damping;
        brick.angular_velocity = 0.0;
    }

    projectile.linear_velocity.z =
        -cos_angle * final_xspeed_2 + sin_angle * final_yspeed_2 + params.projectile_z_kick;
    projectile.linear_velocity.y = sin_angle * final_xspeed_2 + cos_angle * final_yspeed_2;
    projectile.linear_velocity.x = params.variant.projectile_x_velocity(v2.x);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::{Mat4, Vec3};
    use crate::domain::handles::{MaterialHandle, ShapeHandle};
    use crate::systems::body::Placement;

    fn body(center: Vec3, velocity: Vec3) -> Body {
        Body::new(
            ShapeHandle(0),
            MaterialHandle(0),
            Vec3::one(),
            Placement::at(Mat4::translation(center)).with_velocity(velocity),
        )
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn head_on_hit_along_z() {
        let mut brick = body(Vec3::new(0.0, 0.0, 2.0), Vec3::zero());
        let mut ball = body(Vec3::new(0.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 40.0));
        resolve_collision(&mut brick, &mut ball, &ResolveParams::default());

        // Elastic exchange with masses 5 / 20: brick 2*20*40/25, ball 15*40/25.
        assert!(close(brick.linear_velocity.z, 64.0));
        assert!(close(brick.linear_velocity.y, 0.0));
        assert!(close(brick.linear_velocity.x, 0.2));
        assert_eq!(brick.angular_velocity, 0.0);

        assert!(close(ball.linear_velocity.z, -24.0 - 10.0));
        assert!(close(ball.linear_velocity.y, 0.0));
        assert_eq!(ball.linear_velocity.x, 0.0);
    }

    #[test]
    fn coincident_centers_use_zero_angle() {
        let mut brick = body(Vec3::zero(), Vec3::zero());
        let mut ball = body(Vec3::zero(), Vec3::new(0.0, 0.0, 40.0));
        resolve_collision(&mut brick, &mut ball, &ResolveParams::default());
        assert!(brick.linear_velocity.is_finite());
        assert!(ball.linear_velocity.is_finite());
        assert!(close(brick.linear_velocity.z, 64.0));
    }

    #[test]
    fn resting_bodies_stay_finite() {
        let mut brick = body(Vec3::new(0.0, 1.0, 1.0), Vec3::zero());
        let mut ball = body(Vec3::zero(), Vec3::zero());
        resolve_collision(&mut brick, &mut ball, &ResolveParams::default());
        assert!(brick.linear_velocity.is_finite());
        assert!(ball.linear_velocity.is_finite());
        assert!(brick.angular_velocity.is_finite());
        // Only the z kick moves the ball.
        assert!(close(ball.linear_velocity.z, -10.0));
    }

    #[test]
    fn bottom_brick_is_damped_and_does_not_spin() {
        let params = ResolveParams::default();
        let mut brick = body(Vec3::new(0.0, 1.0, 2.0), Vec3::zero());
        let mut ball = body(Vec3::zero(), Vec3::new(0.0, 0.0, 40.0));
        resolve_collision(&mut brick, &mut ball, &params);
        let free_z = brick.linear_velocity.z;
        assert!(brick.angular_velocity != 0.0);

        let mut bottom = body(Vec3::new(0.0, 1.0, 2.0), Vec3::zero());
        bottom.bottom_brick = true;
        let mut ball = body(Vec3::zero(), Vec3::new(0.0, 0.0, 40.0));
        resolve_collision(&mut bottom, &mut ball, &params);
        assert!(close(bottom.linear_velocity.z, free_z / 1.2));
        assert_eq!(bottom.angular_velocity, 0.0);
    }

    #[test]
    fn brick_never_moves_toward_negative_z() {
        // Ball moving away from the brick: the exchange yields -64 on z, flipped.
        let mut brick = body(Vec3::new(0.0, 0.0, 2.0), Vec3::zero());
        let mut ball = body(Vec3::zero(), Vec3::new(0.0, 0.0, -40.0));
        resolve_collision(&mut brick, &mut ball, &ResolveParams::default());
        assert!(close(brick.linear_velocity.z, 64.0));
    }

    #[test]
    fn spin_is_half_the_collision_angle() {
        let mut brick = body(Vec3::new(0.0, 1.0, 1.0), Vec3::zero());
        let mut ball = body(Vec3::zero(), Vec3::new(0.0, 0.0, 40.0));
        resolve_collision(&mut brick, &mut ball, &ResolveParams::default());
        assert!(close(brick.angular_velocity, std::f32::consts::FRAC_PI_4 / 2.0));
    }

    #[test]
    fn full_carry_variant_moves_x_differently() {
        let params = ResolveParams {
            variant: ResolveVariant::FullCarry,
            ..ResolveParams::default()
        };
        let mut brick = body(Vec3::new(0.0, 0.0, 2.0), Vec3::zero());
        let mut ball = body(Vec3::zero(), Vec3::new(6.0, 0.0, 40.0));
        resolve_collision(&mut brick, &mut ball, &params);
        assert_eq!(brick.linear_velocity.x, 6.0);
        assert!(close(ball.linear_velocity.x, 4.0));
    }
}
