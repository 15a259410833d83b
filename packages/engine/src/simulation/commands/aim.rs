use std::f32::consts::{FRAC_PI_3, PI};

use crate::core::math::{Mat4, Vec3};

/// Turret step per button press, degrees
pub const TURRET_STEP_DEG: f32 = 5.0;
/// Turret elevation stays below this, degrees
pub const TURRET_MAX_DEG: f32 = 45.0;
/// Yaw limit either side, radians
pub const ROTATE_LIMIT: f32 = FRAC_PI_3;
const ROTATE_STEP: f32 = PI / 180.0 * 5.0;

/// Turret elevation (degrees) and yaw (radians) set by the host
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AimState {
    turret_angle: f32,
    rotate_factor: f32,
}

impl AimState {
    pub fn turret_angle(&self) -> f32 {
        self.turret_angle
    }

    pub fn rotate_factor(&self) -> f32 {
        self.rotate_factor
    }

    pub fn set_turret_angle(&mut self, degrees: f32) {
        if degrees.is_finite() {
            self.turret_angle = degrees.clamp(0.0, TURRET_MAX_DEG);
        }
    }

    pub fn set_rotate_factor(&mut self, radians: f32) {
        if radians.is_finite() {
            self.rotate_factor = radians.clamp(-ROTATE_LIMIT, ROTATE_LIMIT);
        }
    }

    /// +5 degrees, only if that stays below the maximum
    pub fn raise(&mut self) {
        if self.turret_angle + TURRET_STEP_DEG < TURRET_MAX_DEG {
            self.turret_angle += TURRET_STEP_DEG;
        }
    }

    /// -5 degrees, only if that stays at or above zero
    pub fn lower(&mut self) {
        if self.turret_angle - TURRET_STEP_DEG >= 0.0 {
            self.turret_angle -= TURRET_STEP_DEG;
        }
    }

    pub fn rotate_right(&mut self) {
        if self.rotate_factor < ROTATE_LIMIT {
            self.rotate_factor += ROTATE_STEP;
        }
    }

    pub fn rotate_left(&mut self) {
        if self.rotate_factor > -ROTATE_LIMIT {
            self.rotate_factor -= ROTATE_STEP;
        }
    }

    /// Launch velocity for a shot of speed `power`
    pub fn launch_velocity(&self, power: f32) -> Vec3 {
        let elevation = self.turret_angle.to_radians();
        Vec3::new(
            power * self.rotate_factor.sin(),
            power * elevation.sin() * self.rotate_factor.cos(),
            power * elevation.cos(),
        )
    }

    /// Turret pivots about a point 3 up and 3 back from the tank origin;
    /// shots leave 2 up and 6 forward of the pivoted frame.
    pub fn muzzle_transform(&self, tank_origin: Vec3) -> Mat4 {
        Mat4::translation(tank_origin)
            * Mat4::translation(Vec3::new(0.0, 3.0, -3.0))
            * Mat4::rotation(self.turret_angle.to_radians(), Vec3::new(-1.0, 0.0, 0.0))
            * Mat4::rotation(self.rotate_factor, Vec3::new(0.0, 1.0, 0.0))
            * Mat4::translation(Vec3::new(0.0, -3.0, 3.0))
            * Mat4::translation(Vec3::new(0.0, 2.0, 6.0))
    }
}
