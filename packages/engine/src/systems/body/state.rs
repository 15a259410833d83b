use crate::core::math::{Mat4, Vec3};

/// Snapshot of the integrated state at the start of a fixed step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalState {
    pub center: Vec3,
    /// Orientation with the origin-centering translation removed
    pub rotation: Mat4,
}

/// Initial values handed to `Body::new` / `Body::emplace`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// World transform; its translation column becomes the body center
    pub location: Mat4,
    pub linear_velocity: Vec3,
    /// Radians per second about `spin_axis`
    pub angular_velocity: f32,
    pub spin_axis: Vec3,
}

impl Placement {
    /// At rest at `location`, spinning axis +x
    pub fn at(location: Mat4) -> Self {
        Self {
            location,
            linear_velocity: Vec3::zero(),
            angular_velocity: 0.0,
            spin_axis: Vec3::new(1.0, 0.0, 0.0),
        }
    }

    pub fn with_velocity(mut self, linear_velocity: Vec3) -> Self {
        self.linear_velocity = linear_velocity;
        self
    }

    pub fn with_spin(mut self, angular_velocity: f32, spin_axis: Vec3) -> Self {
        self.angular_velocity = angular_velocity;
        self.spin_axis = spin_axis;
        self
    }
}
