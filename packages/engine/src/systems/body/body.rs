use crate::core::math::{Mat4, Vec3};
use crate::domain::handles::{MaterialHandle, ShapeHandle};
use crate::systems::collision::CollisionShape;

use super::state::{PhysicalState, Placement};

/// Rigid Body - integrates at a fixed step, drawn by blending two steps
///
/// Follows "Fix Your Timestep!": `advance` moves the body one fixed step and
/// remembers where it was; `blend_state` builds the transform to draw from
/// the last two steps.
#[derive(Clone, Debug)]
pub struct Body {
    // === Render payload (never inspected) ===
    pub shape: ShapeHandle,
    pub material: MaterialHandle,
    /// Scale applied on top of the blended transform
    pub size: Vec3,

    // === Physics State ===
    /// World position
    pub center: Vec3,
    /// Orientation (translation removed)
    pub rotation: Mat4,
    pub linear_velocity: Vec3,
    /// Rotation rate about `spin_axis` (radians per second)
    pub angular_velocity: f32,
    pub spin_axis: Vec3,

    /// State as of the start of the current fixed step
    pub previous: PhysicalState,
    /// Interpolated transform for rendering and collision probes
    pub drawn_location: Mat4,

    /// Lowest brick of its column when it was knocked loose
    pub bottom_brick: bool,
}

impl Body {
    /// Create a body and emplace it in one go
    pub fn new(shape: ShapeHandle, material: MaterialHandle, size: Vec3, placement: Placement) -> Self {
        let mut body = Self {
            shape,
            material,
            size,
            center: Vec3::zero(),
            rotation: Mat4::identity(),
            linear_velocity: Vec3::zero(),
            angular_velocity: 0.0,
            spin_axis: Vec3::new(1.0, 0.0, 0.0),
            previous: PhysicalState {
                center: Vec3::zero(),
                rotation: Mat4::identity(),
            },
            drawn_location: Mat4::identity(),
            bottom_brick: false,
        };
        body.emplace(placement);
        body
    }

    /// Assign (or overwrite) position, orientation and velocities.
    ///
    /// `previous` is reset to the new state and `drawn_location` to the
    /// unscaled placement transform until the next blend.
    pub fn emplace(&mut self, placement: Placement) {
        let location = placement.location;
        self.center = location.origin();
        self.rotation = Mat4::translation(-self.center) * location;
        self.previous = PhysicalState {
            center: self.center,
            rotation: self.rotation,
        };
        self.drawn_location = location;
        self.linear_velocity = placement.linear_velocity;
        self.angular_velocity = placement.angular_velocity;
        self.spin_axis = placement.spin_axis;
    }

    /// One forward-Euler step of `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.previous = PhysicalState {
            center: self.center,
            rotation: self.rotation,
        };

        self.center += self.linear_velocity * dt;

        if self.angular_velocity != 0.0 {
            let spin = Mat4::rotation(dt * self.angular_velocity, self.spin_axis);
            self.rotation.pre_multiply(&spin);
        }
    }

    /// Entry-wise linear blend of the two rotations.
    ///
    /// Not an orientation interpolation: between distant orientations the
    /// result shears. Draw code and tests rely on exactly this blend.
    pub fn blend_rotation(&self, alpha: f32) -> Mat4 {
        self.previous.rotation.lerp(&self.rotation, alpha)
    }

    pub fn blend_state(&mut self, alpha: f32) {
        let center = self.previous.center.mix(self.center, alpha);
        self.drawn_location =
            Mat4::translation(center) * self.blend_rotation(alpha) * Mat4::scale(self.size);
    }

    /// Probe `other` against this body's unit volume.
    ///
    /// Expresses `other` in this body's drawn frame and tests each sample
    /// point of `collider` there. One-directional: `a.check_if_colliding(b)`
    /// and `b.check_if_colliding(a)` can disagree. A body never collides with
    /// itself, and a degenerate (singular) drawn transform collides with
    /// nothing.
    pub fn check_if_colliding(&self, other: &Body, collider: &CollisionShape) -> bool {
        if std::ptr::eq(self, other) {
            return false;
        }

        let Some(inverse) = self.drawn_location.inverse() else {
            return false;
        };
        let t = inverse * other.drawn_location;

        collider
            .points()
            .iter()
            .any(|&p| collider.intersects(t.transform_point(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::ColliderKind;

    fn body_at(location: Mat4, size: Vec3) -> Body {
        Body::new(ShapeHandle(0), MaterialHandle(0), size, Placement::at(location))
    }

    #[test]
    fn emplace_splits_center_and_rotation() {
        let location = Mat4::translation(Vec3::new(2.0, 3.0, 4.0))
            * Mat4::rotation(0.5, Vec3::new(0.0, 1.0, 0.0));
        let body = body_at(location, Vec3::one());
        assert_eq!(body.center, Vec3::new(2.0, 3.0, 4.0));
        assert!(body.rotation.origin().length() < 1e-6);
        assert_eq!(body.previous.center, body.center);
        assert_eq!(body.previous.rotation, body.rotation);
        assert_eq!(body.drawn_location, location);
    }

    #[test]
    fn advance_snapshots_then_integrates() {
        let mut body = body_at(Mat4::identity(), Vec3::one());
        body.linear_velocity = Vec3::new(1.0, -2.0, 4.0);
        body.advance(0.5);
        assert_eq!(body.previous.center, Vec3::zero());
        assert_eq!(body.center, Vec3::new(0.5, -1.0, 2.0));
        // No spin requested: orientation untouched.
        assert_eq!(body.rotation, Mat4::identity());

        body.advance(0.5);
        assert_eq!(body.previous.center, Vec3::new(0.5, -1.0, 2.0));
        assert_eq!(body.center, Vec3::new(1.0, -2.0, 4.0));
    }

    #[test]
    fn advance_spins_about_axis() {
        let mut body = body_at(Mat4::identity(), Vec3::one());
        body.angular_velocity = std::f32::consts::PI;
        body.spin_axis = Vec3::new(0.0, 0.0, 1.0);
        body.advance(0.5);
        let expected = Mat4::rotation(std::f32::consts::FRAC_PI_2, Vec3::new(0.0, 0.0, 1.0));
        assert!(body.rotation.approx_eq(&expected, 1e-6));
        assert_eq!(body.previous.rotation, Mat4::identity());
    }

    #[test]
    fn blend_endpoints_reproduce_both_states() {
        let size = Vec3::new(4.0, 4.0, 1.0);
        let mut body = body_at(Mat4::translation(Vec3::new(1.0, 1.0, 1.0)), size);
        body.linear_velocity = Vec3::new(0.0, 10.0, -3.0);
        body.angular_velocity = 0.8;
        body.spin_axis = Vec3::new(0.0, 1.0, 0.0);
        body.advance(0.05);

        body.blend_state(0.0);
        let previous = Mat4::translation(body.previous.center)
            * body.previous.rotation
            * Mat4::scale(size);
        assert!(body.drawn_location.approx_eq(&previous, 1e-6));

        body.blend_state(1.0);
        let current = Mat4::translation(body.center) * body.rotation * Mat4::scale(size);
        assert!(body.drawn_location.approx_eq(&current, 1e-6));
    }

    #[test]
    fn half_blend_of_opposite_rotations_collapses() {
        // Entry-wise blending of +90 and -90 degree turns is not a rotation.
        let mut body = body_at(Mat4::identity(), Vec3::one());
        body.rotation = Mat4::rotation(std::f32::consts::FRAC_PI_2, Vec3::new(0.0, 0.0, 1.0));
        body.previous.rotation = Mat4::rotation(-std::f32::consts::FRAC_PI_2, Vec3::new(0.0, 0.0, 1.0));
        let blended = body.blend_rotation(0.5);
        assert!(blended.rows[0][0].abs() < 1e-6);
        assert!(blended.rows[0][1].abs() < 1e-6);
        assert!((blended.rows[2][2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn never_collides_with_itself() {
        let collider = CollisionShape::for_kind(ColliderKind::Box, 4, 0.1);
        let body = body_at(Mat4::identity(), Vec3::one());
        assert!(!body.check_if_colliding(&body, &collider));
    }

    #[test]
    fn collision_probe_is_one_directional() {
        let collider = CollisionShape::for_kind(ColliderKind::Box, 4, 0.1);
        let mut a = body_at(Mat4::identity(), Vec3::one());
        let mut b = body_at(Mat4::identity(), Vec3::new(0.01, 0.01, 0.01));
        a.blend_state(1.0);
        b.blend_state(1.0);

        // b's probes shrink into a's unit box...
        assert!(a.check_if_colliding(&b, &collider));
        // ...while a's probes land far outside b's tiny box.
        assert!(!b.check_if_colliding(&a, &collider));
    }

    #[test]
    fn separated_bodies_do_not_collide() {
        let collider = CollisionShape::for_kind(ColliderKind::Sphere, 2, 0.1);
        let mut a = body_at(Mat4::identity(), Vec3::one());
        let mut b = body_at(Mat4::translation(Vec3::new(5.0, 0.0, 0.0)), Vec3::one());
        a.blend_state(1.0);
        b.blend_state(1.0);
        assert!(!a.check_if_colliding(&b, &collider));
        assert!(!b.check_if_colliding(&a, &collider));
    }

    #[test]
    fn singular_drawn_location_collides_with_nothing() {
        let collider = CollisionShape::for_kind(ColliderKind::Box, 4, 0.1);
        let mut a = body_at(Mat4::identity(), Vec3::new(1.0, 0.0, 1.0));
        let b = body_at(Mat4::identity(), Vec3::one());
        a.blend_state(1.0);
        assert!(!a.check_if_colliding(&b, &collider));
    }
}
