use tanks_engine::{
    Body, ColliderKind, CollisionShape, MaterialHandle, Mat4, Placement, ShapeHandle, Vec3,
};

fn body_at(center: Vec3, size: Vec3) -> Body {
    let mut body = Body::new(
        ShapeHandle(0),
        MaterialHandle(0),
        size,
        Placement::at(Mat4::translation(center)),
    );
    // Apply the size the way a frame would
    body.blend_state(1.0);
    body
}

#[test]
fn big_body_sees_small_one_but_not_the_reverse() {
    let collider = CollisionShape::for_kind(ColliderKind::Box, 0, 0.1);
    let big = body_at(Vec3::zero(), Vec3::new(10.0, 10.0, 10.0));
    let small = body_at(Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.5, 0.5, 0.5));

    // Small body's corners land inside the big one's unit volume
    assert!(big.check_if_colliding(&small, &collider));
    // Big body's corners are far outside the small one
    assert!(!small.check_if_colliding(&big, &collider));
}

#[test]
fn body_never_collides_with_itself() {
    let collider = CollisionShape::unit_box(0.1);
    let body = body_at(Vec3::zero(), Vec3::one());
    assert!(!body.check_if_colliding(&body, &collider));

    let twin = body.clone();
    assert!(body.check_if_colliding(&twin, &collider));
}

#[test]
fn flattened_body_collides_with_nothing() {
    let collider = CollisionShape::unit_box(0.1);
    let flat = body_at(Vec3::zero(), Vec3::new(1.0, 0.0, 1.0));
    let other = body_at(Vec3::zero(), Vec3::one());
    assert!(!flat.check_if_colliding(&other, &collider));
}

#[test]
fn sphere_collider_is_rounder_than_the_box() {
    let boxed = CollisionShape::unit_box(0.1);
    let sphere = CollisionShape::unit_sphere(2, 0.1);
    let a = body_at(Vec3::zero(), Vec3::one());
    // Only the box's corners reach this diagonal neighbour
    let b = body_at(Vec3::new(1.9, 1.9, 1.9), Vec3::one());

    assert!(a.check_if_colliding(&b, &boxed));
    assert!(!a.check_if_colliding(&b, &sphere));
}
