use crate::core::math::Vec3;
use crate::domain::config::ColliderKind;

/// Box test: every coordinate within `[-1 - margin, 1 + margin]`
#[inline]
pub fn intersect_box(p: Vec3, margin: f32) -> bool {
    [p.x, p.y, p.z]
        .iter()
        .all(|&v| v >= -1.0 - margin && v <= 1.0 + margin)
}

/// Sphere test: squared norm below `1 + margin`
#[inline]
pub fn intersect_sphere(p: Vec3, margin: f32) -> bool {
    p.dot(p) < 1.0 + margin
}

/// Collision shape descriptor: an analytic unit volume, the probe points
/// sampled from the matching mesh, and a leeway margin.
///
/// Built once per scene and shared read-only by every check.
#[derive(Clone, Debug)]
pub struct CollisionShape {
    kind: ColliderKind,
    points: Vec<Vec3>,
    leeway: f32,
}

impl CollisionShape {
    pub fn for_kind(kind: ColliderKind, sphere_subdivisions: u32, leeway: f32) -> Self {
        match kind {
            ColliderKind::Box => Self::unit_box(leeway),
            ColliderKind::Sphere => Self::unit_sphere(sphere_subdivisions, leeway),
        }
    }

    /// Unit cube; probes are its corners
    pub fn unit_box(leeway: f32) -> Self {
        let mut points = Vec::with_capacity(8);
        for &x in &[-1.0f32, 1.0] {
            for &y in &[-1.0f32, 1.0] {
                for &z in &[-1.0f32, 1.0] {
                    points.push(Vec3::new(x, y, z));
                }
            }
        }
        Self {
            kind: ColliderKind::Box,
            points,
            leeway,
        }
    }

    /// Unit sphere; probes are the vertices of a subdivided tetrahedron
    pub fn unit_sphere(subdivisions: u32, leeway: f32) -> Self {
        let mut points = vec![
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.9428, 0.3333),
            Vec3::new(-0.8165, -0.4714, 0.3333),
            Vec3::new(0.8165, -0.4714, 0.3333),
        ];
        subdivide_triangle(&mut points, 0, 1, 2, subdivisions);
        subdivide_triangle(&mut points, 3, 2, 1, subdivisions);
        subdivide_triangle(&mut points, 1, 0, 3, subdivisions);
        subdivide_triangle(&mut points, 0, 2, 3, subdivisions);
        Self {
            kind: ColliderKind::Sphere,
            points,
            leeway,
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Is the unit-space point `p` inside the volume (within leeway)?
    #[inline]
    pub fn intersects(&self, p: Vec3) -> bool {
        match self.kind {
            ColliderKind::Box => intersect_box(p, self.leeway),
            ColliderKind::Sphere => intersect_sphere(p, self.leeway),
        }
    }
}

/// Push the three normalized edge midpoints, then recurse into the four
/// sub-triangles. Midpoints are not shared between neighbours.
fn subdivide_triangle(points: &mut Vec<Vec3>, a: usize, b: usize, c: usize, count: u32) {
    if count == 0 {
        return;
    }
    let ab_vert = points[a].mix(points[b], 0.5).normalize();
    let ac_vert = points[a].mix(points[c], 0.5).normalize();
    let bc_vert = points[b].mix(points[c], 0.5).normalize();

    let ab = points.len();
    points.push(ab_vert);
    let ac = points.len();
    points.push(ac_vert);
    let bc = points.len();
    points.push(bc_vert);

    subdivide_triangle(points, a, ab, ac, count - 1);
    subdivide_triangle(points, ab, b, bc, count - 1);
    subdivide_triangle(points, ac, bc, c, count - 1);
    subdivide_triangle(points, ab, bc, ac, count - 1);
}
