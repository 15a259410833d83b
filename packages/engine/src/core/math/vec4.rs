use super::vec3::Vec3;

/// Homogeneous 4D vector.
///
/// `w` is the point/direction flag (1 = point, 0 = direction).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn point(p: Vec3) -> Self {
        Self::new(p.x, p.y, p.z, 1.0)
    }

    pub fn to3(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn dot(&self, other: Vec4) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}
