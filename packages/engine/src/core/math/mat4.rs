use super::vec3::Vec3;
use super::vec4::Vec4;

/// 4x4 transform, stored as rows.
///
/// Points are column vectors: `m * p`. Translation lives in the last column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    pub rows: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub const fn identity() -> Self {
        Self {
            rows: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub fn translation(t: Vec3) -> Self {
        Self {
            rows: [
                [1.0, 0.0, 0.0, t.x],
                [0.0, 1.0, 0.0, t.y],
                [0.0, 0.0, 1.0, t.z],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub fn scale(s: Vec3) -> Self {
        Self {
            rows: [
                [s.x, 0.0, 0.0, 0.0],
                [0.0, s.y, 0.0, 0.0],
                [0.0, 0.0, s.z, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Rotation of `angle` radians about `axis` (normalized here)
    pub fn rotation(angle: f32, axis: Vec3) -> Self {
        let Vec3 { x, y, z } = axis.normalize();
        let (s, c) = angle.sin_cos();
        let omc = 1.0 - c;
        Self {
            rows: [
                [x * x * omc + c, x * y * omc - z * s, x * z * omc + y * s, 0.0],
                [x * y * omc + z * s, y * y * omc + c, y * z * omc - x * s, 0.0],
                [x * z * omc - y * s, y * z * omc + x * s, z * z * omc + c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::from(self.rows[i])
    }

    /// Translation column as a point
    pub fn origin(&self) -> Vec3 {
        self.transform(Vec4::new(0.0, 0.0, 0.0, 1.0)).to3()
    }

    pub fn transform(&self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(v),
            self.row(1).dot(v),
            self.row(2).dot(v),
            self.row(3).dot(v),
        )
    }

    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.transform(Vec4::point(p)).to3()
    }

    /// `self = lhs * self`
    pub fn pre_multiply(&mut self, lhs: &Mat4) {
        *self = *lhs * *self;
    }

    /// Element-wise linear blend of every entry.
    ///
    /// Used for rotation blending; intermediate results are generally not
    /// orthonormal (shear appears between distant orientations).
    pub fn lerp(&self, other: &Mat4, t: f32) -> Self {
        let mut rows = [[0.0f32; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = (1.0 - t) * self.rows[i][j] + t * other.rows[i][j];
            }
        }
        Self { rows }
    }

    /// General inverse; `None` when the matrix is singular
    pub fn inverse(&self) -> Option<Mat4> {
        let m = &self.rows;
        let (b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11) = cofactor_pairs(m);
        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv = 1.0 / det;

        let [a00, a01, a02, a03] = m[0];
        let [a10, a11, a12, a13] = m[1];
        let [a20, a21, a22, a23] = m[2];
        let [a30, a31, a32, a33] = m[3];

        Some(Self {
            rows: [
                [
                    (a11 * b11 - a12 * b10 + a13 * b09) * inv,
                    (a02 * b10 - a01 * b11 - a03 * b09) * inv,
                    (a31 * b05 - a32 * b04 + a33 * b03) * inv,
                    (a22 * b04 - a21 * b05 - a23 * b03) * inv,
                ],
                [
                    (a12 * b08 - a10 * b11 - a13 * b07) * inv,
                    (a00 * b11 - a02 * b08 + a03 * b07) * inv,
                    (a32 * b02 - a30 * b05 - a33 * b01) * inv,
                    (a20 * b05 - a22 * b02 + a23 * b01) * inv,
                ],
                [
                    (a10 * b10 - a11 * b08 + a13 * b06) * inv,
                    (a01 * b08 - a00 * b10 - a03 * b06) * inv,
                    (a30 * b04 - a31 * b02 + a33 * b00) * inv,
                    (a21 * b02 - a20 * b04 - a23 * b00) * inv,
                ],
                [
                    (a11 * b07 - a10 * b09 - a12 * b06) * inv,
                    (a00 * b09 - a01 * b07 + a02 * b06) * inv,
                    (a31 * b01 - a30 * b03 - a32 * b00) * inv,
                    (a20 * b03 - a21 * b01 + a22 * b00) * inv,
                ],
            ],
        })
    }

    /// Row-major flat copy for transfer buffers
    pub fn to_row_major(&self) -> [f32; 16] {
        let mut out = [0.0f32; 16];
        for (i, row) in self.rows.iter().enumerate() {
            out[i * 4..i * 4 + 4].copy_from_slice(row);
        }
        out
    }

    pub fn approx_eq(&self, other: &Mat4, eps: f32) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

#[inline]
#[allow(clippy::type_complexity)]
fn cofactor_pairs(m: &[[f32; 4]; 4]) -> (f32, f32, f32, f32, f32, f32, f32, f32, f32, f32, f32, f32) {
    let [a00, a01, a02, a03] = m[0];
    let [a10, a11, a12, a13] = m[1];
    let [a20, a21, a22, a23] = m[2];
    let [a30, a31, a32, a33] = m[3];
    (
        a00 * a11 - a01 * a10,
        a00 * a12 - a02 * a10,
        a00 * a13 - a03 * a10,
        a01 * a12 - a02 * a11,
        a01 * a13 - a03 * a11,
        a02 * a13 - a03 * a12,
        a20 * a31 - a21 * a30,
        a20 * a32 - a22 * a30,
        a20 * a33 - a23 * a30,
        a21 * a32 - a22 * a31,
        a21 * a33 - a23 * a31,
        a22 * a33 - a23 * a32,
    )
}

impl std::ops::Mul for Mat4 {
    type Output = Mat4;
    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut rows = [[0.0f32; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = (0..4).map(|k| self.rows[i][k] * rhs.rows[k][j]).sum();
            }
        }
        Mat4 { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn inverse_undoes_a_compound_transform() {
        let m = Mat4::translation(Vec3::new(3.0, -2.0, 7.0))
            * Mat4::rotation(0.7, Vec3::new(1.0, 2.0, 0.5))
            * Mat4::scale(Vec3::new(4.0, 4.0, 1.0));
        let inv = m.inverse().expect("invertible");
        assert!((inv * m).approx_eq(&Mat4::identity(), 1e-5));
        assert!((m * inv).approx_eq(&Mat4::identity(), 1e-5));
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        assert!(Mat4::scale(Vec3::new(1.0, 0.0, 1.0)).inverse().is_none());
    }

    #[test]
    fn quarter_turn_about_z_maps_x_to_y() {
        let r = Mat4::rotation(FRAC_PI_2, Vec3::new(0.0, 0.0, 1.0));
        let p = r.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!((p.x).abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn origin_reads_translation_column() {
        let m = Mat4::translation(Vec3::new(1.0, 2.0, 3.0)) * Mat4::rotation(1.0, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(m.origin(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn lerp_is_elementwise() {
        let a = Mat4::identity();
        let b = Mat4::scale(Vec3::new(3.0, 3.0, 3.0));
        let half = a.lerp(&b, 0.5);
        assert_eq!(half.rows[0][0], 2.0);
        assert_eq!(half.rows[3][3], 1.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }
}
