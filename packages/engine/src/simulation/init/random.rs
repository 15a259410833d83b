use crate::core::math::Vec3;

/// Random number generator (xorshift32)
#[inline]
pub(crate) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform float in [0, 1)
#[inline]
pub(crate) fn next_unit(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

/// +x jittered by up to ±0.5 per component, normalized
pub fn random_spin_axis(state: &mut u32) -> Vec3 {
    // xorshift never leaves zero
    if *state == 0 {
        *state = 0x9E37_79B9;
    }
    let jitter = Vec3::new(
        next_unit(state) - 0.5,
        next_unit(state) - 0.5,
        next_unit(state) - 0.5,
    );
    (Vec3::new(1.0, 0.0, 0.0) + jitter).normalize()
}
