//! Fixed-size vector and matrix math
//!
//! Value types only; copy explicitly when a mutation must not alias.

mod mat4;
mod vec3;
mod vec4;

pub use mat4::Mat4;
pub use vec3::Vec3;
pub use vec4::Vec4;
