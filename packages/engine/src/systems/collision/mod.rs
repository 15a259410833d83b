//! Collision - shape descriptors for probing and the brick/projectile
//! velocity exchange

mod resolve;
mod shapes;

pub use resolve::{resolve_collision, ResolveParams};
pub use shapes::{intersect_box, intersect_sphere, CollisionShape};
