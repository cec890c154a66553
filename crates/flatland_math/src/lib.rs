//! 2D Mathematics Library
//!
//! Vector types shared by the Flatland physics and core crates.
//!
//! - [`Vec2`] - 2D vector, used for points, directions and normals
//! - [`Vec3`] - 3D vector, used for positions, rotations and scales
//!   (the z component carries depth/layering for positions and the
//!   planar angle for rotations)

mod vec2;
mod vec3;

pub use vec2::Vec2;
pub use vec3::Vec3;
