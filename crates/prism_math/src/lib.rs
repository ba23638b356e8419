//! Prism math: vectors, rays and intervals shared by the renderer.

pub use glam::{dvec3, DVec3};

mod error;
mod interval;
mod ray;
mod vector;

pub use error::{MathError, MathResult};
pub use interval::Interval;
pub use ray::Ray;
pub use vector::{cross, dot, lerp, lerp_vec3, Color, Vec3, VectorExt, NEAR_ZERO_EPSILON};
