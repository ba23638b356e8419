//! Prism renderer - CPU ray tracing of sphere scenes.
//!
//! Rays are shot through a fixed pinhole camera, bounced off diffuse and
//! metallic spheres, and averaged into an RGBA pixel buffer. A render pass is
//! single-threaded and synchronous.

mod camera;
mod error;
mod hittable;
mod material;
mod pixels;
mod sampling;
mod scene;
mod sphere;

pub use camera::{Camera, DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH};
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable, DEFAULT_HIT_INTERVAL};
pub use material::{Diffuse, Material, Metallic, ScatterResult};
pub use pixels::{multisample_to_rgba, unit_color_to_rgba, PixelBuffer, CHANNELS};
pub use sampling::Sampler;
pub use scene::{BackgroundGradient, Scene, SINGLE_SAMPLE_SEED};
pub use sphere::Sphere;

/// Re-export vector and ray types from prism_math
pub use prism_math::{Color, Interval, Ray, Vec3};
