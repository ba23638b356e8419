//! Prism Core - renderer-agnostic scene descriptions.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `SphereDescription`,
//!   `MaterialDescription`, `RenderSettings`
//! - **Loading**: JSON parsing and validation
//!
//! # Example
//!
//! ```ignore
//! use prism_core::load_scene;
//!
//! let desc = load_scene("scene.json")?;
//! println!("{}x{} with {} spheres", desc.width, desc.height, desc.objects.len());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{
    load_scene, load_scene_from_str, validate, LoadError, LoadResult, MIN_IMAGE_EXTENT,
};
pub use scene::{
    GradientDescription, JitterMode, MaterialDescription, RenderSettings, SceneDescription,
    ShadingMode, SphereDescription, SphereSampling,
};
