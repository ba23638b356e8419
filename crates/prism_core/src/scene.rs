//! Scene description types.
//!
//! These are plain data: what the user asked to render. The renderer turns a
//! [`SceneDescription`] into live geometry, materials and a camera.

use prism_math::{Color, Vec3};
use serde::{Deserialize, Serialize};

/// Default image width in pixels.
pub const DEFAULT_WIDTH: u32 = 640;
/// Default image height in pixels.
pub const DEFAULT_HEIGHT: u32 = 480;
/// Default bounce budget.
pub const DEFAULT_MAX_DEPTH: u32 = 50;
/// Default antialiasing sample count.
pub const DEFAULT_SAMPLES_PER_PIXEL: u32 = 100;

/// How each antialiasing sample offsets the pixel coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JitterMode {
    /// Offset drawn from [0.5, 1.99) on both axes. Matches the reference renders.
    #[default]
    Legacy,
    /// Offset drawn from [0, 1) on both axes.
    Centered,
}

impl JitterMode {
    /// Half-open range the per-sample offset is drawn from.
    pub fn offset_range(self) -> (f64, f64) {
        match self {
            JitterMode::Legacy => (0.5, 1.99),
            JitterMode::Centered => (0.0, 1.0),
        }
    }
}

/// Which points the unit-vector rejection sampler keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SphereSampling {
    /// Keep cube points lying outside the unit ball. Matches the reference renders.
    #[default]
    Legacy,
    /// Keep cube points lying inside the unit ball (uniform directions).
    Uniform,
}

/// How a primary ray is turned into a color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingMode {
    /// Full recursive light transport.
    #[default]
    PathTraced,
    /// Nearest-hit normal visualization, no bounces.
    Normals,
}

/// Per-pass render settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Maximum number of bounces per light path
    pub max_depth: u32,

    /// Rays averaged per pixel; 1 disables jitter and gamma encoding
    pub samples_per_pixel: u32,

    /// Seed for the sampler; None draws one from OS entropy
    pub seed: Option<u64>,

    pub jitter: JitterMode,

    pub sphere_sampling: SphereSampling,

    pub shading: ShadingMode,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            samples_per_pixel: DEFAULT_SAMPLES_PER_PIXEL,
            seed: None,
            jitter: JitterMode::default(),
            sphere_sampling: SphereSampling::default(),
            shading: ShadingMode::default(),
        }
    }
}

/// Vertical sky gradient: `start` looking straight down, `end` straight up.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientDescription {
    pub start: [f64; 3],
    pub end: [f64; 3],
}

impl GradientDescription {
    pub fn start_color(&self) -> Color {
        Vec3::from_array(self.start)
    }

    pub fn end_color(&self) -> Color {
        Vec3::from_array(self.end)
    }
}

impl Default for GradientDescription {
    fn default() -> Self {
        Self {
            start: [1.0, 1.0, 1.0],
            end: [0.5, 0.7, 1.0],
        }
    }
}

/// Surface material of a sphere.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MaterialDescription {
    /// Lambertian surface.
    Diffuse { albedo: [f64; 3] },

    /// Mirror-like surface; `fuzz` roughens the reflection (clamped to at most 1).
    Metallic {
        albedo: [f64; 3],
        #[serde(default)]
        fuzz: f64,
    },
}

/// A sphere to place in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereDescription {
    pub center: [f64; 3],
    pub radius: f64,
    pub material: MaterialDescription,
}

impl SphereDescription {
    pub fn new(center: [f64; 3], radius: f64, material: MaterialDescription) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// Everything needed for one render pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    pub settings: RenderSettings,

    /// Sky gradient; None uses the white-to-blue default
    pub background: Option<GradientDescription>,

    /// Spheres in insertion order (earlier wins exact distance ties)
    pub objects: Vec<SphereDescription>,
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            settings: RenderSettings::default(),
            background: None,
            objects: Vec::new(),
        }
    }
}

impl SceneDescription {
    /// The stock four-sphere scene: three small spheres resting on a large
    /// ground sphere.
    pub fn demo() -> Self {
        Self {
            objects: vec![
                SphereDescription::new(
                    [0.0, 0.0, -1.0],
                    0.5,
                    MaterialDescription::Diffuse {
                        albedo: [0.8, 0.3, 0.0],
                    },
                ),
                SphereDescription::new(
                    [1.25, 0.0, -2.0],
                    0.5,
                    MaterialDescription::Diffuse {
                        albedo: [0.7, 0.3, 0.3],
                    },
                ),
                SphereDescription::new(
                    [-1.25, -0.2, -2.0],
                    0.3,
                    MaterialDescription::Metallic {
                        albedo: [0.8, 0.8, 0.8],
                        fuzz: 1.0,
                    },
                ),
                SphereDescription::new(
                    [0.0, -100.5, -1.0],
                    100.0,
                    MaterialDescription::Diffuse {
                        albedo: [0.8, 0.6, 0.2],
                    },
                ),
            ],
            ..Self::default()
        }
    }

    /// Background gradient, falling back to the default when none is set.
    pub fn gradient(&self) -> GradientDescription {
        self.background.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let desc = SceneDescription::default();
        assert_eq!(desc.width, 640);
        assert_eq!(desc.height, 480);
        assert_eq!(desc.settings.max_depth, 50);
        assert_eq!(desc.settings.samples_per_pixel, 100);
        assert_eq!(desc.settings.jitter, JitterMode::Legacy);
        assert_eq!(desc.settings.sphere_sampling, SphereSampling::Legacy);
        assert!(desc.objects.is_empty());
    }

    #[test]
    fn test_demo_scene() {
        let desc = SceneDescription::demo();
        assert_eq!(desc.objects.len(), 4);
        assert_eq!((desc.width, desc.height), (640, 480));

        let ground = desc.objects[3];
        assert_eq!(ground.radius, 100.0);
        assert!(matches!(ground.material, MaterialDescription::Diffuse { .. }));

        assert!(matches!(
            desc.objects[2].material,
            MaterialDescription::Metallic { fuzz, .. } if fuzz == 1.0
        ));
    }

    #[test]
    fn test_gradient_fallback() {
        let desc = SceneDescription::default();
        let gradient = desc.gradient();
        assert_eq!(gradient.start_color(), Vec3::ONE);
        assert_eq!(gradient.end_color(), Vec3::new(0.5, 0.7, 1.0));
    }

    #[test]
    fn test_jitter_ranges() {
        assert_eq!(JitterMode::Legacy.offset_range(), (0.5, 1.99));
        assert_eq!(JitterMode::Centered.offset_range(), (0.0, 1.0));
    }
}
