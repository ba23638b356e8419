//! Scene: geometry, camera and sky, plus the per-pixel render loop.
//!
//! Light transport is evaluated iteratively: each bounce pushes its
//! attenuation, and the final background color is multiplied back through
//! them in reverse, giving the same products a recursive evaluation would.

use std::sync::Arc;
use std::time::Instant;

use prism_core::{
    MaterialDescription, RenderSettings, SceneDescription, ShadingMode, SphereDescription,
};
use prism_math::{lerp_vec3, Color, Ray, Vec3};

use crate::pixels::{multisample_to_rgba, unit_color_to_rgba, PixelBuffer};
use crate::{
    Camera, Diffuse, HitRecord, Hittable, Material, Metallic, RenderResult, Sampler, Sphere,
    DEFAULT_HIT_INTERVAL,
};

/// Seed for single-sample passes that have no explicit seed, so repeated
/// renders of the same scene produce identical buffers.
pub const SINGLE_SAMPLE_SEED: u64 = 0;

/// Vertical sky gradient used for every ray that leaves the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundGradient {
    /// Color looking straight down (t = 0)
    pub start: Color,
    /// Color looking straight up (t = 1)
    pub end: Color,
}

impl BackgroundGradient {
    pub fn new(start: Color, end: Color) -> Self {
        Self { start, end }
    }

    /// Gradient color for a ray; depends only on the direction's y.
    pub fn color(&self, ray: &Ray) -> Color {
        let unit_direction = ray.direction().normalize();
        let t = 0.5 * (unit_direction.y + 1.0);
        lerp_vec3(t, self.start, self.end)
    }
}

impl Default for BackgroundGradient {
    fn default() -> Self {
        Self {
            start: Color::new(1.0, 1.0, 1.0),
            end: Color::new(0.5, 0.7, 1.0),
        }
    }
}

/// A renderable scene.
///
/// Geometry, camera and materials are read-only during [`Scene::draw_frame`];
/// the only state a render pass mutates is its own sampler and buffer.
pub struct Scene {
    width: u32,
    height: u32,
    camera: Camera,
    background: BackgroundGradient,
    objects: Vec<Arc<dyn Hittable>>,
    settings: RenderSettings,
}

impl Scene {
    /// Create an empty scene with a camera matching the image size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            camera: Camera::new(width, height),
            background: BackgroundGradient::default(),
            objects: Vec::new(),
            settings: RenderSettings::default(),
        }
    }

    /// Set render settings.
    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the bounce budget.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.settings.max_depth = max_depth;
        self
    }

    /// Set the antialiasing sample count.
    pub fn with_samples_per_pixel(mut self, samples: u32) -> Self {
        self.settings.samples_per_pixel = samples;
        self
    }

    /// Set background gradient.
    pub fn with_background(mut self, background: BackgroundGradient) -> Self {
        self.background = background;
        self
    }

    /// Use a pre-built camera instead of the one derived from the image size.
    pub fn with_camera(mut self, camera: &Camera) -> Self {
        self.camera = camera.clone();
        self
    }

    /// Build a scene from a description. Each sphere gets its own material.
    pub fn from_description(desc: &SceneDescription) -> Self {
        let gradient = desc.gradient();
        let mut scene = Scene::new(desc.width, desc.height)
            .with_settings(desc.settings.clone())
            .with_background(BackgroundGradient::new(
                gradient.start_color(),
                gradient.end_color(),
            ));

        for sphere in &desc.objects {
            scene.add(Arc::new(build_sphere(sphere)));
        }

        log::debug!(
            "Built scene {}x{} with {} object(s)",
            scene.width,
            scene.height,
            scene.objects.len()
        );
        scene
    }

    /// Append a shared object.
    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Append an independent copy of an object.
    pub fn add_clone(&mut self, object: &dyn Hittable) {
        self.objects.push(Arc::from(object.clone_hittable()));
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn background(&self) -> &BackgroundGradient {
        &self.background
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn objects(&self) -> &[Arc<dyn Hittable>] {
        &self.objects
    }

    /// Sky color seen along a ray.
    pub fn background_color(&self, ray: &Ray) -> Color {
        self.background.color(ray)
    }

    /// Nearest hit across all objects.
    ///
    /// Every object is tested against the full default interval and a later
    /// hit replaces the current one only when strictly closer, so on an
    /// exact tie the earlier object wins.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        for object in &self.objects {
            if let Some(rec) = object.hit(ray, DEFAULT_HIT_INTERVAL) {
                if closest.map_or(true, |best| rec.t < best.t) {
                    closest = Some(rec);
                }
            }
        }

        closest
    }

    /// Light arriving back along `ray` with a budget of `depth` bounces.
    ///
    /// The background is returned when the budget is spent, when nothing is
    /// hit, and also when a surface absorbs the ray. Each bounce multiplies
    /// the result by that surface's attenuation.
    pub fn color_sample(&self, ray: &Ray, depth: u32, sampler: &mut Sampler) -> Color {
        let mut attenuations: Vec<Color> = Vec::with_capacity(depth.min(64) as usize);
        let mut ray = *ray;
        let mut remaining = depth;

        let terminal = loop {
            if remaining == 0 {
                break self.background_color(&ray);
            }

            let Some(rec) = self.nearest_hit(&ray) else {
                break self.background_color(&ray);
            };

            let result = rec.material.scatter(&ray, &rec, sampler);
            if !result.continues {
                break self.background_color(&ray);
            }

            attenuations.push(result.attenuation);
            ray = result.scattered;
            remaining -= 1;
        };

        attenuations
            .iter()
            .rev()
            .fold(terminal, |color, attenuation| color * *attenuation)
    }

    /// Debug shading: the hit object's unlit color, or the sky.
    pub fn normal_sample(&self, ray: &Ray) -> Color {
        match self.nearest_hit(ray) {
            Some(rec) => rec.object.color_for_hit(&rec),
            None => self.background_color(ray),
        }
    }

    fn shade(&self, ray: &Ray, sampler: &mut Sampler) -> Color {
        match self.settings.shading {
            ShadingMode::PathTraced => self.color_sample(ray, self.settings.max_depth, sampler),
            ShadingMode::Normals => self.normal_sample(ray),
        }
    }

    /// Render one frame using a sampler built from the scene's settings.
    ///
    /// Unseeded multi-sample passes draw from OS entropy. Unseeded
    /// single-sample passes use [`SINGLE_SAMPLE_SEED`].
    pub fn draw_frame(&self) -> RenderResult<PixelBuffer> {
        let seed = match self.settings.seed {
            None if self.settings.samples_per_pixel == 1 => Some(SINGLE_SAMPLE_SEED),
            seed => seed,
        };
        let mut sampler = Sampler::new(seed, self.settings.sphere_sampling);
        self.draw_frame_with(&mut sampler)
    }

    /// Render one frame.
    ///
    /// Image row y (y grows upward) is written to buffer row `height - y`.
    /// Row 0 therefore maps one past the last buffer row and is discarded,
    /// and buffer row 0 stays transparent black.
    pub fn draw_frame_with(&self, sampler: &mut Sampler) -> RenderResult<PixelBuffer> {
        let samples = self.settings.samples_per_pixel;
        log::info!(
            "Rendering {}x{} @ {} spp, depth {}, {} object(s)",
            self.width,
            self.height,
            samples,
            self.settings.max_depth,
            self.objects.len()
        );

        let start = Instant::now();
        let mut buffer = PixelBuffer::new(self.width, self.height);
        let mut dropped = 0usize;

        for y in 0..self.height {
            for x in 0..self.width {
                let rgba = if samples == 1 {
                    let ray = self.camera.get_ray(x as f64, y as f64)?;
                    unit_color_to_rgba(self.shade(&ray, sampler))
                } else {
                    let mut color = Color::ZERO;
                    for _ in 0..samples {
                        let (u, v) = self.jittered(x, y, sampler);
                        let ray = self.camera.get_ray(u, v)?;
                        color += self.shade(&ray, sampler);
                    }
                    multisample_to_rgba(color, samples)
                };

                if !buffer.put(x, self.height - y, rgba) {
                    dropped += 1;
                }
            }
        }

        if dropped > 0 {
            log::trace!("{} pixel(s) fell outside the buffer", dropped);
        }
        log::info!("Rendered in {:?}", start.elapsed());

        Ok(buffer)
    }

    /// Jittered sample position for pixel (x, y), pulled back inside the image.
    fn jittered(&self, x: u32, y: u32, sampler: &mut Sampler) -> (f64, f64) {
        let (lo, hi) = self.settings.jitter.offset_range();
        let mut u = x as f64 + sampler.gen_range(lo, hi);
        let mut v = y as f64 + sampler.gen_range(lo, hi);

        if u >= self.width as f64 {
            u = (self.width - 1) as f64;
        }
        if v >= self.height as f64 {
            v = (self.height - 1) as f64;
        }
        (u, v)
    }
}

impl Clone for Scene {
    /// Deep-copies geometry; materials stay shared.
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            camera: self.camera.clone(),
            background: self.background,
            objects: self
                .objects
                .iter()
                .map(|object| Arc::from(object.clone_hittable()))
                .collect(),
            settings: self.settings.clone(),
        }
    }
}

fn build_sphere(desc: &SphereDescription) -> Sphere {
    let material: Arc<dyn Material> = match desc.material {
        MaterialDescription::Diffuse { albedo } => {
            Arc::new(Diffuse::new(Vec3::from_array(albedo)))
        }
        MaterialDescription::Metallic { albedo, fuzz } => {
            Arc::new(Metallic::new(Vec3::from_array(albedo), fuzz))
        }
    };
    Sphere::new(Vec3::from_array(desc.center), desc.radius, material)
}
