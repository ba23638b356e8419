//! Material trait for surface scattering.

use crate::{hittable::HitRecord, Sampler};
use prism_math::{Color, Ray, Vec3, VectorExt};

/// Outcome of a scatter call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterResult {
    /// False when the surface absorbs the ray
    pub continues: bool,
    /// Per-channel multiplier for light carried back along `scattered`
    pub attenuation: Color,
    /// Outgoing ray, starting at the hit point
    pub scattered: Ray,
}

/// Trait for materials that describe how light interacts with surfaces.
///
/// Materials carry no mutable state, so one instance may be shared by any
/// number of objects.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray at the given hit.
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, sampler: &mut Sampler) -> ScatterResult;
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone, PartialEq)]
pub struct Diffuse {
    albedo: Color,
}

impl Diffuse {
    /// Create a new diffuse material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }
}

impl Material for Diffuse {
    fn scatter(&self, _ray_in: &Ray, rec: &HitRecord, sampler: &mut Sampler) -> ScatterResult {
        ScatterResult {
            continues: true,
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, diffuse_direction(rec.normal, sampler.unit_vector())),
        }
    }
}

/// Normal plus a random unit offset, or the bare normal when the two cancel.
fn diffuse_direction(normal: Vec3, offset: Vec3) -> Vec3 {
    let direction = normal + offset;
    if direction.near_zero() {
        normal
    } else {
        direction
    }
}

/// Metal (specular) material.
#[derive(Debug, Clone, PartialEq)]
pub struct Metallic {
    albedo: Color,
    fuzz: f64,
}

impl Metallic {
    /// Create a new metallic material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror; values above 1.0 are clamped
    pub fn new(albedo: Color, fuzz: f64) -> Self {
        Self {
            albedo,
            fuzz: fuzz.min(1.0),
        }
    }

    pub fn albedo(&self) -> Color {
        self.albedo
    }

    pub fn fuzz(&self) -> f64 {
        self.fuzz
    }
}

impl Material for Metallic {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, sampler: &mut Sampler) -> ScatterResult {
        let reflected = ray_in.direction().reflect_about(rec.normal);

        // A perfect mirror always bounces
        if self.fuzz == 0.0 {
            return ScatterResult {
                continues: true,
                attenuation: self.albedo,
                scattered: Ray::new(rec.p, reflected),
            };
        }

        let scattered = Ray::new(rec.p, reflected + self.fuzz * sampler.unit_vector());
        ScatterResult {
            continues: scattered.direction().dot(rec.normal) > 0.0,
            attenuation: self.albedo,
            scattered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Hittable, Sphere};
    use std::sync::Arc;

    fn grey() -> Color {
        Color::new(0.5, 0.5, 0.5)
    }

    /// Hit on the top of a unit sphere centered below the origin.
    fn with_top_hit<F>(material: Arc<dyn Material>, incoming: Ray, check: F)
    where
        F: FnOnce(&HitRecord),
    {
        let sphere = Sphere::new(Vec3::new(0.0, -1.0, 0.0), 1.0, material);
        let rec = sphere
            .hit(&incoming, crate::DEFAULT_HIT_INTERVAL)
            .expect("ray should hit the sphere");
        check(&rec);
    }

    #[test]
    fn test_diffuse_scatter() {
        let incoming = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        with_top_hit(Arc::new(Diffuse::new(grey())), incoming, |rec| {
            let mut sampler = Sampler::seeded(42);
            for _ in 0..100 {
                let result = rec.material.scatter(&incoming, rec, &mut sampler);
                assert!(result.continues);
                assert_eq!(result.attenuation, grey());
                assert_eq!(result.scattered.origin(), rec.p);
                // normal + unit vector never points into the surface
                assert!(result.scattered.direction().dot(rec.normal) >= -1e-12);
            }
        });
    }

    #[test]
    fn test_diffuse_direction_falls_back_to_normal() {
        let normal = Vec3::Y;

        assert_eq!(diffuse_direction(normal, -Vec3::Y), normal);
        // Cancellation that leaves only rounding noise
        assert_eq!(diffuse_direction(normal, Vec3::new(1e-9, -1.0, -1e-9)), normal);
        assert_eq!(
            diffuse_direction(normal, Vec3::X),
            Vec3::new(1.0, 1.0, 0.0)
        );
    }

    #[test]
    fn test_metallic_mirror() {
        let incoming = Ray::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        with_top_hit(Arc::new(Metallic::new(grey(), 0.0)), incoming, |rec| {
            let mut sampler = Sampler::seeded(1);
            let result = rec.material.scatter(&incoming, rec, &mut sampler);

            assert!(result.continues);
            assert_eq!(result.attenuation, grey());
            assert!((result.scattered.direction() - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-9);
        });
    }

    #[test]
    fn test_metallic_fuzz_is_clamped() {
        assert_eq!(Metallic::new(grey(), 3.0).fuzz(), 1.0);
        assert_eq!(Metallic::new(grey(), 0.25).fuzz(), 0.25);
    }

    #[test]
    fn test_fuzzy_metal_absorbs_grazing_rays() {
        // A grazing reflection plus full fuzz lands below the surface part
        // of the time; those bounces are absorbed.
        let incoming = Ray::new(Vec3::new(-1.0, 0.01, 0.0), Vec3::new(1.0, -0.01, 0.0));
        with_top_hit(Arc::new(Metallic::new(grey(), 1.0)), incoming, |rec| {
            let mut sampler = Sampler::seeded(5);
            let results: Vec<_> = (0..200)
                .map(|_| rec.material.scatter(&incoming, rec, &mut sampler))
                .collect();

            assert!(results.iter().any(|r| r.continues));
            assert!(results.iter().any(|r| !r.continues));
            for r in &results {
                assert_eq!(r.continues, r.scattered.direction().dot(rec.normal) > 0.0);
                assert_eq!(r.attenuation, grey());
            }
        });
    }
}
