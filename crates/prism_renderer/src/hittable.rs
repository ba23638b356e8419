//! Hittable trait and HitRecord for ray-object intersection.

use crate::Material;
use prism_math::{Color, Interval, Ray, Vec3};

/// Ray parameter range used when the caller has no tighter bounds.
///
/// The lower bound keeps secondary rays from re-hitting the surface they
/// start on.
pub const DEFAULT_HIT_INTERVAL: Interval = Interval::new(0.001, f64::INFINITY);

/// Record of a ray-object intersection.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Point of intersection
    pub p: Vec3,
    /// Surface normal at intersection (always points against ray)
    pub normal: Vec3,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
    /// Material at the intersection point
    pub material: &'a dyn Material,
    /// Object that was hit
    pub object: &'a dyn Hittable,
}

impl<'a> HitRecord<'a> {
    /// Build a record, orienting the normal against the ray.
    ///
    /// If the ray and the outward normal point the same way the ray came
    /// from inside, so the stored normal is flipped.
    pub fn new(
        ray: &Ray,
        t: f64,
        p: Vec3,
        outward_normal: Vec3,
        material: &'a dyn Material,
        object: &'a dyn Hittable,
    ) -> Self {
        let front_face = ray.direction().dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            t,
            p,
            normal,
            front_face,
            material,
            object,
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object within the given interval.
    ///
    /// Returns the nearest hit with `t` inside `ray_t`, or `None` on a miss.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>>;

    /// Unlit, material-agnostic color for a hit: the normal mapped into [0, 1].
    fn color_for_hit(&self, rec: &HitRecord<'_>) -> Color {
        0.5 * (rec.normal + Vec3::ONE)
    }

    /// Independent copy of this object. Materials may be shared.
    fn clone_hittable(&self) -> Box<dyn Hittable>;
}
