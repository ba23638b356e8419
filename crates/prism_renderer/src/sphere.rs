//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use prism_math::{Interval, Ray, Vec3};

/// A sphere primitive.
///
/// The radius is taken as given. A zero or negative radius is not rejected
/// and yields degenerate hits (NaN normals or inverted faces).
#[derive(Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &Arc<dyn Material> {
        &self.material
    }
}

impl Hittable for Sphere {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.contains(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.contains(root) {
                return None;
            }
        }

        let p = ray.at(root);
        let outward_normal = (p - self.center) / self.radius;
        Some(HitRecord::new(
            ray,
            root,
            p,
            outward_normal,
            self.material.as_ref(),
            self,
        ))
    }

    fn clone_hittable(&self) -> Box<dyn Hittable> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Diffuse, DEFAULT_HIT_INTERVAL};

    fn unit_test_sphere() -> Sphere {
        Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Arc::new(Diffuse::new(Vec3::new(0.5, 0.5, 0.5))),
        )
    }

    #[test]
    fn test_sphere_hit_front_face() {
        let sphere = unit_test_sphere();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, DEFAULT_HIT_INTERVAL).expect("should hit");
        assert!((rec.t - 0.5).abs() < 1e-12);
        assert_eq!(rec.p, Vec3::new(0.0, 0.0, -0.5));
        assert!(rec.front_face);
        assert_eq!(rec.normal, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = unit_test_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, DEFAULT_HIT_INTERVAL).expect("should hit");
        assert!((rec.t - 0.5).abs() < 1e-12);
        assert!(!rec.front_face);
        // Outward normal is -z, stored normal faces back along the ray
        assert_eq!(rec.normal, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_sphere_far_root_when_near_root_out_of_range() {
        let sphere = unit_test_sphere();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = sphere
            .hit(&ray, Interval::new(0.75, f64::INFINITY))
            .expect("far side should hit");
        assert!((rec.t - 1.5).abs() < 1e-12);
        assert!(sphere.hit(&ray, Interval::new(0.001, 0.25)).is_none());
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_test_sphere();

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, DEFAULT_HIT_INTERVAL).is_none());

        // Sphere entirely behind the ray
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(sphere.hit(&ray, DEFAULT_HIT_INTERVAL).is_none());
    }

    #[test]
    fn test_sphere_hit_reports_material_and_object() {
        let sphere = unit_test_sphere();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&ray, DEFAULT_HIT_INTERVAL).unwrap();

        let material_ptr = rec.material as *const dyn Material as *const ();
        assert_eq!(material_ptr, Arc::as_ptr(sphere.material()) as *const ());

        let object_ptr = rec.object as *const dyn Hittable as *const ();
        assert_eq!(object_ptr, &sphere as *const Sphere as *const ());
    }

    #[test]
    fn test_color_for_hit_maps_normal() {
        let sphere = unit_test_sphere();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere.hit(&ray, DEFAULT_HIT_INTERVAL).unwrap();

        assert_eq!(sphere.color_for_hit(&rec), Vec3::new(0.5, 0.5, 1.0));
    }

    #[test]
    fn test_clone_shares_material() {
        let sphere = unit_test_sphere();
        let copy = sphere.clone();

        assert_eq!(copy.center(), sphere.center());
        assert_eq!(copy.radius(), sphere.radius());
        assert!(Arc::ptr_eq(copy.material(), sphere.material()));

        let boxed = sphere.clone_hittable();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(boxed.hit(&ray, DEFAULT_HIT_INTERVAL).is_some());
    }
}
