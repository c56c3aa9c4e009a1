// Copyright @yucwang 2026

use crate::core::interaction::SurfaceIntersection;
use crate::core::material::Material;
use crate::core::shape::Shape;
use crate::math::constants::{Float, PI, Vector3f};
use crate::math::ray::Ray3f;
use std::sync::Arc;

pub struct Sphere {
    center: Vector3f,
    radius: Float,
    material: Arc<dyn Material>,
}

impl Sphere {
    pub fn new(center: Vector3f, radius: Float, material: Arc<dyn Material>) -> Self {
        Self { center, radius, material }
    }

    pub fn center(&self) -> Vector3f {
        self.center
    }

    pub fn radius(&self) -> Float {
        self.radius
    }
}

impl Shape for Sphere {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let oc = ray.origin() - self.center;
        let d = ray.dir();

        // Quadratic in t; dir is unit length so a == 1.
        let b = 2.0 * oc.dot(&d);
        let c = oc.dot(&oc) - self.radius * self.radius;
        let discr = b * b - 4.0 * c;
        if discr < 0.0 {
            return None;
        }

        let sqrt_discr = discr.sqrt();
        let t_near = (-b - sqrt_discr) * 0.5;
        let t_far = (-b + sqrt_discr) * 0.5;
        let t = if ray.test_segment(t_near) {
            t_near
        } else if ray.test_segment(t_far) {
            t_far
        } else {
            return None;
        };

        let p = ray.at(t);
        let normal = (p - self.center) / self.radius;
        Some(SurfaceIntersection::new(p, normal, t, self.material.clone()))
    }

    fn material(&self) -> Arc<dyn Material> {
        self.material.clone()
    }

    fn surface_area(&self) -> Float {
        4.0 * PI * self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::spectrum::RGBSpectrum;
    use crate::materials::phong::Phong;
    use approx::assert_relative_eq;

    fn unit_sphere_at(center: Vector3f) -> Sphere {
        let material = Arc::new(Phong::lambertian(RGBSpectrum::new(0.5, 0.5, 0.5)));
        Sphere::new(center, 1.0, material)
    }

    #[test]
    fn test_sphere_front_hit() {
        let sphere = unit_sphere_at(Vector3f::new(0.0, 0.0, 5.0));
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0), None, None);

        let hit = sphere.ray_intersection(&ray).expect("expected hit");
        assert_relative_eq!(hit.t(), 4.0, epsilon = 1e-4);
        assert_relative_eq!(hit.p().z, 4.0, epsilon = 1e-4);
        // Outward normal faces the ray origin.
        assert_relative_eq!(hit.normal().z, -1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_sphere_inside_hit_uses_far_root() {
        let sphere = unit_sphere_at(Vector3f::zeros());
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(1.0, 0.0, 0.0), None, None);

        let hit = sphere.ray_intersection(&ray).expect("expected hit");
        assert_relative_eq!(hit.t(), 1.0, epsilon = 1e-4);
        assert_relative_eq!(hit.normal().x, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere_at(Vector3f::new(0.0, 5.0, 5.0));
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0), None, None);
        assert!(sphere.ray_intersection(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin_is_excluded() {
        let sphere = unit_sphere_at(Vector3f::new(0.0, 0.0, -5.0));
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0), None, None);
        assert!(sphere.ray_intersection(&ray).is_none());
    }

    #[test]
    fn test_sphere_surface_area() {
        let sphere = unit_sphere_at(Vector3f::zeros());
        assert_relative_eq!(sphere.surface_area(), 4.0 * PI, epsilon = 1e-4);
    }
}
