// Copyright @yucwang 2026

use crate::core::interaction::SurfaceIntersection;
use crate::core::material::Material;
use crate::core::shape::Shape;
use crate::math::constants::{EPSILON, Float, Vector2f, Vector3f};
use crate::math::ray::Ray3f;
use std::sync::Arc;

/// Planar parallelogram spanned by `corner + a * v1 + b * v2` with
/// `a, b` in `[0,1]`. Doubles as the emitting surface of the area lights.
pub struct Parallelogram {
    corner: Vector3f,
    v1: Vector3f,
    v2: Vector3f,
    normal: Vector3f,
    area: Float,
    material: Arc<dyn Material>,
}

impl Parallelogram {
    pub fn new(corner: Vector3f, v1: Vector3f, v2: Vector3f,
               material: Arc<dyn Material>) -> Self {
        let cross = v1.cross(&v2);
        let area = cross.norm();
        let normal = if area > 0.0 { cross / area } else { Vector3f::new(0.0, 0.0, 1.0) };
        Self { corner, v1, v2, normal, area, material }
    }

    pub fn corner(&self) -> Vector3f {
        self.corner
    }

    pub fn v1(&self) -> Vector3f {
        self.v1
    }

    pub fn v2(&self) -> Vector3f {
        self.v2
    }

    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    /// Affine map from the canonical square onto the surface.
    pub fn point_at(&self, u: &Vector2f) -> Vector3f {
        self.corner + self.v1 * u.x + self.v2 * u.y
    }

    /// Surface coordinates of `p` in the `(v1, v2)` basis, solved with
    /// Cramer's rule on the Gram matrix.
    fn surface_coordinates(&self, p: &Vector3f) -> Option<Vector2f> {
        let q = p - self.corner;
        let d11 = self.v1.dot(&self.v1);
        let d12 = self.v1.dot(&self.v2);
        let d22 = self.v2.dot(&self.v2);
        let det = d11 * d22 - d12 * d12;
        if det.abs() < 1e-12 {
            return None;
        }

        let q1 = q.dot(&self.v1);
        let q2 = q.dot(&self.v2);
        let a = (q1 * d22 - q2 * d12) / det;
        let b = (d11 * q2 - d12 * q1) / det;
        Some(Vector2f::new(a, b))
    }
}

impl Shape for Parallelogram {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let denom = ray.dir().dot(&self.normal);
        if denom.abs() < EPSILON * EPSILON {
            return None;
        }

        let t = (self.corner - ray.origin()).dot(&self.normal) / denom;
        if !ray.test_segment(t) {
            return None;
        }

        let p = ray.at(t);
        let uv = self.surface_coordinates(&p)?;
        if uv.x < 0.0 || uv.x > 1.0 || uv.y < 0.0 || uv.y > 1.0 {
            return None;
        }

        Some(SurfaceIntersection::new(p, self.normal, t, self.material.clone()))
    }

    fn material(&self) -> Arc<dyn Material> {
        self.material.clone()
    }

    fn surface_area(&self) -> Float {
        self.area
    }
}
