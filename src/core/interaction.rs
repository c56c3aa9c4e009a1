// Copyright @yucwang 2023

use crate::core::material::Material;
use crate::math::constants::{Float, Vector3f};
use std::sync::Arc;

/// Record of the closest hit along a ray. The normal is stored as captured
/// by the shape; integrators normalize it before use.
pub struct SurfaceIntersection {
    p: Vector3f,
    normal: Vector3f,
    t: Float,
    material: Arc<dyn Material>,
}

impl SurfaceIntersection {
    pub fn new(new_p: Vector3f,
               new_normal: Vector3f,
               new_t: Float,
               new_material: Arc<dyn Material>) -> Self {
        Self { p: new_p, normal: new_normal, t: new_t, material: new_material }
    }

    pub fn p(&self) -> Vector3f {
        self.p
    }

    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    pub fn t(&self) -> Float {
        self.t
    }

    pub fn material(&self) -> &dyn Material {
        self.material.as_ref()
    }
}
