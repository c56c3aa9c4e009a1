// Copyright @yucwang 2023

use crate::core::interaction::SurfaceIntersection;
use crate::core::material::Material;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;
use std::sync::Arc;

pub trait Shape: Send + Sync {
    /// Closest hit within the ray's clip range, if any.
    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection>;
    fn material(&self) -> Arc<dyn Material>;
    fn surface_area(&self) -> Float;
}
