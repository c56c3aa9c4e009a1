// Copyright @yucwang 2026

use crate::core::interaction::SurfaceIntersection;
use crate::core::light::LightSource;
use crate::core::shape::Shape;
use crate::math::ray::Ray3f;
use std::sync::Arc;

/// Shape list plus light list, with the closest-hit query the integrators
/// consume. Geometry is read-only after construction so the query is safe
/// to call from many threads at once.
pub struct Scene {
    shapes: Vec<Arc<dyn Shape>>,
    lights: Vec<Arc<dyn LightSource>>,
}

impl Scene {
    pub fn new() -> Self {
        Self { shapes: Vec::new(), lights: Vec::new() }
    }

    pub fn add_shape(&mut self, shape: Arc<dyn Shape>) {
        self.shapes.push(shape);
    }

    pub fn add_light(&mut self, light: Arc<dyn LightSource>) {
        self.lights.push(light);
    }

    pub fn shapes(&self) -> &[Arc<dyn Shape>] {
        &self.shapes
    }

    pub fn lights(&self) -> &[Arc<dyn LightSource>] {
        &self.lights
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Nearest hit strictly ahead of the ray origin. The ray's `min_t`
    /// keeps the origin itself out of the candidate set.
    pub fn closest_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let mut closest: Option<SurfaceIntersection> = None;
        for shape in &self.shapes {
            if let Some(hit) = shape.ray_intersection(ray) {
                let nearer = match &closest {
                    Some(best) => hit.t() < best.t(),
                    None => true,
                };
                if nearer {
                    closest = Some(hit);
                }
            }
        }
        closest
    }
}
