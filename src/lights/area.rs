// Copyright @yucwang 2026

use crate::core::light::LightSource;
use crate::core::shape::Shape;
use crate::core::rng::LcgRng;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::spectrum::RGBSpectrum;
use crate::shapes::parallelogram::Parallelogram;
use std::sync::Arc;

/// Area light over a parallelogram. The backing shape is usually also
/// registered in the scene so the emitter is visible to camera and bounce
/// rays; intensity delegates to that shape's material.
pub struct AreaLightSource {
    shape: Arc<Parallelogram>,
}

impl AreaLightSource {
    pub fn new(shape: Arc<Parallelogram>) -> Self {
        Self { shape }
    }

    pub fn shape(&self) -> &Arc<Parallelogram> {
        &self.shape
    }
}

impl LightSource for AreaLightSource {
    fn sample_position(&self, rng: &mut LcgRng) -> Vector3f {
        self.shape.point_at(&rng.next_2d())
    }

    fn position_at(&self, u: &Vector2f) -> Vector3f {
        self.shape.point_at(u)
    }

    fn intensity(&self) -> RGBSpectrum {
        self.shape.material().emissive_radiance()
    }

    fn normal(&self) -> Vector3f {
        self.shape.normal()
    }

    fn area(&self) -> Float {
        self.shape.surface_area()
    }
}
