// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

/// Debug visualization: green ramp by hit distance, background on miss.
pub struct DepthIntegrator {
    bg_color: RGBSpectrum,
    max_dist: Float,
}

impl DepthIntegrator {
    pub fn new(bg_color: RGBSpectrum, max_dist: Float) -> Self {
        Self { bg_color, max_dist }
    }
}

impl Integrator for DepthIntegrator {
    fn compute_color(&self, ray: &Ray3f, scene: &Scene, _rng: &mut LcgRng) -> RGBSpectrum {
        match scene.closest_intersection(ray) {
            Some(its) => {
                let ramp = (1.0 - its.t() / self.max_dist).max(0.0);
                RGBSpectrum::new(0.0, ramp, 0.0)
            }
            None => self.bg_color,
        }
    }

    fn background(&self) -> RGBSpectrum {
        self.bg_color
    }
}
